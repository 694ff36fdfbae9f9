use chrono::{Duration, NaiveDate};

/// Whether `candidate` is a bookable visit date: not in the past and no
/// further out than `window_days` from `today`, both bounds inclusive.
///
/// The comparison is day-granular on purpose. The calendar picker hands
/// over plain dates, so a visit later today must stay selectable no matter
/// what the wall clock says.
pub fn is_selectable(candidate: NaiveDate, today: NaiveDate, window_days: i64) -> bool {
    candidate >= today && candidate <= today + Duration::days(window_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_today_is_selectable() {
        let today = date("2025-06-16");
        assert!(is_selectable(today, today, 7));
    }

    #[test]
    fn test_yesterday_is_not() {
        assert!(!is_selectable(date("2025-06-15"), date("2025-06-16"), 7));
    }

    #[test]
    fn test_window_end_is_inclusive() {
        assert!(is_selectable(date("2025-06-23"), date("2025-06-16"), 7));
    }

    #[test]
    fn test_past_window_end_is_not() {
        assert!(!is_selectable(date("2025-06-24"), date("2025-06-16"), 7));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let today = date("2025-06-28");
        assert!(is_selectable(date("2025-07-05"), today, 7));
        assert!(!is_selectable(date("2025-07-06"), today, 7));
    }

    #[test]
    fn test_distant_past_and_future() {
        let today = date("2025-06-16");
        assert!(!is_selectable(date("2024-06-16"), today, 7));
        assert!(!is_selectable(date("2026-06-16"), today, 7));
    }
}
