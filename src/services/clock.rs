use chrono::NaiveDateTime;

/// Source of "now" for the widget, injected so date validation is
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the host's local timezone. The booking window is a
/// customer-facing promise, so it follows local days rather than UTC.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
