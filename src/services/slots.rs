/// First bookable hour of the day.
const OPENING_HOUR: usize = 8;

/// Number of half-hour slots between 8:00 and 20:00 inclusive.
const SLOT_COUNT: usize = 25;

/// The complete ordered list of bookable visit times: every half hour from
/// `8:00` to `20:00`. Minutes are always two digits, hours carry no leading
/// zero. The list is the whole legal domain of a visit time; the same
/// output is produced on every call.
pub fn available_times() -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|i| {
            let hour = OPENING_HOUR + i / 2;
            let minute = if i % 2 == 0 { "00" } else { "30" };
            format!("{hour}:{minute}")
        })
        .collect()
}

/// Whether `label` is one of the bookable visit times.
pub fn is_listed(label: &str) -> bool {
    available_times().iter().any(|t| t == label)
}
