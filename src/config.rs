use std::env;

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// How long the confirmation view stays up before the widget resets.
    pub reset_delay_ms: u64,
    /// How many days ahead of today a visit may be booked.
    pub booking_window_days: i64,
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        Self {
            reset_delay_ms: env::var("RESET_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            booking_window_days: env::var("BOOKING_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 3000,
            booking_window_days: 7,
        }
    }
}
