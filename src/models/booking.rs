use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Coarse lifecycle of the booking widget.
///
/// `Open` means the modal is visible and editable, `Submitted` means the
/// confirmation view is showing, `Idle` means the modal is hidden.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingPhase {
    Idle,
    Open,
    Submitted,
}

impl BookingPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingPhase::Idle => "idle",
            BookingPhase::Open => "open",
            BookingPhase::Submitted => "submitted",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "open" => BookingPhase::Open,
            "submitted" => BookingPhase::Submitted,
            _ => BookingPhase::Idle,
        }
    }
}

/// Everything a renderer needs about the widget: the phase plus the three
/// draft fields. One instance per widget; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingForm {
    pub phase: BookingPhase,
    pub phone: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            phase: BookingPhase::Idle,
            phone: String::new(),
            date: None,
            time: None,
        }
    }

    /// Submit precondition: phone typed, date and time chosen.
    pub fn is_complete(&self) -> bool {
        !self.phone.is_empty() && self.date.is_some() && self.time.is_some()
    }

    pub fn clear_fields(&mut self) {
        self.phone.clear();
        self.date = None;
        self.time = None;
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload handed to the submission sink when a submit succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub created_at: NaiveDateTime,
}
