pub mod booking;

pub use booking::{BookingForm, BookingPhase, BookingRequest};
