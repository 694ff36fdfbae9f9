pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod widget;

pub use config::WidgetConfig;
pub use errors::TransitionError;
pub use models::{BookingForm, BookingPhase, BookingRequest};
pub use widget::BookingWidget;
