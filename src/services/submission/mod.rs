pub mod log;

use async_trait::async_trait;

use crate::models::BookingRequest;

/// Destination for a completed booking request. The widget invokes the sink
/// once per successful submit; retries, backoff, and error surfaces are the
/// sink's own business.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, request: &BookingRequest) -> anyhow::Result<()>;
}

/// Pickers the page shell may have open (calendar, time list). The widget
/// asks for an explicit dismissal after a time is chosen instead of poking
/// at whatever popover happens to be showing.
pub trait PickerControl: Send + Sync {
    fn close_active_picker(&self);
}

/// Shell with no picker affordances to dismiss.
pub struct NoPickers;

impl PickerControl for NoPickers {
    fn close_active_picker(&self) {}
}
