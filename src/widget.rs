use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::WidgetConfig;
use crate::errors::TransitionError;
use crate::models::{BookingForm, BookingPhase, BookingRequest};
use crate::services::clock::Clock;
use crate::services::submission::{PickerControl, SubmissionSink};
use crate::services::{phone, scheduling, slots};

/// The booking widget's state machine.
///
/// Holds the single `BookingForm` for one widget instance and serializes
/// every mutation through it. The page shell calls `open`/`close`, the form
/// controls call the field setters, and `submit` runs the
/// `Open -> Submitted -> Idle` cycle. Renderers read `snapshot()` or follow
/// the `subscribe()` channel; they never mutate the form directly.
pub struct BookingWidget {
    form: Arc<Mutex<BookingForm>>,
    config: WidgetConfig,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn SubmissionSink>,
    pickers: Arc<dyn PickerControl>,
    snapshot_tx: watch::Sender<BookingForm>,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl BookingWidget {
    pub fn new(
        config: WidgetConfig,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn SubmissionSink>,
        pickers: Arc<dyn PickerControl>,
    ) -> Self {
        let form = BookingForm::new();
        let (snapshot_tx, _) = watch::channel(form.clone());
        Self {
            form: Arc::new(Mutex::new(form)),
            config,
            clock,
            sink,
            pickers,
            snapshot_tx,
            reset_task: Mutex::new(None),
        }
    }

    /// Current form state, cloned for rendering.
    pub fn snapshot(&self) -> BookingForm {
        self.form.lock().unwrap().clone()
    }

    /// Follow form changes; the receiver always starts at the latest state.
    pub fn subscribe(&self) -> watch::Receiver<BookingForm> {
        self.snapshot_tx.subscribe()
    }

    /// Show the modal. Drafts from an earlier open/close round are kept;
    /// only a completed submit clears them.
    pub fn open(&self) {
        let mut form = self.form.lock().unwrap();
        if form.phase == BookingPhase::Idle {
            form.phase = BookingPhase::Open;
            self.publish(&form);
        }
    }

    /// Hide the modal without touching the drafts.
    pub fn close(&self) {
        let mut form = self.form.lock().unwrap();
        if form.phase == BookingPhase::Open {
            form.phase = BookingPhase::Idle;
            self.publish(&form);
        }
    }

    /// Store the re-formatted phone draft for the given raw input.
    pub fn set_phone(&self, raw: &str) -> Result<(), TransitionError> {
        let mut form = self.form.lock().unwrap();
        if form.phase != BookingPhase::Open {
            tracing::debug!("set_phone ignored: widget not open");
            return Err(TransitionError::NotOpen);
        }
        form.phone = phone::format_phone(raw);
        self.publish(&form);
        Ok(())
    }

    /// Store the visit date if it falls inside the booking window. The
    /// calendar picker already disables out-of-range days, but the check is
    /// repeated here since nothing stops a caller from bypassing the picker.
    pub fn set_date(&self, date: NaiveDate) -> Result<(), TransitionError> {
        let mut form = self.form.lock().unwrap();
        if form.phase != BookingPhase::Open {
            tracing::debug!("set_date ignored: widget not open");
            return Err(TransitionError::NotOpen);
        }
        let today = self.clock.now().date();
        if !scheduling::is_selectable(date, today, self.config.booking_window_days) {
            tracing::debug!(%date, %today, "set_date rejected: outside booking window");
            return Err(TransitionError::DateOutOfRange);
        }
        form.date = Some(date);
        self.publish(&form);
        Ok(())
    }

    /// Store the visit time and dismiss the shell's open picker.
    pub fn set_time(&self, label: &str) -> Result<(), TransitionError> {
        let mut form = self.form.lock().unwrap();
        if form.phase != BookingPhase::Open {
            tracing::debug!("set_time ignored: widget not open");
            return Err(TransitionError::NotOpen);
        }
        if !slots::is_listed(label) {
            tracing::debug!(label, "set_time rejected: not a listed slot");
            return Err(TransitionError::UnknownTimeSlot(label.to_string()));
        }
        form.time = Some(label.to_string());
        self.publish(&form);
        drop(form);
        self.pickers.close_active_picker();
        Ok(())
    }

    /// Submit the booking: deliver the payload to the sink, show the
    /// confirmation view, and schedule the reset back to a cleared, hidden
    /// widget.
    ///
    /// The completeness precondition is re-checked here even though the UI
    /// disables the submit button on an incomplete form. A sink failure is
    /// logged and does not hold back the confirmation; there is no error
    /// phase for it to land in.
    pub async fn submit(&self) -> Result<(), TransitionError> {
        let request = {
            let form = self.form.lock().unwrap();
            if form.phase != BookingPhase::Open {
                tracing::debug!("submit ignored: widget not open");
                return Err(TransitionError::NotOpen);
            }
            if !form.is_complete() {
                tracing::debug!("submit rejected: form incomplete");
                return Err(TransitionError::IncompleteForm);
            }
            let (date, time) = match (form.date, form.time.clone()) {
                (Some(date), Some(time)) => (date, time),
                _ => return Err(TransitionError::IncompleteForm),
            };
            BookingRequest {
                id: uuid::Uuid::new_v4().to_string(),
                phone: form.phone.clone(),
                date,
                time,
                created_at: self.clock.now(),
            }
        };

        if let Err(err) = self.sink.deliver(&request).await {
            tracing::warn!(id = %request.id, error = %err, "booking delivery failed");
        }

        {
            let mut form = self.form.lock().unwrap();
            form.phase = BookingPhase::Submitted;
            self.publish(&form);
        }
        tracing::info!(id = %request.id, "booking submitted, confirmation showing");

        self.schedule_reset();
        Ok(())
    }

    /// Arm the delayed `Submitted -> Idle` reset, replacing any reset still
    /// pending from an earlier submit.
    fn schedule_reset(&self) {
        let form = Arc::clone(&self.form);
        let snapshot_tx = self.snapshot_tx.clone();
        let delay = Duration::from_millis(self.config.reset_delay_ms);

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut form = form.lock().unwrap();
            form.clear_fields();
            form.phase = BookingPhase::Idle;
            snapshot_tx.send_replace(form.clone());
            tracing::debug!("confirmation window elapsed, widget reset");
        });

        let mut pending = self.reset_task.lock().unwrap();
        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
    }

    fn publish(&self, form: &BookingForm) {
        self.snapshot_tx.send_replace(form.clone());
    }
}

impl Drop for BookingWidget {
    fn drop(&mut self) {
        // A reset still in flight must not fire against a torn-down widget.
        if let Some(task) = self.reset_task.lock().unwrap().take() {
            task.abort();
        }
    }
}
