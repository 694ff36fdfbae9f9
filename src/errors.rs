/// Why a widget transition was refused. State is never changed on a
/// rejection, and nothing here is fatal: callers that only care about the
/// silent-rejection semantics may drop the error, while a UI can use the
/// variant to explain a disabled affordance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("the booking form is not open")]
    NotOpen,

    #[error("visit date is in the past or beyond the booking window")]
    DateOutOfRange,

    #[error("unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("phone, date, and time must all be filled in before submitting")]
    IncompleteForm,
}
