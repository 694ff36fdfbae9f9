pub mod clock;
pub mod phone;
pub mod scheduling;
pub mod slots;
pub mod submission;
