//! Services for publishing and consuming events.

mod dead_letter;
mod dispatcher;
mod publisher;

pub use dead_letter::DeadLetterHandler;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use publisher::EventPublisher;
