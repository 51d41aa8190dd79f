//! Event vocabulary shared by every bounded context.
//!
//! Payloads are JSON objects discriminated by an `action` field. Each
//! subject has a closed enum of events; decoding happens once, at the
//! boundary, through [`DomainEvent::from_envelope`].

mod envelope;
mod error;
mod event;
mod subject;
mod task_event;
mod user_event;

pub use envelope::{ACTION_FIELD, Envelope};
pub use error::{EventDecodeError, EventEncodeError};
pub use event::{Decoded, DomainEvent};
pub use subject::Subject;
pub use task_event::TaskEvent;
pub use user_event::UserEvent;
