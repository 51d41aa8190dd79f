//! Port contracts for moving events between contexts.

pub mod broker;
pub mod dead_letter;
pub mod handler;

pub use broker::{PublishError, Publisher, SubscribeError, Subscriber, Subscription};
pub use dead_letter::{DeadLetter, DeadLetterError, DeadLetterSink};
pub use handler::{EventHandler, HandlerError};
