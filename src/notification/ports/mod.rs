//! Port contracts for delivering notifications.

mod notifier;

pub use notifier::{Notifier, NotifyError};
