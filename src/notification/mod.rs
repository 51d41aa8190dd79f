//! Notifications for task events.
//!
//! This context owns no data. It listens on `task.events` and tells the
//! affected user through a [`ports::Notifier`].

pub mod adapters;
pub mod ports;
pub mod reactions;

#[cfg(test)]
mod tests;
