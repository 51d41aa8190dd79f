//! Adapter implementations for notification ports.

mod log;

pub use log::LogNotifier;
