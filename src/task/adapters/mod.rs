//! Adapter implementations for task ports.

pub mod directory;
pub mod http;
pub mod memory;
pub mod postgres;
