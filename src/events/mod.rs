//! Event choreography between the user, task, and notification contexts.
//!
//! Contexts never call each other for reactions. A command service
//! publishes a typed event after a successful write; subscribers decode it
//! and run their own handler. Delivery is fire and forget.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
