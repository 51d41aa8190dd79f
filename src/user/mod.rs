//! User management.
//!
//! Users are plain records with a store-assigned identifier. Creating and
//! deleting a user is announced on `user.events`; the task context reacts
//! to both.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
