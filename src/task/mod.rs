//! Task management.
//!
//! Tasks are owned by a user, may be assigned to another, and move through
//! a four-state lifecycle whose transitions are enforced by the command
//! repository. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Event reactions in [`reactions`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod reactions;
pub mod services;
