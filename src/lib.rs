//! Taskmesh: user, task, and notification contexts joined by events.
//!
//! Each context keeps its own store behind separate command and query
//! repositories. Contexts react to one another only through events on a
//! broker:
//!
//! - creating a user publishes `user_created`, and the task context gives
//!   the user an onboarding task;
//! - deleting a user publishes `user_deleted`, and the task context removes
//!   the user's tasks;
//! - creating or assigning a task publishes `task_created` or
//!   `task_assigned`, and the notification context tells the user.
//!
//! Each context follows hexagonal architecture:
//!
//! - **Domain**: records, validation, and the task status table
//! - **Ports**: repository, broker, directory, and notifier traits
//! - **Adapters**: in-memory, `PostgreSQL`, and HTTP implementations
//!
//! # Modules
//!
//! - [`events`]: event vocabulary, broker ports, and the dispatcher
//! - [`user`]: user records and services
//! - [`task`]: task records, the status state machine, and reactions
//! - [`notification`]: task event notifications
//! - [`runtime`]: process wiring

pub mod config;
pub mod events;
pub mod notification;
pub mod postgres;
pub mod runtime;
pub mod task;
pub mod telemetry;
pub mod user;
