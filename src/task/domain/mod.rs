//! Domain model for task lifecycle management.
//!
//! The task domain owns the status transition table and the shape of task
//! records while keeping infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskStatus, can_transition};
pub use task::{
    NewTask, ONBOARDING_DESCRIPTION, ONBOARDING_STATUS, ONBOARDING_TITLE, PersistedTaskData, Task,
};
