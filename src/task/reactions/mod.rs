//! Event reactions owned by the task context.

mod user_events;

pub use user_events::UserLifecycleReactions;
