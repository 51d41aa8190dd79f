//! Event reactions owned by the notification context.

mod task_events;

pub use task_events::TaskNotificationHandler;
