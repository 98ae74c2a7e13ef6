pub mod task;

// Export the task types for use throughout the app
pub use task::{initial_tasks, Task, TaskDraft, TaskStatus};
