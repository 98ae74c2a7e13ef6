use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    /// Storage key for this status, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Doing => "DOING",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done]
    }

    pub fn from_key(key: &str) -> Option<TaskStatus> {
        TaskStatus::all().into_iter().find(|s| s.as_str() == key)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u32, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            created_at: Utc::now(),
        }
    }
}

// What the create/edit forms produce; the store assigns id and timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Default board contents for first-time users, one task per column.
pub fn initial_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Plan the week".to_string(),
            description: "Rough out what actually needs to ship.".to_string(),
            status: TaskStatus::Todo,
            created_at: Utc::now(),
        },
        Task {
            id: 2,
            title: "Review open pull requests".to_string(),
            description: "Clear the review queue before it piles up.".to_string(),
            status: TaskStatus::Doing,
            created_at: Utc::now(),
        },
        Task {
            id: 3,
            title: "Set up the board".to_string(),
            description: String::new(),
            status: TaskStatus::Done,
            created_at: Utc::now(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_lowercase_keys() {
        for status in TaskStatus::all() {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.as_str().to_string()));
        }
    }

    #[test]
    fn status_round_trips_through_keys() {
        for status in TaskStatus::all() {
            assert_eq!(TaskStatus::from_key(status.as_str()), Some(status));
        }
        assert_eq!(TaskStatus::from_key("archived"), None);
    }

    #[test]
    fn task_round_trips_through_json() {
        let task = Task::new(
            7,
            TaskDraft {
                title: "Buy milk".to_string(),
                description: "2%".to_string(),
                status: TaskStatus::Todo,
            },
        );

        let json = serde_json::to_string(&task).unwrap();
        let loaded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, task);
    }

    #[test]
    fn initial_tasks_cover_every_column() {
        let seed = initial_tasks();
        assert_eq!(seed.len(), 3);
        for status in TaskStatus::all() {
            assert_eq!(seed.iter().filter(|t| t.status == status).count(), 1);
        }
        // Seed ids leave the counter free to continue at 4.
        assert_eq!(seed.iter().map(|t| t.id).max(), Some(3));
    }
}
