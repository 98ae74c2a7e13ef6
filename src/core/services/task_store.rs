use leptos::logging;
use serde::{Deserialize, Serialize};

use crate::core::services::storage::StorageBackend;
use crate::models::{initial_tasks, Task, TaskDraft, TaskStatus};

/// Fixed localStorage key the whole board lives under.
pub const STORAGE_KEY: &str = "kanban-tasks";

// Persisted document: the ordered task list plus the id counter, so ids stay
// unique across deletions and reloads.
#[derive(Debug, Serialize, Deserialize)]
struct BoardData {
    next_id: u32,
    tasks: Vec<Task>,
}

/// Owns the ordered task list and writes the full board back to the backend
/// after every mutation. The view layer never holds its own copy; it reads
/// snapshots through `tasks()`.
pub struct TaskStore<B: StorageBackend> {
    backend: B,
    tasks: Vec<Task>,
    next_id: u32,
}

impl<B: StorageBackend> TaskStore<B> {
    /// Reads the persisted board, seeding it with the default tasks for
    /// first-time users. An unreadable value is discarded and re-seeded.
    pub fn load(backend: B) -> Self {
        match backend.get(STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<BoardData>(&raw) {
                Ok(data) => {
                    // A stored counter behind the highest id would hand out
                    // duplicates; clamp it up before trusting it.
                    let min_next = data.tasks.iter().map(|t| t.id + 1).max().unwrap_or(1);
                    Self {
                        backend,
                        tasks: data.tasks,
                        next_id: data.next_id.max(min_next),
                    }
                }
                Err(err) => {
                    logging::warn!("discarding unreadable board data: {err}");
                    Self::seeded(backend)
                }
            },
            None => Self::seeded(backend),
        }
    }

    fn seeded(backend: B) -> Self {
        let tasks = initial_tasks();
        let next_id = tasks.iter().map(|t| t.id + 1).max().unwrap_or(1);
        let store = Self {
            backend,
            tasks,
            next_id,
        };
        store.persist();
        store
    }

    /// Ordered snapshot for rendering.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new task built from the draft and persists the board.
    /// No field validation happens here; an empty title is accepted.
    pub fn add(&mut self, draft: TaskDraft) -> Task {
        let task = Task::new(self.next_id, draft);
        self.next_id += 1;
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Overwrites title, description and status of an existing task.
    /// Returns `None` without touching storage when the id is unknown.
    pub fn update(&mut self, id: u32, draft: TaskDraft) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.title = draft.title;
        task.description = draft.description;
        task.status = draft.status;
        let updated = task.clone();
        self.persist();
        Some(updated)
    }

    /// Removes the task with the given id. The id is never handed out again.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    fn persist(&self) {
        let data = BoardData {
            next_id: self.next_id,
            tasks: self.tasks.clone(),
        };
        match serde_json::to_string(&data) {
            Ok(raw) => {
                if let Err(err) = self.backend.set(STORAGE_KEY, &raw) {
                    logging::error!("failed to save board: {err}");
                }
            }
            Err(err) => logging::error!("failed to serialize board: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::storage::MemoryBackend;

    fn draft(title: &str, status: TaskStatus) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            status,
        }
    }

    #[test]
    fn empty_backend_loads_the_seed_and_persists_it() {
        let backend = MemoryBackend::new();
        let store = TaskStore::load(backend.clone());

        assert_eq!(store.tasks().len(), 3);
        for status in TaskStatus::all() {
            assert_eq!(store.count_by_status(status), 1);
        }

        // The seed is written back under the fixed key right away.
        let raw = backend.raw(STORAGE_KEY).expect("seed persisted");
        let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved["tasks"].as_array().unwrap().len(), 3);
        assert_eq!(saved["next_id"], 4);
    }

    #[test]
    fn add_on_seeded_board_assigns_id_4_and_bumps_only_that_count() {
        let mut store = TaskStore::load(MemoryBackend::new());

        let created = store.add(TaskDraft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            status: TaskStatus::Todo,
        });

        assert_eq!(created.id, 4);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(store.count_by_status(TaskStatus::Todo), 2);
        assert_eq!(store.count_by_status(TaskStatus::Doing), 1);
        assert_eq!(store.count_by_status(TaskStatus::Done), 1);
        assert_eq!(store.tasks().last(), Some(&created));
    }

    #[test]
    fn add_increments_exactly_one_count_for_every_status() {
        for status in TaskStatus::all() {
            let mut store = TaskStore::load(MemoryBackend::new());
            let before: Vec<usize> = TaskStatus::all()
                .into_iter()
                .map(|s| store.count_by_status(s))
                .collect();

            store.add(draft("one more", status));

            for (s, was) in TaskStatus::all().into_iter().zip(before) {
                let expected = if s == status { was + 1 } else { was };
                assert_eq!(store.count_by_status(s), expected);
            }
        }
    }

    #[test]
    fn added_task_survives_a_reload_with_identical_fields() {
        let backend = MemoryBackend::new();
        let created = {
            let mut store = TaskStore::load(backend.clone());
            store.add(TaskDraft {
                title: "Water the plants".to_string(),
                description: "Both of them".to_string(),
                status: TaskStatus::Doing,
            })
        };

        let reloaded = TaskStore::load(backend);
        let found = reloaded
            .tasks()
            .iter()
            .find(|t| t.id == created.id)
            .expect("task survives reload");
        assert_eq!(found, &created);
    }

    #[test]
    fn add_accepts_an_empty_title() {
        let mut store = TaskStore::load(MemoryBackend::new());
        let created = store.add(draft("", TaskStatus::Todo));
        assert_eq!(created.title, "");
        assert_eq!(store.tasks().len(), 4);
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let backend = MemoryBackend::new();
        let mut store = TaskStore::load(backend.clone());

        assert!(store.remove(2));
        assert_eq!(store.tasks().len(), 2);

        let created = store.add(draft("fresh", TaskStatus::Todo));
        assert_eq!(created.id, 4);

        // The counter also holds across a reload after the removal.
        drop(store);
        let mut reloaded = TaskStore::load(backend);
        assert_eq!(reloaded.add(draft("later", TaskStatus::Done)).id, 5);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let backend = MemoryBackend::new();
        let mut store = TaskStore::load(backend.clone());
        let raw_before = backend.raw(STORAGE_KEY);

        assert!(!store.remove(99));
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(backend.raw(STORAGE_KEY), raw_before);
    }

    #[test]
    fn update_rewrites_fields_and_persists() {
        let backend = MemoryBackend::new();
        let mut store = TaskStore::load(backend.clone());

        let updated = store
            .update(1, draft("Plan the month", TaskStatus::Done))
            .expect("task 1 exists");
        assert_eq!(updated.title, "Plan the month");
        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(store.count_by_status(TaskStatus::Todo), 0);
        assert_eq!(store.count_by_status(TaskStatus::Done), 2);

        let reloaded = TaskStore::load(backend);
        let found = reloaded.tasks().iter().find(|t| t.id == 1).unwrap();
        assert_eq!(found.title, "Plan the month");
        assert_eq!(found.status, TaskStatus::Done);
    }

    #[test]
    fn update_unknown_id_returns_none_and_writes_nothing() {
        let backend = MemoryBackend::new();
        let mut store = TaskStore::load(backend.clone());
        let raw_before = backend.raw(STORAGE_KEY);

        assert!(store.update(42, draft("ghost", TaskStatus::Todo)).is_none());
        assert_eq!(backend.raw(STORAGE_KEY), raw_before);
    }

    #[test]
    fn malformed_board_data_is_reseeded() {
        let backend = MemoryBackend::new();
        backend.put_raw(STORAGE_KEY, "not even json");

        let store = TaskStore::load(backend.clone());
        assert_eq!(store.tasks().len(), 3);

        // The key now holds a well-formed board again.
        let raw = backend.raw(STORAGE_KEY).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&raw).is_ok());
    }

    #[test]
    fn stale_counter_is_clamped_past_the_highest_stored_id() {
        let backend = MemoryBackend::new();
        // Hand-built board whose counter lags behind its ids.
        backend.put_raw(
            STORAGE_KEY,
            r#"{"next_id":1,"tasks":[{"id":9,"title":"t","description":"","status":"todo","created_at":"2026-08-07T00:00:00Z"}]}"#,
        );

        let mut store = TaskStore::load(backend);
        assert_eq!(store.add(draft("next", TaskStatus::Todo)).id, 10);
    }

    #[test]
    fn list_order_is_insertion_order() {
        let mut store = TaskStore::load(MemoryBackend::new());
        store.add(draft("a", TaskStatus::Done));
        store.add(draft("b", TaskStatus::Todo));

        let ids: Vec<u32> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
