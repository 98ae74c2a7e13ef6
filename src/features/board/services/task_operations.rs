use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::services::{LocalStorageBackend, TaskStore};
use crate::models::{Task, TaskDraft, TaskStatus};

pub type SharedStore = Rc<RefCell<TaskStore<LocalStorageBackend>>>;

// Mutations go through the store first (which persists), then the signal is
// refreshed from the store's list so the board re-renders.
fn refresh_tasks(store: &SharedStore, tasks_signal: RwSignal<Vec<Task>>) {
    tasks_signal.set(store.borrow().tasks().to_vec());
}

// Create a new task from the modal's draft and save it
pub fn create_task_handler(
    store: SharedStore,
    tasks_signal: RwSignal<Vec<Task>>,
) -> Box<dyn Fn(TaskDraft) + 'static> {
    Box::new(move |draft: TaskDraft| {
        let created = store.borrow_mut().add(draft);
        web_sys::console::log_1(
            &format!(
                "created task {} in {}: {}",
                created.id,
                created.status.as_str(),
                created.title
            )
            .into(),
        );
        refresh_tasks(&store, tasks_signal);

        let counts: Vec<String> = TaskStatus::all()
            .into_iter()
            .map(|s| format!("{} {}", store.borrow().count_by_status(s), s.as_str()))
            .collect();
        web_sys::console::log_1(&format!("board now has {}", counts.join(" / ")).into());
    })
}

// Update title, description and status of an existing task
pub fn update_task_handler(
    store: SharedStore,
    tasks_signal: RwSignal<Vec<Task>>,
) -> Box<dyn Fn(u32, TaskDraft) + 'static> {
    Box::new(move |task_id: u32, draft: TaskDraft| {
        let updated = store.borrow_mut().update(task_id, draft);
        if updated.is_none() {
            web_sys::console::error_1(&format!("task {} not found for update", task_id).into());
            return;
        }
        refresh_tasks(&store, tasks_signal);
    })
}

// Delete a task after the user confirms
pub fn delete_task_handler(
    store: SharedStore,
    tasks_signal: RwSignal<Vec<Task>>,
) -> Box<dyn Fn(Task) + 'static> {
    Box::new(move |task: Task| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Delete task \"{}\"? This action cannot be undone.",
                    task.title
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let removed = store.borrow_mut().remove(task.id);
        if removed {
            refresh_tasks(&store, tasks_signal);
        } else {
            web_sys::console::error_1(&format!("task {} not found for delete", task.id).into());
        }
    })
}
