use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::services::{LocalStorageBackend, TaskStore};
use crate::features::board::services::{
    create_task_handler, delete_task_handler, update_task_handler,
};
use crate::models::{Task, TaskDraft};

pub struct TasksHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub create_task: Box<dyn Fn(TaskDraft) + 'static>,
    pub update_task: Box<dyn Fn(u32, TaskDraft) + 'static>,
    pub delete_task: Box<dyn Fn(Task) + 'static>,
}

/// Loads the board from localStorage and wires the mutation handlers.
///
/// The store instance is threaded into every handler by handle; no
/// module-level state. localStorage is synchronous, so the initial list is
/// available before the first render.
pub fn use_tasks() -> TasksHook {
    let store = Rc::new(RefCell::new(TaskStore::load(LocalStorageBackend::new())));
    let tasks = RwSignal::new(store.borrow().tasks().to_vec());

    TasksHook {
        tasks: tasks.read_only(),
        create_task: create_task_handler(store.clone(), tasks),
        update_task: update_task_handler(store.clone(), tasks),
        delete_task: delete_task_handler(store, tasks),
    }
}
