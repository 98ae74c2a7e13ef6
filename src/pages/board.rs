use leptos::html::Dialog;
use leptos::prelude::*;
use std::rc::Rc;

use crate::components::{EditTaskModal, TaskModal};
use crate::features::board::components::BoardColumn;
use crate::features::board::hooks::use_tasks;
use crate::models::{Task, TaskDraft, TaskStatus};

#[component]
pub fn Board() -> impl IntoView {
    let hook = use_tasks();
    let tasks = hook.tasks;
    let create_task = hook.create_task;
    // Shared across the three columns and the reactive edit-modal closure
    // Wrapped in a thread-local stored value so the reactive edit-modal
    // closure below (which must be `Send`) can hold it; the `Rc` is cloned
    // back out inside the closure.
    let update_task = StoredValue::new_local(
        Rc::from(hook.update_task) as Rc<dyn Fn(u32, TaskDraft) + 'static>,
    );
    let delete_task: Rc<dyn Fn(Task) + 'static> = Rc::from(hook.delete_task);

    // Which task the edit modal is showing; None until a card is clicked
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);

    // References to the dialog elements so handlers can open and close them
    let create_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Handler for the "+" button to open the task creation modal
    let open_create_modal = move |_| {
        if let Some(dialog) = create_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    // Clicking a card selects it and opens the edit modal. Setting the signal
    // re-renders the modal for this task before show_modal runs.
    let select_task: Rc<dyn Fn(Task) + 'static> = Rc::new(move |task: Task| {
        set_editing_task.set(Some(task));
        if let Some(dialog) = edit_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    });

    view! {
        <div class="kanban-page">
            <header class="kanban-header">
                <h1>"Task Board"</h1>
                <div class="kanban-actions">
                    <button class="btn-primary" on:click=open_create_modal>"+"</button>
                </div>
            </header>

            <div class="kanban-board">
                {TaskStatus::all()
                    .into_iter()
                    .map(|status| {
                        let on_select = select_task.clone();
                        let on_delete = delete_task.clone();
                        view! {
                            <BoardColumn
                                status=status
                                tasks=tasks
                                on_select=on_select
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <TaskModal on_create=create_task dialog_ref=create_dialog_ref />

            // Edit modal only exists while a task is selected
            {move || {
                if let Some(task) = editing_task.get() {
                    let on_save = {
                        let update_task = update_task.get_value();
                        Box::new(move |task_id: u32, draft: TaskDraft| {
                            (update_task.as_ref())(task_id, draft);
                        }) as Box<dyn Fn(u32, TaskDraft) + 'static>
                    };

                    view! {
                        <EditTaskModal task=task on_save=on_save dialog_ref=edit_dialog_ref />
                    }
                        .into_any()
                } else {
                    view! {}.into_any()
                }
            }}
        </div>
    }
}
