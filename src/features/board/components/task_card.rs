use leptos::prelude::*;
use std::rc::Rc;

use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    on_select: Rc<dyn Fn(Task) + 'static>,
    on_delete: Rc<dyn Fn(Task) + 'static>,
) -> impl IntoView {
    let task_for_click = task.clone();
    let task_for_delete = task.clone();

    view! {
        <div
            class="task-card clickable"
            on:click=move |_| {
                (on_select.as_ref())(task_for_click.clone());
            }
        >
            <div class="task-content">
                <h4>{task.title.clone()}</h4>
                <p>{task.description.clone()}</p>
            </div>
            <button
                class="task-delete-btn"
                title="Delete task"
                on:click=move |e| {
                    // Keep the click from also opening the task details
                    e.stop_propagation();
                    (on_delete.as_ref())(task_for_delete.clone());
                }
            >
                "🗑"
            </button>
        </div>
    }
}
