use leptos::prelude::*;
use std::rc::Rc;

use crate::features::board::components::TaskCard;
use crate::models::{Task, TaskStatus};

#[component]
pub fn BoardColumn(
    #[prop(into)] status: TaskStatus,
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    on_select: Rc<dyn Fn(Task) + 'static>,
    on_delete: Rc<dyn Fn(Task) + 'static>,
) -> impl IntoView {
    // The render closure below must be `Send` (leptos reactive fn bound), but
    // the `Rc` callbacks are not. Stash them in thread-local stored values,
    // which are `Copy + Send`, and clone the `Rc` back out inside the closure.
    let on_select = StoredValue::new_local(on_select);
    let on_delete = StoredValue::new_local(on_delete);
    view! {
        <div class="kanban-column">
            <div class="column-header">
                // Header carries the live count, e.g. "TODO (3)"
                <h3 class="column-title">
                    {move || {
                        let count = tasks
                            .with(|tasks| tasks.iter().filter(|t| t.status == status).count());
                        format!("{} ({})", status.label(), count)
                    }}
                </h3>
            </div>
            <div class="column-content">
                {move || {
                    tasks.with(|tasks| {
                        tasks
                            .iter()
                            .filter(|t| t.status == status)
                            .cloned()
                            .map(|task| {
                                let on_select = on_select.get_value();
                                let on_delete = on_delete.get_value();
                                view! {
                                    <TaskCard task=task on_select=on_select on_delete=on_delete />
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
