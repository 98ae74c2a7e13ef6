use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{Task, TaskDraft, TaskStatus};

#[component]
pub fn EditTaskModal(
    #[prop(into)] task: Task,
    #[prop(into)] on_save: Box<dyn Fn(u32, TaskDraft) + 'static>, // task id, edited fields
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());
    let (status, set_status) = signal(task.status);

    let task_id = task.id;

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        on_save(
            task_id,
            TaskDraft {
                title: title.get_untracked(),
                description: description.get_untracked(),
                status: status.get_untracked(),
            },
        );

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let close_modal_x = {
        let task_title = task.title.clone();
        let task_description = task.description.clone();
        let task_status = task.status;
        move |_| {
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
            // Reset form fields to the stored values when canceling
            set_title.set(task_title.clone());
            set_description.set(task_description.clone());
            set_status.set(task_status);
        }
    };

    let close_modal_cancel = {
        let task_title = task.title.clone();
        let task_description = task.description.clone();
        let task_status = task.status;
        move |_| {
            if let Some(dialog) = dialog_ref.get() {
                dialog.close();
            }
            set_title.set(task_title.clone());
            set_description.set(task_description.clone());
            set_status.set(task_status);
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"EDIT TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal_x>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <select
                            on:change=move |ev| {
                                if let Some(next) = TaskStatus::from_key(&event_target_value(&ev)) {
                                    set_status.set(next);
                                }
                            }
                            prop:value=move || status.get().as_str().to_string()
                        >
                            {TaskStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal_cancel>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"SAVE CHANGES"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
