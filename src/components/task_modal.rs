use leptos::prelude::*;
use leptos::{ev, html::Dialog};

use crate::models::{TaskDraft, TaskStatus};

#[component]
pub fn TaskModal(
    #[prop(into)] on_create: Box<dyn Fn(TaskDraft) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Todo);

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        on_create(TaskDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            status: status.get_untracked(),
        });

        // Reset the form so the next open starts from a blank task
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TaskStatus::Todo);

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Closing without submitting discards whatever was typed. Everything the
    // closure captures is Copy, so the same handler serves both buttons.
    let close_modal = move |_| {
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TaskStatus::Todo);
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="e.g., Rest"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="e.g., Take a nap"
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
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
