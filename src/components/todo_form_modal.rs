//! To-Do Form Modal Component
//!
//! Shared by "create" (no `todo_id`) and "edit" (with `todo_id`).

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::TextField;
use crate::context::use_app;
use crate::forms::FormState;
use crate::models::TodoFields;

#[component]
pub fn TodoFormModal(
    #[prop(into)] heading: String,
    initial: TodoFields,
    #[prop(optional)] todo_id: Option<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(FormState::new(initial));
    let (error, set_error) = signal::<Option<String>>(None);
    let submit_label = if todo_id.is_some() { "Update" } else { "Create" };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut values = None;
        form.update(|f| values = f.begin_submit());
        let Some(fields) = values else { return };
        set_error.set(None);

        let todos = ctx.todos();
        let todo_id = todo_id.clone();
        spawn_local(async move {
            let result = match &todo_id {
                Some(id) => todos.update(id, &fields).await,
                None => todos.create(&fields).await,
            };
            // Disposed means the list re-rendered underneath us; nothing left to close
            if form.try_update(|f| f.finish_submit(result.is_ok())).is_none() {
                return;
            }
            match result {
                Ok(()) => on_close.run(()),
                Err(e) => {
                    set_error.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=submit>
                <header class="modal-header">
                    <h3>{heading}</h3>
                </header>
                <div class="modal-body">
                    <TextField form=form name="title" label="TITLE" />
                    <TextField form=form name="description" label="DESCRIPTION" />
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                </div>
                <footer class="modal-footer">
                    <button type="button" class="close-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button type="submit" class="submit-btn" disabled=move || form.with(|f| f.is_submitting())>
                        {move || if form.with(|f| f.is_submitting()) { "Saving..." } else { submit_label }}
                    </button>
                </footer>
            </form>
        </div>
    }
}
