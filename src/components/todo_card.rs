//! To-Do Card Component
//!
//! One to-do with its Done / Edit / Delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::TodoFormModal;
use crate::context::use_app;
use crate::models::{Todo, TodoFields};

#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let ctx = use_app();
    let (editing, set_editing) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let id = todo.id.clone();
    let completed = todo.is_completed();
    let initial = TodoFields::from(&todo);

    // Done and Delete stay disabled until the server has answered and the list reloaded
    let busy = {
        let id = id.clone();
        move || ctx.is_busy(&id)
    };

    let mark_complete = {
        let id = id.clone();
        move |_| {
            let todos = ctx.todos();
            let id = id.clone();
            set_error.set(None);
            spawn_local(async move {
                if let Err(e) = todos.mark_complete(&id).await {
                    set_error.try_set(Some(e.to_string()));
                }
            });
        }
    };

    let delete = {
        let id = id.clone();
        move |_| {
            let todos = ctx.todos();
            let id = id.clone();
            set_error.set(None);
            spawn_local(async move {
                if let Err(e) = todos.delete(&id).await {
                    set_error.try_set(Some(e.to_string()));
                }
            });
        }
    };

    let status_class = if completed { "status completed" } else { "status pending" };

    view! {
        <div class="todo-card">
            <header class="card-header">
                <h3>{todo.title.clone()}</h3>
            </header>
            <div class="card-body">
                <h4>{todo.description.clone()}</h4>
                <h5>"STATUS : " <span class=status_class>{todo.status.as_str()}</span></h5>
                <div class="card-stamp">
                    <h5>"DATE : " {todo.date.clone()}</h5>
                    <h5>"TIME : " {todo.time.clone()}</h5>
                </div>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            </div>
            <footer class="card-footer">
                {(!completed).then(|| {
                    let busy = busy.clone();
                    view! {
                        <button class="done-btn" disabled=busy on:click=mark_complete>"Done"</button>
                    }
                })}
                <button class="edit-btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                <button class="delete-btn" disabled=busy on:click=delete>"Delete"</button>
            </footer>
            <Show when=move || editing.get()>
                <TodoFormModal
                    heading="EDIT YOUR TODO"
                    initial=initial.clone()
                    todo_id=id.clone()
                    on_close=move |_| set_editing.set(false)
                />
            </Show>
        </div>
    }
}
