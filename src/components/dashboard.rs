//! Dashboard Component
//!
//! Navbar, greeting, the to-do grid and the create modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Spinner, TodoCard, TodoFormModal};
use crate::context::use_app;
use crate::models::{Todo, TodoFields, UserProfile};
use crate::todo_list::ListState;

#[component]
pub fn Dashboard(profile: UserProfile) -> impl IntoView {
    let ctx = use_app();
    let (show_create, set_show_create) = signal(false);

    // Keep showing the last loaded list while a refresh is in flight
    let todos = Memo::new(move |previous: Option<&Option<Vec<Todo>>>| match ctx.list_state() {
        ListState::Loaded(todos) => Some(todos),
        _ => previous.cloned().flatten(),
    });
    let loading = move || matches!(ctx.list_state(), ListState::Loading);
    let list_error = move || match ctx.list_state() {
        ListState::Error(e) => Some(e.to_string()),
        _ => None,
    };

    let logout = move |_| ctx.session().logout();

    // HOME closes any open form and re-fetches the list
    let home = move |_| {
        set_show_create.set(false);
        let todos = ctx.todos();
        spawn_local(async move {
            let _ = todos.refresh().await;
        });
    };

    view! {
        <div class="dashboard">
            <nav class="main-navbar">
                <span class="nav-title">"TODO APP"</span>
                <div class="main-nav-names">
                    <button class="nav-names" on:click=home>"HOME"</button>
                    <button
                        class="nav-names"
                        disabled=move || ctx.is_creating()
                        on:click=move |_| set_show_create.set(true)
                    >
                        "CREATE"
                    </button>
                    <button class="nav-names" on:click=logout>"LOGOUT"</button>
                </div>
            </nav>
            <header class="greeting">
                <h1>{profile.full_name()}</h1>
            </header>
            {move || list_error().map(|message| view! { <p class="list-error">{message}</p> })}
            {move || match todos.get() {
                None if loading() => view! { <Spinner /> }.into_any(),
                None => ().into_any(),
                Some(todos) if todos.is_empty() => view! {
                    <p class="empty">"No Todos to Display."</p>
                }.into_any(),
                Some(todos) => view! {
                    <div class="todo-grid">
                        {todos.into_iter().map(|todo| view! { <TodoCard todo=todo /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
            <button
                class="fab"
                aria-label="add"
                disabled=move || ctx.is_creating()
                on:click=move |_| set_show_create.set(true)
            >
                "+"
            </button>
            <Show when=move || show_create.get()>
                <TodoFormModal
                    heading="CREATE YOUR TODO"
                    initial=TodoFields::default()
                    on_close=move |_| set_show_create.set(false)
                />
            </Show>
        </div>
    }
}
