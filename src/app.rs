//! To-Do Web App
//!
//! Root component: wires the view models and picks the screen from the session state.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpApi, TodoApi};
use crate::clock::LocalClock;
use crate::components::{Dashboard, LoginPage, SignupPage, Spinner};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::models::UserProfile;
use crate::session::{BrowserSessionStore, SessionState, SessionStore, SessionViewModel};

#[derive(Debug, Clone, Copy, PartialEq)]
enum AuthView {
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Pending,
    Auth,
    Dashboard(UserProfile),
}

impl From<SessionState> for Screen {
    fn from(state: SessionState) -> Self {
        if state.is_pending() {
            return Screen::Pending;
        }
        match state {
            SessionState::Authenticated(profile) => Screen::Dashboard(profile),
            _ => Screen::Auth,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let store: Rc<dyn SessionStore> = Rc::new(BrowserSessionStore::new(config.token_key.clone()));
    let api: Rc<dyn TodoApi> = Rc::new(HttpApi::new(&config, store.clone()));
    let session = Rc::new(SessionViewModel::new(api, Rc::new(LocalClock), store));

    let ctx = AppContext::new(session, signal(0u32));
    provide_context(ctx);

    let (auth_view, set_auth_view) = signal(AuthView::Login);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Only re-render the screen when it actually changes, not on every list update
    let screen = Memo::new(move |_| Screen::from(ctx.session_state()));

    // Activate on load
    let session = ctx.session();
    spawn_local(async move {
        if let Err(e) = session.activate().await {
            set_notice.try_set(Some(e.to_string()));
        }
    });

    view! {
        <div class="app">
            {move || notice.get().map(|message| view! {
                <p class="notice" on:click=move |_| set_notice.set(None)>{message}</p>
            })}
            {move || match screen.get() {
                Screen::Pending => view! { <Spinner /> }.into_any(),
                Screen::Auth => match auth_view.get() {
                    AuthView::Login => view! {
                        <LoginPage on_signup=move |_| set_auth_view.set(AuthView::Signup) />
                    }.into_any(),
                    AuthView::Signup => view! {
                        <SignupPage on_login=move |_| set_auth_view.set(AuthView::Login) />
                    }.into_any(),
                },
                Screen::Dashboard(profile) => view! { <Dashboard profile=profile /> }.into_any(),
            }}
        </div>
    }
}
