//! Login Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::TextField;
use crate::context::use_app;
use crate::forms::FormState;
use crate::models::Credentials;

#[component]
pub fn LoginPage(#[prop(into)] on_signup: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(FormState::new(Credentials::default()));
    let (error, set_error) = signal::<Option<String>>(None);

    // A stored token skips the form entirely
    let session = ctx.session();
    spawn_local(async move {
        if let Err(e) = session.enter_auth_surface().await {
            set_error.try_set(Some(e.to_string()));
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut values = None;
        form.update(|f| values = f.begin_submit());
        let Some(credentials) = values else { return };
        set_error.set(None);

        let session = ctx.session();
        spawn_local(async move {
            let result = session.login(&credentials).await;
            // The page is gone once the login succeeds
            form.try_update(|f| f.finish_submit(result.is_ok()));
            if let Err(e) = result {
                set_error.try_set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="auth-page login">
            <section class="auth-intro">
                <h1>"Welcome back"</h1>
                <p>
                    "Unlock the door to productivity and dive into a realm where every "
                    "login is a step closer to conquering your tasks."
                </p>
            </section>
            <form class="auth-form" on:submit=submit>
                <h2>"LOGIN"</h2>
                <TextField form=form name="email" label="Email Address" input_type="email" />
                <TextField form=form name="password" label="Password" input_type="password" />
                <p class="auth-switch">
                    "Don't have an Account, "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_signup.run(());
                    }>"Create..."</a>
                </p>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" disabled=move || form.with(|f| f.is_submitting())>
                    {move || if form.with(|f| f.is_submitting()) { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
