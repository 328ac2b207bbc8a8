//! Signup Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::TextField;
use crate::context::use_app;
use crate::forms::FormState;
use crate::models::SignupRequest;

#[component]
pub fn SignupPage(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(FormState::new(SignupRequest::default()));
    let (error, set_error) = signal::<Option<String>>(None);

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
        let Some(profile) = values else { return };
        set_error.set(None);

        let session = ctx.session();
        spawn_local(async move {
            let result = session.signup(&profile).await;
            form.try_update(|f| f.finish_submit(result.is_ok()));
            if let Err(e) = result {
                set_error.try_set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="auth-page signup">
            <section class="auth-intro">
                <h1>"Get organized"</h1>
                <p>
                    "Embark on your journey to productivity with a single sign-up. "
                    "Your to-dos, your way."
                </p>
            </section>
            <form class="auth-form" on:submit=submit>
                <h2>"SIGNUP"</h2>
                <div class="field-row">
                    <TextField form=form name="firstName" label="First Name" />
                    <TextField form=form name="lastName" label="Last Name" />
                </div>
                <TextField form=form name="email" label="Email Address" input_type="email" />
                <TextField form=form name="password" label="Password" input_type="password" />
                <p class="auth-switch">
                    "Already have an Account, "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_login.run(());
                    }>"Login..."</a>
                </p>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" disabled=move || form.with(|f| f.is_submitting())>
                    {move || if form.with(|f| f.is_submitting()) { "Signing up..." } else { "Signup" }}
                </button>
            </form>
        </div>
    }
}
