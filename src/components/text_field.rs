//! Text Field Component
//!
//! One labelled input bound to a form field, with its validation message.

use leptos::prelude::*;

use crate::forms::{FormFields, FormState};

/// Input bound to `form`'s field `name`.
///
/// The error only shows once the field has been blurred or the form submitted.
#[component]
pub fn TextField<F>(
    form: RwSignal<FormState<F>>,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView
where
    F: FormFields + Send + Sync + 'static,
{
    view! {
        <div class="field">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                prop:value=move || form.with(|f| f.values.field(name).unwrap_or_default().to_string())
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.blur(name))
            />
            {move || form.with(|f| {
                f.visible_error(name)
                    .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
            })}
        </div>
    }
}
