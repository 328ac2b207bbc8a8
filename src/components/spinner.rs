use leptos::prelude::*;

/// Full-height loading indicator
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
