use leptos::prelude::*;

/// Frosted category chip laid over a book cover.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="badge badge--category">
            {children()}
        </span>
    }
}
