use leptos::prelude::*;

use crate::catalog::ui::SEARCH_INPUT_ID;
use crate::shared::icons::icon;

/// Title search box. Reports every keystroke.
///
/// Keeps its own text while typing and picks up outside changes to `value`
/// (e.g. "Reset Filters").
#[component]
pub fn SearchBar(
    #[prop(into)]
    value: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search titles...".to_string()
    } else {
        placeholder
    };

    let (text, set_text) = signal(value.get_untracked());

    Effect::new(move |_| {
        let outside = value.get();
        if text.with_untracked(|t| *t != outside) {
            set_text.set(outside);
        }
    });

    view! {
        <div class="search-bar">
            <div class="search-bar__icon">{icon("search")}</div>
            <input
                id=SEARCH_INPUT_ID
                class="search-bar__input"
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    set_text.set(query.clone());
                    on_search.run(query);
                }
            />
        </div>
    }
}
