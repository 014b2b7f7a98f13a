use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev / "Page X of Y" / Next.
///
/// Pages are 1-based. Prev is disabled on the first page and Next on the
/// last; the parent decides whether to render this at all.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback with the requested page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                id="pagination-prev"
                class="pagination-btn pagination-btn--prev"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
            >
                {icon("chevron-left")}
                "Prev"
            </button>
            <div class="pagination-info">
                <span class="pagination-info__label">"Page"</span>
                <span class="pagination-info__current">{move || current_page.get()}</span>
                <span class="pagination-info__label">
                    {move || format!("of {}", total_pages.get())}
                </span>
            </div>
            <button
                id="pagination-next"
                class="pagination-btn pagination-btn--next"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
