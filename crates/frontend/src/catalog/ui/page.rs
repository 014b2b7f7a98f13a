use contracts::catalog::{CatalogContent, CatalogMsg};
use contracts::config::StorefrontConfig;
use contracts::domain::book::Book;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::controller::CatalogController;
use crate::layout::footer::Footer;
use crate::layout::hero::Hero;
use crate::shared::components::book_card::{BookCard, BookCardSkeleton};
use crate::shared::components::category_filter::CategoryFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_bar::SearchBar;
use crate::shared::icons::icon;

// Titles repeat in the feed, so the key carries every field: a card is only
// reused when it would render the same price and purchase link.
fn card_key(index: usize, book: &Book) -> (usize, Book) {
    (index, book.clone())
}

#[component]
pub fn CatalogPage(config: StorefrontConfig) -> impl IntoView {
    let controller = CatalogController::new(config.feed.url.clone());
    let state = controller.state();
    let page_config = config.storefront;
    let skeleton_count = page_config.skeleton_count;

    Effect::new(move |_| {
        controller.dispatch(CatalogMsg::LoadRequested);
    });

    let content = Memo::new(move |_| state.with(|s| s.content()));
    let categories = Memo::new(move |_| state.with(|s| s.categories().to_vec()));
    let visible = Memo::new(move |_| {
        state.with(|s| s.visible().iter().cloned().enumerate().collect::<Vec<_>>())
    });
    let search_query = Signal::derive(move || state.with(|s| s.search_query().to_string()));
    let selected_category =
        Signal::derive(move || state.with(|s| s.selected_category().to_string()));
    let page = Signal::derive(move || state.with(|s| s.page()));
    let page_count = Signal::derive(move || state.with(|s| s.page_count()));
    let has_active_filters = move || state.with(|s| s.has_active_filters());

    let on_search = Callback::new(move |query: String| {
        controller.dispatch(CatalogMsg::SearchChanged(query));
    });
    let on_select_category = Callback::new(move |category: String| {
        controller.dispatch(CatalogMsg::CategorySelected(category));
    });
    let on_page_change = Callback::new(move |page: usize| {
        controller.dispatch(CatalogMsg::PageRequested(page));
    });

    let results = move || match content.get() {
        CatalogContent::Loading => view! {
            <div class="catalog__grid">
                {(0..skeleton_count).map(|_| view! { <BookCardSkeleton /> }).collect_view()}
            </div>
        }
        .into_any(),
        CatalogContent::Failed(message) => view! {
            <div class="catalog__error">
                <div class="catalog__error-icon">{icon("alert")}</div>
                <h3 class="catalog__error-title">"Connection Issue"</h3>
                <p class="catalog__error-message">{message}</p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| controller.dispatch(CatalogMsg::RetryRequested)
                >
                    "Try Again"
                </Button>
            </div>
        }
        .into_any(),
        CatalogContent::Empty => view! {
            <div class="catalog__empty">
                <h3>"No books match your criteria"</h3>
                <p>"Try a different search term or category"</p>
            </div>
        }
        .into_any(),
        CatalogContent::Results { total } => view! {
            <div class="catalog__info">
                <p>"Found " <span class="catalog__count">{total}</span> " titles"</p>
                <Show when=has_active_filters>
                    <button
                        class="catalog__reset"
                        on:click=move |_| controller.dispatch(CatalogMsg::FiltersReset)
                    >
                        "Reset Filters"
                    </button>
                </Show>
            </div>
            <div class="catalog__grid">
                <For
                    each=move || visible.get()
                    key=|(index, book)| card_key(*index, book)
                    children=move |(index, book)| {
                        view! { <BookCard book=book position=index /> }
                    }
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="storefront">
            <Hero
                brand=page_config.brand.clone()
                tagline=page_config.tagline.clone()
                image=page_config.hero_image.clone()
            />

            <main class="catalog">
                <div class="catalog__search">
                    <div class="catalog__search-line" aria-hidden="true"></div>
                    <SearchBar value=search_query on_search=on_search />
                </div>

                <div class="catalog__categories">
                    <Show when=move || state.with(|s| s.show_category_filter())>
                        <CategoryFilter
                            categories=categories
                            selected=selected_category
                            on_select=on_select_category
                        />
                    </Show>
                </div>

                {results}

                <Show when=move || state.with(|s| s.show_pagination())>
                    <PaginationControls
                        current_page=page
                        total_pages=page_count
                        on_page_change=on_page_change
                    />
                </Show>
            </main>

            <Footer brand=page_config.brand.clone() note=page_config.footer_note.clone() />
        </div>
    }
}
