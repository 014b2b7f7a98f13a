use contracts::domain::book::{Book, CoverState};
use leptos::prelude::*;
use thaw::Card;

use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;

/// Stagger between consecutive cards of one page.
const APPEAR_STEP_MS: usize = 50;

/// Inline `card-appear` animation for the card at `position` on the page.
fn appear_style(position: usize) -> String {
    format!(
        "animation: card-appear 0.5s ease-out {}ms both;",
        position * APPEAR_STEP_MS
    )
}

/// One book: cover, category, title, price and the purchase link.
///
/// Cards fade in one after another by `position` on the page. A cover that
/// fails to load switches this card to the placeholder for as long as it
/// stays mounted; the image is not retried.
#[component]
pub fn BookCard(book: Book, #[prop(optional)] position: usize) -> impl IntoView {
    let cover_state = RwSignal::new(CoverState::default());

    let cover_url = {
        let book = book.clone();
        move || book.cover_for(cover_state.get()).map(str::to_string)
    };
    let alt = book.title.clone();
    let on_cover_error = move |_| {
        log::debug!("Cover image failed to load; showing placeholder");
        cover_state.update(|s| *s = s.fail());
    };

    let buy_id = book.buy_link_id();
    let category = book.is_categorized().then(|| book.category.clone());

    view! {
        <Card attr:style=appear_style(position)>
            <div class="book-card">
                <div class="book-card__cover">
                    {move || match cover_url() {
                        Some(src) => view! {
                            <img
                                class="book-card__image"
                                src=src
                                alt=alt.clone()
                                loading="lazy"
                                on:error=on_cover_error
                            />
                        }
                        .into_any(),
                        None => view! {
                            <div class="book-card__placeholder">"Cover Image Unavailable"</div>
                        }
                        .into_any(),
                    }}
                    {category.map(|category| view! {
                        <div class="book-card__category">
                            <Badge>{category}</Badge>
                        </div>
                    })}
                </div>

                <div class="book-card__details">
                    <h3 class="book-card__title">{book.title}</h3>
                    <div class="book-card__rule"></div>

                    <div class="book-card__footer">
                        <div class="book-card__price">
                            <span class="book-card__price-label">"Acquisition"</span>
                            <p class="book-card__price-value">{book.price}</p>
                        </div>
                        <a
                            class="book-card__buy"
                            id=buy_id
                            href=book.sellar_link
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span>"Acquire Now"</span>
                            {icon("arrow-right")}
                        </a>
                    </div>
                </div>
            </div>
        </Card>
    }
}

/// Grey placeholder shaped like a `BookCard`, shown while the feed loads.
#[component]
pub fn BookCardSkeleton() -> impl IntoView {
    view! {
        <div class="book-card book-card--skeleton" aria-hidden="true">
            <div class="book-card__cover">
                <div class="skeleton skeleton--cover"></div>
            </div>
            <div class="book-card__details">
                <div class="skeleton skeleton--line skeleton--wide"></div>
                <div class="skeleton skeleton--line skeleton--half"></div>
                <div class="book-card__footer">
                    <div class="skeleton skeleton--price"></div>
                    <div class="skeleton skeleton--button"></div>
                </div>
            </div>
        </div>
    }
}
