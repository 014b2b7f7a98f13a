use contracts::catalog::{update, CatalogEffect, CatalogMsg, CatalogState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::api;

/// DOM id of the search box; scroll target after paging and filtering.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Binds the pure catalog reducer to a signal and runs its effects.
#[derive(Clone, Copy)]
pub struct CatalogController {
    state: RwSignal<CatalogState>,
    feed_url: StoredValue<String>,
}

impl CatalogController {
    pub fn new(feed_url: String) -> Self {
        Self {
            state: RwSignal::new(CatalogState::new()),
            feed_url: StoredValue::new(feed_url),
        }
    }

    pub fn state(&self) -> RwSignal<CatalogState> {
        self.state
    }

    pub fn dispatch(self, msg: CatalogMsg) {
        // None once the page has been torn down
        let effects = self
            .state
            .try_update(|state| update(state, msg))
            .unwrap_or_default();

        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: CatalogEffect) {
        match effect {
            CatalogEffect::FetchFeed => {
                let feed_url = self.feed_url.get_value();
                log::info!("Loading catalog from {}", feed_url);
                spawn_local(async move {
                    let msg = match api::fetch_books(&feed_url).await {
                        Ok(books) => CatalogMsg::LoadSucceeded(books),
                        Err(e) => CatalogMsg::LoadFailed(e.to_string()),
                    };
                    self.dispatch(msg);
                });
            }
            CatalogEffect::ReloadPage => reload_page(),
            CatalogEffect::ScrollToSearch => scroll_into_view(SEARCH_INPUT_ID),
        }
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("Page reload failed: {:?}", e);
    }
}

fn scroll_into_view(element_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    if let Some(element) = element {
        element.scroll_into_view_with_bool(true);
    }
}
