use super::{CatalogEffect, CatalogMsg, CatalogState};

/// Applies one message to the catalog and returns the effects to run.
pub fn update(state: &mut CatalogState, msg: CatalogMsg) -> Vec<CatalogEffect> {
    let was_past_first_page = state.page() > 1;

    match msg {
        CatalogMsg::LoadRequested => {
            if state.begin_load() {
                vec![CatalogEffect::FetchFeed]
            } else {
                log::warn!("Catalog load already started; ignoring request");
                Vec::new()
            }
        }
        CatalogMsg::LoadSucceeded(books) => {
            let count = books.len();
            if state.finish_load(books) {
                log::info!("Catalog loaded: {} books", count);
            } else {
                log::warn!("Discarding feed result outside of a load cycle");
            }
            Vec::new()
        }
        CatalogMsg::LoadFailed(message) => {
            log::error!("Catalog load failed: {}", message);
            if !state.fail_load(message) {
                log::warn!("Discarding feed error outside of a load cycle");
            }
            Vec::new()
        }
        CatalogMsg::RetryRequested => vec![CatalogEffect::ReloadPage],
        CatalogMsg::SearchChanged(query) => {
            let changed = state.set_search_query(query);
            after_filter_change(state, changed, was_past_first_page)
        }
        CatalogMsg::CategorySelected(category) => {
            let changed = state.set_selected_category(category);
            after_filter_change(state, changed, was_past_first_page)
        }
        CatalogMsg::FiltersReset => {
            let changed = state.reset_filters();
            after_filter_change(state, changed, was_past_first_page)
        }
        CatalogMsg::PageRequested(page) => scroll_if(state.set_page(page)),
        CatalogMsg::NextPage => {
            let next = state.page() + 1;
            scroll_if(state.can_go_next() && state.set_page(next))
        }
        CatalogMsg::PrevPage => {
            let prev = state.page().saturating_sub(1);
            scroll_if(state.can_go_prev() && state.set_page(prev))
        }
    }
}

// A filter change made from a later page still scrolls, even though the page
// itself has just snapped back to one.
fn after_filter_change(
    state: &CatalogState,
    changed: bool,
    was_past_first_page: bool,
) -> Vec<CatalogEffect> {
    scroll_if(changed && (was_past_first_page || state.wants_search_in_view()))
}

fn scroll_if(condition: bool) -> Vec<CatalogEffect> {
    if condition {
        vec![CatalogEffect::ScrollToSearch]
    } else {
        Vec::new()
    }
}
