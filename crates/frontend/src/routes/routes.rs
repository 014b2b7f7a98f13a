use contracts::config::StorefrontConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::catalog::ui::CatalogPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the catalog"</a>
        </div>
    }
}

/// The storefront has a single content route: the catalog.
#[component]
pub fn AppRoutes(config: StorefrontConfig) -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route
                    path=path!("/")
                    view=move || view! { <CatalogPage config=config.clone() /> }
                />
            </Routes>
        </Router>
    }
}
