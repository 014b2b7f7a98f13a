use contracts::config::load_config;
use leptos::prelude::*;

use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => view! { <AppRoutes config=config /> }.into_any(),
        Err(e) => {
            log::error!("Invalid storefront configuration: {:#}", e);
            view! { <ConfigError /> }.into_any()
        }
    }
}

#[component]
fn ConfigError() -> impl IntoView {
    view! {
        <div class="catalog__error">
            <h3 class="catalog__error-title">"Storefront unavailable"</h3>
            <p class="catalog__error-message">"The catalog is misconfigured."</p>
        </div>
    }
}
