use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer(
    #[prop(into)]
    brand: String,
    #[prop(into)]
    note: String,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__brand">{brand}</p>
            <p class="site-footer__note">{format!("© {} — {}", current_year(), note)}</p>
        </footer>
    }
}
