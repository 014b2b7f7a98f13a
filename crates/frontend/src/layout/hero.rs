use leptos::prelude::*;

/// Full-width banner with the store name and tagline.
#[component]
pub fn Hero(
    #[prop(into)]
    brand: String,
    #[prop(into)]
    tagline: String,
    /// Background image path
    image: Option<String>,
) -> impl IntoView {
    let alt = format!("{} Hero", brand);
    let image = image.map(|src| view! { <img class="hero__image" src=src alt=alt /> });

    view! {
        <header class="hero">
            <div class="hero__backdrop">
                {image}
                <div class="hero__wash"></div>
                <div class="hero__fade"></div>
            </div>
            <div class="hero__content">
                <h1 class="hero__title">{brand}</h1>
                <div class="hero__rule"></div>
                <p class="hero__tagline">{tagline}</p>
            </div>
        </header>
    }
}
