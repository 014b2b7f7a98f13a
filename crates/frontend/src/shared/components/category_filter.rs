use contracts::domain::book::dom_slug;
use leptos::prelude::*;

fn pill_class(active: bool) -> &'static str {
    if active {
        "category-pill category-pill--active"
    } else {
        "category-pill"
    }
}

/// "All" plus one pill per category. Selecting "All" reports `""`.
#[component]
pub fn CategoryFilter(
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)]
    selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            <button
                id="category-all"
                class=move || pill_class(selected.with(|s| s.is_empty()))
                on:click=move |_| on_select.run(String::new())
            >
                "All"
            </button>
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| {
                    let id = format!("category-{}", dom_slug(&category));
                    let label = category.clone();
                    let is_active = {
                        let category = category.clone();
                        move || selected.with(|s| *s == category)
                    };
                    view! {
                        <button
                            id=id
                            class=move || pill_class(is_active())
                            on:click=move |_| on_select.run(category.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_class() {
        assert_eq!(pill_class(false), "category-pill");
        assert_eq!(pill_class(true), "category-pill category-pill--active");
    }
}
