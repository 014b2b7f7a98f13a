use contracts::catalog::{
    filter_books, page_count, update, CatalogMsg, CatalogState, PAGE_SIZE,
};
use contracts::domain::book::Book;
use contracts::feed::RawRow;
use contracts::normalize::normalize;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn arb_book() -> impl Strategy<Value = Book> {
    (
        "[A-Za-z][A-Za-z ]{0,12}",
        prop::sample::select(vec!["", "SciFi", "Classic", "Poetry"]),
    )
        .prop_map(|(title, category)| Book {
            title: title.trim().to_string(),
            category: category.to_string(),
            ..Book::default()
        })
}

fn as_canonical_row(book: &Book) -> RawRow {
    RawRow::from_pairs([
        ("title", book.title.as_str()),
        ("category", book.category.as_str()),
        ("imageUrl", book.image_url.as_str()),
        ("price", book.price.as_str()),
        ("sellarLink", book.sellar_link.as_str()),
    ])
}

fn title_spelling() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["title", "Title", "TITLE"])
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn normalize_is_idempotent_on_canonical_rows(books in prop::collection::vec(arb_book(), 0..30)) {
        let once = normalize(&books.iter().map(as_canonical_row).collect::<Vec<_>>());
        let twice = normalize(&once.iter().map(as_canonical_row).collect::<Vec<_>>());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rows_without_title_are_dropped_and_order_kept(
        cells in prop::collection::vec(("[ a-z]{0,6}", title_spelling()), 0..30)
    ) {
        let rows: Vec<RawRow> = cells
            .iter()
            .map(|(title, header)| RawRow::from_pairs([(*header, title.as_str())]))
            .collect();
        let expected: Vec<String> = cells
            .iter()
            .map(|(title, _)| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .collect();

        let titles: Vec<String> = normalize(&rows).into_iter().map(|b| b.title).collect();
        prop_assert_eq!(titles, expected);
    }

    #[test]
    fn filter_matches_definition(
        books in prop::collection::vec(arb_book(), 0..40),
        query in "[a-zA-Z ]{0,3}",
        category in prop::sample::select(vec!["", "SciFi", "Classic", "Poetry"]),
    ) {
        let filtered = filter_books(&books, &query, category);
        let expected: Vec<Book> = books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&query.to_lowercase()))
            .filter(|b| category.is_empty() || b.category == category)
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn pages_partition_the_filtered_list(books in prop::collection::vec(arb_book(), 0..60)) {
        let mut state = CatalogState::new();
        update(&mut state, CatalogMsg::LoadRequested);
        update(&mut state, CatalogMsg::LoadSucceeded(books.clone()));

        let n = state.filtered().len();
        prop_assert_eq!(state.page_count(), n.div_ceil(PAGE_SIZE));
        prop_assert_eq!(page_count(n), state.page_count());

        let mut seen = Vec::new();
        for page in 1..=state.page_count() {
            update(&mut state, CatalogMsg::PageRequested(page));
            prop_assert_eq!(state.page(), page);
            prop_assert!(state.visible().len() <= PAGE_SIZE);
            seen.extend_from_slice(state.visible());
        }
        prop_assert_eq!(seen, books);
    }

    #[test]
    fn filter_change_always_returns_to_first_page(
        books in prop::collection::vec(arb_book(), 11..60),
        target in 1usize..6,
        query in "[a-z]{1,2}",
    ) {
        let mut state = CatalogState::new();
        update(&mut state, CatalogMsg::LoadRequested);
        update(&mut state, CatalogMsg::LoadSucceeded(books));
        let target = target.min(state.page_count());
        update(&mut state, CatalogMsg::PageRequested(target));

        update(&mut state, CatalogMsg::SearchChanged(query));
        prop_assert_eq!(state.page(), 1);

        update(&mut state, CatalogMsg::PageRequested(2));
        update(&mut state, CatalogMsg::CategorySelected("Poetry".to_string()));
        prop_assert_eq!(state.page(), 1);
    }
}
