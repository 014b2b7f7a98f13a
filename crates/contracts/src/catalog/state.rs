use std::collections::BTreeSet;

use crate::domain::book::Book;

/// Books per page.
pub const PAGE_SIZE: usize = 10;

/// Where the single load cycle of this page view stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Which block the catalog body shows. Loading, error and "no results" are
/// kept apart so the page never confuses an empty feed with a slow one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogContent {
    Loading,
    Failed(String),
    Empty,
    Results { total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    phase: LoadPhase,
    books: Vec<Book>,

    // filters
    search_query: String,
    selected_category: String,

    // 1-based
    page: usize,

    // derived
    categories: Vec<String>,
    filtered: Vec<Book>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Idle,
            books: Vec::new(),
            search_query: String::new(),
            selected_category: String::new(),
            page: 1,
            categories: Vec::new(),
            filtered: Vec::new(),
        }
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filtered(&self) -> &[Book] {
        &self.filtered
    }

    /// Books on the current page.
    pub fn visible(&self) -> &[Book] {
        page_slice(&self.filtered, self.page)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len())
    }

    /// True until the first load cycle settles. `Idle` counts as loading:
    /// the page requests the feed as soon as it mounts.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn content(&self) -> CatalogContent {
        match &self.phase {
            LoadPhase::Idle | LoadPhase::Loading => CatalogContent::Loading,
            LoadPhase::Failed(message) => CatalogContent::Failed(message.clone()),
            LoadPhase::Ready if self.filtered.is_empty() => CatalogContent::Empty,
            LoadPhase::Ready => CatalogContent::Results {
                total: self.filtered.len(),
            },
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty() || !self.selected_category.is_empty()
    }

    pub fn show_category_filter(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn show_pagination(&self) -> bool {
        self.phase == LoadPhase::Ready && self.page_count() > 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// The search box is scrolled to whenever the visitor is past page one
    /// or narrowing the list.
    pub fn wants_search_in_view(&self) -> bool {
        self.page > 1 || self.has_active_filters()
    }

    // ------------------------------------------------------------------
    // Mutations, driven by `update`
    // ------------------------------------------------------------------

    /// Idle -> Loading. Returns false when a cycle has already started.
    pub(super) fn begin_load(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Loading -> Ready with `books` replacing the previous list wholesale.
    pub(super) fn finish_load(&mut self, books: Vec<Book>) -> bool {
        if self.phase != LoadPhase::Loading {
            return false;
        }
        self.books = books;
        self.categories = distinct_categories(&self.books);
        self.refilter();
        self.page = self.page.clamp(1, self.page_count().max(1));
        self.phase = LoadPhase::Ready;
        true
    }

    /// Loading -> Failed. Books stay as they were.
    pub(super) fn fail_load(&mut self, message: String) -> bool {
        if self.phase != LoadPhase::Loading {
            return false;
        }
        self.phase = LoadPhase::Failed(message);
        true
    }

    pub(super) fn set_search_query(&mut self, query: String) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query;
        self.refilter();
        self.page = 1;
        true
    }

    pub(super) fn set_selected_category(&mut self, category: String) -> bool {
        if self.selected_category == category {
            return false;
        }
        self.selected_category = category;
        self.refilter();
        self.page = 1;
        true
    }

    pub(super) fn reset_filters(&mut self) -> bool {
        if !self.has_active_filters() {
            return false;
        }
        self.search_query.clear();
        self.selected_category.clear();
        self.refilter();
        self.page = 1;
        true
    }

    /// Moves to `page` when it lies in `[1, page_count]`.
    pub(super) fn set_page(&mut self, page: usize) -> bool {
        if page == self.page || page < 1 || page > self.page_count() {
            return false;
        }
        self.page = page;
        true
    }

    fn refilter(&mut self) {
        self.filtered = filter_books(&self.books, &self.search_query, &self.selected_category);
    }
}

// ============================================================================
// Derivations
// ============================================================================

pub fn distinct_categories(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .filter(|b| b.is_categorized())
        .map(|b| b.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Title contains `query` (case-insensitive) and the category matches
/// `category`, where `""` matches everything.
pub fn filter_books(books: &[Book], query: &str, category: &str) -> Vec<Book> {
    let query = query.to_lowercase();
    books
        .iter()
        .filter(|b| b.title.to_lowercase().contains(&query))
        .filter(|b| category.is_empty() || b.category == category)
        .cloned()
        .collect()
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Items on 1-based `page`; empty past the end.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, category: &str) -> Book {
        Book {
            title: title.to_string(),
            category: category.to_string(),
            ..Book::default()
        }
    }

    #[test]
    fn test_distinct_categories_sorted_without_empty() {
        let books = vec![
            book("a", "SciFi"),
            book("b", ""),
            book("c", "Classic"),
            book("d", "SciFi"),
        ];
        assert_eq!(distinct_categories(&books), vec!["Classic", "SciFi"]);
        assert!(distinct_categories(&[book("x", "")]).is_empty());
    }

    #[test]
    fn test_filter_books_case_insensitive_title() {
        let books = vec![book("Dune", "SciFi"), book("Dune Messiah", "SciFi"), book("Emma", "Classic")];
        let titles = |v: Vec<Book>| v.into_iter().map(|b| b.title).collect::<Vec<_>>();

        assert_eq!(titles(filter_books(&books, "dUNE", "")), vec!["Dune", "Dune Messiah"]);
        assert_eq!(titles(filter_books(&books, "", "Classic")), vec!["Emma"]);
        assert_eq!(titles(filter_books(&books, "messiah", "Classic")), Vec::<String>::new());
        assert_eq!(filter_books(&books, "", "").len(), 3);
    }

    #[test]
    fn test_category_match_is_exact() {
        let books = vec![book("Dune", "SciFi")];
        assert!(filter_books(&books, "", "scifi").is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&items, 1).len(), 10);
        assert_eq!(page_slice(&items, 3), &[20, 21, 22, 23, 24]);
        assert!(page_slice(&items, 4).is_empty());
        assert_eq!(page_slice(&items, 0), page_slice(&items, 1));
    }

    #[test]
    fn test_default_state() {
        let state = CatalogState::new();
        assert_eq!(state.page(), 1);
        assert!(state.is_loading());
        assert_eq!(state.content(), CatalogContent::Loading);
        assert!(!state.show_pagination());
        assert!(!state.show_category_filter());
        assert_eq!(state.error(), None);
    }
}
