use crate::domain::book::Book;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogMsg {
    /// Page mounted: start the one fetch-and-normalize cycle.
    LoadRequested,
    /// Feed fetched and normalized.
    LoadSucceeded(Vec<Book>),
    /// Fetch or parse failed; display text of the error.
    LoadFailed(String),
    /// Visitor clicked "Try Again".
    RetryRequested,
    /// Search box text changed.
    SearchChanged(String),
    /// Category pill clicked; `""` is "All".
    CategorySelected(String),
    /// "Reset Filters" clicked.
    FiltersReset,
    /// Jump to a 1-based page.
    PageRequested(usize),
    NextPage,
    PrevPage,
}
