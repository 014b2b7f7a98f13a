/// Side effects the page runs after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEffect {
    /// Fetch the feed once; answer with `LoadSucceeded` or `LoadFailed`.
    FetchFeed,
    /// Reload the whole page.
    ReloadPage,
    /// Bring the search box into view.
    ScrollToSearch,
}
