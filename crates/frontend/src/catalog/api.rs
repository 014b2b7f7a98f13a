use contracts::domain::book::Book;
use contracts::feed::{FeedError, FeedResponse};
use gloo_net::http::Request;
use web_sys::RequestCache;

/// Fetch the feed once and turn it into books.
///
/// Always bypasses the HTTP cache so a freshly published sheet shows up on
/// the next page load. No retry: the visitor reloads the page instead.
pub async fn fetch_books(feed_url: &str) -> Result<Vec<Book>, FeedError> {
    let response = Request::get(feed_url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;

    // The body of an error page is never parsed.
    let body = if response.ok() {
        response
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?
    } else {
        String::new()
    };

    contracts::load_catalog(FeedResponse {
        status: response.status(),
        status_text: response.status_text(),
        body,
    })
}
