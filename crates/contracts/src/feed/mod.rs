//! Storefront feed: the published spreadsheet export, read as CSV.
//!
//! The network half lives in the frontend; everything from "a response
//! arrived" onwards is here so it can be tested without a browser.

pub mod error;
pub mod rows;

pub use error::FeedError;
pub use rows::{parse_rows, RawRow};

/// Transport-neutral view of one HTTP answer from the feed host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FeedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Checks the status and parses the body into header-keyed rows.
pub fn read_feed(response: FeedResponse) -> Result<Vec<RawRow>, FeedError> {
    if !response.is_success() {
        return Err(FeedError::Fetch {
            status: response.status,
            status_text: response.status_text,
        });
    }
    parse_rows(&response.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_carries_status_text() {
        let response = FeedResponse {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: "title\nDune\n".to_string(),
        };
        let err = read_feed(response).unwrap_err();
        assert_eq!(
            err,
            FeedError::Fetch {
                status: 500,
                status_text: "Internal Server Error".to_string()
            }
        );
        assert_eq!(err.to_string(), "Failed to fetch CSV: Internal Server Error");
    }

    #[test]
    fn test_not_found_is_fetch_error() {
        let response = FeedResponse {
            status: 404,
            status_text: "Not Found".to_string(),
            body: String::new(),
        };
        assert!(matches!(
            read_feed(response),
            Err(FeedError::Fetch { status: 404, .. })
        ));
    }

    #[test]
    fn test_success_parses_body() {
        let rows = read_feed(FeedResponse::ok("title,price\nDune,$20\n")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("title"), Some("Dune"));
        assert_eq!(rows[0].get("price"), Some("$20"));
    }
}
