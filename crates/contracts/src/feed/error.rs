use thiserror::Error;

/// Why one load of the feed failed. The display text is what the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The host answered with a non-success status.
    #[error("Failed to fetch CSV: {status_text}")]
    Fetch { status: u16, status_text: String },

    /// The request never produced a response (offline, DNS, CORS).
    #[error("{0}")]
    Transport(String),

    /// The body is not structurally valid CSV.
    #[error("{0}")]
    Parse(String),
}

impl From<csv::Error> for FeedError {
    fn from(err: csv::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
