//! Storefront catalog pipeline: feed rows -> books -> filtered, paginated views.
//!
//! Pure and target-independent; the browser crate only adds the network
//! request and the rendering.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod feed;
pub mod normalize;

use domain::book::Book;
use feed::{FeedError, FeedResponse};

/// Status check, CSV parse and normalization of one feed response.
pub fn load_catalog(response: FeedResponse) -> Result<Vec<Book>, FeedError> {
    let rows = feed::read_feed(response)?;
    Ok(normalize::normalize(&rows))
}
