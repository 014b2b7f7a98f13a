use serde::{Deserialize, Serialize};

// ============================================================================
// Book
// ============================================================================

/// One catalog entry as published in the storefront feed.
///
/// The feed carries no id column, so `title` is the practical identity key.
/// Every `Book` that leaves the normalizer has a non-empty title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Book {
    pub title: String,

    /// Empty string means "uncategorized".
    #[serde(default)]
    pub category: String,

    #[serde(rename = "imageUrl", default)]
    pub image_url: String,

    /// Free-form display string, never parsed as currency.
    #[serde(default)]
    pub price: String,

    #[serde(rename = "sellarLink", default)]
    pub sellar_link: String,
}

impl Book {
    /// Cover URL if the feed value is usable as an image source.
    pub fn cover_url(&self) -> Option<&str> {
        is_web_url(&self.image_url).then_some(self.image_url.as_str())
    }

    /// Cover URL for a card in the given state; `None` means the card
    /// renders its placeholder.
    pub fn cover_for(&self, state: CoverState) -> Option<&str> {
        match state {
            CoverState::Loaded => self.cover_url(),
            CoverState::Failed => None,
        }
    }

    pub fn is_categorized(&self) -> bool {
        !self.category.is_empty()
    }

    /// DOM id of the card's purchase link.
    pub fn buy_link_id(&self) -> String {
        format!("buy-{}", dom_slug(&self.title))
    }
}

fn is_web_url(value: &str) -> bool {
    let lower = value.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// ============================================================================
// Cover image state
// ============================================================================

/// Per-card image state. Moves `Loaded -> Failed` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverState {
    #[default]
    Loaded,
    Failed,
}

impl CoverState {
    pub fn fail(self) -> Self {
        CoverState::Failed
    }
}

/// Lower-cases `text` and replaces every whitespace run with a single `-`.
pub fn dom_slug(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
