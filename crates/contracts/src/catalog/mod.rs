//! Catalog state: the fetched books plus search, category and page inputs,
//! with every derived view recomputed on each change.

mod effect;
mod msg;
mod state;
mod update;

pub use effect::CatalogEffect;
pub use msg::CatalogMsg;
pub use state::{
    distinct_categories, filter_books, page_count, page_slice, CatalogContent, CatalogState,
    LoadPhase, PAGE_SIZE,
};
pub use update::update;
