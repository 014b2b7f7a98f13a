mod controller;
mod page;

pub use controller::{CatalogController, SEARCH_INPUT_ID};
pub use page::CatalogPage;
