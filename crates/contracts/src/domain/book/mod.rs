pub mod aggregate;

pub use aggregate::{dom_slug, Book, CoverState};
