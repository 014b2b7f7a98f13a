pub mod footer;
pub mod hero;
