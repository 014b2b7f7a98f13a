pub mod book_card;
pub mod category_filter;
pub mod pagination_controls;
pub mod search_bar;
pub mod ui;
