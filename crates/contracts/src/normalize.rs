//! Raw feed rows -> `Book`s.
//!
//! The sheet's header row has been edited by hand over time, so each field
//! is looked up under every spelling it has carried.

use crate::domain::book::Book;
use crate::feed::RawRow;

const TITLE: &[&str] = &["title", "Title"];
const CATEGORY: &[&str] = &["category", "Category"];
const IMAGE_URL: &[&str] = &["imageUrl", "ImageUrl", "image_url", "Image URL"];
const PRICE: &[&str] = &["price", "Price"];
const SELLAR_LINK: &[&str] = &["sellarLink", "SellarLink", "sellar_link", "Sellar Link"];

/// Maps rows to books in input order, dropping rows without a title.
pub fn normalize(rows: &[RawRow]) -> Vec<Book> {
    let books: Vec<Book> = rows.iter().filter_map(normalize_row).collect();

    let dropped = rows.len() - books.len();
    if dropped > 0 {
        log::debug!("Dropped {} feed rows without a title", dropped);
    }
    books
}

/// `None` when the row has no usable title.
pub fn normalize_row(row: &RawRow) -> Option<Book> {
    let book = Book {
        title: field(row, TITLE),
        category: field(row, CATEGORY),
        image_url: field(row, IMAGE_URL),
        price: field(row, PRICE),
        sellar_link: field(row, SELLAR_LINK),
    };
    (!book.title.is_empty()).then_some(book)
}

/// First non-empty cell among the known spellings, then among headers that
/// fold to the same key. Trimmed; empty when nothing matches.
fn field(row: &RawRow, spellings: &[&str]) -> String {
    let exact = spellings
        .iter()
        .filter_map(|name| row.get(name))
        .find(|value| !value.is_empty());

    let value = exact.or_else(|| {
        let key = fold_header(spellings[0]);
        row.iter()
            .find(|(header, value)| !value.is_empty() && fold_header(header) == key)
            .map(|(_, value)| value)
    });

    value.unwrap_or_default().trim().to_string()
}

/// `"Image URL"`, `"image_url"` and `"IMAGEURL"` all fold to `"imageurl"`.
fn fold_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
