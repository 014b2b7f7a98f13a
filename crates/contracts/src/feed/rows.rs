use super::FeedError;

/// One data line of the feed, keyed by the header row.
///
/// Cells keep the column order of the sheet. When a header name repeats, the
/// leftmost column is the one `get` returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.push((header.into(), value.into()));
    }

    /// Cell under exactly this header name.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Parses delimited text into rows, using the first line as header names.
///
/// Blank lines are skipped. Ragged rows are accepted: a short row simply
/// lacks the trailing keys and surplus cells are ignored.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, FeedError> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    log::debug!(
        "Feed CSV headers: {:?}",
        headers.iter().collect::<Vec<_>>()
    );

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(RawRow::from_pairs(headers.iter().zip(record.iter())));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_uses_header_line() {
        let rows = parse_rows("title,category,price\nDune,SciFi,$20\nEmma,Classic,$9\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("title"), Some("Dune"));
        assert_eq!(rows[0].get("category"), Some("SciFi"));
        assert_eq!(rows[1].get("price"), Some("$9"));
    }

    #[test]
    fn test_parse_rows_skips_blank_lines() {
        let rows = parse_rows("title\nDune\n\n\nEmma\n\n").unwrap();
        let titles: Vec<_> = rows.iter().filter_map(|r| r.get("title")).collect();
        assert_eq!(titles, vec!["Dune", "Emma"]);
    }

    #[test]
    fn test_parse_rows_handles_quotes_and_commas() {
        let rows = parse_rows("title,price\n\"Crime, and Punishment\",\"$1,200\"\n").unwrap();
        assert_eq!(rows[0].get("title"), Some("Crime, and Punishment"));
        assert_eq!(rows[0].get("price"), Some("$1,200"));
    }

    #[test]
    fn test_parse_rows_tolerates_ragged_rows() {
        let rows = parse_rows("title,category,price\nDune\nEmma,Classic,$9,extra\n").unwrap();
        assert_eq!(rows[0].get("title"), Some("Dune"));
        assert_eq!(rows[0].get("category"), None);
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_parse_rows_strips_bom_and_crlf() {
        let rows = parse_rows("\u{FEFF}title,price\r\nDune,$20\r\n").unwrap();
        assert_eq!(rows[0].get("title"), Some("Dune"));
        assert_eq!(rows[0].get("price"), Some("$20"));
    }

    #[test]
    fn test_parse_rows_empty_text() {
        assert!(parse_rows("").unwrap().is_empty());
        assert!(parse_rows("title,category\n").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_header_first_column_wins() {
        let rows = parse_rows("title,title\nFirst,Second\n").unwrap();
        assert_eq!(rows[0].get("title"), Some("First"));
    }
}
