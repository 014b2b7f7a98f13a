use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub feed: FeedConfig,
    pub storefront: PageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Published spreadsheet export, CSV with a header row.
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub brand: String,
    pub tagline: String,
    pub footer_note: String,
    /// Banner photo; without one only the brand-coloured backdrop shows.
    #[serde(default)]
    pub hero_image: Option<String>,
    /// Placeholder cards shown while the feed loads.
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
}

fn default_skeleton_count() -> usize {
    8
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[feed]
url = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSqlHFPyD2qtsPfMKpt78ndYL4ThRwXcCiLvsUxqbntPl5M_eogK2qBExcHgkqtJS6eh9OD_7PQiA9D/pub?gid=0&single=true&output=csv"

[storefront]
brand = "KIGLADSBOOKS"
tagline = "Curating the world's most impactful literature."
footer_note = "Premium Book Curation"
skeleton_count = 8
"#;

/// Parse a configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<StorefrontConfig> {
    let config: StorefrontConfig = toml::from_str(contents)?;
    if config.feed.url.trim().is_empty() {
        anyhow::bail!("feed.url must not be empty");
    }
    Ok(config)
}

/// Load the configuration compiled into the bundle.
///
/// The page runs in the browser with no filesystem or environment, so the
/// embedded document is the only source.
pub fn load_config() -> anyhow::Result<StorefrontConfig> {
    parse_config(DEFAULT_CONFIG)
}
