//! Localized display strings.
//!
//! The string table ships inside the binary and is parsed once on first use.
//! Missing keys translate to themselves.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::warn;

const EN_US: &str = include_str!("../../locale/en-US.toml");

static STRINGS: OnceLock<BTreeMap<String, String>> = OnceLock::new();

/// Parse a locale table (`"key" = "text"` pairs)
pub fn parse_locale(text: &str) -> Result<BTreeMap<String, String>, toml::de::Error> {
    toml::from_str(text)
}

fn table() -> &'static BTreeMap<String, String> {
    STRINGS.get_or_init(|| {
        parse_locale(EN_US).unwrap_or_else(|e| {
            warn!("Failed to parse built-in locale table: {}", e);
            BTreeMap::new()
        })
    })
}

/// Display text for `key`, or the key itself when untranslated
pub fn translate(key: &str) -> String {
    table()
        .get(key)
        .cloned()
        .unwrap_or_else(|| key.to_string())
}
