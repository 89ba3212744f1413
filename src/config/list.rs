use serde::Deserialize;

use super::ConfigParseError;

/// A list-valued setting as it arrives from a configuration source.
///
/// Environment variables and `.env` entries always arrive as `Raw`; sources
/// that carry structured values (serialized defaults, tests) may hand over
/// `Items` directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListInput {
    Raw(String),
    Items(Vec<String>),
}

impl Default for ListInput {
    fn default() -> Self {
        ListInput::Items(Vec::new())
    }
}

impl From<&str> for ListInput {
    fn from(value: &str) -> Self {
        ListInput::Raw(value.to_string())
    }
}

impl From<Vec<String>> for ListInput {
    fn from(value: Vec<String>) -> Self {
        ListInput::Items(value)
    }
}

/// Resolves a list input into an ordered list of strings.
///
/// Blank text yields an empty list, text starting with `[` is decoded as a
/// JSON array of strings, anything else is split on commas with each piece
/// trimmed and empty pieces dropped. Order is preserved and duplicates are
/// kept. `Items` pass through unchanged.
pub fn parse_list(key: &'static str, input: ListInput) -> Result<Vec<String>, ConfigParseError> {
    let raw = match input {
        ListInput::Items(items) => return Ok(items),
        ListInput::Raw(raw) => raw,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str::<Vec<String>>(trimmed)
            .map_err(|source| ConfigParseError::MalformedList { key, source });
    }

    Ok(trimmed
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect())
}
