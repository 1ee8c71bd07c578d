//! Exploit entry records
//!
//! The raw, on-disk shape of the exploit listing. Each entry carries a list
//! of tag strings; a single tag string may pack several tokens separated by
//! semicolons (`"9.00; jailbreak; kernel"`). Token classification happens
//! here: a token that parses as a float is a firmware version requirement,
//! anything else is a search term.

use serde::{Deserialize, Serialize};

/// A single exploit listing entry as stored in the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploitEntry {
    /// Display title
    pub title: String,

    /// Optional page URL for the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Optional one-line summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Raw tag strings; each may hold several `;`-separated tokens
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ExploitEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            summary: None,
            tags: Vec::new(),
        }
    }

    /// Builder method: set the page URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method: add a raw tag string
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// True if the entry carries no tag strings at all.
    ///
    /// Untagged entries are uncategorized and always shown by the filter.
    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A tag token, classified
#[derive(Debug, Clone, PartialEq)]
pub enum TagToken {
    /// Numeric token, a firmware version requirement
    Version(f64),
    /// Everything else, lowercased
    Term(String),
}

/// Split a raw tag string into classified tokens.
///
/// Tokens are `;`-separated; surrounding whitespace is trimmed and empty
/// tokens are dropped. `9.00` and `9` classify as the same version.
pub fn parse_tag(raw: &str) -> Vec<TagToken> {
    raw.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(version) => TagToken::Version(version),
            Err(_) => TagToken::Term(token.to_lowercase()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_partitions_versions_and_terms() {
        let tokens = parse_tag("9.00; jailbreak; Kernel");
        assert_eq!(
            tokens,
            vec![
                TagToken::Version(9.0),
                TagToken::Term("jailbreak".to_string()),
                TagToken::Term("kernel".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_tag_trims_and_drops_empty_tokens() {
        let tokens = parse_tag(" ; 5.05 ;; usb ; ");
        assert_eq!(
            tokens,
            vec![
                TagToken::Version(5.05),
                TagToken::Term("usb".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_zeroes_are_the_same_version() {
        assert_eq!(parse_tag("9.00"), parse_tag("9"));
    }

    #[test]
    fn test_empty_tag_string_yields_nothing() {
        assert!(parse_tag("").is_empty());
        assert!(parse_tag(" ; ; ").is_empty());
    }

    #[test]
    fn test_entry_builder() {
        let entry = ExploitEntry::new("GoldHEN")
            .url("/exploits/goldhen.html")
            .tag("9.00; jailbreak");
        assert!(!entry.is_untagged());
        assert_eq!(entry.tags.len(), 1);

        assert!(ExploitEntry::new("Misc notes").is_untagged());
    }
}
