//! Exploit index
//!
//! Builds the in-memory index from raw entries and answers filter passes.
//! The index is constructed once and only read afterwards; rebuilding means
//! constructing a fresh index and swapping it in.

use std::path::{Path, PathBuf};

use crate::exploits::entry::{parse_tag, ExploitEntry, TagToken};
use crate::exploits::error::IndexError;
use crate::exploits::filter::FilterSelection;

/// An indexed exploit entry with its parsed search metadata
#[derive(Debug, Clone)]
pub struct IndexedExploit {
    /// The raw entry as loaded from the data file
    pub entry: ExploitEntry,
    /// Firmware version requirements, deduplicated
    pub versions: Vec<f64>,
    /// Lowercased search terms, deduplicated
    pub terms: Vec<String>,
    /// Entry carried no tags at all and is always shown
    pub untagged: bool,
}

impl IndexedExploit {
    fn from_entry(entry: ExploitEntry) -> Self {
        let untagged = entry.is_untagged();
        let mut versions: Vec<f64> = Vec::new();
        let mut terms: Vec<String> = Vec::new();

        for raw in &entry.tags {
            for token in parse_tag(raw) {
                match token {
                    TagToken::Version(v) => {
                        if !versions.iter().any(|&known| known == v) {
                            versions.push(v);
                        }
                    }
                    TagToken::Term(t) => {
                        if !terms.contains(&t) {
                            terms.push(t);
                        }
                    }
                }
            }
        }

        Self {
            entry,
            versions,
            terms,
            untagged,
        }
    }

    /// Does this entry pass the given selection?
    pub fn matches(&self, selection: &FilterSelection) -> bool {
        // Uncategorized entries are always visible.
        if self.untagged {
            return true;
        }

        // Nothing checked: show everything.
        if selection.is_empty() {
            return true;
        }

        let version_pass = if selection.versions.is_empty() {
            true
        } else {
            // An exploit for an older firmware also applies to newer ones,
            // so a requirement matches any selected version at or above it.
            self.versions
                .iter()
                .any(|req| selection.versions.iter().any(|sel| req <= sel))
        };

        let term_pass = if selection.terms.is_empty() {
            true
        } else {
            self.terms
                .iter()
                .any(|term| selection.terms.iter().any(|sel| sel == term))
        };

        version_pass && term_pass
    }
}

/// Pre-built index over the exploit listing
#[derive(Debug, Clone, Default)]
pub struct ExploitIndex {
    items: Vec<IndexedExploit>,
    source: Option<PathBuf>,
}

impl ExploitIndex {
    /// Build an index from raw entries
    pub fn build(entries: Vec<ExploitEntry>) -> Self {
        let items: Vec<IndexedExploit> =
            entries.into_iter().map(IndexedExploit::from_entry).collect();

        tracing::debug!(items = items.len(), "Indexed exploit entries");

        Self {
            items,
            source: None,
        }
    }

    /// An empty index (the listing is effectively disabled)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and index entries from a JSON data file
    pub async fn load(path: &Path) -> Result<Self, IndexError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| IndexError::Io {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        let entries: Vec<ExploitEntry> =
            serde_json::from_str(&content).map_err(|e| IndexError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        let mut index = Self::build(entries);
        index.source = Some(path.to_path_buf());

        tracing::info!(path = ?path, items = index.len(), "Loaded exploit index");
        Ok(index)
    }

    /// Load the index, degrading to an empty one on failure.
    ///
    /// A missing or malformed data file logs a warning and disables the
    /// listing instead of failing startup.
    pub async fn load_or_empty(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("Exploit listing disabled: {}", e);
                Self::empty()
            }
        }
    }

    /// The data file this index was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All indexed entries, in file order
    pub fn items(&self) -> &[IndexedExploit] {
        &self.items
    }

    /// Run a filter pass over the index
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&IndexedExploit> {
        self.items
            .iter()
            .filter(|item| item.matches(selection))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_entries() -> Vec<ExploitEntry> {
        vec![
            ExploitEntry::new("GoldHEN").tag("9.00; jailbreak; homebrew"),
            ExploitEntry::new("Mira").tag("5.05; homebrew"),
            ExploitEntry::new("PPPwn").tag("11.00; network"),
            ExploitEntry::new("General notes"),
        ]
    }

    #[test]
    fn test_build_parses_versions_and_terms() {
        let index = ExploitIndex::build(sample_entries());
        assert_eq!(index.len(), 4);

        let goldhen = &index.items()[0];
        assert_eq!(goldhen.versions, vec![9.0]);
        assert_eq!(goldhen.terms, vec!["jailbreak", "homebrew"]);
        assert!(!goldhen.untagged);

        assert!(index.items()[3].untagged);
    }

    #[test]
    fn test_duplicate_tokens_are_deduplicated() {
        let entry = ExploitEntry::new("dup")
            .tag("9.00; kernel")
            .tag("9; Kernel");
        let index = ExploitIndex::build(vec![entry]);

        assert_eq!(index.items()[0].versions, vec![9.0]);
        assert_eq!(index.items()[0].terms, vec!["kernel"]);
    }

    #[test]
    fn test_filter_pass_over_index() {
        let index = ExploitIndex::build(sample_entries());

        // Selecting firmware 9.00 matches exploits requiring <= 9.00, plus
        // the untagged entry.
        let selection = FilterSelection::from_tokens(["9.00"]);
        let matched = index.filter(&selection);
        let titles: Vec<&str> = matched.iter().map(|i| i.entry.title.as_str()).collect();
        assert_eq!(titles, vec!["GoldHEN", "Mira", "General notes"]);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "GoldHEN", "tags": ["9.00; jailbreak"]}}]"#
        )
        .unwrap();

        let index = ExploitIndex::load(file.path()).await.unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.source(), Some(file.path()));
        assert_eq!(index.items()[0].versions, vec![9.0]);
    }

    #[tokio::test]
    async fn test_missing_file_degrades_to_empty() {
        let index =
            ExploitIndex::load_or_empty(Path::new("/definitely/not/here.json")).await;
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            ExploitIndex::load(file.path()).await,
            Err(IndexError::Parse { .. })
        ));
        assert!(ExploitIndex::load_or_empty(file.path()).await.is_empty());
    }
}
