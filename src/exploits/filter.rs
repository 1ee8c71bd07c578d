//! Filter selections
//!
//! What the user has checked, partitioned into version and term filters.
//! Selections arrive as raw strings and are classified the same way tag
//! tokens are: numeric means version, anything else is a lowercased term.

use crate::exploits::entry::{parse_tag, TagToken};

/// An active filter selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    /// Selected firmware versions
    pub versions: Vec<f64>,
    /// Selected terms, lowercased
    pub terms: Vec<String>,
}

impl FilterSelection {
    /// Build a selection from raw tokens.
    ///
    /// Each token is classified independently; duplicates are dropped so a
    /// selection behaves as a set.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();

        for raw in tokens {
            for token in parse_tag(raw.as_ref()) {
                match token {
                    TagToken::Version(v) => {
                        if !selection.versions.iter().any(|&known| known == v) {
                            selection.versions.push(v);
                        }
                    }
                    TagToken::Term(t) => {
                        if !selection.terms.contains(&t) {
                            selection.terms.push(t);
                        }
                    }
                }
            }
        }

        selection
    }

    /// True if no filter is active at all
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty() && self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exploits::{ExploitEntry, ExploitIndex};

    fn indexed(entry: ExploitEntry) -> ExploitIndex {
        ExploitIndex::build(vec![entry])
    }

    fn matches(entry: ExploitEntry, selection: &FilterSelection) -> bool {
        indexed(entry).items()[0].matches(selection)
    }

    #[test]
    fn test_from_tokens_partitions_selection() {
        let selection = FilterSelection::from_tokens(["9.00", "Jailbreak", "5.05"]);
        assert_eq!(selection.versions, vec![9.0, 5.05]);
        assert_eq!(selection.terms, vec!["jailbreak"]);
    }

    #[test]
    fn test_from_tokens_deduplicates() {
        let selection = FilterSelection::from_tokens(["9.00", "9", "usb", "USB"]);
        assert_eq!(selection.versions, vec![9.0]);
        assert_eq!(selection.terms, vec!["usb"]);
    }

    #[test]
    fn test_empty_selection_shows_everything() {
        let entry = ExploitEntry::new("e").tag("9.00; kernel");
        assert!(matches(entry, &FilterSelection::default()));
    }

    #[test]
    fn test_untagged_entry_always_visible() {
        let entry = ExploitEntry::new("notes");
        let selection = FilterSelection::from_tokens(["4.03", "obscure"]);
        assert!(matches(entry, &selection));
    }

    #[test]
    fn test_version_requirement_matches_at_or_below_selection() {
        let selection = FilterSelection::from_tokens(["9.00"]);

        // Requirement below the selected firmware: applies.
        assert!(matches(ExploitEntry::new("old").tag("5.05"), &selection));
        // Exact match.
        assert!(matches(ExploitEntry::new("same").tag("9.00"), &selection));
        // Requirement above the selected firmware: does not apply.
        assert!(!matches(ExploitEntry::new("new").tag("11.00"), &selection));
    }

    #[test]
    fn test_term_filter_requires_intersection() {
        let selection = FilterSelection::from_tokens(["jailbreak"]);

        assert!(matches(
            ExploitEntry::new("hit").tag("Jailbreak; kernel"),
            &selection
        ));
        assert!(!matches(
            ExploitEntry::new("miss").tag("homebrew"),
            &selection
        ));
    }

    #[test]
    fn test_both_filters_must_pass() {
        let selection = FilterSelection::from_tokens(["9.00", "jailbreak"]);

        assert!(matches(
            ExploitEntry::new("both").tag("5.05; jailbreak"),
            &selection
        ));
        // Version passes, term does not.
        assert!(!matches(
            ExploitEntry::new("wrong term").tag("5.05; homebrew"),
            &selection
        ));
        // Term passes, version does not.
        assert!(!matches(
            ExploitEntry::new("wrong version").tag("11.00; jailbreak"),
            &selection
        ));
    }

    #[test]
    fn test_inactive_side_is_neutral() {
        // Only a term selected: an entry with version requirements but a
        // matching term still shows.
        let selection = FilterSelection::from_tokens(["jailbreak"]);
        assert!(matches(
            ExploitEntry::new("e").tag("11.00; jailbreak"),
            &selection
        ));

        // Only a version selected: a tagged entry with no version
        // requirement has nothing satisfying the check and is hidden.
        let selection = FilterSelection::from_tokens(["9.00"]);
        assert!(!matches(
            ExploitEntry::new("terms only").tag("homebrew"),
            &selection
        ));
    }
}
