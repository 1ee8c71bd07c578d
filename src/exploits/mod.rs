//! Exploit Listing Index
//!
//! Pre-indexed exploit catalog with version/term filtering.
//!
//! Entries are loaded from a JSON data file and indexed once: each raw tag
//! string is split into tokens, numeric tokens become firmware version
//! requirements and everything else becomes a lowercased search term. The
//! index is then read on every filter pass, so a filter request never
//! touches the data file.
//!
//! # Matching rules
//!
//! - An entry with no tags at all is always shown.
//! - With no filters active, everything is shown.
//! - A version requirement matches if it is `<=` any selected version
//!   (an exploit for firmware 5.05 also applies to a 9.00 console).
//! - A term matches if the entry's term set intersects the selected terms.
//! - An entry is visible iff it passes both the version and the term check.

pub mod entry;
pub mod error;
pub mod filter;
pub mod index;

pub use entry::ExploitEntry;
pub use error::IndexError;
pub use filter::FilterSelection;
pub use index::{ExploitIndex, IndexedExploit};
