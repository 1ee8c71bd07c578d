//! Exploit index errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or building the exploit index
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to read exploit data {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse exploit data {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}
