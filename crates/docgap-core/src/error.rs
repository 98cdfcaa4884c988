//! Fatal errors for a detection run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run. Non-URL lines and odd characters in URLs are
/// not errors; they are skipped or folded.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The URL list could not be read.
    #[error("cannot read URL list {}", .path.display())]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Markdown directory could not be listed.
    #[error("cannot list directory {}", .path.display())]
    MissingDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DetectError>;
