//! Listing Markdown files already present in the target directory.

use crate::error::{DetectError, Result};
use crate::normalize::MARKDOWN_SUFFIX;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Returns the names of entries directly inside `dir` that end in `.md`.
///
/// Not recursive. Names are compared verbatim (case-sensitive); entries whose
/// names are not valid UTF-8 cannot match a candidate and are skipped.
pub fn scan_existing(dir: &Path) -> Result<HashSet<String>> {
    let listing_error = |source| DetectError::MissingDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = HashSet::new();
    for entry in fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(MARKDOWN_SUFFIX) => {
                names.insert(name);
            }
            Ok(_) => {}
            Err(raw) => tracing::debug!(name = ?raw, "skipping non-UTF-8 entry"),
        }
    }
    tracing::debug!(dir = %dir.display(), count = names.len(), "scanned existing files");
    Ok(names)
}
