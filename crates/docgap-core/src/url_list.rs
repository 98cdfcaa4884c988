//! Reading the URL list (`Platform.txt`).

use crate::error::{DetectError, Result};
use std::fs;
use std::path::Path;

/// Scheme a line must start with (after trimming) to count as a URL.
pub const URL_SCHEME_PREFIX: &str = "https://";

/// Extracts URLs from line-oriented text, in order.
///
/// A line is kept when its trimmed form starts with `https://`; everything
/// else (headings, blank lines, comments) is skipped. Duplicates are kept.
pub fn read_urls(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(URL_SCHEME_PREFIX))
        .map(|line| {
            if let Err(e) = url::Url::parse(line) {
                tracing::warn!(line, "kept list entry that does not parse as a URL: {}", e);
            }
            line.to_string()
        })
        .collect()
}

/// Reads the URL list file at `path`. An unreadable file is fatal.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| DetectError::MissingSourceFile {
        path: path.to_path_buf(),
        source,
    })?;
    let urls = read_urls(&content);
    tracing::debug!(path = %path.display(), count = urls.len(), "loaded URL list");
    Ok(urls)
}
