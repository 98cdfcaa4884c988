//! URL to candidate-filename normalization.
//!
//! Every documentation URL maps to exactly one `.md` filename. The mapping is
//! pure: it strips the base prefix, decodes percent-escapes, folds the rest
//! of the path into a hyphenated stem and appends `.md`. The bare base URL
//! maps to the root name (`platform.md` by default).

mod percent;
mod sanitize;

use percent::percent_decode;
use sanitize::fold_path;

/// Base URL stripped from every documentation URL before folding.
pub const DEFAULT_BASE_PREFIX: &str = "https://docs.apify.com/platform";

/// Stem used when the URL is exactly the base prefix.
pub const DEFAULT_ROOT_NAME: &str = "platform";

/// Suffix appended to every candidate filename.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Maps documentation URLs to candidate Markdown filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    base_prefix: String,
    root_name: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            base_prefix: DEFAULT_BASE_PREFIX.to_string(),
            root_name: DEFAULT_ROOT_NAME.to_string(),
        }
    }
}

impl Normalizer {
    /// Builds a normalizer for `base_prefix`.
    ///
    /// One trailing `/` is dropped from `base_prefix`, so the bare base URL
    /// still maps to the root name. `root_name` is folded like a path; if
    /// nothing usable remains, [`DEFAULT_ROOT_NAME`] is used so every URL
    /// still yields a filename.
    pub fn new(base_prefix: impl Into<String>, root_name: &str) -> Self {
        let mut base_prefix = base_prefix.into();
        if base_prefix.ends_with('/') {
            base_prefix.pop();
        }

        let root = fold_path(root_name);
        let root_name = if root.is_empty() {
            DEFAULT_ROOT_NAME.to_string()
        } else {
            root
        };
        Self {
            base_prefix,
            root_name,
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Returns the candidate filename for `url`. Never fails.
    ///
    /// A URL without the base prefix is folded as a whole.
    ///
    /// # Examples
    ///
    /// - `https://docs.apify.com/platform` → `platform.md`
    /// - `https://docs.apify.com/platform/actors/running` → `actors-running.md`
    pub fn candidate_filename(&self, url: &str) -> String {
        let path = url.strip_prefix(self.base_prefix.as_str()).unwrap_or(url);
        let path = path.strip_prefix('/').unwrap_or(path);

        let stem = fold_path(&percent_decode(path));
        let stem = if stem.is_empty() {
            self.root_name.as_str()
        } else {
            stem.as_str()
        };
        format!("{stem}{MARKDOWN_SUFFIX}")
    }
}

/// Candidate filename for `url` under the default base prefix.
pub fn normalize(url: &str) -> String {
    Normalizer::default().candidate_filename(url)
}
