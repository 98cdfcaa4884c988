//! Folding a URL path into a flat, filesystem-safe stem.

/// Folds a URL path into a single filename stem.
///
/// - Replaces every character outside `[A-Za-z0-9_/-]` with `-`
/// - Collapses runs of `-`
/// - Turns each remaining `/` into `-`
/// - Trims `-` from both ends
///
/// Slashes are converted after collapsing, so `a-/b` yields `a--b`.
pub fn fold_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_hyphen = false;

    for c in path.chars() {
        let replacement = if c.is_ascii_alphanumeric() || c == '_' || c == '/' {
            c
        } else {
            '-'
        };

        if replacement == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(replacement);
            prev_hyphen = false;
        }
    }

    out.replace('/', "-").trim_matches('-').to_string()
}
