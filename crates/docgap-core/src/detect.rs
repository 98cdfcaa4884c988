//! One detection run: read the list, scan the directory, build the report.

use crate::error::Result;
use crate::normalize::Normalizer;
use crate::report::Report;
use crate::scan::scan_existing;
use crate::url_list::load_urls;
use std::path::Path;

/// Reads `url_list` and `docs_dir` and reports which URLs lack a file.
///
/// Both inputs are read in full before any comparison; failure to read
/// either aborts the run with no partial report.
pub fn detect_missing(normalizer: &Normalizer, url_list: &Path, docs_dir: &Path) -> Result<Report> {
    let urls = load_urls(url_list)?;
    let existing = scan_existing(docs_dir)?;

    let report = Report::build(normalizer, &urls, &existing);
    tracing::info!(
        url_list = %url_list.display(),
        docs_dir = %docs_dir.display(),
        total = report.total_urls,
        present = report.present,
        missing = report.missing.len(),
        collisions = report.collisions.len(),
        "detection finished"
    );
    Ok(report)
}
