//! `docgap check` – report URLs with no matching Markdown file.

use crate::cli::OutputFormat;
use anyhow::Result;
use docgap_core::config::DocgapConfig;
use docgap_core::detect_missing;
use std::io::Write;
use std::path::PathBuf;

pub const EXIT_OK: u8 = 0;

/// Exit status for a completed run that found missing pages (with `--fail-on-missing`).
pub const EXIT_MISSING: u8 = 2;

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub url_list: PathBuf,
    pub docs_dir: PathBuf,
    pub format: OutputFormat,
    pub fail_on_missing: bool,
}

/// Runs one detection and writes the full report to `out`.
pub fn run_check<W: Write>(cfg: &DocgapConfig, opts: &CheckOptions, out: &mut W) -> Result<u8> {
    let report = detect_missing(&cfg.normalizer(), &opts.url_list, &opts.docs_dir)?;

    match opts.format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    out.flush()?;

    if opts.fail_on_missing && !report.is_complete() {
        Ok(EXIT_MISSING)
    } else {
        Ok(EXIT_OK)
    }
}
