//! `docgap normalize <url>...` – print candidate filenames.

use anyhow::Result;
use docgap_core::config::DocgapConfig;
use std::io::Write;

pub fn run_normalize<W: Write>(cfg: &DocgapConfig, urls: &[String], out: &mut W) -> Result<()> {
    let normalizer = cfg.normalizer();
    for url in urls {
        writeln!(out, "{} -> {}", url, normalizer.candidate_filename(url))?;
    }
    Ok(())
}
