//! Run summary and its text/JSON renderings.

use crate::missing::{find_collisions, find_missing_with, Collision, MissingEntry};
use crate::normalize::Normalizer;
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

/// Outcome of comparing a URL list against a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// URLs read from the list, duplicates included.
    pub total_urls: usize,
    /// `.md` files found in the directory.
    pub existing_files: usize,
    /// URLs whose candidate file exists.
    pub present: usize,
    pub missing: Vec<MissingEntry>,
    pub collisions: Vec<Collision>,
}

impl Report {
    pub fn build(normalizer: &Normalizer, urls: &[String], existing: &HashSet<String>) -> Self {
        let missing = find_missing_with(normalizer, urls, existing);
        let collisions = find_collisions(normalizer, urls);
        Self {
            total_urls: urls.len(),
            existing_files: existing.len(),
            present: urls.len() - missing.len(),
            missing,
            collisions,
        }
    }

    /// True when no URL is missing its file.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Human-readable report; missing entries are numbered from 1.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total URLs: {}", self.total_urls)?;
        writeln!(out, "Existing files: {}", self.existing_files)?;
        writeln!(out, "Already converted: {}", self.present)?;
        writeln!(out, "Missing URLs: {}", self.missing.len())?;

        if self.missing.is_empty() {
            writeln!(out, "\nNothing missing: every URL has a matching file.")?;
        } else {
            writeln!(out, "\nMissing URLs and their expected filenames:")?;
            for (i, entry) in self.missing.iter().enumerate() {
                writeln!(out, "{:2}: {} -> {}", i + 1, entry.url, entry.filename)?;
            }
        }

        if !self.collisions.is_empty() {
            writeln!(out, "\nFilename collisions ({}):", self.collisions.len())?;
            for c in &self.collisions {
                writeln!(out, "  {}", c.filename)?;
                for url in &c.urls {
                    writeln!(out, "    - {url}")?;
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
