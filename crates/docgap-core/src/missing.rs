//! Set difference between listed URLs and files on disk.

use crate::normalize::Normalizer;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A URL whose candidate filename is not present in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    pub url: String,
    pub filename: String,
}

/// Two or more distinct URLs that normalize to the same filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub filename: String,
    /// Distinct URLs in the order they first appear in the list.
    pub urls: Vec<String>,
}

/// Returns `(url, candidate)` for every URL lacking a file, in input order.
pub fn find_missing(urls: &[String], existing: &HashSet<String>) -> Vec<MissingEntry> {
    find_missing_with(&Normalizer::default(), urls, existing)
}

/// Like [`find_missing`], with an explicit normalizer.
pub fn find_missing_with(
    normalizer: &Normalizer,
    urls: &[String],
    existing: &HashSet<String>,
) -> Vec<MissingEntry> {
    urls.iter()
        .filter_map(|url| {
            let filename = normalizer.candidate_filename(url);
            if existing.contains(&filename) {
                tracing::trace!(url = %url, filename = %filename, "present");
                None
            } else {
                tracing::debug!(url = %url, filename = %filename, "missing");
                Some(MissingEntry {
                    url: url.clone(),
                    filename,
                })
            }
        })
        .collect()
}

/// Groups distinct URLs by candidate filename and returns every group with
/// more than one member, ordered by first appearance of the filename.
pub fn find_collisions(normalizer: &Normalizer, urls: &[String]) -> Vec<Collision> {
    let mut groups: Vec<Collision> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for url in urls {
        let filename = normalizer.candidate_filename(url);
        match index.get(&filename) {
            Some(&i) => {
                let group = &mut groups[i];
                if !group.urls.contains(url) {
                    group.urls.push(url.clone());
                }
            }
            None => {
                index.insert(filename.clone(), groups.len());
                groups.push(Collision {
                    filename,
                    urls: vec![url.clone()],
                });
            }
        }
    }

    groups.retain(|g| g.urls.len() > 1);
    for g in &groups {
        tracing::warn!(filename = %g.filename, urls = ?g.urls, "filename collision");
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reports_only_absent_candidates() {
        let input = urls(&[
            "https://docs.apify.com/platform",
            "https://docs.apify.com/platform/actors/running/input-and-output",
        ]);
        let missing = find_missing(&input, &names(&["platform.md"]));
        assert_eq!(
            missing,
            vec![MissingEntry {
                url: "https://docs.apify.com/platform/actors/running/input-and-output".into(),
                filename: "actors-running-input-and-output.md".into(),
            }]
        );
    }

    #[test]
    fn preserves_input_order() {
        let input = urls(&[
            "https://docs.apify.com/platform/zeta",
            "https://docs.apify.com/platform/alpha",
            "https://docs.apify.com/platform/mid",
        ]);
        let missing = find_missing(&input, &HashSet::new());
        let got: Vec<_> = missing.iter().map(|m| m.filename.as_str()).collect();
        assert_eq!(got, vec!["zeta.md", "alpha.md", "mid.md"]);
    }

    #[test]
    fn empty_when_everything_present() {
        let input = urls(&[
            "https://docs.apify.com/platform",
            "https://docs.apify.com/platform/proxy",
        ]);
        assert!(find_missing(&input, &names(&["platform.md", "proxy.md", "extra.md"])).is_empty());
    }

    #[test]
    fn duplicate_urls_reported_each_time() {
        let input = urls(&[
            "https://docs.apify.com/platform/proxy",
            "https://docs.apify.com/platform/proxy",
        ]);
        assert_eq!(find_missing(&input, &HashSet::new()).len(), 2);
    }

    #[test]
    fn membership_is_case_sensitive() {
        let input = urls(&["https://docs.apify.com/platform/Proxy"]);
        assert_eq!(find_missing(&input, &names(&["proxy.md"])).len(), 1);
    }

    #[test]
    fn collisions_group_distinct_urls() {
        let input = urls(&[
            "https://docs.apify.com/platform/a/b",
            "https://docs.apify.com/platform/proxy",
            "https://docs.apify.com/platform/a-b",
            "https://docs.apify.com/platform/a/b",
            "https://docs.apify.com/platform/a?b",
        ]);
        let collisions = find_collisions(&Normalizer::default(), &input);
        assert_eq!(
            collisions,
            vec![Collision {
                filename: "a-b.md".into(),
                urls: urls(&[
                    "https://docs.apify.com/platform/a/b",
                    "https://docs.apify.com/platform/a-b",
                    "https://docs.apify.com/platform/a?b",
                ]),
            }]
        );
    }

    #[test]
    fn repeated_url_is_not_a_collision() {
        let input = urls(&[
            "https://docs.apify.com/platform/proxy",
            "https://docs.apify.com/platform/proxy",
        ]);
        assert!(find_collisions(&Normalizer::default(), &input).is_empty());
    }

    #[test]
    fn root_and_trailing_slash_collide() {
        let input = urls(&[
            "https://docs.apify.com/platform",
            "https://docs.apify.com/platform/",
        ]);
        let collisions = find_collisions(&Normalizer::default(), &input);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].filename, "platform.md");
    }
}
