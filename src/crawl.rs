// src/crawl.rs
//! Corpus ingestion: reads a directory of HTML pages and extracts the
//! link graph between them.
//!
//! Self-links and links to pages outside the directory are dropped here,
//! so the resulting map always satisfies the `Corpus` invariants.

use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Crawls `dir` (non-recursively) and builds the corpus graph.
///
/// Only files with an `.html` extension are considered pages. Link targets
/// are the raw `href` values, so intra-corpus links are expected to be
/// plain filenames.
///
/// # Errors
/// Returns an I/O error if the directory cannot be walked or a page cannot
/// be read, and `EmptyCorpus` if no HTML files are found.
pub fn crawl(dir: &Path) -> Result<Corpus> {
    let mut pages: HashMap<String, HashSet<String>> = HashMap::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = html_file_name(entry.path()) else {
            continue;
        };
        let contents = fs::read_to_string(entry.path()).map_err(|source| LinkRankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        pages.insert(name.clone(), extract_links(&contents, &name));
    }

    // Drop links that point outside the corpus.
    let known: HashSet<String> = pages.keys().cloned().collect();
    for targets in pages.values_mut() {
        targets.retain(|t| known.contains(t));
    }

    Corpus::new(pages)
}

fn html_file_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    name.ends_with(".html").then(|| name.to_string())
}

/// Extracts `href` targets from `contents`, excluding `page` itself.
#[must_use]
pub fn extract_links(contents: &str, page: &str) -> HashSet<String> {
    HREF_RE
        .captures_iter(contents)
        .map(|c| c[1].to_string())
        .filter(|target| target != page)
        .collect()
}
