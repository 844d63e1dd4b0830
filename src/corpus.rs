// src/corpus.rs
//! The immutable link graph: pages and their outbound links.
//!
//! A `Corpus` is built once by ingestion (or a test) and never mutated.
//! Construction enforces the graph invariants both rankers depend on:
//! the corpus is non-empty, no page links to itself, and every link
//! target is itself a page of the corpus. A page with no outbound links
//! is *dangling*; the rankers treat it as linking to every page.

use crate::error::{LinkRankError, Result};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Corpus {
    links: HashMap<String, HashSet<String>>,
}

impl Corpus {
    /// Builds a corpus from a page -> outbound links map, checking invariants.
    ///
    /// # Errors
    /// Returns `EmptyCorpus` for an empty map, `SelfLink` if a page links to
    /// itself, and `ForeignLink` if a link target is not a corpus page.
    pub fn new(links: HashMap<String, HashSet<String>>) -> Result<Self> {
        if links.is_empty() {
            return Err(LinkRankError::EmptyCorpus);
        }
        for (page, targets) in &links {
            for target in targets {
                if target == page {
                    return Err(LinkRankError::SelfLink(page.clone()));
                }
                if !links.contains_key(target) {
                    return Err(LinkRankError::ForeignLink {
                        page: page.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(Self { links })
    }

    /// Number of pages in the corpus. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false: an empty corpus is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Outbound links of `page`, or `None` if it is not a corpus page.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.links.get(page)
    }

    /// Number of outbound links; 0 means the page is dangling.
    #[must_use]
    pub fn out_degree(&self, page: &str) -> usize {
        self.links.get(page).map_or(0, HashSet::len)
    }

    #[must_use]
    pub fn is_dangling(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(HashSet::is_empty)
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Pages in alphabetical order. The rankers index distributions by this
    /// ordering so that seeded runs are reproducible.
    #[must_use]
    pub fn sorted_pages(&self) -> Vec<&str> {
        let mut pages: Vec<&str> = self.pages().collect();
        pages.sort_unstable();
        pages
    }
}
