// tests/unit_corpus.rs
//! Tests for corpus construction and its graph invariants.

use linkrank_core::corpus::Corpus;
use linkrank_core::error::LinkRankError;
use std::collections::{HashMap, HashSet};

fn links(pairs: &[(&str, &[&str])]) -> HashMap<String, HashSet<String>> {
    pairs
        .iter()
        .map(|(page, targets)| {
            (
                (*page).to_string(),
                targets.iter().map(|t| (*t).to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_empty_corpus_rejected() {
    let result = Corpus::new(HashMap::new());
    assert!(matches!(result, Err(LinkRankError::EmptyCorpus)));
}

#[test]
fn test_self_link_rejected() {
    let result = Corpus::new(links(&[("1.html", &["1.html"])]));
    assert!(matches!(result, Err(LinkRankError::SelfLink(_))));
}

#[test]
fn test_foreign_link_rejected() {
    let result = Corpus::new(links(&[("1.html", &["missing.html"])]));
    assert!(
        matches!(result, Err(LinkRankError::ForeignLink { ref target, .. }) if target == "missing.html")
    );
}

#[test]
fn test_valid_corpus_queries() {
    let corpus = Corpus::new(links(&[
        ("1.html", &["2.html", "3.html"]),
        ("2.html", &["1.html"]),
        ("3.html", &[]),
    ]))
    .expect("valid corpus");

    assert_eq!(corpus.len(), 3);
    assert!(corpus.contains("1.html"));
    assert!(!corpus.contains("4.html"));
    assert_eq!(corpus.out_degree("1.html"), 2);
    assert_eq!(corpus.out_degree("3.html"), 0);
    assert!(corpus.is_dangling("3.html"));
    assert!(!corpus.is_dangling("2.html"));
}

#[test]
fn test_sorted_pages_alphabetical() {
    let corpus = Corpus::new(links(&[
        ("c.html", &[]),
        ("a.html", &[]),
        ("b.html", &[]),
    ]))
    .expect("valid corpus");
    assert_eq!(corpus.sorted_pages(), vec!["a.html", "b.html", "c.html"]);
}
