// tests/unit_transition.rs
//! Tests for the transition model, including the dangling-page rule.

use linkrank_core::corpus::Corpus;
use linkrank_core::error::LinkRankError;
use linkrank_core::rank::transition_model;
use std::collections::{HashMap, HashSet};

fn corpus(pairs: &[(&str, &[&str])]) -> Corpus {
    let links: HashMap<String, HashSet<String>> = pairs
        .iter()
        .map(|(page, targets)| {
            (
                (*page).to_string(),
                targets.iter().map(|t| (*t).to_string()).collect(),
            )
        })
        .collect();
    Corpus::new(links).expect("valid corpus")
}

#[test]
fn test_distribution_covers_corpus_and_sums_to_one() {
    let c = corpus(&[
        ("1.html", &["2.html", "3.html"]),
        ("2.html", &["3.html"]),
        ("3.html", &[]),
    ]);
    for page in ["1.html", "2.html", "3.html"] {
        let probs = transition_model(&c, page, 0.85).expect("transition");
        assert_eq!(probs.len(), 3, "distribution covers every corpus page");
        let total: f64 = probs.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "sum was {total}");
        assert!(probs.values().all(|&p| p >= 0.0));
    }
}

#[test]
fn test_link_and_teleport_terms() {
    let c = corpus(&[
        ("1.html", &["2.html", "3.html"]),
        ("2.html", &["1.html"]),
        ("3.html", &[]),
    ]);
    let probs = transition_model(&c, "1.html", 0.85).expect("transition");
    // Teleport term only for the unlinked page, teleport + half the link
    // mass for each linked page.
    assert!((probs["1.html"] - 0.05).abs() < 1e-9);
    assert!((probs["2.html"] - 0.475).abs() < 1e-9);
    assert!((probs["3.html"] - 0.475).abs() < 1e-9);
}

#[test]
fn test_dangling_page_is_uniform() {
    let c = corpus(&[
        ("1.html", &["2.html"]),
        ("2.html", &[]),
        ("3.html", &["1.html"]),
    ]);
    let probs = transition_model(&c, "2.html", 0.85).expect("transition");
    for page in ["1.html", "2.html", "3.html"] {
        assert!(
            (probs[page] - 1.0 / 3.0).abs() < 1e-9,
            "dangling page should spread uniformly, got {} for {page}",
            probs[page]
        );
    }
}

#[test]
fn test_single_page_corpus_is_certain() {
    let c = corpus(&[("only.html", &[])]);
    let probs = transition_model(&c, "only.html", 0.85).expect("transition");
    assert!((probs["only.html"] - 1.0).abs() < 1e-9);
}

#[test]
fn test_damping_extremes_are_valid() {
    let c = corpus(&[("1.html", &["2.html"]), ("2.html", &[])]);
    // d = 0: pure teleportation, uniform regardless of links.
    let probs = transition_model(&c, "1.html", 0.0).expect("transition");
    assert!((probs["1.html"] - 0.5).abs() < 1e-9);
    // d = 1: pure link following.
    let probs = transition_model(&c, "1.html", 1.0).expect("transition");
    assert!((probs["2.html"] - 1.0).abs() < 1e-9);
    assert!((probs["1.html"]).abs() < 1e-9);
}

#[test]
fn test_unknown_page_rejected() {
    let c = corpus(&[("1.html", &[])]);
    let result = transition_model(&c, "ghost.html", 0.85);
    assert!(matches!(result, Err(LinkRankError::UnknownPage(_))));
}

#[test]
fn test_out_of_range_damping_rejected() {
    let c = corpus(&[("1.html", &[])]);
    for damping in [-0.5, 1.5, f64::NAN] {
        let result = transition_model(&c, "1.html", damping);
        assert!(
            matches!(result, Err(LinkRankError::InvalidConfig(_))),
            "damping {damping} should be rejected"
        );
    }
}
