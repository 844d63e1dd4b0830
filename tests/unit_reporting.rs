// tests/unit_reporting.rs
//! Tests for result formatting: ordering, precision, cap warning.

use linkrank_core::rank::{IterationRun, RankDistribution};
use linkrank_core::reporting::{render_iteration, render_sampling};

fn ranks(pairs: &[(&str, f64)]) -> RankDistribution {
    pairs.iter().map(|(p, r)| ((*p).to_string(), *r)).collect()
}

#[test]
fn test_sampling_rows_are_sorted_and_rounded() {
    colored::control::set_override(false);
    let out = render_sampling(&ranks(&[("b.html", 0.25), ("a.html", 0.75)]), 10_000);

    assert!(out.contains("PageRank Results from Sampling (n = 10000)"));
    let a = out.find("a.html: 0.7500").expect("a row");
    let b = out.find("b.html: 0.2500").expect("b row");
    assert!(a < b, "pages must be listed alphabetically");
}

#[test]
fn test_iteration_report_flags_capped_run() {
    colored::control::set_override(false);
    let run = IterationRun {
        ranks: ranks(&[("a.html", 0.5), ("b.html", 0.5)]),
        iterations: 100,
        converged: false,
    };
    let out = render_iteration(&run);
    assert!(out.contains("PageRank Results from Iteration"));
    assert!(out.contains("did not converge within 100 iterations"));
}

#[test]
fn test_iteration_report_quiet_when_converged() {
    colored::control::set_override(false);
    let run = IterationRun {
        ranks: ranks(&[("a.html", 1.0)]),
        iterations: 3,
        converged: true,
    };
    let out = render_iteration(&run);
    assert!(!out.contains("did not converge"));
    assert!(out.contains("a.html: 1.0000"));
}
