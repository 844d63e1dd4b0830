// src/reporting.rs
//! Console output formatting for rank results.
//!
//! Pages are listed alphabetically with four decimal digits, matching the
//! corpus ordering used everywhere else.

use crate::rank::{IterationRun, RankDistribution};
use colored::Colorize;
use std::fmt::Write;

/// Renders the sampling results table.
#[must_use]
pub fn render_sampling(ranks: &RankDistribution, samples: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("PageRank Results from Sampling (n = {samples})").bold()
    );
    write_rows(&mut out, ranks);
    out
}

/// Renders the iteration results table, flagging a capped run.
#[must_use]
pub fn render_iteration(run: &IterationRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "PageRank Results from Iteration".bold());
    write_rows(&mut out, &run.ranks);
    if !run.converged {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "  (did not converge within {} iterations; showing best estimate)",
                run.iterations
            )
            .yellow()
        );
    }
    out
}

fn write_rows(out: &mut String, ranks: &RankDistribution) {
    let mut rows: Vec<(&str, f64)> = ranks.iter().map(|(p, r)| (p.as_str(), *r)).collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (page, rank) in rows {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
}
