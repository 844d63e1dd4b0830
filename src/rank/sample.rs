// src/rank/sample.rs
//! Rank estimation by random walk: visit frequency over a long walk
//! driven by the transition model.

use crate::config::RankConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::rank::{transition_model, RankDistribution};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Estimates PageRank by sampling `config.samples` steps of a random walk.
///
/// The walk starts on a uniformly random page; each step draws the next
/// page from the transition model by weighted selection. The returned
/// distribution covers the whole corpus, with explicit zeros for pages the
/// walk never reached, and sums to exactly `visits / samples = 1.0`.
///
/// All randomness comes from `rng`, so a seeded generator gives a
/// reproducible walk.
///
/// # Errors
/// Returns `InvalidConfig` for a bad damping factor or sample count. An
/// empty corpus cannot occur here; `Corpus` rejects it at construction.
pub fn sample_pagerank<R: Rng + ?Sized>(
    corpus: &Corpus,
    config: &RankConfig,
    rng: &mut R,
) -> Result<RankDistribution> {
    config.validate()?;

    let pages = corpus.sorted_pages();
    let samplers = build_samplers(corpus, &pages, config.damping)?;

    let mut visits = vec![0usize; pages.len()];
    let mut current = rng.gen_range(0..pages.len());
    for _ in 0..config.samples {
        current = samplers[current].sample(rng);
        visits[current] += 1;
    }

    let total = config.samples as f64;
    Ok(pages
        .iter()
        .zip(&visits)
        .map(|(page, &count)| ((*page).to_string(), count as f64 / total))
        .collect())
}

/// One weighted sampler per page, indexed like `pages`. The transition
/// distribution of a page never changes, so each cumulative table is built
/// once up front instead of per step.
fn build_samplers(
    corpus: &Corpus,
    pages: &[&str],
    damping: f64,
) -> Result<Vec<WeightedIndex<f64>>> {
    let mut samplers = Vec::with_capacity(pages.len());
    for page in pages {
        let probabilities = transition_model(corpus, page, damping)?;
        let weights: Vec<f64> = pages
            .iter()
            .map(|p| probabilities.get(*p).copied().unwrap_or(0.0))
            .collect();
        samplers.push(WeightedIndex::new(&weights)?);
    }
    Ok(samplers)
}
