// src/rank/iterate.rs
//! Rank computation as a fixed point of the PageRank recurrence.
//!
//! The solver pulls rank along a reverse-adjacency view: for each page,
//! the set of pages that link to it. Dangling pages are folded into that
//! view up front as origins of every page, so the update loop never has
//! to special-case them. Updates are Jacobi-style: each pass reads only
//! the previous pass's snapshot.

use crate::config::RankConfig;
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use crate::rank::RankDistribution;

/// Outcome of a solver run.
#[derive(Debug, Clone)]
pub struct IterationRun {
    pub ranks: RankDistribution,
    /// Passes actually performed.
    pub iterations: usize,
    /// False when the iteration cap stopped the run before every page
    /// settled within tolerance. The ranks are still the best estimate.
    pub converged: bool,
}

/// Computes PageRank by fixed-point iteration, returning just the ranks.
///
/// # Errors
/// Returns `InvalidConfig` if the configuration fails validation.
pub fn iterate_pagerank(corpus: &Corpus, config: &RankConfig) -> Result<RankDistribution> {
    Ok(iterate_pagerank_run(corpus, config)?.ranks)
}

/// Computes PageRank by fixed-point iteration from the uniform start.
///
/// Every page starts at `1 / N`. The run stops when every page's rank
/// changed by at most `config.tolerance` since the previous pass, or when
/// `config.max_iterations` passes have been performed, whichever comes
/// first. The cap is a hard ceiling; hitting it is reported through
/// [`IterationRun::converged`], not as an error.
///
/// # Errors
/// Returns `InvalidConfig` if the configuration fails validation.
pub fn iterate_pagerank_run(corpus: &Corpus, config: &RankConfig) -> Result<IterationRun> {
    config.validate()?;
    let topology = Topology::build(corpus);
    let initial = vec![1.0 / topology.pages.len() as f64; topology.pages.len()];
    Ok(solve(&topology, config, initial))
}

/// Like [`iterate_pagerank_run`], but starting from `initial` instead of
/// the uniform distribution. Re-running the solver on its own converged
/// output settles immediately.
///
/// # Errors
/// Returns `InvalidConfig` if the configuration fails validation, and
/// `UnknownPage` if `initial` is missing a corpus page.
pub fn iterate_pagerank_from(
    corpus: &Corpus,
    config: &RankConfig,
    initial: &RankDistribution,
) -> Result<IterationRun> {
    config.validate()?;
    let topology = Topology::build(corpus);
    let start = topology
        .pages
        .iter()
        .map(|page| {
            initial
                .get(*page)
                .copied()
                .ok_or_else(|| LinkRankError::UnknownPage((*page).to_string()))
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(solve(&topology, config, start))
}

/// Index-based view of the corpus, built once per solver invocation.
struct Topology<'a> {
    pages: Vec<&'a str>,
    /// origins[q] = pages with a one-hop link to q, dangling fan-out included.
    origins: Vec<Vec<usize>>,
    /// Outbound link count, with dangling pages counted as linking to all N.
    out_degree: Vec<usize>,
}

impl<'a> Topology<'a> {
    fn build(corpus: &'a Corpus) -> Self {
        let pages = corpus.sorted_pages();
        let n = pages.len();
        let index: std::collections::HashMap<&str, usize> =
            pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();

        let mut origins: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut out_degree = vec![0usize; n];
        for (p, page) in pages.iter().enumerate() {
            match corpus.links(page) {
                Some(links) if !links.is_empty() => {
                    out_degree[p] = links.len();
                    for target in links {
                        origins[index[target.as_str()]].push(p);
                    }
                }
                _ => {
                    // A dangling page links to everyone, itself included.
                    out_degree[p] = n;
                    for target in &mut origins {
                        target.push(p);
                    }
                }
            }
        }

        Self {
            pages,
            origins,
            out_degree,
        }
    }
}

fn solve(topology: &Topology<'_>, config: &RankConfig, initial: Vec<f64>) -> IterationRun {
    let n = topology.pages.len() as f64;
    let teleport = (1.0 - config.damping) / n;

    let mut ranks = initial;
    let mut next = vec![0.0; ranks.len()];
    let mut iterations = 0;
    let mut converged = false;

    while !converged && iterations < config.max_iterations {
        converged = true;
        for (q, next_rank) in next.iter_mut().enumerate() {
            let pulled: f64 = topology.origins[q]
                .iter()
                .map(|&p| ranks[p] / topology.out_degree[p] as f64)
                .sum();
            *next_rank = teleport + config.damping * pulled;
            if (*next_rank - ranks[q]).abs() > config.tolerance {
                converged = false;
            }
        }
        std::mem::swap(&mut ranks, &mut next);
        iterations += 1;
    }

    let ranks = topology
        .pages
        .iter()
        .zip(&ranks)
        .map(|(page, &rank)| ((*page).to_string(), rank))
        .collect();
    IterationRun {
        ranks,
        iterations,
        converged,
    }
}
