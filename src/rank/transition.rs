// src/rank/transition.rs
//! The transition model: the probability distribution over "next page"
//! for a random surfer sitting on a given page.

use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use crate::rank::RankDistribution;

/// Returns the next-page distribution from `page` under `damping`.
///
/// Every page receives the teleportation term `(1 - damping) / N`. Pages
/// linked from `page` additionally share the link term `damping` equally.
/// A dangling page is treated as linking to every page in the corpus
/// (itself included), so its link term is uniform as well.
///
/// # Errors
/// Returns `UnknownPage` if `page` is not in the corpus and
/// `InvalidConfig` if `damping` is outside `[0, 1]`.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<RankDistribution> {
    if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
        return Err(LinkRankError::InvalidConfig(format!(
            "damping factor must be in [0, 1], got {damping}"
        )));
    }
    let links = corpus
        .links(page)
        .ok_or_else(|| LinkRankError::UnknownPage(page.to_string()))?;

    let n = corpus.len() as f64;
    let teleport = (1.0 - damping) / n;

    let mut probabilities: RankDistribution = corpus
        .pages()
        .map(|p| (p.to_string(), teleport))
        .collect();

    if links.is_empty() {
        // Dangling page: the link term is spread over the whole corpus.
        for prob in probabilities.values_mut() {
            *prob += damping / n;
        }
    } else {
        let share = damping / links.len() as f64;
        for target in links {
            if let Some(prob) = probabilities.get_mut(target) {
                *prob += share;
            }
        }
    }

    Ok(probabilities)
}
