// src/rank/mod.rs
//! PageRank computation: the transition model, the random-walk sampler,
//! and the iterative fixed-point solver.

pub mod iterate;
pub mod sample;
pub mod transition;

use std::collections::HashMap;

pub use iterate::{iterate_pagerank, iterate_pagerank_from, iterate_pagerank_run, IterationRun};
pub use sample::sample_pagerank;
pub use transition::transition_model;

/// Page -> rank. Non-negative values summing to 1.0 over the corpus.
pub type RankDistribution = HashMap<String, f64>;
