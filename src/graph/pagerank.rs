// src/graph/pagerank.rs
//! `PageRank` over weighted word edges.
//!
//! ```text
//! PR(v) = (1-d)/N + d * Σ PR(u) * w(u,v) / W(u)  +  d * Σ PR(z) / N
//!                      u→v                          z dangling
//! ```
//!
//! `W(u)` is the total outgoing weight of `u`. Dangling vertices (`W = 0`)
//! spread their rank uniformly over every vertex.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::store::WordGraph;
use crate::error::{GraphError, Result};
use crate::text;

/// Iteration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankSettings {
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// L1 distance between consecutive vectors below which iteration stops.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for PageRankSettings {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_tolerance() -> f64 { 0.01 }
const fn default_max_iterations() -> usize { 100 }

impl PageRankSettings {
    /// # Errors
    /// Returns [`GraphError::Config`] for out-of-range parameters.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(GraphError::Config(format!(
                "pagerank.damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(GraphError::Config(format!(
                "pagerank.tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(GraphError::Config(
                "pagerank.max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A word with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub score: f64,
}

/// Scores for every vertex, indexed by vertex id.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankScores {
    pub scores: Vec<f64>,
    /// Update passes performed.
    pub iterations: usize,
    pub converged: bool,
}

impl PageRankScores {
    /// Score of `word`, case-insensitive. `None` if the word is absent.
    #[must_use]
    pub fn get(&self, graph: &WordGraph, word: &str) -> Option<f64> {
        let id = graph.id(&text::fold(word))?;
        self.scores.get(id).copied()
    }

    /// Words by descending score, ties broken alphabetically.
    #[must_use]
    pub fn ranked(&self, graph: &WordGraph) -> Vec<RankedWord> {
        let mut ranked: Vec<RankedWord> = self
            .scores
            .iter()
            .enumerate()
            .map(|(id, &score)| RankedWord {
                word: graph.word(id).to_string(),
                score,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        ranked
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Computes scores for every vertex.
///
/// On early convergence the returned vector is the one current when the
/// loop stopped, i.e. the vector *before* the final update.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &WordGraph, settings: &PageRankSettings) -> PageRankScores {
    let n = graph.node_count();
    if n == 0 {
        return PageRankScores {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }

    let nf = n as f64;
    let damping = settings.damping;
    let out_weights: Vec<f64> = (0..n).map(|u| graph.out_weight(u) as f64).collect();
    let dangling: Vec<usize> = (0..n).filter(|&u| out_weights[u] == 0.0).collect();
    let base = (1.0 - damping) / nf;

    let mut current = vec![1.0 / nf; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..settings.max_iterations {
        iterations += 1;
        next.fill(base);

        for (u, &total) in out_weights.iter().enumerate() {
            if total == 0.0 {
                continue;
            }
            let factor = damping * current[u] / total;
            for edge in graph.successors(u) {
                next[edge.target] += factor * edge.weight as f64;
            }
        }

        if !dangling.is_empty() {
            let dangling_sum: f64 = dangling.iter().map(|&u| current[u]).sum();
            let share = damping * dangling_sum / nf;
            for v in &mut next {
                *v += share;
            }
        }

        let diff: f64 = current
            .iter()
            .zip(&next)
            .map(|(a, b)| (a - b).abs())
            .sum();
        debug!("pagerank iteration {iterations}: l1 delta {diff:.6}");

        if diff < settings.tolerance {
            converged = true;
            break;
        }
        std::mem::swap(&mut current, &mut next);
    }

    info!("pagerank over {n} words: {iterations} iterations, converged: {converged}");
    PageRankScores {
        scores: current,
        iterations,
        converged,
    }
}

/// Score of a single word. `None` if the word is absent (or the graph empty).
#[must_use]
pub fn rank_of(graph: &WordGraph, word: &str, settings: &PageRankSettings) -> Option<f64> {
    if !graph.contains(word) {
        return None;
    }
    compute(graph, settings).get(graph, word)
}
