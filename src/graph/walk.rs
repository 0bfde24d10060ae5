// src/graph/walk.rs
//! Weighted random walk that stops on a dead end or a repeated edge.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use super::store::{Edge, WordGraph};
use crate::picker::IndexPicker;

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkEnd {
    EmptyGraph,
    /// The current word has no outgoing edges.
    DeadEnd,
    /// The drawn edge had already been traversed; it is not taken.
    RepeatedEdge,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Start,
    At(usize),
    Done(WalkEnd),
}

/// Lazily produces the words of one walk.
///
/// Each call to `next` performs at most one step, so a consumer that stops
/// early also stops the computation.
pub struct Walker<'g, P> {
    graph: &'g WordGraph,
    picker: P,
    visited: HashSet<(usize, usize)>,
    state: State,
}

impl<'g, P: IndexPicker> Walker<'g, P> {
    #[must_use]
    pub fn new(graph: &'g WordGraph, picker: P) -> Self {
        Self {
            graph,
            picker,
            visited: HashSet::new(),
            state: State::Start,
        }
    }

    /// Termination reason, once the walk has ended.
    #[must_use]
    pub fn end(&self) -> Option<WalkEnd> {
        match self.state {
            State::Done(end) => Some(end),
            _ => None,
        }
    }

    fn finish(&mut self, end: WalkEnd) -> Option<&'g str> {
        debug!("random walk ended: {end:?} after {} edges", self.visited.len());
        self.state = State::Done(end);
        None
    }

    fn start(&mut self) -> Option<&'g str> {
        let n = self.graph.node_count();
        if n == 0 {
            return self.finish(WalkEnd::EmptyGraph);
        }
        let first = self.picker.pick(n);
        self.state = State::At(first);
        Some(self.graph.word(first))
    }

    fn step(&mut self, current: usize) -> Option<&'g str> {
        let out = self.graph.successors(current);
        if out.is_empty() {
            return self.finish(WalkEnd::DeadEnd);
        }

        let total: usize = out.iter().map(|e| e.weight).sum();
        let chosen = weighted_target(out, self.picker.pick(total));

        if !self.visited.insert((current, chosen)) {
            return self.finish(WalkEnd::RepeatedEdge);
        }
        self.state = State::At(chosen);
        Some(self.graph.word(chosen))
    }
}

impl<'g, P: IndexPicker> Iterator for Walker<'g, P> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Start => self.start(),
            State::At(current) => self.step(current),
            State::Done(_) => None,
        }
    }
}

/// Maps a draw in `0..total_weight` onto the edge list as if every edge were
/// repeated once per unit of weight, in adjacency order.
fn weighted_target(out: &[Edge], draw: usize) -> usize {
    let mut remaining = draw;
    for edge in out {
        if remaining < edge.weight {
            return edge.target;
        }
        remaining -= edge.weight;
    }
    out.last().map_or(0, |e| e.target)
}

/// Runs a complete walk and collects its words.
pub fn random_walk<P: IndexPicker>(graph: &WordGraph, picker: P) -> Vec<String> {
    Walker::new(graph, picker).map(str::to_string).collect()
}
