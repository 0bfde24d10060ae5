// src/graph/generate.rs
//! Text augmentation: inserts a random bridge word between adjacent words.

use log::debug;

use super::bridge;
use super::store::WordGraph;
use crate::picker::IndexPicker;
use crate::text;

/// Rewrites `input`, inserting one bridge word (chosen by `picker`) between
/// every adjacent pair that has any.
///
/// Original casing of the input words is kept; inserted words are lowercase.
/// Inputs with fewer than two words are returned unchanged.
pub fn generate<P: IndexPicker + ?Sized>(
    graph: &WordGraph,
    input: &str,
    picker: &mut P,
) -> String {
    let tokens = text::tokenize_preserving_case(input);
    if tokens.len() < 2 {
        return input.to_string();
    }

    let mut out: Vec<&str> = Vec::with_capacity(tokens.len() * 2);
    let mut inserted = 0usize;

    for pair in tokens.windows(2) {
        out.push(&pair[0]);
        let candidates = pair_bridges(graph, &pair[0], &pair[1]);
        if !candidates.is_empty() {
            let chosen = candidates[picker.pick(candidates.len())];
            out.push(graph.word(chosen));
            inserted += 1;
        }
    }
    if let Some(last) = tokens.last() {
        out.push(last);
    }

    debug!("inserted {inserted} bridge words into {} input words", tokens.len());
    out.join(" ")
}

/// Bridge ids for a pair of raw words; absent words just disqualify the pair.
fn pair_bridges(graph: &WordGraph, left: &str, right: &str) -> Vec<usize> {
    match graph.resolve([left, right]) {
        Ok([src, dst]) => bridge::between(graph, src, dst),
        Err(_) => Vec::new(),
    }
}
