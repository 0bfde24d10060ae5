// tests/unit_walk.rs
//! Weighted random walks.

use std::collections::HashSet;

use wordgraph_core::graph::{WalkEnd, WordGraph};
use wordgraph_core::picker::{RandomPicker, ScriptedPicker};

fn walk(text: &str, script: Vec<usize>) -> (Vec<String>, Option<WalkEnd>) {
    let graph = WordGraph::from_text(text).unwrap();
    let mut picker = ScriptedPicker::new(script);
    let mut walker = graph.walker(&mut picker);
    let words: Vec<String> = walker.by_ref().map(str::to_string).collect();
    (words, walker.end())
}

#[test]
fn test_empty_graph_yields_nothing() {
    let graph = WordGraph::empty();
    let mut walker = graph.walker(ScriptedPicker::first());
    assert_eq!(walker.next(), None);
    assert_eq!(walker.end(), Some(WalkEnd::EmptyGraph));
    assert!(graph.random_walk(RandomPicker::thread_local()).is_empty());
}

#[test]
fn test_self_loop_is_taken_once() {
    let graph = WordGraph::from_text("a a").unwrap();
    for _ in 0..10 {
        assert_eq!(graph.random_walk(RandomPicker::thread_local()), vec!["a", "a"]);
    }
}

#[test]
fn test_dead_end_stops_the_walk() {
    let (words, end) = walk("a b", vec![0]);
    assert_eq!(words, vec!["a", "b"]);
    assert_eq!(end, Some(WalkEnd::DeadEnd));
}

#[test]
fn test_starting_on_a_sink() {
    let (words, end) = walk("a b", vec![1]);
    assert_eq!(words, vec!["b"]);
    assert_eq!(end, Some(WalkEnd::DeadEnd));
}

#[test]
fn test_scripted_path_through_branches() {
    // a -> {b, c}, b -> a; draws: start a, a->b, b->a, a->c.
    let (words, end) = walk("a b a c", vec![0, 0, 0, 1]);
    assert_eq!(words, vec!["a", "b", "a", "c"]);
    assert_eq!(end, Some(WalkEnd::DeadEnd));
}

#[test]
fn test_repeated_edge_is_not_taken() {
    // a -> b (weight 2), b -> a: the second a -> b ends the walk at a.
    let (words, end) = walk("a b a b", vec![0]);
    assert_eq!(words, vec!["a", "b", "a"]);
    assert_eq!(end, Some(WalkEnd::RepeatedEdge));
}

#[test]
fn test_weight_expands_candidates() {
    // a -> b weighs 2, a -> c weighs 1: draws 0 and 1 land on b, 2 on c.
    let text = "a b a b a c";
    assert_eq!(walk(text, vec![0, 1]).0[..2], ["a", "b"]);
    assert_eq!(walk(text, vec![0, 2]).0, vec!["a", "c"]);
}

#[test]
fn test_walker_is_lazy() {
    let graph = WordGraph::from_text("a b c d e f").unwrap();
    let mut picker = ScriptedPicker::first();
    let first_two: Vec<&str> = graph.walker(&mut picker).take(2).collect();
    assert_eq!(first_two, vec!["a", "b"]);
    assert_eq!(picker.calls(), 2, "one draw for the start, one per step");
}

#[test]
fn test_walks_follow_edges_without_repeats() {
    let graph = WordGraph::from_text(
        "To explore strange new worlds,\nTo seek out new life and new civilizations and ...",
    )
    .unwrap();
    let mut picker = RandomPicker::seeded(2024);
    for _ in 0..200 {
        let words = graph.random_walk(&mut picker);
        assert!(!words.is_empty());
        let mut seen = HashSet::new();
        for pair in words.windows(2) {
            assert!(graph.weight(&pair[0], &pair[1]).is_some());
            assert!(seen.insert((pair[0].clone(), pair[1].clone())), "edge repeated");
        }
    }
}

#[test]
fn test_steps_are_proportional_to_weight() {
    // From a: b with weight 3, c with weight 1.
    let graph = WordGraph::from_text("a b a b a b a c").unwrap();
    let mut picker = RandomPicker::seeded(7);
    let (mut to_b, mut total) = (0u32, 0u32);
    for _ in 0..6000 {
        let words = graph.random_walk(&mut picker);
        if words.len() >= 2 && words[0] == "a" {
            total += 1;
            if words[1] == "b" {
                to_b += 1;
            }
        }
    }
    let share = f64::from(to_b) / f64::from(total);
    assert!((share - 0.75).abs() < 0.05, "share of a->b = {share}");
}
