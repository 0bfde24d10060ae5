// tests/unit_pagerank.rs
//! `PageRank` scoring.

use wordgraph_core::graph::{PageRankSettings, WordGraph};

const EPS: f64 = 1e-9;

fn corpus() -> WordGraph {
    WordGraph::from_text(
        "To explore strange new worlds,\nTo seek out new life and new civilizations and ...",
    )
    .unwrap()
}

#[test]
fn test_scores_sum_to_one() {
    let graph = corpus();
    let scores = graph.page_ranks(&PageRankSettings::default());
    assert_eq!(scores.scores.len(), graph.node_count());
    assert!((scores.total() - 1.0).abs() < EPS, "total = {}", scores.total());
}

#[test]
fn test_sum_holds_at_every_iteration_cap() {
    let graph = corpus();
    for cap in 1..=8 {
        let settings = PageRankSettings {
            max_iterations: cap,
            tolerance: 0.0,
            ..PageRankSettings::default()
        };
        let scores = graph.page_ranks(&settings);
        assert_eq!(scores.iterations, cap);
        assert!((scores.total() - 1.0).abs() < EPS);
    }
}

#[test]
fn test_single_iteration_values() {
    // a -> b, b dangling: after one update a = 0.2875, b = 0.7125.
    let graph = WordGraph::from_text("a b").unwrap();
    let settings = PageRankSettings {
        max_iterations: 1,
        ..PageRankSettings::default()
    };
    let scores = graph.page_ranks(&settings);
    assert!(!scores.converged);
    assert!((scores.get(&graph, "a").unwrap() - 0.2875).abs() < EPS);
    assert!((scores.get(&graph, "b").unwrap() - 0.7125).abs() < EPS);
}

#[test]
fn test_early_convergence_returns_vector_before_last_update() {
    let graph = WordGraph::from_text("a b").unwrap();
    let settings = PageRankSettings {
        tolerance: 10.0,
        ..PageRankSettings::default()
    };
    let scores = graph.page_ranks(&settings);
    assert!(scores.converged);
    assert_eq!(scores.iterations, 1);
    assert!((scores.scores[0] - 0.5).abs() < EPS);
    assert!((scores.scores[1] - 0.5).abs() < EPS);
}

#[test]
fn test_sink_outranks_its_only_source() {
    let graph = WordGraph::from_text("a b").unwrap();
    let a = graph.page_rank("a").unwrap();
    let b = graph.page_rank("b").unwrap();
    assert!(b > a);
    assert!((a + b - 1.0).abs() < EPS);
}

#[test]
fn test_symmetric_cycle_is_uniform() {
    let graph = WordGraph::from_text("a b a").unwrap();
    let scores = graph.page_ranks(&PageRankSettings::default());
    assert!(scores.converged);
    assert!((scores.scores[0] - 0.5).abs() < EPS);
    assert!((scores.scores[1] - 0.5).abs() < EPS);

    let ranked = scores.ranked(&graph);
    let order: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(order, vec!["a", "b"], "ties break alphabetically");
}

#[test]
fn test_unlinked_vertex_keeps_constant_term() {
    // Nothing points at "start"; a <-> b is strongly connected.
    let graph = WordGraph::from_text("start a b a").unwrap();
    let n = graph.node_count() as f64;
    let start = graph.page_rank("start").unwrap();
    assert!(start >= (1.0 - 0.85) / n - EPS, "start = {start}");
    assert!(graph.page_rank("a").unwrap() > start);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let graph = corpus();
    assert_eq!(graph.page_rank("NEW"), graph.page_rank("new"));
}

#[test]
fn test_missing_word_has_no_rank() {
    assert!(corpus().page_rank("unknown").is_none());
    assert!(WordGraph::empty().page_rank("a").is_none());
}

#[test]
fn test_ranked_is_descending() {
    let graph = corpus();
    let ranked = graph.page_ranks(&PageRankSettings::default()).ranked(&graph);
    assert_eq!(ranked.len(), graph.node_count());
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(ranked[0].word, "new", "the most linked-to word leads");
}

#[test]
fn test_settings_validation() {
    assert!(PageRankSettings::default().validate().is_ok());
    let bad_damping = PageRankSettings {
        damping: -0.1,
        ..PageRankSettings::default()
    };
    assert!(bad_damping.validate().is_err());
    let no_iterations = PageRankSettings {
        max_iterations: 0,
        ..PageRankSettings::default()
    };
    assert!(no_iterations.validate().is_err());
}
