// tests/integration_cli.rs
//! Integration test: one-shot commands of the `wordgraph` binary.
//!
//! Each test writes a corpus into a temp directory and runs the compiled
//! binary there with `--json`, so results can be checked structurally.

use std::process::{Command, Output};
use tempfile::TempDir;

const CORPUS: &str = "To explore strange new worlds,\nTo seek out new life and new civilizations and ...";

fn workspace_with_text(text: &str) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    std::fs::write(dir.path().join("input.txt"), text).expect("failed to write input.txt");
    dir
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordgraph"))
        .args(["--file", "input.txt", "--json"])
        .args(args)
        .env("NO_COLOR", "1")
        .current_dir(dir.path())
        .output()
        .expect("failed to execute wordgraph")
}

fn parse_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

#[test]
fn show_lists_every_edge() {
    let dir = workspace_with_text("a b a c");
    let output = run(&dir, &["show"]);
    assert_eq!(output.status.code(), Some(0));

    let edges = parse_stdout(&output);
    let edges = edges.as_array().expect("edge array");
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0]["from"], "a");
    assert_eq!(edges[0]["to"], "b");
    assert_eq!(edges[0]["weight"], 1);
}

#[test]
fn bridge_reports_words_in_order() {
    let dir = workspace_with_text(CORPUS);
    let output = run(&dir, &["bridge", "new", "and"]);
    assert_eq!(output.status.code(), Some(0));

    let value = parse_stdout(&output);
    assert_eq!(value["from"], "new");
    assert_eq!(value["to"], "and");
    assert_eq!(value["words"], serde_json::json!(["life", "civilizations"]));
}

#[test]
fn path_reports_words_and_length() {
    let dir = workspace_with_text(CORPUS);
    let output = run(&dir, &["path", "To", "life"]);
    assert_eq!(output.status.code(), Some(0));

    let value = parse_stdout(&output);
    assert_eq!(value["length"], 4);
    let words = value["words"].as_array().expect("words array");
    assert_eq!(words.first().and_then(|w| w.as_str()), Some("to"));
    assert_eq!(words.last().and_then(|w| w.as_str()), Some("life"));
}

#[test]
fn unreachable_path_fails_the_query() {
    let dir = workspace_with_text("a b c");
    let output = run(&dir, &["path", "c", "a"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(parse_stdout(&output)["error"], "\"c\" and \"a\" are unreachable.");
}

#[test]
fn rank_of_single_word() {
    let dir = workspace_with_text(CORPUS);
    let output = run(&dir, &["rank", "new"]);
    assert_eq!(output.status.code(), Some(0));

    let value = parse_stdout(&output);
    assert_eq!(value["word"], "new");
    let score = value["score"].as_f64().expect("score");
    assert!((score - 0.2573).abs() < 1e-4, "score = {score}");
}

#[test]
fn rank_top_is_truncated_and_sorted() {
    let dir = workspace_with_text(CORPUS);
    let output = run(&dir, &["rank", "--top", "3"]);
    let value = parse_stdout(&output);
    let rows = value.as_array().expect("ranked array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["word"], "new");
    assert_eq!(rows[1]["word"], "and");
}

#[test]
fn missing_word_exits_with_query_failure() {
    let dir = workspace_with_text(CORPUS);
    let output = run(&dir, &["rank", "zzz"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(parse_stdout(&output)["error"], "No \"zzz\" in the graph!");
}

#[test]
fn seeded_generate_is_reproducible() {
    let dir = workspace_with_text(CORPUS);
    let first = parse_stdout(&run(&dir, &["generate", "--seed", "9", "new", "and", "to"]));
    let second = parse_stdout(&run(&dir, &["generate", "--seed", "9", "new", "and", "to"]));
    assert_eq!(first, second);
    assert_eq!(first["input"], "new and to");
    let out = first["output"].as_str().expect("output");
    assert!(out.starts_with("new ") && out.ends_with(" and to"), "output = {out}");
}

#[test]
fn walk_prints_and_saves_the_words() {
    let dir = workspace_with_text(CORPUS);
    let output = run(&dir, &["walk", "--seed", "5"]);
    assert_eq!(output.status.code(), Some(0));

    let value = parse_stdout(&output);
    assert_eq!(value["stopped"], false);
    let end = value["end"].as_str().expect("end reason");
    assert!(end == "dead_end" || end == "repeated_edge", "end = {end}");
    let words: Vec<&str> = value["words"]
        .as_array()
        .expect("words array")
        .iter()
        .filter_map(|w| w.as_str())
        .collect();
    assert!(!words.is_empty());

    let saved = std::fs::read_to_string(dir.path().join("random_walk_output.txt"))
        .expect("walk output saved");
    assert_eq!(saved, format!("Random Walk Path: {}", words.join(" ")));
}

#[test]
fn single_word_input_is_rejected() {
    let dir = workspace_with_text("hello");
    let output = run(&dir, &["show"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_input_file_is_rejected() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let output = run(&dir, &["show"]);
    assert_eq!(output.status.code(), Some(2));
}
