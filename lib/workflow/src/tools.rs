//! Built-in summarization tools.
//!
//! These are the stock tools the server registers: a deliberately simple
//! split → summarize → merge → refine pipeline over plain text. They double
//! as reference implementations of the tool contract: read whatever fields
//! they need from the state, write their outputs back, return the mapping.

use crate::registry::ToolRegistry;
use crate::state::State;
use serde_json::{Value, json};

/// Default chunk size for `split_text` when the state does not supply one.
const DEFAULT_CHUNK_SIZE: usize = 200;

/// Default maximum summary length for `refine_summary`.
const DEFAULT_MAX_LENGTH: usize = 300;

fn str_field<'a>(state: &'a State, key: &str) -> &'a str {
    state.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn usize_field(state: &State, key: &str, default: usize) -> usize {
    state
        .get(key)
        .and_then(Value::as_u64)
        .map_or(default, |n| n as usize)
}

/// Splits `state["text"]` into character chunks of `state["chunk_size"]`
/// (default 200), writing the pieces to `state["chunks"]`.
pub fn split_text(mut state: State) -> State {
    let text = str_field(&state, "text").to_string();
    // A zero chunk size would never advance; treat it as one character.
    let chunk_size = usize_field(&state, "chunk_size", DEFAULT_CHUNK_SIZE).max(1);

    let chars: Vec<char> = text.chars().collect();
    let chunks: Vec<Value> = chars
        .chunks(chunk_size)
        .map(|chunk| json!(chunk.iter().collect::<String>()))
        .collect();

    state.insert("chunks".to_string(), Value::Array(chunks));
    state
}

/// Reduces each chunk in `state["chunks"]` to its first sentence, writing
/// the results to `state["summaries"]`.
///
/// A chunk without a period passes through unchanged.
pub fn summarize_chunks(mut state: State) -> State {
    let chunks: Vec<String> = state
        .get("chunks")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let summaries: Vec<Value> = chunks
        .iter()
        .map(|chunk| match chunk.split_once('.') {
            Some((sentence, _)) => json!(format!("{sentence}.")),
            None => json!(chunk),
        })
        .collect();

    state.insert("summaries".to_string(), Value::Array(summaries));
    state
}

/// Joins `state["summaries"]` with single spaces into
/// `state["merged_summary"]`.
pub fn merge_summaries(mut state: State) -> State {
    let merged = state
        .get("summaries")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    state.insert("merged_summary".to_string(), json!(merged));
    state
}

/// Truncates `state["merged_summary"]` to `state["max_length"]` characters
/// (default 300), trims surrounding whitespace, and writes the result to
/// `state["final_summary"]`.
pub fn refine_summary(mut state: State) -> State {
    let merged = str_field(&state, "merged_summary").to_string();
    let max_length = usize_field(&state, "max_length", DEFAULT_MAX_LENGTH);

    let refined: String = merged.chars().take(max_length).collect();
    state.insert("final_summary".to_string(), json!(refined.trim()));
    state
}

/// Returns a registry with all built-in tools registered.
#[must_use]
pub fn builtin_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register("split_text", split_text);
    registry.register("summarize_chunks", summarize_chunks);
    registry.register("merge_summaries", merge_summaries);
    registry.register("refine_summary", refine_summary);
    registry
}
