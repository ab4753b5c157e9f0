//! Integration tests for the formatting and persistence path

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use stdkit::{json, JsonError, OutputKind};
use tempfile::tempdir;

#[test]
fn test_format_file_strips_comments_and_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        "{\n\"a\": 1, // one\n\n\n\"b\": 2\n}\n",
    )
    .unwrap();

    let cleaned = json::format(path.to_str().unwrap()).unwrap();
    assert_eq!(cleaned, "{\n\"a\": 1, \n\"b\": 2\n}");
}

#[test]
fn test_format_raw_text_input() {
    let cleaned = json::format("{ /* x */ \"a\": 1 }").unwrap();
    assert_eq!(cleaned, "{ \"a\": 1 }");
}

#[test]
fn test_format_empty_input_is_error() {
    assert_matches!(json::format("   \n "), Err(JsonError::EmptyInput));
}

#[test]
fn test_save_as_min_writes_compact_sibling() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("config.json");

    let written = json::save_as(
        "{ \"a\": 1, // note\n \"b\": [2, 3] }",
        &target,
        OutputKind::Min,
    )
    .unwrap();

    assert_eq!(written, dir.path().join("config.min.json"));
    let contents = fs::read_to_string(&written).unwrap();
    assert_eq!(contents, "{\"a\":1,\"b\":[2,3]}");
}

#[test]
fn test_save_as_raw_preserves_text() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out.json");
    let data = "{\n  \"pretty\": true\n}";

    let written = json::save_as(data, &target, OutputKind::Raw).unwrap();
    assert_eq!(written, dir.path().join("out.raw.json"));
    assert_eq!(fs::read_to_string(&written).unwrap(), data);
}

#[test]
fn test_save_as_missing_directory_is_io_error() {
    let result = json::save_as("{}", "/no/such/dir/out.json", OutputKind::Raw);
    assert_matches!(result, Err(JsonError::Io { .. }));
}

#[test]
fn test_min_round_trips_through_decoder() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("data.json");
    let source = "{ /* meta */ \"name\": \"stdkit\", \"tags\": [\"a\"] // end\n }";

    let written = json::save_as(source, &target, OutputKind::Min).unwrap();
    let reparsed = json::parse_file(&written).unwrap();
    assert_eq!(reparsed, json!({"name": "stdkit", "tags": ["a"]}));
}
