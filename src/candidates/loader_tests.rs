//! Tests for candidates/loader

use std::io::Write;

use super::*;
use tempfile::NamedTempFile;

#[test]
fn test_parse_json_array() {
    let items = parse_candidates(r#"["Apple", "Banana", "Cherry"]"#).unwrap();
    assert_eq!(items, vec!["Apple", "Banana", "Cherry"]);
}

#[test]
fn test_parse_json_array_with_leading_whitespace() {
    let items = parse_candidates("\n  [\"Kiwi\"]\n").unwrap();
    assert_eq!(items, vec!["Kiwi"]);
}

#[test]
fn test_parse_json_array_keeps_duplicates() {
    let items = parse_candidates(r#"["Pear", "Pear"]"#).unwrap();
    assert_eq!(items, vec!["Pear", "Pear"]);
}

#[test]
fn test_parse_json_non_string_element_is_error() {
    let result = parse_candidates(r#"["Apple", 42]"#);
    assert!(matches!(result, Err(TypeaheadError::InvalidItems(_))));
}

#[test]
fn test_parse_malformed_json_is_error() {
    let result = parse_candidates(r#"["Apple", "#);
    assert!(matches!(result, Err(TypeaheadError::InvalidItems(_))));
}

#[test]
fn test_parse_lines() {
    let items = parse_candidates("Apple\nBanana\nCherry\n").unwrap();
    assert_eq!(items, vec!["Apple", "Banana", "Cherry"]);
}

#[test]
fn test_parse_lines_skips_blank_lines_and_crlf() {
    let items = parse_candidates("Apple\r\n\r\n   \nBanana\r\n").unwrap();
    assert_eq!(items, vec!["Apple", "Banana"]);
}

#[test]
fn test_parse_lines_keeps_inner_whitespace() {
    let items = parse_candidates("  Blood orange\n").unwrap();
    assert_eq!(items, vec!["  Blood orange"]);
}

#[test]
fn test_parse_empty_input() {
    assert!(parse_candidates("").unwrap().is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Mango").unwrap();
    writeln!(file, "Melon").unwrap();

    let source = CandidateSource::File(file.path().to_path_buf());
    let candidates = load_candidates(&source).unwrap();
    assert_eq!(&*candidates, &["Mango".to_string(), "Melon".to_string()]);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let source = CandidateSource::File(PathBuf::from("/nonexistent/typeahead/items.txt"));
    let result = load_candidates(&source);
    assert!(matches!(result, Err(TypeaheadError::Io(_))));
}

#[test]
fn test_load_builtin() {
    let candidates = load_candidates(&CandidateSource::Builtin).unwrap();
    assert_eq!(candidates, Candidates::builtin());
}

#[test]
fn test_load_from_config_items() {
    let source = CandidateSource::Config(vec!["One".to_string(), "Two".to_string()]);
    let candidates = load_candidates(&source).unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1], "Two");
}

#[test]
fn test_resolve_file_wins() {
    let source = CandidateSource::resolve(
        Some(PathBuf::from("items.txt")),
        false,
        Some(vec!["x".to_string()]),
    );
    assert_eq!(source, CandidateSource::File(PathBuf::from("items.txt")));
}

#[test]
fn test_resolve_piped_stdin_beats_config() {
    let source = CandidateSource::resolve(None, false, Some(vec!["x".to_string()]));
    assert_eq!(source, CandidateSource::Stdin);
}

#[test]
fn test_resolve_config_then_builtin() {
    let source = CandidateSource::resolve(None, true, Some(vec!["x".to_string()]));
    assert_eq!(source, CandidateSource::Config(vec!["x".to_string()]));

    let source = CandidateSource::resolve(None, true, None);
    assert_eq!(source, CandidateSource::Builtin);
}
