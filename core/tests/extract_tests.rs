use tagsift_core::output::{render, save_tags};
use tagsift_core::tokenizer::TokenizeOptions;
use tagsift_core::{is_not_found, process_path, StopWords};

use std::fs;
use tempfile::tempdir;

#[test]
fn file_to_file_flow() {
    let dir = tempdir().unwrap();
    let stop_path = dir.path().join("stopwords.txt");
    let doc_path = dir.path().join("doc.txt");
    let out_path = dir.path().join("tags.txt");

    fs::write(&stop_path, "the\non\n").unwrap();
    fs::write(&doc_path, "The cat sat on the Cat.\n").unwrap();

    let mut stops = StopWords::new();
    stops.load_path(&stop_path).unwrap();

    let table = process_path(&doc_path, &stops, &TokenizeOptions::default()).unwrap();
    assert_eq!(table.get("cat"), 2);
    assert_eq!(table.get("sat"), 1);
    assert_eq!(table.len(), 2);

    let tags = table.ranked();
    save_tags(&tags, &out_path).unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "cat: 2\nsat: 1\n");
    assert_eq!(fs::read_to_string(&out_path).unwrap(), render(&tags));
}

#[test]
fn document_of_only_stop_words_saves_empty_output() {
    let dir = tempdir().unwrap();
    let doc_path = dir.path().join("doc.txt");
    let out_path = dir.path().join("tags.txt");
    fs::write(&doc_path, "the on THE On\nthe\n").unwrap();

    let stops = StopWords::from_list(&["the", "on"]);
    let table = process_path(&doc_path, &stops, &TokenizeOptions::default()).unwrap();
    assert!(table.is_empty());

    save_tags(&table.ranked(), &out_path).unwrap();
    assert_eq!(fs::read_to_string(&out_path).unwrap(), "");
}

#[test]
fn reprocessing_the_same_document_is_idempotent() {
    let dir = tempdir().unwrap();
    let doc_path = dir.path().join("doc.txt");
    fs::write(&doc_path, "Ferris the crab, and ferris the mascot.\n").unwrap();

    let stops = StopWords::from_list(&["the", "and"]);
    let opts = TokenizeOptions::default();
    let first = process_path(&doc_path, &stops, &opts).unwrap();
    let second = process_path(&doc_path, &stops, &opts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn crlf_documents_are_accepted() {
    let dir = tempdir().unwrap();
    let doc_path = dir.path().join("doc.txt");
    fs::write(&doc_path, "cat sat\r\ncat\r\n").unwrap();

    let table = process_path(&doc_path, &StopWords::new(), &TokenizeOptions::default()).unwrap();
    assert_eq!(table.get("cat"), 2);
    assert_eq!(table.get("sat"), 1);
}

#[test]
fn every_operation_reports_missing_paths() {
    let missing = "/nonexistent/tagsift/input.txt";

    let mut stops = StopWords::new();
    assert!(is_not_found(&stops.load_path(missing).unwrap_err()));

    let err = process_path(missing, &stops, &TokenizeOptions::default()).unwrap_err();
    assert!(is_not_found(&err));

    let err = save_tags(&[], "/nonexistent/tagsift/tags.txt").unwrap_err();
    assert!(is_not_found(&err));
}
