use std::fs;
use std::path::PathBuf;

use wof_bot::{Dictionary, DictionaryError};

fn scratch_file(test: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wof-bot-dict-{}-{}", test, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("words.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_parse_keeps_lines_verbatim() {
    let dictionary = Dictionary::parse("Apple\nbanana split\r\nit's\napple\n");
    assert_eq!(
        dictionary.words(),
        &["Apple", "banana split", "it's", "apple"]
    );
}

#[test]
fn test_parse_skips_empty_lines_and_keeps_duplicates() {
    let dictionary = Dictionary::parse("cat\n\ndog\ncat\n\n");
    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec!["cat", "dog", "cat"]);
}

#[test]
fn test_empty_text() {
    let dictionary = Dictionary::parse("");
    assert!(dictionary.is_empty());
}

#[test]
fn test_load_from_file() {
    let path = scratch_file("load", b"one\ntwo\nthree\n");
    let dictionary = Dictionary::load(&path).unwrap();
    assert_eq!(dictionary.words(), &["one", "two", "three"]);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_load_tolerates_invalid_utf8() {
    let path = scratch_file("latin1", b"cat\ncaf\xe9\ncar\n");
    let dictionary = Dictionary::load(&path).unwrap();

    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.words()[0], "cat");
    assert_eq!(dictionary.words()[1], "caf\u{FFFD}");
    assert_eq!(dictionary.words()[2], "car");

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("wof-bot-definitely-missing/wordlist.txt");
    let err = Dictionary::load(&path).unwrap_err();

    assert!(matches!(err, DictionaryError::NotFound { .. }));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains("wordlist.txt"));
}

#[test]
fn test_load_directory_is_unreadable() {
    let path = scratch_file("directory", b"");
    let dir = path.parent().unwrap();
    let err = Dictionary::load(dir).unwrap_err();

    assert!(matches!(err, DictionaryError::Unreadable { .. }));

    fs::remove_dir_all(dir).unwrap();
}
