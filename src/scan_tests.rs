use std::fs;

use super::*;

fn scan_dir() -> tempfile::TempDir {
    tempfile::Builder::new().prefix("scan").tempdir().unwrap()
}

#[test]
fn collects_every_occurrence_with_file_offsets() {
    let dir = scan_dir();
    fs::write(dir.path().join("a.txt"), "banana\nno match here\nbandana ana\n").unwrap();
    fs::write(dir.path().join("b.txt"), "nothing to see\n").unwrap();

    let matcher: Matcher = "ana".parse().unwrap();
    let matches = Matches::collect(dir.path(), &matcher, None).unwrap();

    assert_eq!(matches.files.len(), 1);
    let file = &matches.files[0];
    assert!(file.path.ends_with("a.txt"));
    // "bandana ana" starts at byte 21
    assert_eq!(file.spans(), &[1..4, 3..6, 25..28, 29..32]);
    assert_eq!(matches.total(), 4);

    let content = file.read_content().unwrap();
    for span in file.spans() {
        assert_eq!(&content[span.clone()], "ana");
    }
}

#[test]
fn path_filter_restricts_searched_files() {
    let dir = scan_dir();
    fs::write(dir.path().join("keep.rs"), "fn needle() {}\n").unwrap();
    fs::write(dir.path().join("skip.md"), "needle\n").unwrap();

    let matcher: Matcher = "needle".parse().unwrap();
    let filter = Regex::new(r"\.rs$").unwrap();
    let matches = Matches::collect(dir.path(), &matcher, Some(&filter)).unwrap();

    assert_eq!(matches.files.len(), 1);
    assert!(matches.files[0].path.ends_with("keep.rs"));
    assert_eq!(matches.files[0].spans(), &[3..9]);
}

#[test]
fn walks_nested_directories() {
    let dir = scan_dir();
    fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
    fs::write(dir.path().join("nested/deeper/c.txt"), "xx AA xx AAA\n").unwrap();

    let matcher: Matcher = "AA".parse().unwrap();
    let matches = Matches::collect(dir.path(), &matcher, None).unwrap();

    assert_eq!(matches.files.len(), 1);
    assert_eq!(matches.files[0].spans(), &[3..5, 9..11, 10..12]);
}

#[test]
fn empty_tree_has_no_matches() {
    let dir = scan_dir();
    let matcher: Matcher = "anything".parse().unwrap();
    let matches = Matches::collect(dir.path(), &matcher, None).unwrap();
    assert!(matches.is_empty());
    assert_eq!(matches.total(), 0);
}

#[test]
fn skips_binary_files() {
    let dir = scan_dir();
    fs::write(dir.path().join("blob.bin"), b"needle\x00needle").unwrap();
    fs::write(dir.path().join("text.txt"), "needle\n").unwrap();

    let matcher: Matcher = "needle".parse().unwrap();
    let matches = Matches::collect(dir.path(), &matcher, None).unwrap();

    assert!(matches.files.iter().all(|f| !f.path.ends_with("blob.bin")));
    assert!(matches.files.iter().any(|f| f.path.ends_with("text.txt")));
}

#[test]
fn finds_patterns_spanning_lines() {
    let dir = scan_dir();
    fs::write(dir.path().join("lines.txt"), "ab\ncd\nab\ncd\n").unwrap();
    fs::write(dir.path().join("other.txt"), "b c\n").unwrap();

    let matcher: Matcher = "b\nc".parse().unwrap();
    let matches = Matches::collect(dir.path(), &matcher, None).unwrap();

    assert_eq!(matches.files.len(), 1);
    assert!(matches.files[0].path.ends_with("lines.txt"));
    assert_eq!(matches.files[0].spans(), &[1..4, 7..10]);
}

#[test]
fn multi_line_patterns_skip_binary_files() {
    let dir = scan_dir();
    fs::write(dir.path().join("blob.bin"), b"b\nc\x00").unwrap();

    let matcher: Matcher = "b\nc".parse().unwrap();
    let matches = Matches::collect(dir.path(), &matcher, None).unwrap();
    assert!(matches.is_empty());
}
