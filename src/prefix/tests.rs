//! Tests for the prefix module.

use super::*;

#[test]
fn test_count_path_components() {
    // The empty string is the universal fallback and counts as zero
    assert_eq!(count_path_components(""), 0);

    // The root alone counts as two, keeping it above the empty string
    assert_eq!(count_path_components("/"), 2);

    // Absolute paths get the root bonus; a trailing slash adds one more
    // strip, so "/a" and "/a/" do not count the same
    assert_eq!(count_path_components("/a"), 2);
    assert_eq!(count_path_components("/a/"), 3);
    assert_eq!(count_path_components("/a/b"), 3);
    assert_eq!(count_path_components("/a/b/"), 4);

    // Relative paths count plain segments
    assert_eq!(count_path_components("a"), 1);
    assert_eq!(count_path_components("a/b"), 2);
    assert_eq!(count_path_components("a/b/"), 3);
}

#[test]
fn test_select_best_prefix_no_match() {
    assert_eq!(select_best_prefix("/x/y", ["/a/", "/b/"]), None);
    assert_eq!(select_best_prefix("/x/y", [] as [&str; 0]), None);
}

#[test]
fn test_select_best_prefix_single_match() {
    // Candidates are normalized to end with a slash before matching
    assert_eq!(
        select_best_prefix("/proj/src/main.py", ["/proj"]),
        Some("/proj/".to_string())
    );

    // A candidate that already ends with a slash is kept as-is
    assert_eq!(
        select_best_prefix("/proj/src/main.py", ["/proj/"]),
        Some("/proj/".to_string())
    );
}

#[test]
fn test_select_best_prefix_prefers_deepest() {
    assert_eq!(
        select_best_prefix("/a/b/c", ["", "/a/", "/a/b/"]),
        Some("/a/b/".to_string())
    );

    // Order of candidates must not change the winner
    assert_eq!(
        select_best_prefix("/a/b/c", ["/a/b/", "/a/", ""]),
        Some("/a/b/".to_string())
    );
}

#[test]
fn test_select_best_prefix_root_beats_empty() {
    // "/" counts two components, "" counts zero
    assert_eq!(select_best_prefix("/x", ["", "/"]), Some("/".to_string()));
    assert_eq!(select_best_prefix("/x", ["/", ""]), Some("/".to_string()));
}

#[test]
fn test_select_best_prefix_tie_keeps_first() {
    // Both normalize to "/a/b/" with equal component counts; the first
    // candidate in iteration order wins
    assert_eq!(
        select_best_prefix("/a/b/c", ["/a/b/", "/a/b"]),
        Some("/a/b/".to_string())
    );
    assert_eq!(
        select_best_prefix("/a/b/c", ["/a/b", "/a/b/"]),
        Some("/a/b/".to_string())
    );
}

#[test]
fn test_select_best_prefix_empty_matches_everything() {
    assert_eq!(select_best_prefix("/x/y", [""]), Some(String::new()));
    assert_eq!(select_best_prefix("", [""]), Some(String::new()));
}

#[test]
fn test_select_best_prefix_substring_is_not_a_prefix() {
    // "/home/user" must not match "/home/username/f" once normalized
    assert_eq!(select_best_prefix("/home/username/f", ["/home/user"]), None);
}

#[test]
fn test_select_best_prefix_returns_normalized_member() {
    // The winner is always a normalized member of the candidate set and a
    // true string prefix of the path
    let path = "/proj/src/deep/file.rs";
    let candidates = ["/proj", "/proj/src", "other", ""];
    let winner = select_best_prefix(path, candidates).unwrap();
    assert!(path.starts_with(&winner));
    assert_eq!(winner, "/proj/src/");
}
