//! Display ordering for changed-file paths.
//!
//! The comparator is a strict total order over raw path strings: the
//! commit message first, the merge list second, then real paths grouped by
//! base name with C/C++ headers ahead of their sources.

use std::cmp::Ordering;

use crate::model::PathKind;

/// Extensions treated as C/C++ headers for ordering.
const HEADER_EXTS: [&str; 3] = ["h", "hxx", "hpp"];

/// Three-way comparison of two change paths for display order.
///
/// Suitable as a sort key for the file list: deterministic, stateless,
/// and consistent with itself (equal inputs compare `Equal`).
pub fn special_path_compare(a: &str, b: &str) -> Ordering {
    use PathKind::{CommitMessage, MergeList};

    match (PathKind::of(a), PathKind::of(b)) {
        // The commit message always goes first.
        (CommitMessage, CommitMessage) => Ordering::Equal,
        (CommitMessage, _) => Ordering::Less,
        (_, CommitMessage) => Ordering::Greater,
        // The merge list always comes next.
        (MergeList, MergeList) => Ordering::Equal,
        (MergeList, _) => Ordering::Less,
        (_, MergeList) => Ordering::Greater,
        _ => compare_files(a, b),
    }
}

fn compare_files(a: &str, b: &str) -> Ordering {
    let (a_base, a_ext) = split_base_ext(a);
    let (b_base, b_ext) = split_base_ext(b);

    // Sort header files above others with the same base name.
    if !a_base.is_empty() && a_base == b_base {
        let a_header = HEADER_EXTS.contains(&a_ext);
        let b_header = HEADER_EXTS.contains(&b_ext);
        if a_header && b_header {
            return collate(a, b);
        }
        if a_header {
            return Ordering::Less;
        }
        if b_header {
            return Ordering::Greater;
        }
    }

    collate(a_base, b_base).then_with(|| collate(a, b))
}

/// Split a path into the piece before the last dot and the piece after it.
///
/// A path without a dot has an empty extension; a leading dot keeps the
/// whole string as the base, so dotfiles sort by their full name.
fn split_base_ext(path: &str) -> (&str, &str) {
    match path.rfind('.') {
        Some(i) if i > 0 => (&path[..i], &path[i + 1..]),
        Some(i) => (path, &path[i + 1..]),
        None => (path, ""),
    }
}

/// Locale-aware string comparison: case-insensitive primary pass with a
/// raw code-point tie-break so the order stays strict.
fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{COMMIT_MESSAGE_PATH, MERGE_LIST_PATH, PATCHSET_LEVEL_PATH};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_commit_message_sorts_first() {
        assert_eq!(
            special_path_compare(COMMIT_MESSAGE_PATH, "AAAA.txt"),
            Ordering::Less
        );
        assert_eq!(
            special_path_compare("AAAA.txt", COMMIT_MESSAGE_PATH),
            Ordering::Greater
        );
        assert_eq!(
            special_path_compare(COMMIT_MESSAGE_PATH, MERGE_LIST_PATH),
            Ordering::Less
        );
        assert_eq!(
            special_path_compare(COMMIT_MESSAGE_PATH, COMMIT_MESSAGE_PATH),
            Ordering::Equal
        );
    }

    #[test]
    fn test_merge_list_sorts_after_commit_message() {
        assert_eq!(
            special_path_compare(MERGE_LIST_PATH, "AAAA.txt"),
            Ordering::Less
        );
        assert_eq!(
            special_path_compare("AAAA.txt", MERGE_LIST_PATH),
            Ordering::Greater
        );
        assert_eq!(
            special_path_compare(MERGE_LIST_PATH, MERGE_LIST_PATH),
            Ordering::Equal
        );
    }

    #[test]
    fn test_headers_sort_above_same_base_sources() {
        assert_eq!(special_path_compare("a.h", "a.cc"), Ordering::Less);
        assert_eq!(special_path_compare("a.cc", "a.h"), Ordering::Greater);
        assert_eq!(special_path_compare("dir/a.hpp", "dir/a.cpp"), Ordering::Less);
        assert_eq!(special_path_compare("a.hxx", "a.cc"), Ordering::Less);
    }

    #[test]
    fn test_two_headers_with_same_base_compare_by_full_path() {
        assert_eq!(special_path_compare("a.h", "a.hpp"), Ordering::Less);
        assert_eq!(special_path_compare("a.hxx", "a.hpp"), Ordering::Greater);
        assert_eq!(special_path_compare("a.h", "a.h"), Ordering::Equal);
    }

    #[test]
    fn test_lexical_base_ordering() {
        assert_eq!(special_path_compare("b.txt", "a.txt"), Ordering::Greater);
        assert_eq!(special_path_compare("a.txt", "b.txt"), Ordering::Less);
        // Different base, header extension carries no weight.
        assert_eq!(special_path_compare("b.h", "a.cc"), Ordering::Greater);
    }

    #[test]
    fn test_same_base_non_header_tie_breaks_by_full_path() {
        assert_eq!(special_path_compare("a.cc", "a.txt"), Ordering::Less);
        assert_eq!(special_path_compare("a.txt", "a.cc"), Ordering::Greater);
    }

    #[test]
    fn test_collation_is_case_insensitive_first() {
        // Raw byte order would put 'B' (0x42) ahead of 'a' (0x61).
        assert_eq!(special_path_compare("a.txt", "B.txt"), Ordering::Less);
        assert_eq!(special_path_compare("B.txt", "a.txt"), Ordering::Greater);
        // Case only differs: the raw tie-break keeps the order strict.
        assert_eq!(special_path_compare("a.txt", "A.txt"), Ordering::Greater);
    }

    #[test]
    fn test_dotfiles_use_full_name_as_base() {
        assert_eq!(special_path_compare(".gitignore", ".mailmap"), Ordering::Less);
        assert_eq!(special_path_compare(".gitignore", ".gitignore"), Ordering::Equal);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(special_path_compare("", ""), Ordering::Equal);
        assert_eq!(special_path_compare("", "a"), Ordering::Less);
        assert_eq!(special_path_compare("noext", "noext"), Ordering::Equal);
    }

    #[test]
    fn test_patchset_level_is_ordered_as_a_plain_path() {
        // Hiding is the caller's job; the comparator treats it as text.
        assert_eq!(
            special_path_compare(PATCHSET_LEVEL_PATH, "a.txt"),
            Ordering::Less
        );
        assert_eq!(
            special_path_compare(COMMIT_MESSAGE_PATH, PATCHSET_LEVEL_PATH),
            Ordering::Less
        );
    }

    #[test]
    fn test_full_sort_order() {
        let mut paths = vec![
            "b.txt",
            "a.cc",
            MERGE_LIST_PATH,
            "dir/inner.css",
            "a.h",
            COMMIT_MESSAGE_PATH,
            "a.txt",
            ".gitignore",
        ];
        paths.sort_unstable_by(|a, b| special_path_compare(a, b));
        assert_eq!(
            paths,
            vec![
                COMMIT_MESSAGE_PATH,
                MERGE_LIST_PATH,
                ".gitignore",
                "a.h",
                "a.cc",
                "a.txt",
                "b.txt",
                "dir/inner.css",
            ]
        );
    }
}
