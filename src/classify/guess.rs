//! Group, branch, and bug guesses over a transformed diff.

use std::collections::BTreeSet;

use crate::diff::{ROOT_TREE, TREE_SEPARATOR};

use super::patterns::{group_for_tree, leading_segments, match_bug_reference, match_header};

/// Review groups for every file header in the diff.
pub fn guess_group(diff_text: &str) -> BTreeSet<String> {
    diff_text
        .lines()
        .filter_map(match_header)
        .filter_map(|header| group_for_tree(header.tree))
        .collect()
}

/// Branch of the first file in the diff.
///
/// Only the first header line is consulted. Its second word is the tree
/// path; for root trees the branch is the second segment, otherwise the
/// first two segments joined with `!`.
pub fn guess_branch(diff_text: &str) -> String {
    let Some(path) = diff_text
        .lines()
        .find(|line| line.starts_with("=== "))
        .and_then(|line| line.split_whitespace().nth(1))
    else {
        return String::new();
    };

    match leading_segments(path).as_slice() {
        [root, branch] if *root == ROOT_TREE => branch.to_string(),
        segments => segments.join(&TREE_SEPARATOR.to_string()),
    }
}

/// Bug and SIR numbers referenced on added lines.
pub fn guess_bugs(diff_text: &str) -> BTreeSet<String> {
    diff_text
        .lines()
        .filter_map(match_bug_reference)
        .map(|reference| reference.number)
        .collect()
}

/// Render a set as a comma-joined, sorted list.
pub fn join_sorted(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}
