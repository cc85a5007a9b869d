//! Pattern table for routing metadata.
//!
//! Every heuristic the classifiers rely on lives here: the header grammar,
//! the bug reference grammar with its tagged alternatives, and the ordered
//! rules mapping a tree path to a review group.

use crate::diff::{ROOT_TREE, TREE_SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

/// Synthetic header line: `=== <tree> <path> rev <digits> ====`.
pub const HEADER_PATTERN: &str = r"^=== (\S*) (\S*) rev ([0-9]+) ====$";

/// Bug or SIR reference on an added line.
///
/// Case-insensitive. The greedy `.*` makes the last reference on a line win.
/// The bare `b` alternative also matches inside words (`sub32(` yields `32`);
/// that over-match is accepted.
pub const BUG_PATTERN: &str = r"(?i)^>.*(SIR\s*|BUG\s*|b)([0-9]+)(?:[^[:word:]]|$)";

/// Group assigned to gateway trees.
pub const GATEWAY_GROUP: &str = "ea";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

static BUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BUG_PATTERN).expect("bug pattern is valid"));

/// A `=== tree path rev N ====` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    pub tree: &'a str,
    pub path: &'a str,
    pub revision: &'a str,
}

/// Match a single line against the header grammar.
pub fn match_header(line: &str) -> Option<HeaderMatch<'_>> {
    HEADER_REGEX.captures(line).map(|caps| HeaderMatch {
        tree: caps.get(1).map_or("", |m| m.as_str()),
        path: caps.get(2).map_or("", |m| m.as_str()),
        revision: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Which alternative of the bug grammar matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BugRefKind {
    /// `SIR 123456`
    Sir,
    /// `bug 123456`, `Bug123456`
    Bug,
    /// `b123456`
    BareB,
}

impl BugRefKind {
    fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.trim_end().to_ascii_lowercase();
        match keyword.as_str() {
            "sir" => Self::Sir,
            "bug" => Self::Bug,
            _ => Self::BareB,
        }
    }
}

/// A bug or SIR number referenced on an added line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugReference {
    pub kind: BugRefKind,
    /// Number with leading zeros removed.
    pub number: String,
}

/// Match a single line against the bug grammar.
///
/// Only lines starting with `>` can match.
pub fn match_bug_reference(line: &str) -> Option<BugReference> {
    let caps = BUG_REGEX.captures(line)?;
    let keyword = caps.get(1)?.as_str();
    let digits = caps.get(2)?.as_str();

    Some(BugReference {
        kind: BugRefKind::from_keyword(keyword),
        number: normalize_number(digits),
    })
}

/// Drop leading zeros, as an integer round trip would.
fn normalize_number(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// How a group rule recognizes a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMatch {
    /// Tree contains the literal text anywhere.
    Contains(&'static str),
    /// Tree starts with the literal text.
    Prefix(&'static str),
    /// First segment of the tree equals the text.
    FirstSegment(&'static str),
}

/// What group a matching rule yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    /// A fixed group name.
    Fixed(&'static str),
    /// The tree's second segment.
    SecondSegment,
}

/// One row of the group table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRule {
    pub matcher: TreeMatch,
    pub group: GroupSource,
}

/// Group rules, first match wins.
pub const GROUP_RULES: &[GroupRule] = &[
    GroupRule {
        matcher: TreeMatch::Contains("!gateway!"),
        group: GroupSource::Fixed(GATEWAY_GROUP),
    },
    GroupRule {
        matcher: TreeMatch::Prefix("ingtest!gwts1000"),
        group: GroupSource::Fixed(GATEWAY_GROUP),
    },
    GroupRule {
        matcher: TreeMatch::FirstSegment(ROOT_TREE),
        group: GroupSource::SecondSegment,
    },
];

impl TreeMatch {
    fn matches(&self, tree: &str) -> bool {
        match self {
            TreeMatch::Contains(text) => tree.contains(text),
            TreeMatch::Prefix(text) => tree.starts_with(text),
            TreeMatch::FirstSegment(text) => tree.split(TREE_SEPARATOR).next() == Some(*text),
        }
    }
}

/// Review group for a tree, if any rule applies.
///
/// The first matching rule decides, even when it yields nothing (a root
/// tree without a second segment).
pub fn group_for_tree(tree: &str) -> Option<String> {
    let rule = GROUP_RULES.iter().find(|rule| rule.matcher.matches(tree))?;
    match rule.group {
        GroupSource::Fixed(group) => Some(group.to_string()),
        GroupSource::SecondSegment => tree.split(TREE_SEPARATOR).nth(1).map(str::to_string),
    }
}

/// First two segments of a tree path.
pub fn leading_segments(path: &str) -> Vec<&str> {
    path.split(TREE_SEPARATOR).take(2).collect()
}
