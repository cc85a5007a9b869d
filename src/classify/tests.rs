//! Tests for routing metadata classifiers.

use std::collections::BTreeSet;

use super::guess::{guess_branch, guess_bugs, guess_group, join_sorted};
use super::patterns::{
    group_for_tree, match_bug_reference, match_header, BugRefKind, GATEWAY_GROUP,
};
use super::types::RoutingMetadata;

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// =========================================================================
// Pattern table
// =========================================================================

#[test]
fn test_match_header() {
    let header = match_header("=== ingres!main!common!gwf gwfora.c rev 6 ====").unwrap();
    assert_eq!(header.tree, "ingres!main!common!gwf");
    assert_eq!(header.path, "gwfora.c");
    assert_eq!(header.revision, "6");
}

#[test]
fn test_match_header_rejects_near_misses() {
    assert!(match_header("=== ingres!main!x f.c rev six ====").is_none());
    assert!(match_header("  === ingres!main!x f.c rev 6 ====").is_none());
    assert!(match_header("=== ingres!main!x f.c rev 6 ==== trailing").is_none());
    assert!(match_header("=== ingres!frontend!mod rev 9 ====").is_none());
}

#[test]
fn test_group_rules() {
    assert_eq!(group_for_tree("x!gateway!y"), Some(GATEWAY_GROUP.to_string()));
    assert_eq!(
        group_for_tree("ingres!gateway!oracle"),
        Some(GATEWAY_GROUP.to_string())
    );
    assert_eq!(
        group_for_tree("ingtest!gwts1000!suite"),
        Some(GATEWAY_GROUP.to_string())
    );
    assert_eq!(group_for_tree("ingres!admin!foo"), Some("admin".to_string()));
    assert_eq!(group_for_tree("ingres"), None);
    assert_eq!(group_for_tree("ingtest!other"), None);
    assert_eq!(group_for_tree("ingresx!admin"), None);
}

#[test]
fn test_bug_reference_kinds() {
    let sir = match_bug_reference("> SIR 123456 added").unwrap();
    assert_eq!(sir.kind, BugRefKind::Sir);
    assert_eq!(sir.number, "123456");

    let bug = match_bug_reference("> bug 98734.").unwrap();
    assert_eq!(bug.kind, BugRefKind::Bug);
    assert_eq!(bug.number, "98734");

    let bare = match_bug_reference("> b555 ").unwrap();
    assert_eq!(bare.kind, BugRefKind::BareB);
    assert_eq!(bare.number, "555");
}

#[test]
fn test_bug_reference_strips_leading_zeros() {
    assert_eq!(match_bug_reference("> SIR 000123;").unwrap().number, "123");
    assert_eq!(match_bug_reference("> bug 000,").unwrap().number, "0");
}

// =========================================================================
// guess_group
// =========================================================================

#[test]
fn test_guess_group_deduplicates() {
    let diff = "\
=== ingres!admin!foo a.c rev 3 ====
1a2
> x
=== ingres!admin!bar b.c rev 8 ====
2d1
< y";
    assert_eq!(guess_group(diff), set(&["admin"]));
}

#[test]
fn test_guess_group_with_gateway() {
    let diff = "\
=== ingres!admin!foo a.c rev 3 ====
=== ingres!admin!bar b.c rev 8 ====
=== x!gateway!y c.c rev 1 ====";
    let groups = guess_group(diff);
    assert_eq!(groups, set(&["admin", "ea"]));
    assert_eq!(join_sorted(&groups), "admin,ea");
}

#[test]
fn test_guess_group_processes_every_header() {
    let diff = "\
=== ingres!main!x a.c rev 1 ====
=== ingtest!gwts1000!x t.sh rev 2 ====
=== ingres!back!dmf dm0p.c rev 40 ====
=== unrelated!tree f.c rev 5 ====";
    assert_eq!(guess_group(diff), set(&["back", "ea", "main"]));
}

#[test]
fn test_guess_group_ignores_content_lines() {
    let diff = "> === ingres!admin!x a.c rev 1 ====\n< ingres!admin!x";
    assert!(guess_group(diff).is_empty());
    assert!(guess_group("").is_empty());
}

// =========================================================================
// guess_branch
// =========================================================================

#[test]
fn test_guess_branch_root_tree() {
    assert_eq!(guess_branch("=== ingres!frontend!mod rev 9 ===="), "frontend");
}

#[test]
fn test_guess_branch_other_tree() {
    assert_eq!(
        guess_branch("=== ingtest!gwts1000!suite t.sh rev 2 ===="),
        "ingtest!gwts1000"
    );
    assert_eq!(guess_branch("=== solo f.c rev 2 ===="), "solo");
}

#[test]
fn test_guess_branch_uses_first_header_only() {
    let diff = "\
12a13
> x
=== ingres!main!x a.c rev 1 ====
=== ingres!r3!y b.c rev 1 ====";
    assert_eq!(guess_branch(diff), "main");
}

#[test]
fn test_guess_branch_without_header() {
    assert_eq!(guess_branch(""), "");
    assert_eq!(guess_branch("1a2\n> x"), "");
}

// =========================================================================
// guess_bugs
// =========================================================================

#[test]
fn test_guess_bugs_added_lines() {
    let diff = "\
=== ingres!main!gwf gwfora.c rev 6 ====
12a13,16
> **  18-Jan-2011 (clach04)
> **      Bug 124933, NULL dereference in DAfre_buffer()
> b77 foo
< bug 356789 removed";
    let bugs = guess_bugs(diff);
    assert_eq!(bugs, set(&["124933", "77"]));
    assert_eq!(join_sorted(&bugs), "124933,77");
}

#[test]
fn test_guess_bugs_documented_forms() {
    let diff = "\
> bug 123456
> bug123456
> b123456
>     /* see CVLower above, Bug 108802 (move!) */";
    assert_eq!(guess_bugs(diff), set(&["108802", "123456"]));
}

#[test]
fn test_guess_bugs_is_case_insensitive() {
    assert_eq!(guess_bugs("> sIr 42 closed\n> BUG 7"), set(&["42", "7"]));
}

#[test]
fn test_guess_bugs_last_reference_on_line_wins() {
    assert_eq!(guess_bugs("> fixes bug 12 and SIR 345."), set(&["345"]));
}

#[test]
fn test_guess_bugs_bare_b_over_match() {
    // A `b` followed by digits inside an identifier still counts.
    assert_eq!(guess_bugs("> x = sub32(y);"), set(&["32"]));
}

#[test]
fn test_guess_bugs_requires_boundary_after_digits() {
    assert!(guess_bugs("> bug 12abc").is_empty());
    assert!(guess_bugs("> bug").is_empty());
}

#[test]
fn test_guess_bugs_string_sorted() {
    let bugs = guess_bugs("> bug 9\n> bug 10\n> bug 100");
    assert_eq!(join_sorted(&bugs), "10,100,9");
}

// =========================================================================
// RoutingMetadata
// =========================================================================

#[test]
fn test_routing_metadata_classify() {
    let diff = "\
=== ingres!main!common!gwf gwfora.c rev 6 ====
12a13,14
> **      Bug 124933, NULL dereference in DAfre_buffer()
=== x!gateway!oracle gwora.c rev 2 ====
1a2
> see SIR 99001 ";

    let metadata = RoutingMetadata::classify(diff);
    assert_eq!(metadata.groups_csv(), "ea,main");
    assert_eq!(metadata.branch, "main");
    assert_eq!(metadata.bugs_csv(), "124933,99001");
}

#[test]
fn test_routing_metadata_empty() {
    let metadata = RoutingMetadata::classify("");
    assert_eq!(metadata, RoutingMetadata::default());
    assert_eq!(metadata.groups_csv(), "");
    assert_eq!(metadata.bugs_csv(), "");
}

#[test]
fn test_routing_metadata_serializes() {
    let metadata = RoutingMetadata::classify("=== ingres!admin!x a.c rev 1 ====\n> bug 5 ");
    let json = serde_json::to_value(&metadata).unwrap();
    assert_eq!(json["groups"], serde_json::json!(["admin"]));
    assert_eq!(json["branch"], "admin");
    assert_eq!(json["bugs"], serde_json::json!(["5"]));
}
