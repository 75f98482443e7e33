//! Statement-level ordering: syntax groups, alphabetical comparison, and
//! blank-line separation.

use impsort::rules::MessageId;
use rstest::rstest;

use crate::helpers::rule_helpers::{
    anchor_text, assert_clean, assert_findings, check, check_separated,
};

#[test]
fn test_sorted_pair_is_clean() {
    assert_clean("import a from 'a'\nimport b from 'b'\n");
}

#[test]
fn test_unsorted_pair_reports_the_second_statement() {
    let source = "import b from 'b'\nimport a from 'a'\n";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message_id,
        MessageId::SortImportsAlphabetically
    );
    assert_eq!(anchor_text(source, &diagnostics[0]), "import a from 'a'");
    assert_eq!(
        diagnostics[0].message(),
        "Imports should be sorted alphabetically."
    );
}

#[test]
fn test_comparison_folds_case() {
    assert_clean("import a from 'a'\nimport B from 'b'\nimport c from 'c'\n");
    assert_findings(
        "import Z from 'z'\nimport b from 'b'\n",
        &[MessageId::SortImportsAlphabetically],
    );
}

#[rstest]
#[case("import 'a'\nimport * as n from 'n'\n")]
#[case("import 'a'\nimport b from 'b'\n")]
#[case("import * as a from 'a'\nimport b from 'b'\n")]
#[case("import 'a'\nimport 'b'\n")]
#[case("import a from 'a'\nimport a from 'x'\n")]
fn test_ascending_pairs_are_clean(#[case] source: &str) {
    assert_clean(source);
}

#[rstest]
#[case("import a from 'a'\nimport 'b'\n")]
#[case("import a from 'a'\nimport * as b from 'b'\n")]
#[case("import * as a from 'a'\nimport 'b'\n")]
fn test_group_regressions_report_syntax_order(#[case] source: &str) {
    assert_findings(source, &[MessageId::UnexpectedSyntaxOrder]);
}

#[test]
fn test_side_effect_below_binding_names_the_message() {
    let source = "import b from 'b'\nimport 'a'\n";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message_id, MessageId::UnexpectedSyntaxOrder);
    assert_eq!(anchor_text(source, &diagnostics[0]), "import 'a'");
    assert_eq!(
        diagnostics[0].message(),
        "Expected imports without variables to be on the top."
    );
}

#[test]
fn test_side_effect_modules_compare_alphabetically() {
    assert_findings(
        "import 'b'\nimport 'a'\n",
        &[MessageId::SortImportsAlphabetically],
    );
}

#[test]
fn test_empty_braces_rank_as_side_effect() {
    assert_findings(
        "import a from 'a'\nimport {} from 'b'\n",
        &[MessageId::UnexpectedSyntaxOrder],
    );
}

#[test]
fn test_group_step_up_ignores_names() {
    // z then a is fine: names only compare within one group.
    assert_clean("import * as z from 'z'\nimport a from 'a'\n");
}

#[test]
fn test_namespace_names_compare_within_the_group() {
    assert_findings(
        "import * as b from 'b'\nimport * as a from 'a'\n",
        &[MessageId::SortImportsAlphabetically],
    );
}

#[test]
fn test_primary_name_prefers_the_imported_name() {
    // Local aliases z and a are descending; imported names a and b are not.
    assert_clean("import { a as z } from 'a'\nimport { b as a } from 'b'\n");
}

#[test]
fn test_full_group_progression_is_clean() {
    let source = r"import 'a'
import 'b'
import * as c from 'c'
import d from 'd'
import { e } from 'e'
";
    assert_clean(source);
}

#[test]
fn test_blank_line_resets_comparison_when_allowed() {
    let source = "import b from 'b'\n\nimport a from 'a'\n";
    assert_eq!(check(source).len(), 1);
    assert!(check_separated(source).is_empty());
}

#[test]
fn test_adjacent_lines_never_reset() {
    let diagnostics = check_separated("import b from 'b'\nimport a from 'a'\n");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message_id,
        MessageId::SortImportsAlphabetically
    );
}

#[test]
fn test_comment_only_line_counts_as_separation() {
    let source = "import b from 'b'\n// section\nimport a from 'a'\n";
    assert_eq!(check(source).len(), 1);
    assert!(check_separated(source).is_empty());
}

#[test]
fn test_separation_also_resets_group_tracking() {
    let source = "import a from 'a'\n\nimport 's'\n";
    assert_findings(source, &[MessageId::UnexpectedSyntaxOrder]);
    assert!(check_separated(source).is_empty());
}

#[test]
fn test_violating_statement_becomes_the_new_base() {
    // c compares against a, not against the already-reported b.
    let source = "import b from 'b'\nimport a from 'a'\nimport c from 'c'\n";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(anchor_text(source, &diagnostics[0]), "import a from 'a'");
}

#[test]
fn test_statements_on_one_line_are_never_separated() {
    let source = "import b from 'b'; import a from 'a'";
    assert_findings(source, &[MessageId::SortImportsAlphabetically]);
    assert_eq!(check_separated(source).len(), 1);
}
