//! Member-level findings and the reorder fix, end to end through the
//! scanner.

use impsort::rules::MessageId;

use crate::helpers::rule_helpers::{anchor_text, assert_clean, assert_findings, check, fix};

#[test]
fn test_sorted_members_are_clean() {
    assert_clean("import { a, b } from 'm'");
}

#[test]
fn test_equal_folded_names_are_clean() {
    assert_clean("import { A, a } from 'm'");
}

#[test]
fn test_unsorted_members_report_the_first_offender() {
    let source = "import { b, a } from 'a'";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message_id,
        MessageId::SortMembersAlphabetically
    );
    assert_eq!(diagnostics[0].member_name.as_deref(), Some("a"));
    assert_eq!(anchor_text(source, &diagnostics[0]), "a");
    assert_eq!(
        diagnostics[0].message(),
        "Member 'a' of the import declaration should be sorted alphabetically."
    );
}

#[test]
fn test_member_fix_sorts_the_list() {
    assert_eq!(fix("import { b, a } from 'a'"), "import { a, b } from 'a'");
}

#[test]
fn test_fix_output_is_clean_on_recheck() {
    let fixed = fix("import { b, a } from 'a'");
    assert_clean(&fixed);
}

#[test]
fn test_renamed_member_travels_as_one_unit() {
    assert_eq!(
        fix("import { c, a as b } from 'a'"),
        "import { a as b, c } from 'a'"
    );
}

#[test]
fn test_case_folded_ties_keep_source_order() {
    let fixed = fix("import { b, A, a } from 'm'");
    assert_eq!(fixed, "import { A, a, b } from 'm'");
    assert_clean(&fixed);
}

#[test]
fn test_multiline_layout_survives_the_fix() {
    let source = "import {\n    b,\n    a\n} from 'm'\n";
    assert_eq!(fix(source), "import {\n    a,\n    b\n} from 'm'\n");
}

#[test]
fn test_trailing_comma_stays_put() {
    assert_eq!(fix("import { b, a, } from 'm'"), "import { a, b, } from 'm'");
}

#[test]
fn test_default_prefix_is_untouched() {
    assert_eq!(
        fix("import d, { b, a } from 'm'"),
        "import d, { a, b } from 'm'"
    );
}

#[test]
fn test_comment_between_member_and_comma_withholds_the_fix() {
    let source = "import { b /* keep */, a } from 'm'";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message_id,
        MessageId::SortMembersAlphabetically
    );
    assert!(!diagnostics[0].has_fix());
    assert_eq!(fix(source), source);
}

#[test]
fn test_comment_before_member_withholds_the_fix() {
    let source = "import { b, /* note */ a } from 'm'";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics[0].has_fix());
}

#[test]
fn test_comment_inside_a_member_travels_with_it() {
    let source = "import { c, a /* alias */ as b } from 'm'";
    assert_eq!(fix(source), "import { a /* alias */ as b, c } from 'm'");
}

#[test]
fn test_statement_and_member_findings_are_independent() {
    let source = "import c from 'c'\nimport { b, a } from 'b'\n";
    assert_findings(
        source,
        &[
            MessageId::SortImportsAlphabetically,
            MessageId::SortMembersAlphabetically,
        ],
    );
}
