//! Run-and-assert helpers for sort-imports rule tests.

use impsort::harness::{apply_fixes, run_sort_imports};
use impsort::rules::{Diagnostic, MessageId, SortImportsOptions};

/// Run the rule over `source` with default options.
pub fn check(source: &str) -> Vec<Diagnostic> {
    check_with(source, SortImportsOptions::default())
}

/// Run the rule over `source` with `allowSeparatedGroups` enabled.
pub fn check_separated(source: &str) -> Vec<Diagnostic> {
    check_with(
        source,
        SortImportsOptions {
            allow_separated_groups: true,
        },
    )
}

/// Run the rule over `source` with explicit options.
pub fn check_with(source: &str, options: SortImportsOptions) -> Vec<Diagnostic> {
    run_sort_imports(source, options)
        .unwrap_or_else(|e| panic!("scan failed for {source:?}: {e}"))
        .diagnostics
}

/// Assert a source produces no findings.
pub fn assert_clean(source: &str) {
    let diagnostics = check(source);
    assert!(
        diagnostics.is_empty(),
        "Expected no findings for {:?}, got {}:\n{}",
        source,
        diagnostics.len(),
        format_diagnostics(source, &diagnostics)
    );
}

/// Assert a source produces exactly the given message identifiers, in
/// report order.
pub fn assert_findings(source: &str, expected: &[MessageId]) {
    let diagnostics = check(source);
    let actual: Vec<MessageId> = diagnostics.iter().map(|d| d.message_id).collect();
    assert_eq!(
        actual,
        expected,
        "for {:?}:\n{}",
        source,
        format_diagnostics(source, &diagnostics)
    );
}

/// Apply every attached fix with default options and return the result.
pub fn fix(source: &str) -> String {
    apply_fixes(source, &check(source))
}

/// The source text a diagnostic is anchored on.
pub fn anchor_text<'a>(source: &'a str, diagnostic: &Diagnostic) -> &'a str {
    &source[std::ops::Range::<usize>::from(diagnostic.range)]
}

fn format_diagnostics(source: &str, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  {:?} on {:?}: {}", d.range, anchor_text(source, d), d.message()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_clean_passes_for_sorted_source() {
        assert_clean("import a from 'a'\nimport b from 'b'\n");
    }

    #[test]
    fn test_check_reports_for_unsorted_source() {
        let diagnostics = check("import b from 'b'\nimport a from 'a'\n");
        assert_eq!(diagnostics.len(), 1);
    }
}
