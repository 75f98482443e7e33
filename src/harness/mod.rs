//! Reference host: a minimal driver for running rules over plain text.
//!
//! Production hosts own a real parser and visitor plumbing; this module
//! stands in for them in tests and examples. It scans the import prologue
//! of a source string, drives the rule over it, and can apply the
//! resulting fixes. The core rule modules never depend on it.

pub mod scanner;

pub use scanner::{ScanError, scan_imports};

use tracing::debug;

use crate::rules::sort_imports::{SortImports, SortImportsOptions};
use crate::rules::{Diagnostic, Fix};
use crate::syntax::ImportDeclaration;

/// Everything one rule run produced.
#[derive(Debug)]
pub struct RuleRun {
    /// The scanned statements, in source order.
    pub declarations: Vec<ImportDeclaration>,
    /// The findings, in report order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `source` and run the sort-imports rule over its import prologue.
pub fn run_sort_imports(
    source: &str,
    options: SortImportsOptions,
) -> Result<RuleRun, ScanError> {
    let declarations = scan_imports(source)?;
    let diagnostics = SortImports::check_scope(&source, &declarations, options);
    debug!(
        statements = declarations.len(),
        diagnostics = diagnostics.len(),
        "sort-imports run finished"
    );
    Ok(RuleRun {
        declarations,
        diagnostics,
    })
}

/// Apply the fixes attached to `diagnostics` to `source`.
///
/// Fixes are applied as non-overlapping splices: when two fixes overlap,
/// the leftmost one wins and the other is dropped. Splicing runs right to
/// left so earlier ranges stay valid.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut fixes: Vec<&Fix> = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .collect();
    fixes.sort_by_key(|fix| (u32::from(fix.range.start()), u32::from(fix.range.end())));

    let mut selected: Vec<&Fix> = Vec::new();
    for fix in fixes {
        let overlaps = selected
            .last()
            .is_some_and(|previous| fix.range.start() < previous.range.end());
        if !overlaps {
            selected.push(fix);
        }
    }

    let mut output = source.to_string();
    for fix in selected.iter().rev() {
        output.replace_range(
            std::ops::Range::<usize>::from(fix.range),
            &fix.replacement,
        );
    }
    output
}
