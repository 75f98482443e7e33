//! # impsort-base
//!
//! Core library for import-declaration ordering analysis: syntax-group
//! classification, alphabetical sequence checks, and safe member
//! reordering fixes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! harness   → Reference host: scanner, rule runner, fix application
//!   ↓
//! rules     → Rule infrastructure, diagnostics, the sort-imports rule
//!   ↓
//! syntax    → Import declaration and binding views
//!   ↓
//! base      → Primitives (TextRange, LineIndex, LineRange)
//! ```
//!
//! The quickest way in is the harness:
//!
//! ```
//! use impsort::harness::run_sort_imports;
//! use impsort::rules::SortImportsOptions;
//!
//! let source = "import b from 'b'\nimport a from 'a'\n";
//! let run = run_sort_imports(source, SortImportsOptions::default()).unwrap();
//! assert_eq!(run.diagnostics.len(), 1);
//! assert_eq!(run.diagnostics[0].message(), "Imports should be sorted alphabetically.");
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → rules → harness)
// ============================================================================

/// Foundation types: TextRange re-exports, LineIndex, LineRange
pub mod base;

/// Syntax views: ImportDeclaration, ImportBinding, attached comments
pub mod syntax;

/// Rules: context, diagnostics, registry, the sort-imports rule
pub mod rules;

/// Reference host: logos scanner, rule runner, fix application
pub mod harness;

// Re-export foundation types
pub use base::{LineCol, LineIndex, LineRange, TextRange, TextSize};

// Re-export the core rule surface
pub use rules::{
    Diagnostic, Fix, ImportRule, MessageId, RuleContext, SortImports, SortImportsOptions,
    create_rule, rule_meta,
};
pub use syntax::{BindingKind, ImportBinding, ImportDeclaration};
