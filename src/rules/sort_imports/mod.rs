//! The `sort-imports` rule: ordered import statements, sorted members.
//!
//! Wiring:
//!
//! ```text
//!   SortImports (per-scope visitor)
//!     ├── classify  (syntax group + comparison key per statement)
//!     ├── order     (sequence state machine across statements)
//!     └── members   (braced-list scan + reorder fix per statement)
//! ```
//!
//! One rule value is created per scope and visited once per import
//! statement in source order. Statement-level and member-level checks are
//! independent: a single statement can produce one of each.

mod classify;
mod members;
mod order;

pub use classify::{ImportGroup, ImportKey};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::context::{RuleContext, SourceAccess};
use super::diagnostics::{Diagnostic, MessageId};
use super::{ImportRule, RuleCategory, RuleMeta};
use crate::syntax::ImportDeclaration;
use order::SequenceState;

// ============================================================================
// OPTIONS
// ============================================================================

/// Host-supplied configuration. Unknown properties are rejected so config
/// typos fail loudly instead of silently disabling behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SortImportsOptions {
    /// Treat runs of statements separated by blank lines as independent
    /// groups: ordering restarts after each gap.
    pub allow_separated_groups: bool,
}

/// Malformed rule options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid sort-imports options: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl SortImportsOptions {
    /// Parse options from the host's JSON config value. `null` (options
    /// omitted) means defaults.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, OptionsError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    /// Parse options from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The JSON schema the host advertises for this rule's options.
    pub fn schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "allowSeparatedGroups": {
                    "type": "boolean",
                    "default": false
                }
            },
            "additionalProperties": false
        })
    }
}

// ============================================================================
// METADATA
// ============================================================================

pub static META: RuleMeta = RuleMeta {
    name: "sort-imports",
    category: RuleCategory::Suggestion,
    description: "enforce sorted import declarations within modules",
    recommended: false,
    fixable: true,
};

// ============================================================================
// RULE
// ============================================================================

/// Per-scope visitor state for the rule.
#[derive(Debug, Default)]
pub struct SortImports {
    options: SortImportsOptions,
    sequence: SequenceState,
}

impl SortImports {
    pub fn new(options: SortImportsOptions) -> Self {
        Self {
            options,
            sequence: SequenceState::new(),
        }
    }

    pub fn options(&self) -> SortImportsOptions {
        self.options
    }

    /// Visit the next import statement of the scope, in source order.
    pub fn visit_import(&mut self, decl: &ImportDeclaration, ctx: &mut RuleContext<'_>) {
        if let Some(message_id) = self
            .sequence
            .advance(decl, self.options.allow_separated_groups)
        {
            ctx.report(Diagnostic::new(message_id, decl.range));
        }
        self.check_members(decl, ctx);
    }

    /// Member-level check, anchored at the first out-of-order member.
    fn check_members(&self, decl: &ImportDeclaration, ctx: &mut RuleContext<'_>) {
        let Some(unsorted) = members::first_unsorted_member(decl) else {
            return;
        };

        let mut diagnostic = Diagnostic::new(MessageId::SortMembersAlphabetically, unsorted.range)
            .with_member_name(unsorted.local_name.clone());
        if let Some(fix) = members::member_sort_fix(decl, ctx.source()) {
            diagnostic = diagnostic.with_fix(fix);
        }
        ctx.report(diagnostic);
    }

    /// Run the rule over one scope's statements and collect the findings.
    ///
    /// Convenience for hosts without their own visitor plumbing; equivalent
    /// to a fresh rule visiting each statement in order.
    pub fn check_scope(
        source: &dyn SourceAccess,
        declarations: &[ImportDeclaration],
        options: SortImportsOptions,
    ) -> Vec<Diagnostic> {
        let mut rule = Self::new(options);
        let mut ctx = RuleContext::new(source);
        for decl in declarations {
            rule.visit_import(decl, &mut ctx);
        }
        ctx.finish()
    }
}

impl ImportRule for SortImports {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn visit_import(&mut self, decl: &ImportDeclaration, ctx: &mut RuleContext<'_>) {
        SortImports::visit_import(self, decl, ctx);
    }
}
