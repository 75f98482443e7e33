//! Rule infrastructure and the rule set.
//!
//! Structure:
//!
//! ```text
//!   rules/
//!     ├── context.rs       RuleContext, SourceAccess (host contract)
//!     ├── diagnostics.rs   Diagnostic, Fix, MessageId, collector
//!     └── sort_imports/    the sort-imports rule
//! ```
//!
//! Hosts either instantiate a rule directly (`SortImports::new`) or go
//! through the registry (`create_rule`) when rule names and options arrive
//! from configuration.

pub mod context;
pub mod diagnostics;
pub mod sort_imports;

pub use context::{RuleContext, SourceAccess};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Fix, MessageId};
pub use sort_imports::{SortImports, SortImportsOptions};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::syntax::ImportDeclaration;
use sort_imports::OptionsError;

// ============================================================================
// RULE METADATA
// ============================================================================

/// Coarse classification hosts use to group findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// The code is likely wrong.
    Problem,
    /// The code could be written in a more consistent way.
    Suggestion,
    /// Purely presentational concerns.
    Layout,
}

impl RuleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Suggestion => "suggestion",
            Self::Layout => "layout",
        }
    }
}

/// Static description of one rule, independent of any instance.
#[derive(Debug)]
pub struct RuleMeta {
    /// Registry key, kebab-cased.
    pub name: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    /// Whether the rule belongs to the recommended baseline set.
    pub recommended: bool,
    /// Whether the rule can attach auto-corrections to its findings.
    pub fixable: bool,
}

// ============================================================================
// THE RULE TRAIT
// ============================================================================

/// A rule over the import statements of one scope.
///
/// The host creates one value per scope, calls [`visit_import`] once per
/// statement in source order, and collects findings from the context when
/// the scope ends.
///
/// [`visit_import`]: ImportRule::visit_import
pub trait ImportRule {
    /// Static metadata for this rule.
    fn meta(&self) -> &'static RuleMeta;

    /// Visit the next import statement of the scope.
    fn visit_import(&mut self, decl: &ImportDeclaration, ctx: &mut RuleContext<'_>);
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Rule lookup or instantiation failure.
#[derive(Debug, Error)]
pub enum RuleSetupError {
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

type CreateFn = fn(&serde_json::Value) -> Result<Box<dyn ImportRule>, RuleSetupError>;

struct RuleEntry {
    meta: &'static RuleMeta,
    create: CreateFn,
}

/// All registered rules, in registration order.
static REGISTRY: Lazy<IndexMap<&'static str, RuleEntry>> = Lazy::new(|| {
    let mut rules = IndexMap::new();
    rules.insert(
        sort_imports::META.name,
        RuleEntry {
            meta: &sort_imports::META,
            create: |options| {
                let options = SortImportsOptions::from_json(options)?;
                Ok(Box::new(SortImports::new(options)) as Box<dyn ImportRule>)
            },
        },
    );
    rules
});

/// Metadata of every registered rule, in registration order.
pub fn rules() -> impl Iterator<Item = &'static RuleMeta> {
    REGISTRY.values().map(|entry| entry.meta)
}

/// Metadata for one rule, if registered.
pub fn rule_meta(name: &str) -> Option<&'static RuleMeta> {
    REGISTRY.get(name).map(|entry| entry.meta)
}

/// Instantiate a rule by name with host-supplied JSON options
/// (`serde_json::Value::Null` for defaults).
pub fn create_rule(
    name: &str,
    options: &serde_json::Value,
) -> Result<Box<dyn ImportRule>, RuleSetupError> {
    let entry = REGISTRY
        .get(name)
        .ok_or_else(|| RuleSetupError::UnknownRule(name.to_string()))?;
    (entry.create)(options)
}
