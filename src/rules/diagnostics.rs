//! Diagnostics and fixes: what a rule reports back to the host.
//!
//! A rule never mutates text and never aborts a scope walk: findings are
//! [`Diagnostic`] values, and an auto-correction is an optional [`Fix`]
//! attached to one. Hosts own severity and application; this module only
//! describes findings precisely enough to render and apply them.

use std::fmt;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextRange;

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// Identifier of a rule message. The set is closed: hosts key their own
/// catalogs and suppression config on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// Two same-group statements are out of alphabetical order.
    SortImportsAlphabetically,
    /// A braced-list member is out of alphabetical order.
    SortMembersAlphabetically,
    /// A statement of a higher-priority syntax group follows a lower one.
    UnexpectedSyntaxOrder,
}

impl MessageId {
    /// The wire identifier, camelCased the way host catalogs spell it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SortImportsAlphabetically => "sortImportsAlphabetically",
            Self::SortMembersAlphabetically => "sortMembersAlphabetically",
            Self::UnexpectedSyntaxOrder => "unexpectedSyntaxOrder",
        }
    }

    /// The message template. `{{memberName}}` is interpolated from the
    /// diagnostic payload.
    pub fn template(self) -> &'static str {
        match self {
            Self::SortImportsAlphabetically => "Imports should be sorted alphabetically.",
            Self::SortMembersAlphabetically => {
                "Member '{{memberName}}' of the import declaration should be sorted alphabetically."
            }
            Self::UnexpectedSyntaxOrder => "Expected imports without variables to be on the top.",
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIXES
// ============================================================================

/// A concrete text replacement: swap the text at `range` for `replacement`.
///
/// Ranges are byte offsets into the text the diagnostics were produced
/// against; a fix must never be applied to text mutated since the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub range: TextRange,
    pub replacement: String,
}

impl Fix {
    pub fn new(range: TextRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Apply this fix to `source`, returning the rewritten text.
    pub fn apply(&self, source: &str) -> String {
        let start = usize::from(self.range.start());
        let end = usize::from(self.range.end());
        let mut out = String::with_capacity(source.len() - (end - start) + self.replacement.len());
        out.push_str(&source[..start]);
        out.push_str(&self.replacement);
        out.push_str(&source[end..]);
        out
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// One reported finding, anchored on a source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message_id: MessageId,
    /// The anchor: the offending statement, or the offending member for
    /// member-order findings.
    pub range: TextRange,
    /// Interpolation payload for `{{memberName}}`; set only for
    /// [`MessageId::SortMembersAlphabetically`].
    pub member_name: Option<SmolStr>,
    /// The auto-correction, when one could be computed safely.
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(message_id: MessageId, range: TextRange) -> Self {
        Self {
            message_id,
            range,
            member_name: None,
            fix: None,
        }
    }

    /// Set the `{{memberName}}` payload.
    pub fn with_member_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.member_name = Some(name.into());
        self
    }

    /// Attach an auto-correction.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Whether an auto-correction is attached.
    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }

    /// Render the interpolated message.
    pub fn message(&self) -> String {
        let template = self.message_id.template();
        match &self.member_name {
            Some(name) => template.replace("{{memberName}}", name),
            None => template.to_string(),
        }
    }
}

// ============================================================================
// COLLECTOR
// ============================================================================

/// Collects diagnostics during one scope analysis.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Consume the collector, yielding diagnostics in report order,
    /// deduplicated by identifier, anchor, and payload.
    pub fn finish(self) -> Vec<Diagnostic> {
        let mut seen = FxHashSet::default();
        self.diagnostics
            .into_iter()
            .filter(|d| {
                let key = (
                    d.message_id,
                    u32::from(d.range.start()),
                    u32::from(d.range.end()),
                    d.member_name.clone(),
                );
                seen.insert(key)
            })
            .collect()
    }
}
