//! Rule execution context: source access and the report sink.
//!
//! The host owns the analyzed text and the diagnostic pipeline; a rule sees
//! both only through [`RuleContext`]. One context is created per scope and
//! consumed when the scope ends, so nothing leaks across files.

use text_size::TextRange;
use tracing::trace;

use super::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::base::range_text;

/// Read-only access to the analyzed source text.
///
/// Rules only ever slice ranges out of the text to assemble rewrites; hosts
/// with richer text storage (ropes, piece tables) implement this over their
/// own buffers.
pub trait SourceAccess {
    /// Raw text for `range`.
    fn slice(&self, range: TextRange) -> &str;
}

impl SourceAccess for str {
    fn slice(&self, range: TextRange) -> &str {
        range_text(self, range)
    }
}

impl SourceAccess for String {
    fn slice(&self, range: TextRange) -> &str {
        range_text(self, range)
    }
}

impl<T: SourceAccess + ?Sized> SourceAccess for &T {
    fn slice(&self, range: TextRange) -> &str {
        (**self).slice(range)
    }
}

/// Per-scope execution context handed to a rule.
pub struct RuleContext<'a> {
    source: &'a dyn SourceAccess,
    diagnostics: DiagnosticCollector,
}

impl<'a> RuleContext<'a> {
    pub fn new(source: &'a dyn SourceAccess) -> Self {
        Self {
            source,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// The source accessor, borrowed for the scope's full lifetime.
    pub fn source(&self) -> &'a dyn SourceAccess {
        self.source
    }

    /// Report one finding.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        trace!(
            message_id = %diagnostic.message_id,
            has_fix = diagnostic.has_fix(),
            "rule reported a diagnostic"
        );
        self.diagnostics.add(diagnostic);
    }

    /// Number of findings reported so far.
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Consume the context, yielding diagnostics in report order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics.finish()
    }
}
