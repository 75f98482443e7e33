//! Sequence ordering checks over one scope's import statements.
//!
//! A small state machine advanced once per visited statement: either no
//! previous statement is remembered, or the previous statement's key is.
//! The state lives in the per-scope rule value, never in module globals,
//! so analyses of independent files stay isolated.

use smol_str::SmolStr;
use tracing::trace;

use super::classify::{ImportGroup, ImportKey, fold_name};
use crate::rules::diagnostics::MessageId;
use crate::syntax::ImportDeclaration;

/// What the validator remembers about the statement it last visited:
/// exactly the pieces later comparisons consume.
#[derive(Debug, Clone)]
struct PreviousImport {
    key: ImportKey,
    /// Case-folded module specifier, the tie-breaking key inside the
    /// side-effect group where no binding name exists.
    source_module: SmolStr,
    end_line: u32,
}

/// Tracks the previous statement across one scope walk.
#[derive(Debug, Default)]
pub(crate) struct SequenceState {
    previous: Option<PreviousImport>,
}

impl SequenceState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Visit the next statement in source order.
    ///
    /// Returns the ordering violation to report on `current`, if any. The
    /// statement becomes the new comparison base unconditionally, so one
    /// misplaced statement does not cascade into reports on its successors.
    pub(crate) fn advance(
        &mut self,
        current: &ImportDeclaration,
        allow_separated_groups: bool,
    ) -> Option<MessageId> {
        if allow_separated_groups {
            let separated = match &self.previous {
                Some(previous) => {
                    lines_between(previous.end_line, current.line_range.start) > 0
                }
                None => false,
            };
            if separated {
                trace!(
                    line = current.line_range.start,
                    "separated group starts a fresh ordering run"
                );
                self.previous = None;
            }
        }

        let key = ImportKey::from_declaration(current);
        let module = fold_name(&current.source_module);

        let verdict = self
            .previous
            .as_ref()
            .and_then(|previous| compare(previous, &key, &module));
        if let Some(message_id) = verdict {
            trace!(%message_id, module = %current.source_module, "import out of order");
        }

        self.previous = Some(PreviousImport {
            key,
            source_module: module,
            end_line: current.line_range.end,
        });
        verdict
    }
}

/// Compare `current` (as its derived key and folded module) against the
/// remembered previous statement. At most one verdict: group transitions
/// and within-group comparisons are mutually exclusive by construction.
fn compare(
    previous: &PreviousImport,
    key: &ImportKey,
    module: &SmolStr,
) -> Option<MessageId> {
    if key.group != previous.key.group {
        // Ascending group transitions are fine; only a higher-priority
        // group after a lower one is a violation.
        if key.group < previous.key.group {
            return Some(MessageId::UnexpectedSyntaxOrder);
        }
        return None;
    }

    if let (Some(current_name), Some(previous_name)) =
        (&key.primary_name, &previous.key.primary_name)
    {
        if current_name < previous_name {
            return Some(MessageId::SortImportsAlphabetically);
        }
    }

    // Side-effect imports carry no binding names; order them by module
    // specifier instead.
    if key.group == ImportGroup::SideEffect && *module < previous.source_module {
        return Some(MessageId::SortImportsAlphabetically);
    }

    None
}

/// Lines strictly between the end of one statement and the start of the
/// next. Statements on the same line or on consecutive lines count zero.
fn lines_between(previous_end: u32, current_start: u32) -> u32 {
    current_start.saturating_sub(previous_end + 1)
}
