//! Member ordering within one braced import list.
//!
//! Independent of the statement-level checks: a statement in the wrong
//! position can still have sorted members and vice versa. The rewriter
//! splices sorted member slices back between the original separator
//! slices, so commas, spacing, and line breaks survive untouched.

use tracing::trace;

use super::classify::fold_name;
use crate::base::TextRange;
use crate::rules::context::SourceAccess;
use crate::rules::diagnostics::Fix;
use crate::syntax::{ImportBinding, ImportDeclaration};

/// Scan the braced members left to right and return the first one whose
/// case-folded local name sorts strictly before its predecessor's.
///
/// Default and namespace bindings are not members of the braced list and
/// never participate.
pub(crate) fn first_unsorted_member(decl: &ImportDeclaration) -> Option<&ImportBinding> {
    let mut previous = None;
    for binding in decl.named_bindings() {
        let name = fold_name(&binding.local_name);
        if let Some(previous) = &previous {
            if *previous > name {
                return Some(binding);
            }
        }
        previous = Some(name);
    }
    None
}

/// Build the reordering fix for a statement with unsorted members.
///
/// The replacement covers the span from the first to the last braced
/// member. Sorted member texts are interleaved with the verbatim
/// inter-member slices of the original sequence, so the k-th separator
/// stays exactly where it was.
///
/// Returns `None` when any member carries an attached comment: reordering
/// would detach the comment from what it annotates, so the finding is
/// reported without an auto-correction.
pub(crate) fn member_sort_fix(
    decl: &ImportDeclaration,
    source: &dyn SourceAccess,
) -> Option<Fix> {
    let members: Vec<&ImportBinding> = decl.named_bindings().collect();
    if members.len() < 2 {
        return None;
    }
    if members.iter().any(|member| member.comments.any()) {
        trace!(
            module = %decl.source_module,
            "members carry comments, reorder fix withheld"
        );
        return None;
    }

    // Stable sort: members with equal folded names keep their original
    // relative order.
    let mut sorted = members.clone();
    sorted.sort_by_cached_key(|member| fold_name(&member.local_name));

    let mut replacement = String::new();
    for (index, member) in sorted.iter().enumerate() {
        replacement.push_str(source.slice(member.range));
        if index + 1 < members.len() {
            let separator =
                TextRange::new(members[index].range.end(), members[index + 1].range.start());
            replacement.push_str(source.slice(separator));
        }
    }

    let span = TextRange::new(members[0].range.start(), members[members.len() - 1].range.end());
    Some(Fix::new(span, replacement))
}
