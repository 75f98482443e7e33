//! Import declaration node shapes.
//!
//! The analysis core never parses source text. The host engine owns the real
//! AST and hands the rule one [`ImportDeclaration`] view per statement, in
//! source order. Every view is read-only for the duration of one scope
//! analysis and carries the byte ranges the rewriter needs to splice text
//! verbatim.

use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::LineRange;

/// Presence flags for comments attached to a binding.
///
/// The host decides attachment (typically: any comment between the binding
/// and its neighbouring tokens). The rewriter only needs presence, not the
/// comment text; a set flag withholds the member-sort fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttachedComments {
    /// A comment sits between the previous token and this binding.
    pub leading: bool,
    /// A comment sits between this binding and the next token.
    pub trailing: bool,
}

impl AttachedComments {
    pub const NONE: Self = Self { leading: false, trailing: false };

    /// Whether any comment is attached on either side.
    pub fn any(self) -> bool {
        self.leading || self.trailing
    }
}

/// How one binding introduces its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// The anonymous default position: `import name from 'mod'`.
    Default,
    /// A whole-module alias: `import * as name from 'mod'`.
    Namespace,
    /// One entry of a braced list: `import { imported as local } from 'mod'`.
    ///
    /// `imported` is the external name; an un-renamed entry carries its
    /// local name here too.
    Named { imported: SmolStr },
}

/// One name introduced by an import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub kind: BindingKind,
    /// The name bound in the importing scope. Always present, whatever the
    /// kind.
    pub local_name: SmolStr,
    /// The binding's own source range (for `Named`, spanning the whole
    /// `imported as local` text).
    pub range: TextRange,
    pub comments: AttachedComments,
}

impl ImportBinding {
    /// A default-position binding.
    pub fn default_import(local_name: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            kind: BindingKind::Default,
            local_name: local_name.into(),
            range,
            comments: AttachedComments::NONE,
        }
    }

    /// A `* as name` binding.
    pub fn namespace(local_name: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            kind: BindingKind::Namespace,
            local_name: local_name.into(),
            range,
            comments: AttachedComments::NONE,
        }
    }

    /// A braced-list binding; pass the same name twice when not renamed.
    pub fn named(
        imported: impl Into<SmolStr>,
        local_name: impl Into<SmolStr>,
        range: TextRange,
    ) -> Self {
        Self {
            kind: BindingKind::Named { imported: imported.into() },
            local_name: local_name.into(),
            range,
            comments: AttachedComments::NONE,
        }
    }

    /// Attach comment presence flags.
    pub fn with_comments(mut self, comments: AttachedComments) -> Self {
        self.comments = comments;
        self
    }

    /// Whether this binding came from a braced list.
    pub fn is_named(&self) -> bool {
        matches!(self.kind, BindingKind::Named { .. })
    }

    /// The external name, present only for `Named` bindings.
    pub fn imported_name(&self) -> Option<&SmolStr> {
        match &self.kind {
            BindingKind::Named { imported } => Some(imported),
            BindingKind::Default | BindingKind::Namespace => None,
        }
    }
}

/// A module-level import statement, as supplied by the host.
///
/// `bindings` preserves source textual order; a side-effect-only import
/// (`import 'mod'`) has an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// The module specifier literal, without quotes.
    pub source_module: SmolStr,
    pub bindings: Vec<ImportBinding>,
    /// The whole statement's source range.
    pub range: TextRange,
    /// The lines the statement occupies (0-indexed, inclusive).
    pub line_range: LineRange,
}

impl ImportDeclaration {
    pub fn new(
        source_module: impl Into<SmolStr>,
        bindings: Vec<ImportBinding>,
        range: TextRange,
        line_range: LineRange,
    ) -> Self {
        Self {
            source_module: source_module.into(),
            bindings,
            range,
            line_range,
        }
    }

    /// Whether this is a side-effect-only import (no bindings at all).
    pub fn is_side_effect(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn first_binding(&self) -> Option<&ImportBinding> {
        self.bindings.first()
    }

    /// The `Named` bindings in source order, skipping default/namespace
    /// entries.
    pub fn named_bindings(&self) -> impl Iterator<Item = &ImportBinding> {
        self.bindings.iter().filter(|b| b.is_named())
    }
}
