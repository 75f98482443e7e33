//! Grouping and comparison keys for import declarations.
//!
//! Ordering between statements is decided in two tiers: a coarse syntax
//! group, then a case-insensitive name comparison within a group. The
//! grouping is a deliberate policy (side-effect imports first, then
//! namespace imports, then default/named imports), not an alphabetical
//! property of the text.

use smol_str::SmolStr;

use crate::syntax::{BindingKind, ImportDeclaration};

/// The ordering bucket of a statement.
///
/// `Ord` follows the declaration order here, so buckets compare by
/// priority: side-effect before namespace before default/named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportGroup {
    /// `import 'mod'`, with an empty bindings list.
    SideEffect = 0,
    /// The first binding is `* as name`.
    Namespace = 1,
    /// The first binding is a default or braced-list name.
    Binding = 2,
}

impl ImportGroup {
    /// The bucket this declaration sorts into.
    pub fn of(decl: &ImportDeclaration) -> Self {
        match decl.first_binding() {
            None => Self::SideEffect,
            Some(binding) if matches!(binding.kind, BindingKind::Namespace) => Self::Namespace,
            Some(_) => Self::Binding,
        }
    }

    /// The bucket index (0 sorts first).
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// The derived comparison key of one statement: its group and the
/// case-folded name of its first binding.
///
/// `primary_name` prefers the external name when the first binding is a
/// braced entry (so `import { a as z }` keys on `a`), falls back to the
/// local name otherwise, and is `None` for side-effect imports. Those
/// compare by module specifier instead, a secondary key that only exists
/// inside the side-effect group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportKey {
    pub group: ImportGroup,
    pub primary_name: Option<SmolStr>,
}

impl ImportKey {
    /// Derive the key for a declaration. Total: never fails, whatever the
    /// binding shapes.
    pub fn from_declaration(decl: &ImportDeclaration) -> Self {
        let primary_name = decl.first_binding().map(|binding| {
            let name = binding.imported_name().unwrap_or(&binding.local_name);
            fold_name(name)
        });
        Self {
            group: ImportGroup::of(decl),
            primary_name,
        }
    }
}

/// Case-fold a name for comparison.
pub(crate) fn fold_name(name: &str) -> SmolStr {
    SmolStr::from(name.to_lowercase())
}
