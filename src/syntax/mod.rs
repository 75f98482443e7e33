//! Syntax views consumed from the host engine.
//!
//! The host parses source into its own AST and projects each import
//! statement into the shapes defined here. See [`import`] for the node
//! shapes and the ownership rules.

pub mod import;

pub use import::{AttachedComments, BindingKind, ImportBinding, ImportDeclaration};
