//! sort-imports rule tests
//!
//! Integration coverage through the reference harness:
//! - Statement ordering across syntax groups and names
//! - Blank-line group separation under both option values
//! - Member sorting, fix safety, and fix idempotence
//! - Options parsing, metadata, and the rule registry

pub mod tests_members;
pub mod tests_ordering;
pub mod tests_rule_api;
