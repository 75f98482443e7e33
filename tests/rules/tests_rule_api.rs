//! The registry and options surface a host configures the rule through.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use impsort::harness::scan_imports;
use impsort::rules::{
    MessageId, RuleCategory, RuleContext, RuleSetupError, SortImportsOptions, create_rule,
    rule_meta, rules,
};
use serde_json::json;

#[test]
fn test_registry_surfaces_the_rule() {
    let names: Vec<_> = rules().map(|meta| meta.name).collect();
    assert_eq!(names, ["sort-imports"]);

    let meta = rule_meta("sort-imports").unwrap();
    assert_eq!(meta.category, RuleCategory::Suggestion);
    assert_eq!(
        meta.description,
        "enforce sorted import declarations within modules"
    );
    assert!(meta.fixable);
    assert!(!meta.recommended);
}

#[test]
fn test_unknown_rule_is_a_setup_error() {
    let Err(error) = create_rule("no-unused-vars", &serde_json::Value::Null) else {
        panic!("expected an unknown-rule error");
    };
    assert!(matches!(error, RuleSetupError::UnknownRule(_)));
    assert_eq!(error.to_string(), "unknown rule 'no-unused-vars'");
}

#[test]
fn test_malformed_options_are_a_setup_error() {
    // Unknown option names must fail loudly, not silently no-op.
    let Err(error) = create_rule("sort-imports", &json!({ "memberSyntaxSortOrder": [] })) else {
        panic!("expected an options error");
    };
    assert!(matches!(error, RuleSetupError::Options(_)));
    assert!(error.to_string().starts_with("invalid sort-imports options:"));

    assert!(create_rule("sort-imports", &json!({ "allowSeparatedGroups": "yes" })).is_err());
}

#[test]
fn test_default_options_through_the_registry() {
    let source = "import b from 'b'\n\nimport a from 'a'\n";
    let declarations = scan_imports(source).unwrap();

    let mut rule = create_rule("sort-imports", &serde_json::Value::Null).unwrap();
    let mut ctx = RuleContext::new(&source);
    for decl in &declarations {
        rule.visit_import(decl, &mut ctx);
    }

    let diagnostics = ctx.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message_id,
        MessageId::SortImportsAlphabetically
    );
}

#[test]
fn test_configured_rule_honors_separated_groups() {
    let source = "import b from 'b'\n\nimport a from 'a'\n";
    let declarations = scan_imports(source).unwrap();

    let mut rule =
        create_rule("sort-imports", &json!({ "allowSeparatedGroups": true })).unwrap();
    let mut ctx = RuleContext::new(&source);
    for decl in &declarations {
        rule.visit_import(decl, &mut ctx);
    }

    assert!(ctx.finish().is_empty());
}

#[test]
fn test_options_schema_shape() {
    let schema = SortImportsOptions::schema();
    assert_eq!(schema["type"], "object");
    assert_eq!(
        schema["properties"]["allowSeparatedGroups"]["type"],
        "boolean"
    );
    assert_eq!(schema["properties"]["allowSeparatedGroups"]["default"], false);
    assert_eq!(schema["additionalProperties"], false);
}

#[test]
fn test_options_serialize_camel_cased() {
    let options = SortImportsOptions {
        allow_separated_groups: true,
    };
    let value = serde_json::to_value(options).unwrap();
    assert_eq!(value, json!({ "allowSeparatedGroups": true }));
}

#[test]
fn test_message_ids_use_host_catalog_spelling() {
    assert_eq!(
        MessageId::SortImportsAlphabetically.as_str(),
        "sortImportsAlphabetically"
    );
    assert_eq!(
        MessageId::SortMembersAlphabetically.as_str(),
        "sortMembersAlphabetically"
    );
    assert_eq!(
        MessageId::UnexpectedSyntaxOrder.as_str(),
        "unexpectedSyntaxOrder"
    );
}
