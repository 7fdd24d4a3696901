//! Rule syntax checking.

use idocit::services::rules::{RuleEngine, RuleError, SyntaxRuleEngine, ThematicRoleContext, check_syntax};
use idocit::services::{is_rule_valid, reduce_grid};
use idocit::structure::ThematicGrid;
use rstest::rstest;

use crate::helpers::tree_fixtures::customer_service;
use crate::helpers::vocabulary::role;

#[rstest]
#[case("println('Hello World!');", true)]
#[case("foo bar baz", false)]
#[case("role.name == 'OBJECT' && operation.numerus != 'PLURAL';", true)]
#[case("isInterfaceLevel() || hasPublicAccessibleAttributes()", true)]
#[case("// a comment only\n", true)]
#[case("/* unterminated", false)]
#[case("a ==", false)]
#[case("f(,)", false)]
fn test_is_rule_valid(#[case] rule: &str, #[case] valid: bool) {
    assert_eq!(is_rule_valid(rule), valid);
}

#[test]
fn test_syntax_error_position() {
    match check_syntax("x = (1 + 2;") {
        Err(RuleError::Syntax { offset, .. }) => assert_eq!(offset, 10),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_evaluation_is_not_available() {
    let f = customer_service();
    let context = ThematicRoleContext::for_element(&f.tree, f.customer, role("OBJECT")).unwrap();
    assert_eq!(context.predicate.as_deref(), Some("move"));

    let engine = SyntaxRuleEngine;
    assert!(engine.is_valid("true"));
    assert!(matches!(
        engine.evaluate("true", &context),
        Err(RuleError::NotYetSpecified(_))
    ));
    assert!(matches!(
        reduce_grid(&ThematicGrid::new("Any"), &f.tree, f.operation),
        Err(RuleError::NotYetSpecified(_))
    ));
}
