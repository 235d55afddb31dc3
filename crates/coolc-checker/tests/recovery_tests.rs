//! Branch joins, options, error recovery and diagnostic ordering.

mod support;

use coolc_ast::AstFactory;
use coolc_checker::CheckerOptions;
use coolc_common::diagnostics::diagnostic_codes;
use coolc_common::limits::MAX_EXPR_CHECK_DEPTH;
use coolc_common::{Diagnostic, DiagnosticCategory};
use support::{Checked, check, check_with, main_class};

/// `if true then new Left else new Right fi` and the matching `case`, where
/// Left and Right both inherit Side.
fn branching(options: CheckerOptions) -> Checked {
    check_with(options, |f| {
        let side = f.class("Side", "Object", vec![]);
        let left = f.class("Left", "Side", vec![]);
        let right = f.class("Right", "Side", vec![]);

        let pred = f.bool(true);
        let then_branch = f.new_object("Left");
        let else_branch = f.new_object("Right");
        let cond = f.if_then_else(pred, then_branch, else_branch);
        let pick = f.method("pick", &[], "Side", cond);

        let scrutinee = f.new_object("Left");
        let l_body = f.ident("l");
        let l = f.branch("l", "Left", l_body);
        let r_body = f.ident("r");
        let r = f.branch("r", "Right", r_body);
        let case = f.case(scrutinee, vec![l, r]);
        let choose = f.method("choose", &[], "Object", case);

        let body = f.int(0);
        vec![side, left, right, main_class(f, body, vec![pick, choose])]
    })
}

#[test]
fn test_branches_join_to_nearest_common_ancestor() {
    let checked = branching(CheckerOptions::default());
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(checked.type_of("Main", "pick"), Some("Side"));
    assert_eq!(checked.type_of("Main", "choose"), Some("Side"));
}

#[test]
fn test_baseline_branches_yield_object() {
    let checked = branching(CheckerOptions::baseline());
    // Object does not conform to the declared Side
    assert_eq!(checked.codes(), vec![diagnostic_codes::TYPE_CONFORMANCE_FAILURE]);
    assert_eq!(checked.type_of("Main", "pick"), Some("Object"));
    assert_eq!(checked.type_of("Main", "choose"), Some("Object"));
}

#[test]
fn test_conditional_with_error_branch_takes_the_other_type() {
    let checked = check(|f| {
        let pred = f.bool(false);
        let then_branch = f.ident("missing");
        let else_branch = f.int(1);
        let body = f.if_then_else(pred, then_branch, else_branch);
        let m = f.method("m", &[], "Int", body);
        let main_body = f.int(0);
        vec![main_class(f, main_body, vec![m])]
    });
    assert_eq!(checked.codes(), vec![diagnostic_codes::UNKNOWN_IDENTIFIER]);
    assert_eq!(checked.type_of("Main", "m"), Some("Int"));
}

#[test]
fn test_loop_is_object_and_predicates_must_be_bool() {
    let checked = check(|f| {
        f.at(2);
        let pred = f.int(1);
        let body = f.int(2);
        let bad_loop = f.while_loop(pred, body);
        f.at(3);
        let pred = f.string("yes");
        let cond = f.if_then_else(pred, f.int(1), f.int(2));
        f.at(4);
        let pred = f.ident("unknown");
        let quiet_loop = f.while_loop(pred, f.int(3));
        let main_body = f.block(vec![bad_loop, cond, quiet_loop]);
        vec![main_class(f, main_body, vec![])]
    });
    assert_eq!(
        checked.messages(),
        vec![
            "Loop condition does not have type Bool.",
            "If condition does not have type Bool.",
            "Undeclared identifier unknown.",
        ]
    );
    assert_eq!(checked.types_in("Main", "main")[1], Some("Object"));
    assert_eq!(checked.type_of("Main", "main"), Some("Object"));
}

#[test]
fn test_errors_in_every_class_are_reported() {
    let checked = check(|f| {
        f.at(10);
        let a_body = f.ident("nope");
        let a_method = f.method("m", &[], "Object", a_body);
        let a = f.class("A", "Object", vec![a_method]);
        f.at(2);
        let b_body = f.not(f.int(1));
        let b_method = f.method("m", &[], "Bool", b_body);
        let b = f.class("B", "Object", vec![b_method]);
        f.at(5);
        let main_body = f.new_object("Nowhere");
        vec![a, b, main_class(f, main_body, vec![])]
    });
    let lines: Vec<u32> = checked.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 5, 10]);
    assert!(checked.diagnostics.iter().all(|d| !d.is_fatal()));
    assert!(checked
        .diagnostics
        .iter()
        .all(|d| d.category == DiagnosticCategory::Error));
}

fn many_classes(f: &mut AstFactory<'_>) -> Vec<coolc_ast::Class> {
    let mut classes = Vec::new();
    for i in 0..24u32 {
        f.at(i + 1);
        let body = if i % 3 == 0 {
            f.plus(f.int(1), f.string("x"))
        } else {
            let x = f.ident("x");
            f.plus(x, f.int(i as i64))
        };
        let attr = f.attr_uninit("x", "Int");
        let method = f.method("m", &[], "Int", body);
        classes.push(f.class(&format!("C{i}"), "Object", vec![attr, method]));
    }
    let body = f.int(0);
    classes.push(main_class(f, body, vec![]));
    classes
}

#[test]
fn test_parallel_checking_matches_sequential() {
    let sequential = check_with(CheckerOptions::default(), many_classes);
    let parallel = check_with(CheckerOptions::default().with_parallel(true), many_classes);

    assert_eq!(sequential.diagnostics.len(), 8);
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
    assert_eq!(sequential.program, parallel.program);
    assert_eq!(parallel.program.untyped_count(), 0);
}

#[test]
fn test_nesting_beyond_the_limit_is_reported() {
    let options = CheckerOptions::default().with_max_expression_depth(16);
    let checked = check_with(options, |f| {
        let mut expr = f.int(0);
        for _ in 0..40 {
            expr = f.neg(expr);
        }
        vec![main_class(f, expr, vec![])]
    });
    assert_eq!(checked.codes(), vec![diagnostic_codes::EXPRESSION_TOO_DEEP]);
    assert_eq!(
        checked.messages(),
        vec!["Expression nesting exceeds the analyzer limit of 16 levels."]
    );
    // The cut-off node is typed, its subtree is not
    let types = checked.types_in("Main", "main");
    assert_eq!(types[0], Some("Int"));
    assert_eq!(types[16], Some("_no_type"));
    assert_eq!(types[17], None);
}

#[test]
fn test_default_limit_allows_ordinary_nesting() {
    let checked = check(|f| {
        let mut expr = f.int(0);
        for i in 0..200 {
            expr = f.plus(expr, f.int(i));
        }
        vec![main_class(f, expr, vec![])]
    });
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(CheckerOptions::default().max_expression_depth, MAX_EXPR_CHECK_DEPTH);
}

#[test]
fn test_options_from_json() {
    let options: CheckerOptions = serde_json::from_str(r#"{"joinBranches": false}"#).unwrap();
    assert_eq!(options, CheckerOptions::baseline());

    let options: CheckerOptions =
        serde_json::from_str(r#"{"parallel": true, "maxExpressionDepth": 64}"#).unwrap();
    assert!(options.join_branches);
    assert!(options.parallel);
    assert_eq!(options.max_expression_depth, 64);

    let defaults: CheckerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, CheckerOptions::default());

    assert!(serde_json::from_str::<CheckerOptions>(r#"{"joinBranch": true}"#).is_err());
}

#[test]
fn test_diagnostics_serialize_for_tooling() {
    let checked = check(|f| {
        let body = f.ident("ghost");
        vec![main_class(f, body, vec![])]
    });
    let diagnostic: &Diagnostic = &checked.diagnostics[0];
    let json = serde_json::to_value(diagnostic).unwrap();
    assert_eq!(json["code"], 2002);
    assert_eq!(json["file"], "test.cl");
    assert_eq!(json["line"], 1);
}
