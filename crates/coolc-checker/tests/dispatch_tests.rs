//! Dynamic and static dispatch.

mod support;

use coolc_common::diagnostics::diagnostic_codes;
use support::{check, main_class};

#[test]
fn test_unknown_method_does_not_stop_siblings() {
    let checked = check(|f| {
        f.at(3);
        let io = f.new_object("IO");
        let bad = f.dispatch(io, "print", vec![]);
        f.at(4);
        let bad_sum = f.plus(f.int(1), f.bool(true));
        let body = f.block(vec![bad, bad_sum]);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(
        checked.codes(),
        vec![
            diagnostic_codes::UNKNOWN_METHOD,
            diagnostic_codes::TYPE_CONFORMANCE_FAILURE,
        ]
    );
    assert_eq!(
        checked.diagnostics[0].to_string(),
        "test.cl:3: Dispatch to undefined method print on type IO."
    );
    assert_eq!(checked.types_in("Main", "main")[1], Some("_no_type"));
}

#[test]
fn test_arguments_are_checked_even_when_the_method_is_missing() {
    let checked = check(|f| {
        let missing = f.ident("missing");
        let args = vec![f.plus(f.int(1), f.int(2)), missing];
        let body = f.call("nothing_here", args);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(
        checked.codes(),
        vec![
            diagnostic_codes::UNKNOWN_IDENTIFIER,
            diagnostic_codes::UNKNOWN_METHOD,
        ]
    );
    assert_eq!(checked.program.untyped_count(), 0);
}

#[test]
fn test_arity_mismatch() {
    let checked = check(|f| {
        let io = f.new_object("IO");
        let args = vec![f.string("a"), f.string("b")];
        let body = f.dispatch(io, "out_string", args);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(checked.codes(), vec![diagnostic_codes::ARITY_MISMATCH]);
    assert_eq!(
        checked.messages(),
        vec!["Method out_string called with 2 argument(s) but declared with 1."]
    );
    // The declared return type is still used
    assert_eq!(checked.type_of("Main", "main"), Some("IO"));
}

#[test]
fn test_argument_must_conform_positionally() {
    let checked = check(|f| {
        let receiver = f.string("hello");
        f.at(8);
        let start = f.int(0);
        let bad = f.string("3");
        let body = f.dispatch(receiver, "substr", vec![start, bad]);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(checked.codes(), vec![diagnostic_codes::TYPE_CONFORMANCE_FAILURE]);
    assert_eq!(
        checked.diagnostics[0].to_string(),
        "test.cl:8: In call of method substr, type String of parameter arg2 does not conform to declared type Int."
    );
    assert_eq!(checked.type_of("Main", "main"), Some("String"));
}

#[test]
fn test_subclass_arguments_conform() {
    let checked = check(|f| {
        let param_body = f.ident("x");
        let take = f.method("take", &[("x", "IO")], "IO", param_body);
        let holder = f.class("Holder", "Object", vec![take]);
        let target = f.new_object("Holder");
        let arg = f.new_object("Main");
        let body = f.dispatch(target, "take", vec![arg]);
        let main = f.method("main", &[], "Object", body);
        vec![holder, f.class("Main", "IO", vec![main])]
    });
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(checked.type_of("Main", "main"), Some("IO"));
}

#[test]
fn test_self_type_return_takes_the_receiver_type() {
    let checked = check(|f| {
        // (new Main).out_string("a").out_int(1)
        let receiver = f.new_object("Main");
        let first = f.dispatch(receiver, "out_string", vec![f.string("a")]);
        let chained = f.dispatch(first, "out_int", vec![f.int(1)]);
        let main = f.method("main", &[], "Main", chained);

        // copy() on self stays SELF_TYPE
        let me = f.self_ref();
        let copied = f.dispatch(me, "copy", vec![]);
        let clone = f.method("clone", &[], "SELF_TYPE", copied);
        vec![f.class("Main", "IO", vec![main, clone])]
    });
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(checked.type_of("Main", "main"), Some("Main"));
    assert_eq!(checked.type_of("Main", "clone"), Some("SELF_TYPE"));
}

#[test]
fn test_implicit_self_dispatch_uses_current_class() {
    let checked = check(|f| {
        let helper_body = f.int(7);
        let helper = f.method("helper", &[], "Int", helper_body);
        let body = f.call("helper", vec![]);
        vec![main_class(f, body, vec![helper])]
    });
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(checked.type_of("Main", "main"), Some("Int"));
}

#[test]
fn test_dispatch_on_error_receiver_is_silent() {
    let checked = check(|f| {
        let receiver = f.ident("nobody");
        let body = f.dispatch(receiver, "whatever", vec![f.int(1)]);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(checked.codes(), vec![diagnostic_codes::UNKNOWN_IDENTIFIER]);
    assert_eq!(checked.type_of("Main", "main"), Some("_no_type"));
    assert_eq!(checked.program.untyped_count(), 0);
}

#[test]
fn test_static_dispatch_resolves_from_the_named_class() {
    let checked = check(|f| {
        let base_body = f.int(1);
        let base_m = f.method("m", &[], "Int", base_body);
        let base = f.class("Base", "Object", vec![base_m]);
        let derived_body = f.int(2);
        let derived_m = f.method("m", &[], "Int", derived_body);
        let derived = f.class("Derived", "Base", vec![derived_m]);

        let receiver = f.new_object("Derived");
        let body = f.static_dispatch(receiver, "Base", "m", vec![]);
        vec![base, derived, main_class(f, body, vec![])]
    });
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(checked.type_of("Main", "main"), Some("Int"));
}

#[test]
fn test_static_dispatch_requires_conformance() {
    let checked = check(|f| {
        let receiver = f.new_object("IO");
        let body = f.static_dispatch(receiver, "String", "length", vec![]);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(checked.codes(), vec![diagnostic_codes::TYPE_CONFORMANCE_FAILURE]);
    assert_eq!(
        checked.messages(),
        vec!["Expression type IO does not conform to declared static dispatch type String."]
    );
    assert_eq!(checked.type_of("Main", "main"), Some("Int"));
}

#[test]
fn test_static_dispatch_to_unknown_or_self_type() {
    let checked = check(|f| {
        let first_receiver = f.self_ref();
        let ghost = f.static_dispatch(first_receiver, "Ghost", "m", vec![]);
        let second_receiver = f.self_ref();
        let self_type = f.static_dispatch(second_receiver, "SELF_TYPE", "copy", vec![]);
        let body = f.block(vec![ghost, self_type]);
        vec![main_class(f, body, vec![])]
    });
    assert_eq!(
        checked.codes(),
        vec![diagnostic_codes::UNKNOWN_TYPE, diagnostic_codes::UNKNOWN_TYPE]
    );
    assert_eq!(checked.messages()[0], "Static dispatch to undefined class Ghost.");
    assert_eq!(checked.type_of("Main", "main"), Some("_no_type"));
}

#[test]
fn test_static_dispatch_self_type_return_is_the_receiver_type() {
    let checked = check(|f| {
        let receiver = f.new_object("Main");
        let body = f.static_dispatch(receiver, "Object", "copy", vec![]);
        vec![main_class(f, body, vec![])]
    });
    assert!(checked.is_clean(), "{:?}", checked.messages());
    assert_eq!(checked.type_of("Main", "main"), Some("Main"));
}
