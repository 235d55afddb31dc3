use super::*;

#[test]
fn test_display_uses_file_line_prefix() {
    let diag = Diagnostic::error(
        "list.cl",
        14,
        "Undeclared identifier x.",
        diagnostic_codes::UNKNOWN_IDENTIFIER,
    );
    assert_eq!(diag.to_string(), "list.cl:14: Undeclared identifier x.");
    assert_eq!(diag.category, DiagnosticCategory::Error);
}

#[test]
fn test_format_message_replaces_every_placeholder() {
    let text = format_message(diagnostic_messages::INHERITANCE_CYCLE, &["A"]);
    assert_eq!(
        text,
        "Class A, or an ancestor of A, is involved in an inheritance cycle."
    );

    let text = format_message(diagnostic_messages::NON_INT_ARITHMETIC, &["Int", "+", "String"]);
    assert_eq!(text, "non-Int arguments: Int + String");
}

#[test]
fn test_fatal_split_follows_code_family() {
    assert!(code_is_fatal(diagnostic_codes::DUPLICATE_CLASS_NAME));
    assert!(code_is_fatal(diagnostic_codes::ATTRIBUTE_REDEFINED_IN_DESCENDANT));
    assert!(!code_is_fatal(diagnostic_codes::UNKNOWN_TYPE));
    assert!(!code_is_fatal(diagnostic_codes::TYPE_CONFORMANCE_FAILURE));

    let diag = Diagnostic::error("a.cl", 1, "x", diagnostic_codes::INHERITANCE_CYCLE);
    assert!(diag.is_fatal());
}

#[test]
fn test_every_code_has_a_template() {
    for code in [
        diagnostic_codes::DUPLICATE_CLASS_NAME,
        diagnostic_codes::RESERVED_CLASS_NAME,
        diagnostic_codes::DUPLICATE_FEATURE_IN_CLASS,
        diagnostic_codes::MISSING_PARENT,
        diagnostic_codes::MISSING_ROOT_CLASSES,
        diagnostic_codes::INHERITANCE_CYCLE,
        diagnostic_codes::DETACHED_CLASS,
        diagnostic_codes::INCOMPATIBLE_OVERRIDE,
        diagnostic_codes::ATTRIBUTE_REDEFINED_IN_DESCENDANT,
        diagnostic_codes::UNKNOWN_TYPE,
        diagnostic_codes::UNKNOWN_IDENTIFIER,
        diagnostic_codes::UNKNOWN_METHOD,
        diagnostic_codes::ARITY_MISMATCH,
        diagnostic_codes::TYPE_CONFORMANCE_FAILURE,
        diagnostic_codes::RESERVED_IDENTIFIER,
        diagnostic_codes::DUPLICATE_BINDING,
        diagnostic_codes::DUPLICATE_CASE_BRANCH,
        diagnostic_codes::EXPRESSION_TOO_DEEP,
    ] {
        assert!(get_message_template(code).is_some(), "missing template for {code}");
    }
    assert_eq!(get_message_template(9999), None);
}

#[test]
fn test_sort_is_stable_within_a_line() {
    let mut diags = vec![
        Diagnostic::error("b.cl", 3, "third", 2001),
        Diagnostic::error("a.cl", 9, "second", 2001),
        Diagnostic::error("a.cl", 2, "first-a", 2002),
        Diagnostic::error("a.cl", 2, "first-b", 2003),
    ];
    sort_diagnostics(&mut diags);

    let texts: Vec<&str> = diags.iter().map(|d| d.message_text.as_str()).collect();
    assert_eq!(texts, vec!["first-a", "first-b", "second", "third"]);
}

#[test]
fn test_diagnostic_serializes_to_json() {
    let diag = Diagnostic::error("a.cl", 7, "boom", diagnostic_codes::UNKNOWN_METHOD);
    let json = serde_json::to_value(&diag).expect("diagnostic should serialize");
    assert_eq!(json["file"], "a.cl");
    assert_eq!(json["line"], 7);
    assert_eq!(json["code"], 2003);
    assert_eq!(json["category"], "Error");
}

#[test]
fn test_category_discriminants_follow_severity() {
    assert_eq!(DiagnosticCategory::Error as u8, 0);
    assert_eq!(DiagnosticCategory::Warning as u8, 1);
    assert_eq!(DiagnosticCategory::Message as u8, 2);
}
