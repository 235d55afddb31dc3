//! Diagnostic types and message lookup for the semantic analyzer.
//!
//! Every diagnostic carries the declaring file and source line of the node it
//! is about and renders as `<file>:<line>: <message>`.
//!
//! Codes are split in two families:
//! - `1xxx`: class-table construction and validation. These abort analysis.
//! - `2xxx`: expression-level problems. These are recorded and checking goes on.

use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Message,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const DUPLICATE_CLASS_NAME: u32 = 1001;
    pub const RESERVED_CLASS_NAME: u32 = 1002;
    pub const DUPLICATE_FEATURE_IN_CLASS: u32 = 1003;
    pub const MISSING_PARENT: u32 = 1004;
    pub const MISSING_ROOT_CLASSES: u32 = 1005;
    pub const INHERITANCE_CYCLE: u32 = 1006;
    pub const DETACHED_CLASS: u32 = 1007;
    pub const INCOMPATIBLE_OVERRIDE: u32 = 1008;
    pub const ATTRIBUTE_REDEFINED_IN_DESCENDANT: u32 = 1009;

    pub const UNKNOWN_TYPE: u32 = 2001;
    pub const UNKNOWN_IDENTIFIER: u32 = 2002;
    pub const UNKNOWN_METHOD: u32 = 2003;
    pub const ARITY_MISMATCH: u32 = 2004;
    pub const TYPE_CONFORMANCE_FAILURE: u32 = 2005;
    pub const RESERVED_IDENTIFIER: u32 = 2006;
    pub const DUPLICATE_BINDING: u32 = 2007;
    pub const DUPLICATE_CASE_BRANCH: u32 = 2008;
    pub const EXPRESSION_TOO_DEEP: u32 = 2009;
}

pub mod diagnostic_messages {
    // Construction and validation
    pub const CLASS_IS_DUPLICATED: &str = "Class {0} was previously defined.";
    pub const CLASS_NAME_IS_RESERVED: &str = "Class name {0} is reserved.";
    pub const METHOD_IS_MULTIPLY_DEFINED: &str = "Method {0} is multiply defined in class {1}.";
    pub const ATTRIBUTE_IS_MULTIPLY_DEFINED: &str =
        "Attribute {0} is multiply defined in class {1}.";
    pub const FEATURE_NAMED_SELF: &str = "'self' cannot be the name of a feature in class {0}.";
    pub const PARENT_NOT_FOUND: &str = "Class {0} inherits from an undefined class {1}.";
    pub const ROOT_CLASS_MISSING: &str = "Class {0} is not defined.";
    pub const INHERITANCE_CYCLE: &str =
        "Class {0}, or an ancestor of {0}, is involved in an inheritance cycle.";
    pub const CLASS_IS_DETACHED: &str = "Class {0} is not reachable from class Object.";
    pub const OVERRIDE_RETURN_TYPE_DIFFERS: &str =
        "In redefined method {0} of class {1}, return type {2} is different from original return type {3}.";
    pub const OVERRIDE_FORMALS_DIFFER: &str =
        "In redefined method {0} of class {1}, the formal parameters differ from those declared in class {2}.";
    pub const ATTRIBUTE_REDEFINED: &str =
        "Attribute {0} of class {1} is already defined in ancestor class {2}.";

    // Expressions
    pub const UNDEFINED_TYPE: &str = "Type {0} is not defined.";
    pub const UNDEFINED_TYPE_OF_FORMAL: &str = "Class {0} of formal parameter {1} is undefined.";
    pub const UNDEFINED_TYPE_OF_ATTRIBUTE: &str = "Class {0} of attribute {1} is undefined.";
    pub const UNDEFINED_RETURN_TYPE: &str = "Undefined return type {0} in method {1}.";
    pub const UNDEFINED_TYPE_IN_NEW: &str = "'new' used with undefined class {0}.";
    pub const UNDEFINED_TYPE_IN_LET: &str = "Class {0} of let-bound identifier {1} is undefined.";
    pub const UNDEFINED_TYPE_IN_CASE: &str = "Class {0} of case branch is undefined.";
    pub const UNDEFINED_TYPE_IN_STATIC_DISPATCH: &str =
        "Static dispatch to undefined class {0}.";
    pub const UNDECLARED_IDENTIFIER: &str = "Undeclared identifier {0}.";
    pub const UNDEFINED_METHOD: &str = "Dispatch to undefined method {0} on type {1}.";
    pub const WRONG_ARGUMENT_COUNT: &str =
        "Method {0} called with {1} argument(s) but declared with {2}.";
    pub const ARGUMENT_DOES_NOT_CONFORM: &str =
        "In call of method {0}, type {1} of parameter {2} does not conform to declared type {3}.";
    pub const STATIC_DISPATCH_DOES_NOT_CONFORM: &str =
        "Expression type {0} does not conform to declared static dispatch type {1}.";
    pub const ASSIGNMENT_DOES_NOT_CONFORM: &str =
        "Type {0} of assigned expression does not conform to declared type {1} of identifier {2}.";
    pub const LET_INIT_DOES_NOT_CONFORM: &str =
        "Inferred type {0} of initialization of {1} does not conform to identifier's declared type {2}.";
    pub const ATTRIBUTE_INIT_DOES_NOT_CONFORM: &str =
        "Inferred type {0} of initialization of attribute {1} does not conform to declared type {2}.";
    pub const BODY_DOES_NOT_CONFORM: &str =
        "Inferred return type {0} of method {1} does not conform to declared return type {2}.";
    pub const NON_INT_ARITHMETIC: &str = "non-Int arguments: {0} {1} {2}";
    pub const NON_INT_NEGATION: &str = "Argument of '~' has type {0} instead of Int.";
    pub const NON_BOOL_NOT: &str = "Argument of 'not' has type {0} instead of Bool.";
    pub const ILLEGAL_BASIC_COMPARISON: &str = "Illegal comparison with a basic type: {0} = {1}";
    pub const PREDICATE_NOT_BOOL: &str = "{0} condition does not have type Bool.";
    pub const SELF_CANNOT_BE_BOUND: &str = "'self' cannot be bound in a {0}.";
    pub const CANNOT_ASSIGN_TO_SELF: &str = "Cannot assign to 'self'.";
    pub const NAME_ALREADY_BOUND: &str = "Identifier {0} is bound more than once in the same scope.";
    pub const DUPLICATE_CASE_BRANCH: &str = "Duplicate branch {0} in case statement.";
    pub const EXPRESSION_TOO_DEEP: &str =
        "Expression nesting exceeds the analyzer limit of {0} levels.";
}

use diagnostic_codes as codes;
use diagnostic_messages as messages;

/// Primary message template for each code.
pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    error_message(codes::DUPLICATE_CLASS_NAME, messages::CLASS_IS_DUPLICATED),
    error_message(codes::RESERVED_CLASS_NAME, messages::CLASS_NAME_IS_RESERVED),
    error_message(
        codes::DUPLICATE_FEATURE_IN_CLASS,
        messages::METHOD_IS_MULTIPLY_DEFINED,
    ),
    error_message(codes::MISSING_PARENT, messages::PARENT_NOT_FOUND),
    error_message(codes::MISSING_ROOT_CLASSES, messages::ROOT_CLASS_MISSING),
    error_message(codes::INHERITANCE_CYCLE, messages::INHERITANCE_CYCLE),
    error_message(codes::DETACHED_CLASS, messages::CLASS_IS_DETACHED),
    error_message(
        codes::INCOMPATIBLE_OVERRIDE,
        messages::OVERRIDE_FORMALS_DIFFER,
    ),
    error_message(
        codes::ATTRIBUTE_REDEFINED_IN_DESCENDANT,
        messages::ATTRIBUTE_REDEFINED,
    ),
    error_message(codes::UNKNOWN_TYPE, messages::UNDEFINED_TYPE),
    error_message(codes::UNKNOWN_IDENTIFIER, messages::UNDECLARED_IDENTIFIER),
    error_message(codes::UNKNOWN_METHOD, messages::UNDEFINED_METHOD),
    error_message(codes::ARITY_MISMATCH, messages::WRONG_ARGUMENT_COUNT),
    error_message(
        codes::TYPE_CONFORMANCE_FAILURE,
        messages::ASSIGNMENT_DOES_NOT_CONFORM,
    ),
    error_message(codes::RESERVED_IDENTIFIER, messages::SELF_CANNOT_BE_BOUND),
    error_message(codes::DUPLICATE_BINDING, messages::NAME_ALREADY_BOUND),
    error_message(codes::DUPLICATE_CASE_BRANCH, messages::DUPLICATE_CASE_BRANCH),
    error_message(codes::EXPRESSION_TOO_DEEP, messages::EXPRESSION_TOO_DEEP),
];

const fn error_message(code: u32, message: &'static str) -> DiagnosticMessage {
    DiagnosticMessage {
        code,
        category: DiagnosticCategory::Error,
        message,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub line: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, line: u32, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            line,
            message_text: message.into(),
        }
    }

    /// Whether this diagnostic stops analysis before expressions are checked.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        code_is_fatal(self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message_text)
    }
}

/// Construction and validation codes abort the analysis.
#[inline]
pub fn code_is_fatal(code: u32) -> bool {
    (1000..2000).contains(&code)
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Order diagnostics by (file, line), keeping discovery order for ties.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    // `sort_by` is stable
    diagnostics.sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod tests;
