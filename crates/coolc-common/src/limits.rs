//! Centralized limits and thresholds for the semantic analyzer.

/// Maximum depth for expression type checking.
///
/// Each nested expression adds a frame to the checker's call stack. Past this
/// depth the checker reports the expression and does not descend further.
///
/// ```text
/// (((((((((1 + 2) + 3) + 4) + 5) /* ... 500 levels ... */)))))
/// x.f().f().f().f() /* ... hundreds of chained dispatches ... */
/// ```
pub const MAX_EXPR_CHECK_DEPTH: u32 = 500;

/// Initial capacity of a class's scope stack.
///
/// A method body opens one scope for its formals; `let` and `case` open one
/// more each. Nesting beyond this is rare and only costs a reallocation.
pub const INITIAL_SCOPE_CAPACITY: usize = 8;
