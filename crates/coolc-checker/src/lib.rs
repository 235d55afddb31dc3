//! Semantic analysis for coolc.
//!
//! This crate contains:
//! - `ClassTable`: built-in and user classes, with the construction and
//!   validation passes that must succeed before any expression is checked
//! - The subtype relation (`inherits`), least upper bound (`join`) and
//!   inheritance-aware member lookup
//! - `ScopedEnvironment`: lexically scoped identifier bindings
//! - `CheckerState`: the per-class expression type checker
//! - `check_program`: checks every class, sequentially or on the rayon pool

// Class table and its passes
pub mod builtins;
mod class_features;
mod class_inheritance;
pub mod class_table;
pub mod relations;

// Checking
pub mod context;
pub mod environment;
pub mod state;

// Rules (each adds methods to CheckerState)
mod call_checker;
mod control_flow;
mod declarations;
pub mod dispatch;
mod error_reporter;
mod expr;

pub use class_table::{
    AttributeSignature, ClassDescriptor, ClassId, ClassTable, FeatureSignature, FormalSignature,
    MethodSignature, PassResult,
};
pub use context::{CheckerContext, CheckerOptions};
pub use dispatch::ExpressionDispatcher;
pub use environment::{BindError, ScopedEnvironment};
pub use state::{CheckerState, check_program};
