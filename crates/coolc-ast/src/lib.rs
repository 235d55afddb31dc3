//! Abstract syntax tree consumed by the semantic analyzer.
//!
//! The tree is produced by a parser (not part of this workspace) or by
//! [`AstFactory`]. The analyzer reads class, feature and expression structure
//! and writes exactly one thing back: the inferred type slot of each [`Expr`].

mod factory;
pub mod node;
pub mod visitor;

pub use factory::AstFactory;
pub use node::{
    ArithOp, Attribute, CaseBranch, Class, CompareOp, Expr, ExprKind, Feature, Formal, Method,
    Program,
};
pub use visitor::{for_each_child, for_each_child_mut, walk};
