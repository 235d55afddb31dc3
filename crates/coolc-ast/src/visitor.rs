//! Child traversal over expression nodes.
//!
//! Children are visited in evaluation order: receiver before arguments,
//! initializer before body, scrutinee before branches.

use crate::node::{Expr, ExprKind};

/// Call `f` on each direct subexpression of `expr`.
pub fn for_each_child<'a, F>(expr: &'a Expr, mut f: F)
where
    F: FnMut(&'a Expr),
{
    match &expr.kind {
        ExprKind::IntLit(_)
        | ExprKind::StrLit(_)
        | ExprKind::BoolLit(_)
        | ExprKind::Ident(_)
        | ExprKind::New(_)
        | ExprKind::NoExpr => {}
        ExprKind::Assign { value, .. } => f(value),
        ExprKind::Dispatch { receiver, args, .. }
        | ExprKind::StaticDispatch { receiver, args, .. } => {
            f(receiver);
            args.iter().for_each(f);
        }
        ExprKind::Arith { lhs, rhs, .. }
        | ExprKind::Compare { lhs, rhs, .. }
        | ExprKind::Eq { lhs, rhs } => {
            f(lhs);
            f(rhs);
        }
        ExprKind::Neg(inner) | ExprKind::Not(inner) | ExprKind::IsVoid(inner) => f(inner),
        ExprKind::Block(body) => body.iter().for_each(f),
        ExprKind::Let { init, body, .. } => {
            f(init);
            f(body);
        }
        ExprKind::Case {
            scrutinee,
            branches,
        } => {
            f(scrutinee);
            for branch in branches {
                f(&branch.body);
            }
        }
        ExprKind::Loop { pred, body } => {
            f(pred);
            f(body);
        }
        ExprKind::Cond {
            pred,
            then_branch,
            else_branch,
        } => {
            f(pred);
            f(then_branch);
            f(else_branch);
        }
    }
}

/// Mutable counterpart of [`for_each_child`].
pub fn for_each_child_mut<F>(expr: &mut Expr, mut f: F)
where
    F: FnMut(&mut Expr),
{
    match &mut expr.kind {
        ExprKind::IntLit(_)
        | ExprKind::StrLit(_)
        | ExprKind::BoolLit(_)
        | ExprKind::Ident(_)
        | ExprKind::New(_)
        | ExprKind::NoExpr => {}
        ExprKind::Assign { value, .. } => f(value),
        ExprKind::Dispatch { receiver, args, .. }
        | ExprKind::StaticDispatch { receiver, args, .. } => {
            f(receiver);
            args.iter_mut().for_each(f);
        }
        ExprKind::Arith { lhs, rhs, .. }
        | ExprKind::Compare { lhs, rhs, .. }
        | ExprKind::Eq { lhs, rhs } => {
            f(lhs);
            f(rhs);
        }
        ExprKind::Neg(inner) | ExprKind::Not(inner) | ExprKind::IsVoid(inner) => f(inner),
        ExprKind::Block(body) => body.iter_mut().for_each(f),
        ExprKind::Let { init, body, .. } => {
            f(init);
            f(body);
        }
        ExprKind::Case {
            scrutinee,
            branches,
        } => {
            f(scrutinee);
            for branch in branches {
                f(&mut branch.body);
            }
        }
        ExprKind::Loop { pred, body } => {
            f(pred);
            f(body);
        }
        ExprKind::Cond {
            pred,
            then_branch,
            else_branch,
        } => {
            f(pred);
            f(then_branch);
            f(else_branch);
        }
    }
}

/// Pre-order walk over `expr` and all of its descendants.
pub fn walk<'a>(expr: &'a Expr, f: &mut dyn FnMut(&'a Expr)) {
    f(expr);
    for_each_child(expr, |child| walk(child, &mut *f));
}

#[cfg(test)]
#[path = "tests/visitor_tests.rs"]
mod tests;
