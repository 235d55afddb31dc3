//! Expression type computation dispatcher.
//!
//! `ExpressionDispatcher` matches on the expression kind and hands each node
//! to the rule that types it. The rule's result is written into the node's
//! type slot here, so every visited node is annotated exactly once.

use crate::state::CheckerState;
use coolc_ast::{Expr, ExprKind};
use coolc_common::{Atom, names};
use tracing::trace;

pub struct ExpressionDispatcher<'a, 'b> {
    pub checker: &'a mut CheckerState<'b>,
}

impl<'a, 'b> ExpressionDispatcher<'a, 'b> {
    pub fn new(checker: &'a mut CheckerState<'b>) -> Self {
        Self { checker }
    }

    /// Compute the type of `expr` from its kind.
    pub fn dispatch_type_computation(&mut self, expr: &mut Expr) -> Atom {
        let line = expr.line;
        let checker = &mut *self.checker;

        match &mut expr.kind {
            ExprKind::IntLit(_) => names::INT,
            ExprKind::StrLit(_) => names::STRING,
            ExprKind::BoolLit(_) => names::BOOL,
            ExprKind::Ident(name) => checker.check_identifier(*name, line),
            ExprKind::Assign { name, value } => checker.check_assignment(*name, value, line),
            ExprKind::New(type_name) => checker.check_new(*type_name, line),

            ExprKind::Dispatch {
                receiver,
                method,
                args,
            } => checker.check_dispatch(receiver, *method, args, line),
            ExprKind::StaticDispatch {
                receiver,
                type_name,
                method,
                args,
            } => checker.check_static_dispatch(receiver, *type_name, *method, args, line),

            ExprKind::Arith { op, lhs, rhs } => checker.check_arithmetic(*op, lhs, rhs, line),
            ExprKind::Compare { op, lhs, rhs } => checker.check_comparison(*op, lhs, rhs, line),
            ExprKind::Eq { lhs, rhs } => checker.check_equality(lhs, rhs, line),
            ExprKind::Neg(inner) => checker.check_negation(inner, line),
            ExprKind::Not(inner) => checker.check_not(inner, line),
            ExprKind::IsVoid(inner) => {
                checker.check_expr(inner);
                names::BOOL
            }

            ExprKind::Block(body) => checker.check_block(body),
            ExprKind::Let {
                name,
                type_decl,
                init,
                body,
            } => checker.check_let(*name, *type_decl, init, body, line),
            ExprKind::Case {
                scrutinee,
                branches,
            } => checker.check_case(scrutinee, branches, line),
            ExprKind::Loop { pred, body } => checker.check_loop(pred, body, line),
            ExprKind::Cond {
                pred,
                then_branch,
                else_branch,
            } => checker.check_conditional(pred, then_branch, else_branch, line),

            ExprKind::NoExpr => names::NO_TYPE,
        }
    }
}

impl<'a> CheckerState<'a> {
    /// Type-check `expr` and its subexpressions, write its type slot and
    /// return the type.
    ///
    /// Past the configured nesting limit the node is reported, typed as
    /// `No_type` and its subtree left unvisited.
    pub fn check_expr(&mut self, expr: &mut Expr) -> Atom {
        if self.ctx.depth >= self.ctx.options.max_expression_depth {
            self.error_expression_too_deep(expr.line);
            expr.set_ty(names::NO_TYPE);
            return names::NO_TYPE;
        }

        self.ctx.depth += 1;
        let ty = ExpressionDispatcher::new(self).dispatch_type_computation(expr);
        self.ctx.depth -= 1;

        trace!(line = expr.line, ty = self.name(ty), "typed expression");
        expr.set_ty(ty);
        ty
    }
}
