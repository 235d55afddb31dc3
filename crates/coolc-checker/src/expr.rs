//! Rules for names, allocation, assignment, operators and blocks.

use crate::builtins::is_basic_value_class;
use crate::state::CheckerState;
use coolc_ast::{ArithOp, CompareOp, Expr};
use coolc_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use coolc_common::{Atom, names};

/// Whether an operand of type `actual` is acceptable where `expected` is
/// required. `No_type` is always accepted.
#[inline]
fn accepts(actual: Atom, expected: Atom) -> bool {
    actual == expected || actual == names::NO_TYPE
}

impl<'a> CheckerState<'a> {
    pub(crate) fn check_identifier(&mut self, name: Atom, line: u32) -> Atom {
        if name == names::SELF {
            return names::SELF_TYPE;
        }
        match self.lookup_identifier(name) {
            Some(ty) => ty,
            None => {
                self.error_unknown_identifier(name, line);
                names::NO_TYPE
            }
        }
    }

    pub(crate) fn check_new(&mut self, type_name: Atom, line: u32) -> Atom {
        if self.ctx.table.is_known_type(type_name) {
            return type_name;
        }
        self.error_unknown_type(
            line,
            diagnostic_messages::UNDEFINED_TYPE_IN_NEW,
            &[self.name(type_name)],
        );
        names::NO_TYPE
    }

    /// `name <- value`. The result is the value's type even when the
    /// assignment is rejected.
    pub(crate) fn check_assignment(&mut self, name: Atom, value: &mut Expr, line: u32) -> Atom {
        let value_ty = self.check_expr(value);

        if name == names::SELF {
            self.error_at(
                line,
                diagnostic_codes::RESERVED_IDENTIFIER,
                diagnostic_messages::CANNOT_ASSIGN_TO_SELF,
                &[],
            );
            return value_ty;
        }

        let Some(declared) = self.lookup_identifier(name) else {
            self.error_unknown_identifier(name, line);
            return value_ty;
        };
        if !self.conforms(value_ty, declared) {
            self.error_type_mismatch(
                line,
                diagnostic_messages::ASSIGNMENT_DOES_NOT_CONFORM,
                &[self.name(value_ty), self.name(declared), self.name(name)],
            );
        }
        value_ty
    }

    pub(crate) fn check_arithmetic(
        &mut self,
        op: ArithOp,
        lhs: &mut Expr,
        rhs: &mut Expr,
        line: u32,
    ) -> Atom {
        let left = self.check_expr(lhs);
        let right = self.check_expr(rhs);
        if !accepts(left, names::INT) || !accepts(right, names::INT) {
            self.error_type_mismatch(
                line,
                diagnostic_messages::NON_INT_ARITHMETIC,
                &[self.name(left), op.symbol(), self.name(right)],
            );
        }
        names::INT
    }

    pub(crate) fn check_comparison(
        &mut self,
        op: CompareOp,
        lhs: &mut Expr,
        rhs: &mut Expr,
        line: u32,
    ) -> Atom {
        let left = self.check_expr(lhs);
        let right = self.check_expr(rhs);
        if !accepts(left, names::INT) || !accepts(right, names::INT) {
            self.error_type_mismatch(
                line,
                diagnostic_messages::NON_INT_ARITHMETIC,
                &[self.name(left), op.symbol(), self.name(right)],
            );
        }
        names::BOOL
    }

    /// `lhs = rhs`. A basic value class may only be compared with itself.
    pub(crate) fn check_equality(&mut self, lhs: &mut Expr, rhs: &mut Expr, line: u32) -> Atom {
        let left = self.check_expr(lhs);
        let right = self.check_expr(rhs);
        let involves_basic = is_basic_value_class(left) || is_basic_value_class(right);
        if involves_basic && left != right && left != names::NO_TYPE && right != names::NO_TYPE {
            self.error_type_mismatch(
                line,
                diagnostic_messages::ILLEGAL_BASIC_COMPARISON,
                &[self.name(left), self.name(right)],
            );
        }
        names::BOOL
    }

    pub(crate) fn check_negation(&mut self, inner: &mut Expr, line: u32) -> Atom {
        let ty = self.check_expr(inner);
        if !accepts(ty, names::INT) {
            self.error_type_mismatch(line, diagnostic_messages::NON_INT_NEGATION, &[self.name(ty)]);
        }
        names::INT
    }

    pub(crate) fn check_not(&mut self, inner: &mut Expr, line: u32) -> Atom {
        let ty = self.check_expr(inner);
        if !accepts(ty, names::BOOL) {
            self.error_type_mismatch(line, diagnostic_messages::NON_BOOL_NOT, &[self.name(ty)]);
        }
        names::BOOL
    }

    /// Every expression in order; the block has the type of the last one.
    pub(crate) fn check_block(&mut self, body: &mut [Expr]) -> Atom {
        body.iter_mut()
            .fold(names::NO_TYPE, |_, expr| self.check_expr(expr))
    }

    /// Whether a predicate of type `ty` is acceptable.
    pub(crate) fn is_condition(&self, ty: Atom) -> bool {
        accepts(ty, names::BOOL)
    }
}
