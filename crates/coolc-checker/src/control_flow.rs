//! Binding and branching forms: `let`, `case`, `while` and `if`.

use crate::state::CheckerState;
use coolc_ast::{CaseBranch, Expr};
use coolc_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use coolc_common::{Atom, names};
use rustc_hash::FxHashSet;

impl<'a> CheckerState<'a> {
    /// `let name : type_decl <- init in body`
    ///
    /// The name is bound even when the initializer does not conform, so the
    /// body never reports a second error for it. An unknown declared type
    /// binds the name as `No_type`.
    pub(crate) fn check_let(
        &mut self,
        name: Atom,
        type_decl: Atom,
        init: &mut Expr,
        body: &mut Expr,
        line: u32,
    ) -> Atom {
        let init_ty = self.check_expr(init);

        self.with_scope(|this| {
            let known = this.ctx.table.is_known_type(type_decl);
            if !known {
                this.error_unknown_type(
                    line,
                    diagnostic_messages::UNDEFINED_TYPE_IN_LET,
                    &[this.name(type_decl), this.name(name)],
                );
            }
            this.bind(
                name,
                if known { type_decl } else { names::NO_TYPE },
                "let",
                line,
            );

            let body_ty = this.check_expr(body);
            if known && !this.conforms(init_ty, type_decl) {
                this.error_type_mismatch(
                    line,
                    diagnostic_messages::LET_INIT_DOES_NOT_CONFORM,
                    &[this.name(init_ty), this.name(name), this.name(type_decl)],
                );
            }
            body_ty
        })
    }

    /// `case scrutinee of branches esac`
    pub(crate) fn check_case(
        &mut self,
        scrutinee: &mut Expr,
        branches: &mut [CaseBranch],
        line: u32,
    ) -> Atom {
        self.check_expr(scrutinee);

        let mut seen = FxHashSet::default();
        let mut result: Option<Atom> = None;
        for branch in branches.iter_mut() {
            let branch_ty = self.with_scope(|this| {
                let exists = this.ctx.table.class_exists(branch.type_decl);
                if !exists {
                    this.error_unknown_type(
                        branch.line,
                        diagnostic_messages::UNDEFINED_TYPE_IN_CASE,
                        &[this.name(branch.type_decl)],
                    );
                } else if !seen.insert(branch.type_decl) {
                    this.error_at(
                        branch.line,
                        diagnostic_codes::DUPLICATE_CASE_BRANCH,
                        diagnostic_messages::DUPLICATE_CASE_BRANCH,
                        &[this.name(branch.type_decl)],
                    );
                }
                this.bind(
                    branch.name,
                    if exists { branch.type_decl } else { names::NO_TYPE },
                    "case branch",
                    branch.line,
                );
                this.check_expr(&mut branch.body)
            });
            result = Some(match result {
                Some(acc) => self.join(acc, branch_ty),
                None => branch_ty,
            });
        }

        if !self.ctx.options.join_branches {
            return names::OBJECT;
        }
        tracing::trace!(line, branches = branches.len(), "joined case branches");
        result.unwrap_or(names::OBJECT)
    }

    /// `while pred loop body pool`. Always `Object`.
    pub(crate) fn check_loop(&mut self, pred: &mut Expr, body: &mut Expr, line: u32) -> Atom {
        let pred_ty = self.check_expr(pred);
        if !self.is_condition(pred_ty) {
            self.error_type_mismatch(line, diagnostic_messages::PREDICATE_NOT_BOOL, &["Loop"]);
        }
        self.check_expr(body);
        names::OBJECT
    }

    /// `if pred then then_branch else else_branch fi`
    pub(crate) fn check_conditional(
        &mut self,
        pred: &mut Expr,
        then_branch: &mut Expr,
        else_branch: &mut Expr,
        line: u32,
    ) -> Atom {
        let pred_ty = self.check_expr(pred);
        if !self.is_condition(pred_ty) {
            self.error_type_mismatch(line, diagnostic_messages::PREDICATE_NOT_BOOL, &["If"]);
        }
        let then_ty = self.check_expr(then_branch);
        let else_ty = self.check_expr(else_branch);

        if self.ctx.options.join_branches {
            self.join(then_ty, else_ty)
        } else {
            names::OBJECT
        }
    }
}
