//! Dynamic and static dispatch.
//!
//! Receiver and arguments are always checked first, so every argument is
//! annotated even when the call itself cannot be resolved.

use crate::class_table::ClassId;
use crate::state::CheckerState;
use coolc_ast::Expr;
use coolc_common::diagnostics::diagnostic_messages;
use coolc_common::{Atom, names};
use smallvec::SmallVec;

/// Type and line of each checked argument.
type CheckedArgs = SmallVec<[(Atom, u32); 4]>;

impl<'a> CheckerState<'a> {
    /// `receiver.method(args)`
    pub(crate) fn check_dispatch(
        &mut self,
        receiver: &mut Expr,
        method: Atom,
        args: &mut [Expr],
        line: u32,
    ) -> Atom {
        let receiver_ty = self.check_expr(receiver);
        let args = self.check_arguments(args);

        if receiver_ty == names::NO_TYPE {
            return names::NO_TYPE;
        }
        let Some(class_id) = self
            .ctx
            .table
            .get_class(receiver_ty, self.ctx.current_class)
        else {
            self.error_unknown_method(method, receiver_ty, line);
            return names::NO_TYPE;
        };
        self.resolve_call(class_id, receiver_ty, method, &args, line)
    }

    /// `receiver@type_name.method(args)`
    pub(crate) fn check_static_dispatch(
        &mut self,
        receiver: &mut Expr,
        type_name: Atom,
        method: Atom,
        args: &mut [Expr],
        line: u32,
    ) -> Atom {
        let receiver_ty = self.check_expr(receiver);
        let args = self.check_arguments(args);

        let Some(class_id) = self.ctx.table.class_id(type_name) else {
            self.error_unknown_type(
                line,
                diagnostic_messages::UNDEFINED_TYPE_IN_STATIC_DISPATCH,
                &[self.name(type_name)],
            );
            return names::NO_TYPE;
        };
        if !self.conforms(receiver_ty, type_name) {
            self.error_type_mismatch(
                line,
                diagnostic_messages::STATIC_DISPATCH_DOES_NOT_CONFORM,
                &[self.name(receiver_ty), self.name(type_name)],
            );
        }
        self.resolve_call(class_id, receiver_ty, method, &args, line)
    }

    fn check_arguments(&mut self, args: &mut [Expr]) -> CheckedArgs {
        args.iter_mut()
            .map(|arg| (self.check_expr(arg), arg.line))
            .collect()
    }

    /// Look `method` up from `class_id` and check the arguments against its
    /// formals. A `SELF_TYPE` return becomes the receiver's type.
    fn resolve_call(
        &mut self,
        class_id: ClassId,
        receiver_ty: Atom,
        method: Atom,
        args: &[(Atom, u32)],
        line: u32,
    ) -> Atom {
        let table = self.ctx.table;
        let Some((_, signature)) = table.resolve_method(class_id, method) else {
            self.error_unknown_method(method, table.descriptor(class_id).name, line);
            return names::NO_TYPE;
        };

        if signature.formals.len() != args.len() {
            self.error_arity_mismatch(method, args.len(), signature.formals.len(), line);
        } else {
            for (formal, &(arg_ty, arg_line)) in signature.formals.iter().zip(args) {
                if !self.conforms(arg_ty, formal.type_decl) {
                    self.error_type_mismatch(
                        arg_line,
                        diagnostic_messages::ARGUMENT_DOES_NOT_CONFORM,
                        &[
                            self.name(method),
                            self.name(arg_ty),
                            self.name(formal.name),
                            self.name(formal.type_decl),
                        ],
                    );
                }
            }
        }

        if signature.return_type == names::SELF_TYPE {
            receiver_ty
        } else {
            signature.return_type
        }
    }
}
