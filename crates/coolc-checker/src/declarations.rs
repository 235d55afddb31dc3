//! Method and attribute declarations.

use crate::state::CheckerState;
use coolc_ast::{Attribute, Method};
use coolc_common::diagnostics::diagnostic_messages;
use coolc_common::names;
use tracing::trace;

impl<'a> CheckerState<'a> {
    /// Check a method body against its declared return type, with the
    /// formals bound in their own scope.
    pub fn check_method(&mut self, method: &mut Method) {
        trace!(method = self.name(method.name), "checking method");

        let return_type = method.return_type;
        let returns_known = self.ctx.table.is_known_type(return_type);
        if !returns_known {
            self.error_unknown_type(
                method.line,
                diagnostic_messages::UNDEFINED_RETURN_TYPE,
                &[self.name(return_type), self.name(method.name)],
            );
        }

        self.with_scope(|this| {
            for formal in &method.formals {
                let exists = this.ctx.table.class_exists(formal.type_decl);
                if !exists {
                    this.error_unknown_type(
                        formal.line,
                        diagnostic_messages::UNDEFINED_TYPE_OF_FORMAL,
                        &[this.name(formal.type_decl), this.name(formal.name)],
                    );
                }
                this.bind(
                    formal.name,
                    if exists { formal.type_decl } else { names::NO_TYPE },
                    "formal parameter",
                    formal.line,
                );
            }

            let body_ty = this.check_expr(&mut method.body);
            if returns_known && !this.conforms(body_ty, return_type) {
                this.error_type_mismatch(
                    method.line,
                    diagnostic_messages::BODY_DOES_NOT_CONFORM,
                    &[
                        this.name(body_ty),
                        this.name(method.name),
                        this.name(return_type),
                    ],
                );
            }
        });
    }

    /// Check an attribute's initializer against its declared type.
    ///
    /// An absent initializer is typed `No_type` and always conforms.
    pub fn check_attribute(&mut self, attr: &mut Attribute) {
        let known = self.ctx.table.is_known_type(attr.type_decl);
        if !known {
            self.error_unknown_type(
                attr.line,
                diagnostic_messages::UNDEFINED_TYPE_OF_ATTRIBUTE,
                &[self.name(attr.type_decl), self.name(attr.name)],
            );
        }

        let init_ty = self.check_expr(&mut attr.init);
        if known && !self.conforms(init_ty, attr.type_decl) {
            self.error_type_mismatch(
                attr.line,
                diagnostic_messages::ATTRIBUTE_INIT_DOES_NOT_CONFORM,
                &[
                    self.name(init_ty),
                    self.name(attr.name),
                    self.name(attr.type_decl),
                ],
            );
        }
    }
}
