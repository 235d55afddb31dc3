//! Error reporting (`error_*` for emission).
//!
//! Every helper appends to the class's diagnostic list and returns. None of
//! them stops the caller.

use crate::state::CheckerState;
use coolc_common::diagnostics::{diagnostic_codes, diagnostic_messages, format_message};
use coolc_common::{Atom, Diagnostic};
use tracing::trace;

impl<'a> CheckerState<'a> {
    /// Emit a diagnostic at `line` in the current class's file.
    pub fn error_at(&mut self, line: u32, code: u32, template: &str, args: &[&str]) {
        let message = format_message(template, args);
        trace!(code, line, %message, "diagnostic");
        self.ctx
            .diagnostics
            .push(Diagnostic::error(self.ctx.file_name, line, message, code));
    }

    pub fn error_unknown_type(&mut self, line: u32, template: &str, args: &[&str]) {
        self.error_at(line, diagnostic_codes::UNKNOWN_TYPE, template, args);
    }

    pub fn error_type_mismatch(&mut self, line: u32, template: &str, args: &[&str]) {
        self.error_at(
            line,
            diagnostic_codes::TYPE_CONFORMANCE_FAILURE,
            template,
            args,
        );
    }

    pub fn error_unknown_identifier(&mut self, name: Atom, line: u32) {
        self.error_at(
            line,
            diagnostic_codes::UNKNOWN_IDENTIFIER,
            diagnostic_messages::UNDECLARED_IDENTIFIER,
            &[self.name(name)],
        );
    }

    pub fn error_unknown_method(&mut self, method: Atom, receiver: Atom, line: u32) {
        self.error_at(
            line,
            diagnostic_codes::UNKNOWN_METHOD,
            diagnostic_messages::UNDEFINED_METHOD,
            &[self.name(method), self.name(receiver)],
        );
    }

    pub fn error_arity_mismatch(&mut self, method: Atom, given: usize, declared: usize, line: u32) {
        self.error_at(
            line,
            diagnostic_codes::ARITY_MISMATCH,
            diagnostic_messages::WRONG_ARGUMENT_COUNT,
            &[
                self.name(method),
                &given.to_string(),
                &declared.to_string(),
            ],
        );
    }

    pub fn error_expression_too_deep(&mut self, line: u32) {
        let limit = self.ctx.options.max_expression_depth.to_string();
        self.error_at(
            line,
            diagnostic_codes::EXPRESSION_TOO_DEEP,
            diagnostic_messages::EXPRESSION_TOO_DEEP,
            &[&limit],
        );
    }
}
