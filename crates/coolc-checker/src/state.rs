//! Checker state and the program-level entry point.
//!
//! One `CheckerState` checks one class at a time. The rules themselves live
//! in `expr`, `call_checker`, `control_flow` and `declarations`, each adding
//! methods to `CheckerState`.

use crate::class_table::ClassTable;
use crate::context::{CheckerContext, CheckerOptions};
use crate::environment::BindError;
use coolc_ast::{Class, Feature, Program};
use coolc_common::diagnostics::{diagnostic_codes, diagnostic_messages, sort_diagnostics};
use coolc_common::{Atom, Diagnostic, Interner};
use rayon::prelude::*;
use tracing::debug;

pub struct CheckerState<'a> {
    pub ctx: CheckerContext<'a>,
}

impl<'a> CheckerState<'a> {
    pub fn new(table: &'a ClassTable, interner: &'a Interner, options: &'a CheckerOptions) -> Self {
        Self {
            ctx: CheckerContext::new(table, interner, options),
        }
    }

    /// Type-check every feature of `class`, writing each expression's type
    /// slot.
    pub fn check_class(&mut self, class: &mut Class) {
        self.ctx.enter_class(class);
        debug!(
            class = self.name(class.name),
            features = class.features.len(),
            "checking class"
        );

        for feature in &mut class.features {
            match feature {
                Feature::Method(method) => self.check_method(method),
                Feature::Attribute(attr) => self.check_attribute(attr),
            }
        }
    }

    /// Diagnostics collected so far, leaving the context's list empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.ctx.diagnostics)
    }

    // =========================================================================
    // Helpers shared by the rules
    // =========================================================================

    /// Resolve an atom to its text. The result outlives `self`.
    #[inline]
    pub(crate) fn name(&self, atom: Atom) -> &'a str {
        self.ctx.interner.resolve(atom)
    }

    /// Whether `a` conforms to `b` in the current class.
    #[inline]
    pub(crate) fn conforms(&self, a: Atom, b: Atom) -> bool {
        self.ctx.table.inherits(a, b, self.ctx.current_class)
    }

    /// Least upper bound of `a` and `b` in the current class.
    #[inline]
    pub(crate) fn join(&self, a: Atom, b: Atom) -> Atom {
        self.ctx.table.join(a, b, self.ctx.current_class)
    }

    /// Run `f` inside a fresh scope. The scope is closed when `f` returns.
    pub(crate) fn with_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.ctx.env.enter_scope();
        let result = f(self);
        self.ctx.env.exit_scope();
        result
    }

    /// Bind `name` in the innermost scope, reporting why it cannot be.
    ///
    /// `construct` names the binding form in the diagnostic.
    pub(crate) fn bind(&mut self, name: Atom, ty: Atom, construct: &str, line: u32) {
        match self.ctx.env.add_to_scope(name, ty) {
            Ok(()) => {}
            Err(BindError::ReservedIdentifier) => self.error_at(
                line,
                diagnostic_codes::RESERVED_IDENTIFIER,
                diagnostic_messages::SELF_CANNOT_BE_BOUND,
                &[construct],
            ),
            Err(BindError::AlreadyBound(_)) => self.error_at(
                line,
                diagnostic_codes::DUPLICATE_BINDING,
                diagnostic_messages::NAME_ALREADY_BOUND,
                &[self.name(name)],
            ),
        }
    }

    /// Declared type of identifier `name`: scoped bindings first, then
    /// attributes visible from the current class.
    pub(crate) fn lookup_identifier(&self, name: Atom) -> Option<Atom> {
        self.ctx.env.lookup(name).or_else(|| {
            self.ctx
                .table
                .lookup_attribute_type(self.ctx.current_class, name)
        })
    }
}

fn check_one_class(
    class: &mut Class,
    table: &ClassTable,
    interner: &Interner,
    options: &CheckerOptions,
) -> Vec<Diagnostic> {
    let mut checker = CheckerState::new(table, interner, options);
    checker.check_class(class);
    checker.take_diagnostics()
}

/// Type-check every class of `program` against a validated class table.
///
/// Returns the expression-level diagnostics ordered by (file, line), ties
/// kept in discovery order.
#[tracing::instrument(level = "debug", skip_all, fields(classes = program.classes.len(), parallel = options.parallel))]
pub fn check_program(
    program: &mut Program,
    table: &ClassTable,
    interner: &Interner,
    options: &CheckerOptions,
) -> Vec<Diagnostic> {
    let per_class: Vec<Vec<Diagnostic>> = if options.parallel {
        program
            .classes
            .par_iter_mut()
            .map(|class| check_one_class(class, table, interner, options))
            .collect()
    } else {
        program
            .classes
            .iter_mut()
            .map(|class| check_one_class(class, table, interner, options))
            .collect()
    };

    let mut diagnostics: Vec<Diagnostic> = per_class.into_iter().flatten().collect();
    sort_diagnostics(&mut diagnostics);
    debug!(errors = diagnostics.len(), "expression checking done");
    diagnostics
}
