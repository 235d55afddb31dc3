//! Checker options and the per-class checking context.

use crate::class_table::ClassTable;
use crate::environment::ScopedEnvironment;
use coolc_ast::Class;
use coolc_common::limits::MAX_EXPR_CHECK_DEPTH;
use coolc_common::{Atom, Diagnostic, Interner, names};
use serde::Deserialize;

/// Options that change how expressions are typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CheckerOptions {
    /// `if` and `case` yield the least upper bound of their branches. When
    /// off, they yield `Object`.
    pub join_branches: bool,
    /// Check classes on the rayon pool.
    pub parallel: bool,
    /// Deepest expression nesting the checker will descend into.
    pub max_expression_depth: u32,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            join_branches: true,
            parallel: false,
            max_expression_depth: MAX_EXPR_CHECK_DEPTH,
        }
    }
}

impl CheckerOptions {
    /// `if` and `case` typed as `Object`, no parallelism.
    pub fn baseline() -> Self {
        Self {
            join_branches: false,
            ..Self::default()
        }
    }

    pub fn with_join_branches(mut self, join_branches: bool) -> Self {
        self.join_branches = join_branches;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_expression_depth(mut self, depth: u32) -> Self {
        self.max_expression_depth = depth;
        self
    }
}

/// Everything the rules need while checking one class.
///
/// The class table, interner and options are shared read-only across
/// classes. The environment and diagnostics belong to this class alone.
pub struct CheckerContext<'a> {
    pub table: &'a ClassTable,
    pub interner: &'a Interner,
    pub options: &'a CheckerOptions,
    /// The class `SELF_TYPE` currently stands for.
    pub current_class: Atom,
    /// Diagnostic prefix for the current class.
    pub file_name: &'a str,
    pub env: ScopedEnvironment,
    pub diagnostics: Vec<Diagnostic>,
    /// Current expression nesting.
    pub depth: u32,
}

impl<'a> CheckerContext<'a> {
    pub fn new(table: &'a ClassTable, interner: &'a Interner, options: &'a CheckerOptions) -> Self {
        Self {
            table,
            interner,
            options,
            current_class: names::OBJECT,
            file_name: "",
            env: ScopedEnvironment::new(),
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    /// Point the context at `class`, starting from an empty environment.
    pub fn enter_class(&mut self, class: &Class) {
        self.current_class = class.name;
        self.file_name = self.interner.resolve(class.filename);
        self.env.reset();
        self.depth = 0;
    }
}
