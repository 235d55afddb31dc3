//! coolc: semantic analysis for the Classroom Object-Oriented Language.
//!
//! [`semant`] runs the whole pipeline over a parsed [`Program`]:
//!
//! 1. Class table construction (built-ins, then user classes)
//! 2. Per-class method and attribute tables
//! 3. Inheritance links
//! 4. Structural validation (`Main`/`Object` present, no cycles, one root)
//! 5. Override and attribute-redefinition validation
//! 6. Expression type checking of every user class
//!
//! A failure in steps 1-5 stops the pipeline with the diagnostics of that
//! step. Step 6 always runs to completion and reports everything it finds.

pub mod config;
pub mod tracing_config;

pub use coolc_ast as ast;
pub use coolc_checker as checker;
pub use coolc_common as common;

pub use coolc_ast::{AstFactory, Program};
pub use coolc_checker::{CheckerOptions, ClassTable};
pub use coolc_common::{Diagnostic, Interner};

use coolc_checker::check_program;
use std::io::{self, Write};
use tracing::{debug, info};

/// Printed after the diagnostics whenever analysis found an error.
pub const HALT_MESSAGE: &str = "Compilation halted due to static semantic errors.";

/// What a run of the analyzer produced.
#[derive(Debug)]
pub struct SemantOutcome {
    /// Every diagnostic in report order.
    pub diagnostics: Vec<Diagnostic>,
    /// The validated class table, or `None` when construction failed.
    pub class_table: Option<ClassTable>,
}

impl SemantOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether code generation must not run.
    pub fn should_halt(&self) -> bool {
        self.error_count() > 0
    }

    /// Whether analysis stopped before any expression was checked.
    pub fn aborted(&self) -> bool {
        self.class_table.is_none()
    }

    /// One `file:line: message` line per diagnostic, then the halt message
    /// if there were any.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
        if self.should_halt() {
            out.push_str(HALT_MESSAGE);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }
}

/// Analyze `program`, filling in the type slot of every expression when the
/// class table validates.
#[tracing::instrument(level = "info", skip_all, fields(classes = program.classes.len()))]
pub fn semant(program: &mut Program, interner: &Interner, options: &CheckerOptions) -> SemantOutcome {
    let table = match ClassTable::build(program, interner) {
        Ok(table) => table,
        Err(diagnostics) => {
            info!(errors = diagnostics.len(), "class table rejected");
            return SemantOutcome {
                diagnostics,
                class_table: None,
            };
        }
    };

    let diagnostics = check_program(program, &table, interner, options);
    debug!(errors = diagnostics.len(), "semantic analysis finished");
    SemantOutcome {
        diagnostics,
        class_table: Some(table),
    }
}
