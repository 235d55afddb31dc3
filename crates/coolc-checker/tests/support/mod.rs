//! Shared harness: build a program with `AstFactory`, run the class table
//! passes and the checker, and keep everything around for assertions.

#![allow(dead_code)]

use coolc_ast::{AstFactory, Class, Expr, Feature, Program, walk};
use coolc_checker::{CheckerOptions, ClassTable, check_program};
use coolc_common::{Atom, Diagnostic, Interner};

pub const FILE: &str = "test.cl";

pub struct Checked {
    pub program: Program,
    pub interner: Interner,
    pub diagnostics: Vec<Diagnostic>,
    pub table: Option<ClassTable>,
}

impl Checked {
    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.message_text.clone()).collect()
    }

    pub fn count(&self, code: u32) -> usize {
        self.diagnostics.iter().filter(|d| d.code == code).count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn atom(&self, name: &str) -> Atom {
        self.interner
            .get(name)
            .unwrap_or_else(|| panic!("{name} was never interned"))
    }

    pub fn name(&self, atom: Atom) -> &str {
        self.interner.resolve(atom)
    }

    fn feature(&self, class: &str, feature: &str) -> &Feature {
        let class = self.atom(class);
        let feature = self.atom(feature);
        self.program
            .classes
            .iter()
            .find(|c| c.name == class)
            .and_then(|c| c.features.iter().find(|f| f.name() == feature))
            .unwrap_or_else(|| panic!("feature not found"))
    }

    /// The checked method body or attribute initializer.
    pub fn expr(&self, class: &str, feature: &str) -> &Expr {
        self.feature(class, feature).expr()
    }

    /// Type written into the slot of a method body or attribute initializer.
    pub fn type_of(&self, class: &str, feature: &str) -> Option<&str> {
        self.expr(class, feature).ty().map(|ty| self.name(ty))
    }

    /// Types of every expression in a feature, pre-order.
    pub fn types_in(&self, class: &str, feature: &str) -> Vec<Option<&str>> {
        let mut types = Vec::new();
        walk(self.expr(class, feature), &mut |expr| {
            types.push(expr.ty().map(|ty| self.name(ty)));
        });
        types
    }
}

pub fn check(build: impl FnOnce(&mut AstFactory<'_>) -> Vec<Class>) -> Checked {
    check_with(CheckerOptions::default(), build)
}

pub fn check_with(
    options: CheckerOptions,
    build: impl FnOnce(&mut AstFactory<'_>) -> Vec<Class>,
) -> Checked {
    let mut interner = Interner::new();
    let classes = {
        let mut f = AstFactory::new(&mut interner, FILE);
        build(&mut f)
    };
    let mut program = Program::new(classes);

    match ClassTable::build(&program, &interner) {
        Ok(table) => {
            let diagnostics = check_program(&mut program, &table, &interner, &options);
            Checked {
                program,
                interner,
                diagnostics,
                table: Some(table),
            }
        }
        Err(diagnostics) => Checked {
            program,
            interner,
            diagnostics,
            table: None,
        },
    }
}

/// `class Main { main() : Object { body } }` plus any extra features.
pub fn main_class(f: &mut AstFactory<'_>, body: Expr, mut extra: Vec<Feature>) -> Class {
    let main = f.method("main", &[], "Object", body);
    extra.insert(0, main);
    f.class("Main", "Object", extra)
}

/// A Main class with nothing in it but an empty `main`.
pub fn empty_main(f: &mut AstFactory<'_>) -> Class {
    let body = f.int(0);
    main_class(f, body, vec![])
}
