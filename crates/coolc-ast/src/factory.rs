//! Tree construction helpers.
//!
//! `AstFactory` interns names as it goes and stamps the current file and line
//! onto every node it creates. Move the line forward with [`AstFactory::at`].

use crate::node::{
    ArithOp, Attribute, CaseBranch, Class, CompareOp, Expr, ExprKind, Feature, Formal, Method,
};
use coolc_common::{Atom, Interner, names};

pub struct AstFactory<'i> {
    interner: &'i mut Interner,
    filename: Atom,
    line: u32,
}

impl<'i> AstFactory<'i> {
    pub fn new(interner: &'i mut Interner, filename: &str) -> Self {
        let filename = interner.intern(filename);
        Self {
            interner,
            filename,
            line: 1,
        }
    }

    /// Set the line stamped on subsequently created nodes.
    pub fn at(&mut self, line: u32) -> &mut Self {
        self.line = line;
        self
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn intern(&mut self, name: &str) -> Atom {
        self.interner.intern(name)
    }

    fn expr(&self, kind: ExprKind) -> Expr {
        Expr::new(kind, self.line)
    }

    // =========================================================================
    // Classes and features
    // =========================================================================

    /// A class inheriting from `parent`.
    pub fn class(&mut self, name: &str, parent: &str, features: Vec<Feature>) -> Class {
        let parent = self.intern(parent);
        self.class_with_parent(name, Some(parent), features)
    }

    /// A class whose parent link is given directly (`None` for a second root).
    pub fn class_with_parent(
        &mut self,
        name: &str,
        parent: Option<Atom>,
        features: Vec<Feature>,
    ) -> Class {
        Class {
            name: self.intern(name),
            parent,
            features,
            filename: self.filename,
            line: self.line,
        }
    }

    pub fn method(
        &mut self,
        name: &str,
        formals: &[(&str, &str)],
        return_type: &str,
        body: Expr,
    ) -> Feature {
        let formals = formals
            .iter()
            .map(|&(formal, ty)| self.formal(formal, ty))
            .collect();
        Feature::Method(Method {
            name: self.intern(name),
            formals,
            return_type: self.intern(return_type),
            body,
            line: self.line,
        })
    }

    pub fn formal(&mut self, name: &str, type_decl: &str) -> Formal {
        Formal {
            name: self.intern(name),
            type_decl: self.intern(type_decl),
            line: self.line,
        }
    }

    pub fn attr(&mut self, name: &str, type_decl: &str, init: Expr) -> Feature {
        Feature::Attribute(Attribute {
            name: self.intern(name),
            type_decl: self.intern(type_decl),
            init,
            line: self.line,
        })
    }

    /// An attribute without an initializer.
    pub fn attr_uninit(&mut self, name: &str, type_decl: &str) -> Feature {
        let init = self.no_expr();
        self.attr(name, type_decl, init)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn int(&self, value: i64) -> Expr {
        self.expr(ExprKind::IntLit(value))
    }

    pub fn string(&self, value: &str) -> Expr {
        self.expr(ExprKind::StrLit(value.to_string()))
    }

    pub fn bool(&self, value: bool) -> Expr {
        self.expr(ExprKind::BoolLit(value))
    }

    pub fn ident(&mut self, name: &str) -> Expr {
        let name = self.intern(name);
        self.expr(ExprKind::Ident(name))
    }

    pub fn self_ref(&self) -> Expr {
        self.expr(ExprKind::Ident(names::SELF))
    }

    pub fn assign(&mut self, name: &str, value: Expr) -> Expr {
        let name = self.intern(name);
        self.expr(ExprKind::Assign {
            name,
            value: Box::new(value),
        })
    }

    pub fn new_object(&mut self, type_name: &str) -> Expr {
        let type_name = self.intern(type_name);
        self.expr(ExprKind::New(type_name))
    }

    pub fn dispatch(&mut self, receiver: Expr, method: &str, args: Vec<Expr>) -> Expr {
        let method = self.intern(method);
        self.expr(ExprKind::Dispatch {
            receiver: Box::new(receiver),
            method,
            args,
        })
    }

    /// `method(args)` with the implicit `self` receiver.
    pub fn call(&mut self, method: &str, args: Vec<Expr>) -> Expr {
        let receiver = self.self_ref();
        self.dispatch(receiver, method, args)
    }

    pub fn static_dispatch(
        &mut self,
        receiver: Expr,
        type_name: &str,
        method: &str,
        args: Vec<Expr>,
    ) -> Expr {
        let type_name = self.intern(type_name);
        let method = self.intern(method);
        self.expr(ExprKind::StaticDispatch {
            receiver: Box::new(receiver),
            type_name,
            method,
            args,
        })
    }

    pub fn arith(&self, op: ArithOp, lhs: Expr, rhs: Expr) -> Expr {
        self.expr(ExprKind::Arith {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn plus(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.arith(ArithOp::Add, lhs, rhs)
    }

    pub fn sub(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.arith(ArithOp::Sub, lhs, rhs)
    }

    pub fn mul(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.arith(ArithOp::Mul, lhs, rhs)
    }

    pub fn div(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.arith(ArithOp::Div, lhs, rhs)
    }

    pub fn lt(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.expr(ExprKind::Compare {
            op: CompareOp::Lt,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn leq(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.expr(ExprKind::Compare {
            op: CompareOp::Le,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn eq(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.expr(ExprKind::Eq {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn neg(&self, inner: Expr) -> Expr {
        self.expr(ExprKind::Neg(Box::new(inner)))
    }

    pub fn not(&self, inner: Expr) -> Expr {
        self.expr(ExprKind::Not(Box::new(inner)))
    }

    pub fn isvoid(&self, inner: Expr) -> Expr {
        self.expr(ExprKind::IsVoid(Box::new(inner)))
    }

    pub fn block(&self, body: Vec<Expr>) -> Expr {
        self.expr(ExprKind::Block(body))
    }

    pub fn let_in(&mut self, name: &str, type_decl: &str, init: Expr, body: Expr) -> Expr {
        let name = self.intern(name);
        let type_decl = self.intern(type_decl);
        self.expr(ExprKind::Let {
            name,
            type_decl,
            init: Box::new(init),
            body: Box::new(body),
        })
    }

    pub fn case(&self, scrutinee: Expr, branches: Vec<CaseBranch>) -> Expr {
        self.expr(ExprKind::Case {
            scrutinee: Box::new(scrutinee),
            branches,
        })
    }

    pub fn branch(&mut self, name: &str, type_decl: &str, body: Expr) -> CaseBranch {
        CaseBranch {
            name: self.intern(name),
            type_decl: self.intern(type_decl),
            body,
            line: self.line,
        }
    }

    pub fn while_loop(&self, pred: Expr, body: Expr) -> Expr {
        self.expr(ExprKind::Loop {
            pred: Box::new(pred),
            body: Box::new(body),
        })
    }

    pub fn if_then_else(&self, pred: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        self.expr(ExprKind::Cond {
            pred: Box::new(pred),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    pub fn no_expr(&self) -> Expr {
        Expr::no_expr(self.line)
    }
}

#[cfg(test)]
#[path = "tests/factory_tests.rs"]
mod tests;
