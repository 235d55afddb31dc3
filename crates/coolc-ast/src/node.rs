//! Tree node types.

use coolc_common::Atom;

/// A whole compilation unit: every user class, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub classes: Vec<Class>,
}

impl Program {
    pub fn new(classes: Vec<Class>) -> Self {
        Self { classes }
    }

    /// Number of expressions whose type slot has not been written.
    pub fn untyped_count(&self) -> usize {
        let mut count = 0;
        for class in &self.classes {
            for feature in &class.features {
                crate::walk(feature.expr(), &mut |expr| {
                    if expr.ty().is_none() {
                        count += 1;
                    }
                });
            }
        }
        count
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: Atom,
    /// `None` only for a root class.
    pub parent: Option<Atom>,
    pub features: Vec<Feature>,
    /// Declaring-file tag, used as the diagnostic prefix.
    pub filename: Atom,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Method(Method),
    Attribute(Attribute),
}

impl Feature {
    pub fn name(&self) -> Atom {
        match self {
            Feature::Method(method) => method.name,
            Feature::Attribute(attr) => attr.name,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Feature::Method(method) => method.line,
            Feature::Attribute(attr) => attr.line,
        }
    }

    /// The method body or the attribute initializer.
    pub fn expr(&self) -> &Expr {
        match self {
            Feature::Method(method) => &method.body,
            Feature::Attribute(attr) => &attr.init,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Feature::Method(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: Atom,
    pub formals: Vec<Formal>,
    pub return_type: Atom,
    pub body: Expr,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: Atom,
    pub type_decl: Atom,
    /// `ExprKind::NoExpr` when the attribute has no initializer.
    pub init: Expr,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formal {
    pub name: Atom,
    pub type_decl: Atom,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub name: Atom,
    pub type_decl: Atom,
    pub body: Expr,
    pub line: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Le,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    IntLit(i64),
    StrLit(String),
    BoolLit(bool),
    /// An identifier reference (including `self`).
    Ident(Atom),
    Assign {
        name: Atom,
        value: Box<Expr>,
    },
    New(Atom),
    Dispatch {
        receiver: Box<Expr>,
        method: Atom,
        args: Vec<Expr>,
    },
    /// `receiver@type_name.method(args)`
    StaticDispatch {
        receiver: Box<Expr>,
        type_name: Atom,
        method: Atom,
        args: Vec<Expr>,
    },
    Arith {
        op: ArithOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Compare {
        op: CompareOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Eq {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Integer complement `~e`.
    Neg(Box<Expr>),
    /// Boolean `not e`.
    Not(Box<Expr>),
    IsVoid(Box<Expr>),
    Block(Vec<Expr>),
    Let {
        name: Atom,
        type_decl: Atom,
        init: Box<Expr>,
        body: Box<Expr>,
    },
    Case {
        scrutinee: Box<Expr>,
        branches: Vec<CaseBranch>,
    },
    Loop {
        pred: Box<Expr>,
        body: Box<Expr>,
    },
    Cond {
        pred: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    NoExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
    ty: Option<Atom>,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Self {
            kind,
            line,
            ty: None,
        }
    }

    pub fn no_expr(line: u32) -> Self {
        Self::new(ExprKind::NoExpr, line)
    }

    /// The inferred type, once the checker has visited this node.
    #[inline]
    pub fn ty(&self) -> Option<Atom> {
        self.ty
    }

    #[inline]
    pub fn set_ty(&mut self, ty: Atom) {
        self.ty = Some(ty);
    }

    pub fn is_no_expr(&self) -> bool {
        matches!(self.kind, ExprKind::NoExpr)
    }
}
