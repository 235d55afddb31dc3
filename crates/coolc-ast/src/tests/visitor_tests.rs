use super::*;
use crate::{AstFactory, Program};
use coolc_common::{Interner, names};

#[test]
fn test_walk_visits_in_evaluation_order() {
    let mut interner = Interner::new();
    let mut f = AstFactory::new(&mut interner, "a.cl");

    // let x : Int <- 1 in if x < 2 then x else 3 fi
    let init = f.int(1);
    let pred = {
        let x = f.ident("x");
        f.lt(x, f.int(2))
    };
    let then_branch = f.ident("x");
    let cond = f.if_then_else(pred, then_branch, f.int(3));
    let expr = f.let_in("x", "Int", init, cond);

    let mut kinds = Vec::new();
    walk(&expr, &mut |e| {
        kinds.push(match &e.kind {
            ExprKind::Let { .. } => "let",
            ExprKind::IntLit(_) => "int",
            ExprKind::Cond { .. } => "if",
            ExprKind::Compare { .. } => "<",
            ExprKind::Ident(_) => "id",
            _ => "?",
        })
    });
    assert_eq!(kinds, vec!["let", "int", "if", "<", "id", "int", "id", "int"]);
}

#[test]
fn test_for_each_child_mut_reaches_case_branches() {
    let mut interner = Interner::new();
    let mut f = AstFactory::new(&mut interner, "a.cl");

    let scrutinee = f.self_ref();
    let first = {
        let body = f.int(1);
        f.branch("i", "Int", body)
    };
    let second = {
        let body = f.string("s");
        f.branch("s", "String", body)
    };
    let mut expr = f.case(scrutinee, vec![first, second]);

    let mut visited = 0;
    for_each_child_mut(&mut expr, |child| {
        child.set_ty(names::OBJECT);
        visited += 1;
    });
    assert_eq!(visited, 3);

    let mut typed = 0;
    for_each_child(&expr, |child| {
        if child.ty() == Some(names::OBJECT) {
            typed += 1;
        }
    });
    assert_eq!(typed, 3);
}

#[test]
fn test_untyped_count_covers_every_feature() {
    let mut interner = Interner::new();
    let mut f = AstFactory::new(&mut interner, "a.cl");

    let sum = f.plus(f.int(1), f.int(2));
    let method = f.method("m", &[], "Int", sum);
    let attr = f.attr_uninit("a", "Int");
    let class = f.class("Main", "Object", vec![method, attr]);
    let mut program = Program::new(vec![class]);

    assert_eq!(program.untyped_count(), 4);

    if let crate::Feature::Method(method) = &mut program.classes[0].features[0] {
        method.body.set_ty(names::INT);
    }
    assert_eq!(program.untyped_count(), 3);
}
