//! Built-in classes: Object, Bool, Int, IO and String.
//!
//! Each is described by feature signatures only. Hidden slots use the
//! `_prim_slot` marker type, which names no class.

use crate::class_table::{
    AttributeSignature, ClassDescriptor, FeatureSignature, FormalSignature, MethodSignature,
};
use coolc_common::{Atom, names};
use smallvec::SmallVec;

fn method(name: Atom, formals: &[(Atom, Atom)], return_type: Atom) -> FeatureSignature {
    FeatureSignature::Method(MethodSignature {
        name,
        formals: formals
            .iter()
            .map(|&(name, type_decl)| FormalSignature { name, type_decl })
            .collect::<SmallVec<_>>(),
        return_type,
        line: 0,
    })
}

fn attribute(name: Atom, type_decl: Atom) -> FeatureSignature {
    FeatureSignature::Attribute(AttributeSignature {
        name,
        type_decl,
        line: 0,
    })
}

fn builtin(name: Atom, parent: Option<Atom>, features: Vec<FeatureSignature>) -> ClassDescriptor {
    let mut class = ClassDescriptor::new(name, parent, names::BASIC_CLASS_FILE, 0, features);
    class.is_builtin = true;
    class
}

/// The built-in classes in install order.
pub fn builtin_classes() -> Vec<ClassDescriptor> {
    use names::*;

    let object = builtin(
        OBJECT,
        None,
        vec![
            method(ABORT, &[], OBJECT),
            method(TYPE_NAME, &[], STRING),
            method(COPY, &[], SELF_TYPE),
        ],
    );

    let bool_class = builtin(BOOL, Some(OBJECT), vec![attribute(VAL, PRIM_SLOT)]);

    let int = builtin(INT, Some(OBJECT), vec![attribute(VAL, PRIM_SLOT)]);

    let io = builtin(
        IO,
        Some(OBJECT),
        vec![
            method(OUT_STRING, &[(ARG, STRING)], SELF_TYPE),
            method(OUT_INT, &[(ARG, INT)], SELF_TYPE),
            method(IN_STRING, &[], STRING),
            method(IN_INT, &[], INT),
        ],
    );

    let string = builtin(
        STRING,
        Some(OBJECT),
        vec![
            attribute(VAL, INT),
            attribute(STR_FIELD, PRIM_SLOT),
            method(LENGTH, &[], INT),
            method(CONCAT, &[(ARG, STRING)], STRING),
            method(SUBSTR, &[(ARG, INT), (ARG2, INT)], STRING),
        ],
    );

    vec![object, bool_class, int, io, string]
}

/// True for the classes whose values are compared by value and which a case
/// or equality test treats specially.
#[inline]
pub fn is_basic_value_class(name: Atom) -> bool {
    name == names::INT || name == names::BOOL || name == names::STRING
}
