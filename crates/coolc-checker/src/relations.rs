//! Subtype relation, least upper bound and inheritance-aware member lookup.
//!
//! Every query takes the class currently being analyzed, which is what
//! `SELF_TYPE` stands for. `No_type` conforms in both directions so that a
//! failed subexpression never produces a second error further up.

use crate::class_table::{AttributeSignature, ClassId, ClassTable, MethodSignature};
use coolc_common::{Atom, names};

/// Iterator over a class and its ancestors, nearest first.
///
/// Stops after visiting as many classes as the table holds, so an unvalidated
/// cyclic table still terminates.
pub struct Ancestors<'t> {
    table: &'t ClassTable,
    next: Option<ClassId>,
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.table.parent_id(current);
        Some(current)
    }
}

impl ClassTable {
    /// `id` followed by its parent, grandparent and so on up to the root.
    pub fn ancestors(&self, id: ClassId) -> Ancestors<'_> {
        Ancestors {
            table: self,
            next: Some(id),
            remaining: self.len(),
        }
    }

    /// Whether `name` is an installed class. `SELF_TYPE` is not.
    #[inline]
    pub fn class_exists(&self, name: Atom) -> bool {
        self.class_id(name).is_some()
    }

    /// Whether `name` may appear as a declared type where `SELF_TYPE` is
    /// allowed.
    #[inline]
    pub fn is_known_type(&self, name: Atom) -> bool {
        name == names::SELF_TYPE || self.class_exists(name)
    }

    /// Class named by `name`, with `SELF_TYPE` standing for `current`.
    pub fn get_class(&self, name: Atom, current: Atom) -> Option<ClassId> {
        let name = if name == names::SELF_TYPE { current } else { name };
        self.class_id(name)
    }

    /// Whether `a` conforms to `b` while analyzing class `current`.
    pub fn inherits(&self, a: Atom, b: Atom, current: Atom) -> bool {
        if a == names::NO_TYPE || b == names::NO_TYPE || a == b {
            return true;
        }
        if a == names::SELF_TYPE && b == current {
            return true;
        }
        if b == names::SELF_TYPE {
            return false;
        }

        let Some(start) = self.get_class(a, current) else {
            return false;
        };
        let Some(target) = self.class_id(b) else {
            return false;
        };
        self.ancestors(start).any(|id| id == target)
    }

    /// Least upper bound of `a` and `b` while analyzing class `current`.
    ///
    /// `No_type` is the identity. Two `SELF_TYPE`s stay `SELF_TYPE`;
    /// otherwise `SELF_TYPE` is replaced by `current` and the nearest common
    /// ancestor is returned, falling back to `Object`.
    pub fn join(&self, a: Atom, b: Atom, current: Atom) -> Atom {
        if a == names::NO_TYPE {
            return b;
        }
        if b == names::NO_TYPE || a == b {
            return a;
        }

        let (Some(left), Some(right)) = (self.get_class(a, current), self.get_class(b, current))
        else {
            return names::OBJECT;
        };

        let left_chain: smallvec::SmallVec<[ClassId; 8]> = self.ancestors(left).collect();
        self.ancestors(right)
            .find(|id| left_chain.contains(id))
            .map_or(names::OBJECT, |id| self.descriptor(id).name)
    }

    /// Nearest definition of method `name` visible from class `id`, with the
    /// class that declares it.
    pub fn resolve_method(&self, id: ClassId, name: Atom) -> Option<(ClassId, &MethodSignature)> {
        self.ancestors(id).find_map(|owner| {
            self.descriptor(owner)
                .methods
                .get(&name)
                .map(|method| (owner, method))
        })
    }

    /// Nearest definition of attribute `name` visible from class `id`, with
    /// the class that declares it.
    pub fn resolve_attribute(
        &self,
        id: ClassId,
        name: Atom,
    ) -> Option<(ClassId, &AttributeSignature)> {
        self.ancestors(id).find_map(|owner| {
            self.descriptor(owner)
                .attributes
                .get(&name)
                .map(|attr| (owner, attr))
        })
    }

    /// Declared type of attribute `name` as seen from class `class`.
    pub fn lookup_attribute_type(&self, class: Atom, name: Atom) -> Option<Atom> {
        let id = self.class_id(class)?;
        self.resolve_attribute(id, name).map(|(_, attr)| attr.type_decl)
    }
}

#[cfg(test)]
#[path = "tests/relations_tests.rs"]
mod tests;
