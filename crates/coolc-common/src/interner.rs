//! String Interner for identifier deduplication.
//!
//! Class names, feature names and identifiers are interned into a single pool
//! and passed around as u32 indices (Atoms). Type equality in the checker is
//! then an integer comparison (`atom_a == atom_b`).
//!
//! The well-known names of the language (built-in classes, their features, the
//! pseudo-types and the receiver identifier) are interned first, in a fixed
//! order, so every `Interner` agrees on their atoms. They are exposed as the
//! constants in [`names`].

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Names interned by every `Interner::new()`, in atom order starting at 1.
///
/// The order must match the constants in [`names`].
const WELL_KNOWN_NAMES: &[&str] = &[
    "Object",
    "IO",
    "Int",
    "Bool",
    "String",
    "Main",
    "SELF_TYPE",
    "_no_type",
    "self",
    "main",
    "abort",
    "type_name",
    "copy",
    "out_string",
    "out_int",
    "in_string",
    "in_int",
    "length",
    "concat",
    "substr",
    "arg",
    "arg2",
    "_val",
    "_str_field",
    "_prim_slot",
    "<basic class>",
];

/// Atoms of the well-known names.
pub mod names {
    use super::Atom;

    pub const OBJECT: Atom = Atom(1);
    pub const IO: Atom = Atom(2);
    pub const INT: Atom = Atom(3);
    pub const BOOL: Atom = Atom(4);
    pub const STRING: Atom = Atom(5);
    pub const MAIN: Atom = Atom(6);
    /// The covariant "my own type" pseudo-type.
    pub const SELF_TYPE: Atom = Atom(7);
    /// Type of value-less expressions; conforms to and from every type.
    pub const NO_TYPE: Atom = Atom(8);
    /// The implicit receiver identifier.
    pub const SELF: Atom = Atom(9);
    pub const MAIN_METHOD: Atom = Atom(10);
    pub const ABORT: Atom = Atom(11);
    pub const TYPE_NAME: Atom = Atom(12);
    pub const COPY: Atom = Atom(13);
    pub const OUT_STRING: Atom = Atom(14);
    pub const OUT_INT: Atom = Atom(15);
    pub const IN_STRING: Atom = Atom(16);
    pub const IN_INT: Atom = Atom(17);
    pub const LENGTH: Atom = Atom(18);
    pub const CONCAT: Atom = Atom(19);
    pub const SUBSTR: Atom = Atom(20);
    pub const ARG: Atom = Atom(21);
    pub const ARG2: Atom = Atom(22);
    pub const VAL: Atom = Atom(23);
    pub const STR_FIELD: Atom = Atom(24);
    /// Opaque slot type of the primitive classes' hidden attributes.
    pub const PRIM_SLOT: Atom = Atom(25);
    /// Declaring-file tag of the built-in classes.
    pub const BASIC_CLASS_FILE: Atom = Atom(26);
}

/// String interner that deduplicates strings and returns Atom handles.
///
/// # Example
/// ```
/// use coolc_common::interner::{Interner, names};
/// let mut interner = Interner::new();
/// let a1 = interner.intern("hello");
/// let a2 = interner.intern("hello");
/// assert_eq!(a1, a2); // Same atom for same string
/// assert_eq!(interner.resolve(a1), "hello");
/// assert_eq!(interner.intern("Object"), names::OBJECT);
/// ```
pub struct Interner {
    /// Map from string to atom index
    map: FxHashMap<Arc<str>, Atom>,
    /// Vector of all interned strings (index 0 is empty string)
    strings: Vec<Arc<str>>,
}

impl Interner {
    /// Create a new interner with the empty string at index 0 followed by
    /// the well-known names.
    pub fn new() -> Self {
        let mut interner = Interner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Index 0 is reserved for empty/none
        let empty: Arc<str> = Arc::from("");
        interner.strings.push(empty.clone());
        interner.map.insert(empty, Atom::NONE);
        for name in WELL_KNOWN_NAMES {
            interner.intern(name);
        }
        interner
    }

    /// Intern a string, returning its Atom handle.
    /// If the string was already interned, returns the existing Atom.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Intern an owned String, avoiding allocation if possible.
    #[inline]
    pub fn intern_owned(&mut self, s: String) -> Atom {
        if let Some(&atom) = self.map.get(s.as_str()) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s.into_boxed_str());
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Look up the atom of an already-interned string without inserting.
    #[inline]
    pub fn get(&self, s: &str) -> Option<Atom> {
        self.map.get(s).copied()
    }

    /// Resolve an Atom back to its string value.
    /// Returns empty string if atom is out of bounds (safety for error recovery).
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.strings
            .get(atom.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Try to resolve an Atom, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.strings.get(atom.0 as usize).map(|s| s.as_ref())
    }

    /// Get the number of interned strings, including the empty string at
    /// index 0 and the well-known names.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    ///
    /// Never true for an interner built by `new`, which pre-interns the
    /// well-known names.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }

    /// Whether anything beyond the empty string and the well-known names has
    /// been interned.
    #[inline]
    pub fn has_user_names(&self) -> bool {
        self.strings.len() > WELL_KNOWN_NAMES.len() + 1
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/interner_tests.rs"]
mod tests;
