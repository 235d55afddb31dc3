//! Scoped identifier environment for one class.
//!
//! Scopes are pushed and popped in strict pairs around formals, `let`
//! bindings and case branches. The base scope is never popped.

use coolc_common::limits::INITIAL_SCOPE_CAPACITY;
use coolc_common::{Atom, names};
use rustc_hash::FxHashMap;

/// Why a name could not be bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindError {
    /// `self` can never be bound.
    ReservedIdentifier,
    /// Already bound in the innermost scope with this type.
    AlreadyBound(Atom),
}

#[derive(Clone, Debug)]
pub struct ScopedEnvironment {
    scopes: Vec<FxHashMap<Atom, Atom>>,
}

impl Default for ScopedEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopedEnvironment {
    pub fn new() -> Self {
        let mut scopes = Vec::with_capacity(INITIAL_SCOPE_CAPACITY);
        scopes.push(FxHashMap::default());
        Self { scopes }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Pop the innermost scope. Returns `false` if only the base scope is
    /// left, which means enter/exit calls were unbalanced.
    pub fn exit_scope(&mut self) -> bool {
        if self.scopes.len() <= 1 {
            return false;
        }
        self.scopes.pop();
        true
    }

    /// Number of scopes opened on top of the base scope.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Bind `name` to `ty` in the innermost scope.
    pub fn add_to_scope(&mut self, name: Atom, ty: Atom) -> Result<(), BindError> {
        if name == names::SELF {
            return Err(BindError::ReservedIdentifier);
        }
        if let Some(innermost) = self.scopes.last_mut() {
            if let Some(&previous) = innermost.get(&name) {
                return Err(BindError::AlreadyBound(previous));
            }
            innermost.insert(name, ty);
        }
        Ok(())
    }

    /// Innermost binding of `name` across all open scopes.
    pub fn lookup(&self, name: Atom) -> Option<Atom> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name).copied())
    }

    /// Binding of `name` in the innermost scope only.
    pub fn probe(&self, name: Atom) -> Option<Atom> {
        self.scopes
            .last()
            .and_then(|scope| scope.get(&name).copied())
    }

    /// Drop every binding, keeping only an empty base scope.
    pub fn reset(&mut self) {
        self.scopes.truncate(1);
        if let Some(base) = self.scopes.first_mut() {
            base.clear();
        }
    }
}

#[cfg(test)]
#[path = "tests/environment_tests.rs"]
mod tests;
