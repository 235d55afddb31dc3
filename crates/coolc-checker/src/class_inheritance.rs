//! Inheritance tree construction and class-graph validation.

use crate::class_table::{ClassId, ClassTable, PassResult, class_error};
use coolc_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message,
};
use coolc_common::{Interner, names};
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

impl ClassTable {
    /// Record every class as a child of its declared parent.
    ///
    /// Fails on the first class whose parent is not installed.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build_inheritance_tree(&mut self, interner: &Interner) -> PassResult {
        let mut children: Vec<SmallVec<[ClassId; 4]>> = vec![SmallVec::new(); self.len()];

        for (id, class) in self.iter() {
            let Some(parent) = class.parent else {
                continue;
            };
            let Some(parent_id) = self.class_id(parent) else {
                return Err(vec![class_error(
                    class,
                    interner,
                    diagnostic_messages::PARENT_NOT_FOUND,
                    &[interner.resolve(class.name), interner.resolve(parent)],
                    diagnostic_codes::MISSING_PARENT,
                )]);
            };
            trace!(
                class = interner.resolve(class.name),
                parent = interner.resolve(parent),
                "linked"
            );
            children[parent_id.index()].push(id);
        }

        self.children = children;
        Ok(())
    }

    /// Check that `Main` and `Object` exist and that every class reaches
    /// `Object` through its parent links.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate_classes(&self, interner: &Interner) -> PassResult {
        for required in [names::MAIN, names::OBJECT] {
            if self.class_id(required).is_none() {
                return Err(vec![Diagnostic::error(
                    interner.resolve(names::BASIC_CLASS_FILE),
                    0,
                    format_message(
                        diagnostic_messages::ROOT_CLASS_MISSING,
                        &[interner.resolve(required)],
                    ),
                    diagnostic_codes::MISSING_ROOT_CLASSES,
                )]);
            }
        }

        let visited = self.reachable_from_object();
        debug!(
            reachable = visited.count_ones(..),
            total = self.len(),
            "walked inheritance tree"
        );

        for (id, class) in self.iter() {
            if visited.contains(id.index()) {
                continue;
            }
            let (template, code) = if self.on_parent_cycle(id) {
                (
                    diagnostic_messages::INHERITANCE_CYCLE,
                    diagnostic_codes::INHERITANCE_CYCLE,
                )
            } else {
                (
                    diagnostic_messages::CLASS_IS_DETACHED,
                    diagnostic_codes::DETACHED_CLASS,
                )
            };
            return Err(vec![class_error(
                class,
                interner,
                template,
                &[interner.resolve(class.name)],
                code,
            )]);
        }
        Ok(())
    }

    /// Depth-first walk of the child index starting at `Object`.
    fn reachable_from_object(&self) -> FixedBitSet {
        let mut visited = FixedBitSet::with_capacity(self.len());
        let Some(root) = self.class_id(names::OBJECT) else {
            return visited;
        };

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if visited.put(id.index()) {
                continue;
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        visited
    }

    /// Whether following parent links from `start` revisits a class.
    fn on_parent_cycle(&self, start: ClassId) -> bool {
        let mut seen = FixedBitSet::with_capacity(self.len());
        let mut current = Some(start);
        while let Some(id) = current {
            if seen.put(id.index()) {
                return true;
            }
            current = self.parent_id(id);
        }
        false
    }
}
