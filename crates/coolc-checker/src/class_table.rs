//! Class table: the registry of built-in and user classes.
//!
//! Classes live in an arena indexed by [`ClassId`] with a name index on top.
//! The parent link is stored as a name on each descriptor; the child index is
//! computed separately by `build_inheritance_tree`.
//!
//! Construction runs as ordered passes, each depending on the previous one:
//! 1. `construct` - install built-ins, then user classes
//! 2. `initialize_contents` - per-class method and attribute tables
//! 3. `build_inheritance_tree` - link every class to its parent
//! 4. `validate_classes` - Main/Object present, acyclic, rooted at Object
//! 5. `validate_features` - override signatures and attribute redefinition
//!
//! Any failing pass stops the pipeline.

use crate::builtins::builtin_classes;
use coolc_ast::{Feature, Program};
use coolc_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message,
};
use coolc_common::{Atom, Interner, names};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;
use tracing::debug;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Result of a construction pass. The error side holds the diagnostics that
/// stopped analysis.
pub type PassResult<T = ()> = Result<T, Vec<Diagnostic>>;

/// Arena index of a class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormalSignature {
    pub name: Atom,
    pub type_decl: Atom,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: Atom,
    pub formals: SmallVec<[FormalSignature; 4]>,
    pub return_type: Atom,
    pub line: u32,
}

impl MethodSignature {
    /// Same return type and the same ordered (name, type) formals.
    pub fn same_signature(&self, other: &MethodSignature) -> bool {
        self.return_type == other.return_type && self.formals == other.formals
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeSignature {
    pub name: Atom,
    pub type_decl: Atom,
    pub line: u32,
}

/// The declared shape of a feature, without its body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureSignature {
    Method(MethodSignature),
    Attribute(AttributeSignature),
}

impl From<&Feature> for FeatureSignature {
    fn from(feature: &Feature) -> Self {
        match feature {
            Feature::Method(method) => FeatureSignature::Method(MethodSignature {
                name: method.name,
                formals: method
                    .formals
                    .iter()
                    .map(|formal| FormalSignature {
                        name: formal.name,
                        type_decl: formal.type_decl,
                    })
                    .collect(),
                return_type: method.return_type,
                line: method.line,
            }),
            Feature::Attribute(attr) => FeatureSignature::Attribute(AttributeSignature {
                name: attr.name,
                type_decl: attr.type_decl,
                line: attr.line,
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClassDescriptor {
    pub name: Atom,
    /// `None` only for the root.
    pub parent: Option<Atom>,
    pub filename: Atom,
    pub line: u32,
    /// Own features in declaration order.
    pub features: Vec<FeatureSignature>,
    /// Own methods, filled by `initialize_contents`.
    pub methods: FxIndexMap<Atom, MethodSignature>,
    /// Own attributes, filled by `initialize_contents`.
    pub attributes: FxIndexMap<Atom, AttributeSignature>,
    pub is_builtin: bool,
}

impl ClassDescriptor {
    pub fn new(
        name: Atom,
        parent: Option<Atom>,
        filename: Atom,
        line: u32,
        features: Vec<FeatureSignature>,
    ) -> Self {
        Self {
            name,
            parent,
            filename,
            line,
            features,
            methods: FxIndexMap::default(),
            attributes: FxIndexMap::default(),
            is_builtin: false,
        }
    }

    pub fn from_class(class: &coolc_ast::Class) -> Self {
        let features = class.features.iter().map(FeatureSignature::from).collect();
        Self::new(
            class.name,
            class.parent,
            class.filename,
            class.line,
            features,
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    classes: Vec<ClassDescriptor>,
    by_name: FxHashMap<Atom, ClassId>,
    /// Child index, filled by `build_inheritance_tree`.
    pub(crate) children: Vec<SmallVec<[ClassId; 4]>>,
}

impl ClassTable {
    /// Run every construction and validation pass over `program`.
    pub fn build(program: &Program, interner: &Interner) -> PassResult<Self> {
        let mut table = Self::construct(program, interner)?;
        table.initialize_contents(interner)?;
        table.build_inheritance_tree(interner)?;
        table.validate_classes(interner)?;
        table.validate_features(interner)?;
        debug!(classes = table.len(), "class table validated");
        Ok(table)
    }

    /// Install the built-in classes followed by every class of `program`.
    #[tracing::instrument(level = "debug", skip_all, fields(user_classes = program.classes.len()))]
    pub fn construct(program: &Program, interner: &Interner) -> PassResult<Self> {
        let mut table = ClassTable::default();
        for builtin in builtin_classes() {
            table
                .install_class(builtin, interner)
                .map_err(|diag| vec![diag])?;
        }
        for class in &program.classes {
            table
                .install_class(ClassDescriptor::from_class(class), interner)
                .map_err(|diag| vec![diag])?;
        }
        Ok(table)
    }

    /// Add one class to the arena.
    pub fn install_class(
        &mut self,
        descriptor: ClassDescriptor,
        interner: &Interner,
    ) -> Result<ClassId, Diagnostic> {
        let class_name = interner.resolve(descriptor.name);
        if descriptor.name == names::SELF_TYPE {
            return Err(class_error(
                &descriptor,
                interner,
                diagnostic_messages::CLASS_NAME_IS_RESERVED,
                &[class_name],
                diagnostic_codes::RESERVED_CLASS_NAME,
            ));
        }
        if self.by_name.contains_key(&descriptor.name) {
            return Err(class_error(
                &descriptor,
                interner,
                diagnostic_messages::CLASS_IS_DUPLICATED,
                &[class_name],
                diagnostic_codes::DUPLICATE_CLASS_NAME,
            ));
        }

        let id = ClassId(self.classes.len() as u32);
        self.by_name.insert(descriptor.name, id);
        self.classes.push(descriptor);
        Ok(id)
    }

    /// Fill each class's own method and attribute tables from its features.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn initialize_contents(&mut self, interner: &Interner) -> PassResult {
        for class in &mut self.classes {
            let class_name = interner.resolve(class.name);
            for feature in &class.features {
                let (name, line) = match feature {
                    FeatureSignature::Method(method) => (method.name, method.line),
                    FeatureSignature::Attribute(attr) => (attr.name, attr.line),
                };
                let feature_name = interner.resolve(name);

                if name == names::SELF {
                    return Err(vec![Diagnostic::error(
                        interner.resolve(class.filename),
                        line,
                        format_message(diagnostic_messages::FEATURE_NAMED_SELF, &[class_name]),
                        diagnostic_codes::DUPLICATE_FEATURE_IN_CLASS,
                    )]);
                }

                let duplicate = match feature {
                    FeatureSignature::Method(method) => class
                        .methods
                        .insert(name, method.clone())
                        .map(|_| diagnostic_messages::METHOD_IS_MULTIPLY_DEFINED),
                    FeatureSignature::Attribute(attr) => class
                        .attributes
                        .insert(name, *attr)
                        .map(|_| diagnostic_messages::ATTRIBUTE_IS_MULTIPLY_DEFINED),
                };
                if let Some(template) = duplicate {
                    return Err(vec![Diagnostic::error(
                        interner.resolve(class.filename),
                        line,
                        format_message(template, &[feature_name, class_name]),
                        diagnostic_codes::DUPLICATE_FEATURE_IN_CLASS,
                    )]);
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Arena id of the class literally named `name`.
    #[inline]
    pub fn class_id(&self, name: Atom) -> Option<ClassId> {
        self.by_name.get(&name).copied()
    }

    #[inline]
    pub fn descriptor(&self, id: ClassId) -> &ClassDescriptor {
        &self.classes[id.index()]
    }

    /// Descriptor of the class literally named `name`.
    pub fn get(&self, name: Atom) -> Option<&ClassDescriptor> {
        self.class_id(name).map(|id| self.descriptor(id))
    }

    /// All classes in install order (built-ins first).
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassDescriptor)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index as u32), class))
    }

    /// Direct children of `id`. Empty until the inheritance tree is built.
    pub fn children(&self, id: ClassId) -> &[ClassId] {
        self.children
            .get(id.index())
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    /// Arena id of the parent of `id`, if it has one that is installed.
    #[inline]
    pub fn parent_id(&self, id: ClassId) -> Option<ClassId> {
        self.descriptor(id)
            .parent
            .and_then(|parent| self.class_id(parent))
    }
}

/// Diagnostic positioned at a class declaration.
pub(crate) fn class_error(
    class: &ClassDescriptor,
    interner: &Interner,
    template: &str,
    args: &[&str],
    code: u32,
) -> Diagnostic {
    Diagnostic::error(
        interner.resolve(class.filename),
        class.line,
        format_message(template, args),
        code,
    )
}
