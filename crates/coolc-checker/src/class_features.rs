//! Override and attribute-redefinition checks across the inheritance tree.

use crate::class_table::{ClassTable, PassResult};
use coolc_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message,
};
use coolc_common::Interner;
use tracing::debug;

impl ClassTable {
    /// Compare each class's own features against what its parent already
    /// provides.
    ///
    /// A redefined method must keep the return type and the ordered
    /// (name, type) formals of the inherited one. An attribute may never
    /// shadow an inherited attribute. Every violation is collected before
    /// the pass fails.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate_features(&self, interner: &Interner) -> PassResult {
        let mut diagnostics = Vec::new();

        for (_, class) in self.iter() {
            let Some(parent_id) = class.parent.and_then(|parent| self.class_id(parent)) else {
                continue;
            };
            let class_name = interner.resolve(class.name);
            let file = interner.resolve(class.filename);

            for (&name, method) in &class.methods {
                let Some((owner, inherited)) = self.resolve_method(parent_id, name) else {
                    continue;
                };
                if inherited.return_type != method.return_type {
                    diagnostics.push(Diagnostic::error(
                        file,
                        method.line,
                        format_message(
                            diagnostic_messages::OVERRIDE_RETURN_TYPE_DIFFERS,
                            &[
                                interner.resolve(name),
                                class_name,
                                interner.resolve(method.return_type),
                                interner.resolve(inherited.return_type),
                            ],
                        ),
                        diagnostic_codes::INCOMPATIBLE_OVERRIDE,
                    ));
                } else if inherited.formals != method.formals {
                    diagnostics.push(Diagnostic::error(
                        file,
                        method.line,
                        format_message(
                            diagnostic_messages::OVERRIDE_FORMALS_DIFFER,
                            &[
                                interner.resolve(name),
                                class_name,
                                interner.resolve(self.descriptor(owner).name),
                            ],
                        ),
                        diagnostic_codes::INCOMPATIBLE_OVERRIDE,
                    ));
                }
            }

            for (&name, attr) in &class.attributes {
                if let Some((owner, _)) = self.resolve_attribute(parent_id, name) {
                    diagnostics.push(Diagnostic::error(
                        file,
                        attr.line,
                        format_message(
                            diagnostic_messages::ATTRIBUTE_REDEFINED,
                            &[
                                interner.resolve(name),
                                class_name,
                                interner.resolve(self.descriptor(owner).name),
                            ],
                        ),
                        diagnostic_codes::ATTRIBUTE_REDEFINED_IN_DESCENDANT,
                    ));
                }
            }
        }

        if diagnostics.is_empty() {
            Ok(())
        } else {
            debug!(errors = diagnostics.len(), "feature validation failed");
            Err(diagnostics)
        }
    }
}
