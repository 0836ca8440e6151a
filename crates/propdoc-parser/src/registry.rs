//! File-local registry of type aliases and interfaces.
//!
//! Built once per file and read-only afterwards. Resolution follows
//! references through the registry with a cycle guard; names the file does
//! not declare (imports, globals) come back unchanged so callers can treat
//! them as opaque.

use std::collections::HashMap;

use ast_grep_core::Node;
use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;
use ast_grep_language::SupportLang;

use crate::syntax::{self, TypeNode};

const TYPE_DECLARATION_KINDS: &[&str] = &["type_alias_declaration", "interface_declaration"];

#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeNode>,
}

/// Names already entered on the current resolution path.
///
/// Each recursive step links a new frame onto its caller's, so sibling
/// branches (two members of one intersection) never see each other's
/// entries.
struct Trail<'t> {
    name: &'t str,
    parent: Option<&'t Trail<'t>>,
}

impl Trail<'_> {
    fn contains(&self, name: &str) -> bool {
        let mut frame = Some(self);
        while let Some(f) = frame {
            if f.name == name {
                return true;
            }
            frame = f.parent;
        }
        false
    }
}

impl TypeRegistry {
    /// Register every type alias and interface in the tree, nested ones
    /// included. A later declaration of the same name replaces an earlier one.
    #[must_use]
    pub fn build<D: ast_grep_core::Doc<Lang = SupportLang>>(
        root: &Node<D>,
        lang: SupportLang,
    ) -> Self {
        let matchers: Vec<KindMatcher> = TYPE_DECLARATION_KINDS
            .iter()
            .map(|k| KindMatcher::new(k, lang))
            .collect();
        let matcher = Any::new(matchers);

        let mut registry = Self::default();
        for node in root.find_all(&matcher) {
            let Some(name) = node.field("name").map(|n| n.text().to_string()) else {
                continue;
            };
            let definition = if node.kind().as_ref() == "interface_declaration" {
                node.field("body")
                    .map(|body| TypeNode::InterfaceBody(syntax::lower_members(&body)))
            } else {
                node.field("value").map(|value| syntax::lower_type(&value))
            };
            if let Some(definition) = definition {
                registry.types.insert(name, definition);
            }
        }
        tracing::trace!(types = registry.types.len(), "type registry built");
        registry
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.types.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a type to its underlying shape.
    ///
    /// - references follow the registry; unregistered names return the
    ///   reference itself
    /// - a reference already on the current path returns `None`
    /// - union and intersection members are resolved one by one, and members
    ///   that resolve to nothing are left out
    /// - anything else is returned as is
    #[must_use]
    pub fn resolve(&self, node: &TypeNode) -> Option<TypeNode> {
        self.resolve_in(node, None)
    }

    fn resolve_in(&self, node: &TypeNode, trail: Option<&Trail<'_>>) -> Option<TypeNode> {
        match node {
            TypeNode::Reference { name, .. } => {
                if trail.is_some_and(|t| t.contains(name)) {
                    tracing::trace!(type_name = %name, "cyclic type reference");
                    return None;
                }
                let Some(definition) = self.types.get(name) else {
                    return Some(node.clone());
                };
                let frame = Trail {
                    name,
                    parent: trail,
                };
                self.resolve_in(definition, Some(&frame))
            }
            TypeNode::Union(members) => Some(TypeNode::Union(
                members
                    .iter()
                    .filter_map(|m| self.resolve_in(m, trail))
                    .collect(),
            )),
            TypeNode::Intersection(members) => Some(TypeNode::Intersection(
                members
                    .iter()
                    .filter_map(|m| self.resolve_in(m, trail))
                    .collect(),
            )),
            other => Some(other.clone()),
        }
    }
}

impl FromIterator<(String, TypeNode)> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = (String, TypeNode)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}
