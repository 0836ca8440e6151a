//! Component and prop records emitted by the extraction engine.
//!
//! Field names serialize in camelCase (`filePath`, `exportKind`,
//! `defaultValue`) because the records are consumed by JavaScript-side
//! documentation renderers. Optional sequences are omitted when empty.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ExportKind;

/// One detected UI component.
///
/// Built once per accepted declaration during a single pass over one file;
/// it carries no identity beyond that file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    /// Bound name, or `"default"` for an anonymous default export.
    pub name: String,
    /// Caller-supplied source identifier, passed through untouched.
    pub file_path: String,
    pub export_kind: ExportKind,
    /// Props in declaration order.
    pub props: Vec<PropMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// `@see` targets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Component-level `@example` blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    /// Intersection members that could not be expanded inline, e.g.
    /// `ButtonHTMLAttributes<HTMLButtonElement>`. Empty unless at least one
    /// member failed to resolve.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
}

impl ComponentMetadata {
    /// A bare record with no props and no documentation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        export_kind: ExportKind,
    ) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            export_kind,
            props: Vec::new(),
            description: None,
            deprecated: None,
            returns: None,
            links: Vec::new(),
            since: None,
            examples: Vec::new(),
            extends: Vec::new(),
        }
    }

    /// Look up a prop by name.
    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&PropMetadata> {
        self.props.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// One field of a component's configuration parameter.
///
/// `required` is always `false` when the destructuring pattern supplies a
/// default, whatever the declared optionality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropMetadata {
    pub name: String,
    /// Canonical type string.
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Representative values, deduplicated, in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl PropMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            required,
            default_value: None,
            description: None,
            examples: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }
}

/// `@deprecated` without text is a bare flag; with text it carries the
/// message. Serializes as `true` or as the message string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Deprecation {
    Flag(bool),
    Message(String),
}

impl Deprecation {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::Message(m) => Some(m),
        }
    }
}
