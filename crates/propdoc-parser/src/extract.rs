//! Component detection and metadata assembly for one parsed file.
//!
//! Walks the tree once in pre-order. Every function declaration, variable
//! bound to a function (directly or through `memo`/`forwardRef`) and
//! anonymous default export is a candidate:
//!
//! - **Accepted** when the bound name starts upper-case (or it is the
//!   anonymous default export) and some direct return path yields markup
//! - **Rejected** silently otherwise
//!
//! Accepted candidates get their props from [`props::extract_props`] and
//! their documentation from the `JSDoc` block above the declaration.
//! `export default Name;` and `export { Name as default }` upgrade the
//! export kind of an already-detected component after the walk.

mod usage;

use std::collections::HashSet;

use ast_grep_core::{AstGrep, Node};
use ast_grep_language::SupportLang;
use propdoc_config::ExtractConfig;
use propdoc_core::{ComponentMetadata, ExportKind};

use crate::jsdoc::{self, ParsedComment};
use crate::props;
use crate::registry::TypeRegistry;
use crate::syntax::{self, Expr, FunctionBody, TypeNode};

/// Call wrappers whose first argument is the component function.
const WRAPPERS: &[&str] = &["memo", "React.memo", "forwardRef", "React.forwardRef"];

/// Wrappers whose second type argument names the props type.
const FORWARD_REF: &[&str] = &["forwardRef", "React.forwardRef"];

/// Binding annotations whose first type argument names the props type.
const COMPONENT_TYPES: &[&str] = &[
    "FC",
    "React.FC",
    "FunctionComponent",
    "React.FunctionComponent",
    "VFC",
    "React.VFC",
];

/// Name given to an anonymous default export.
const ANONYMOUS_DEFAULT: &str = "default";

/// Extract every component declared in `root`.
///
/// Infallible: declarations the engine cannot make sense of are skipped,
/// and unresolvable types degrade per prop. `file_path` is copied into each
/// record and not otherwise interpreted.
#[must_use]
pub fn extract<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &AstGrep<D>,
    lang: SupportLang,
    file_path: &str,
    config: &ExtractConfig,
) -> Vec<ComponentMetadata> {
    let root_node = root.root();
    let registry = TypeRegistry::build(&root_node, lang);

    let mut scan = Scan {
        registry: &registry,
        file_path,
        config,
        components: Vec::new(),
        seen: HashSet::new(),
        default_reexports: Vec::new(),
    };
    scan.visit(&root_node);

    let Scan {
        mut components,
        default_reexports,
        ..
    } = scan;
    for name in &default_reexports {
        if let Some(component) = components.iter_mut().find(|c| &c.name == name) {
            component.export_kind = ExportKind::Default;
        }
    }
    components
}

// ── Walk ───────────────────────────────────────────────────────────

struct Scan<'a> {
    registry: &'a TypeRegistry,
    file_path: &'a str,
    config: &'a ExtractConfig,
    components: Vec<ComponentMetadata>,
    seen: HashSet<String>,
    /// Names exported as default by `export default Name;` or a clause.
    default_reexports: Vec<String>,
}

/// A declaration that may turn out to be a component.
struct Candidate<'r, D: ast_grep_core::Doc> {
    name: String,
    /// Function declaration, function expression or arrow function.
    function: Node<'r, D>,
    /// Props type taken from the binding when the parameter has none.
    hint: Option<TypeNode>,
    export_kind: ExportKind,
    /// Outermost node of the declaration; its previous sibling holds the docs.
    anchor: Node<'r, D>,
}

impl Scan<'_> {
    fn visit<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        match node.kind().as_ref() {
            "function_declaration" => {
                if let Some(candidate) = function_declaration(node) {
                    self.consider(candidate);
                }
            }
            "variable_declarator" => {
                if let Some(candidate) = variable_declarator(node) {
                    self.consider(candidate);
                }
            }
            "export_statement" => self.export_statement(node),
            _ => {}
        }

        for child in node.children() {
            self.visit(&child);
        }
    }

    fn export_statement<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        if has_default_token(node) {
            let Some(value) = node.field("value") else {
                return;
            };
            if value.kind().as_ref() == "identifier" {
                self.default_reexports.push(value.text().to_string());
            } else if let Some((function, hint)) = component_function(value.clone()) {
                // `export default function Name() {}` may surface as a named
                // function expression.
                let name = matches!(value.kind().as_ref(), "function_expression" | "function")
                    .then(|| value.field("name").map(|n| n.text().to_string()))
                    .flatten();
                self.consider(Candidate {
                    name: name.unwrap_or_else(|| ANONYMOUS_DEFAULT.to_string()),
                    function,
                    hint,
                    export_kind: ExportKind::Default,
                    anchor: node.clone(),
                });
            }
            return;
        }

        // `export { X as default }`, but not a re-export from another module.
        if node.field("source").is_some() {
            return;
        }
        let Some(clause) = node
            .children()
            .find(|c| c.kind().as_ref() == "export_clause")
        else {
            return;
        };
        for specifier in clause.children() {
            if specifier.kind().as_ref() != "export_specifier" {
                continue;
            }
            let is_default = specifier
                .field("alias")
                .is_some_and(|alias| alias.text().as_ref() == ANONYMOUS_DEFAULT);
            if is_default && let Some(name) = specifier.field("name") {
                self.default_reexports.push(name.text().to_string());
            }
        }
    }

    fn consider<D: ast_grep_core::Doc>(&mut self, candidate: Candidate<'_, D>) {
        let Candidate {
            name,
            function,
            hint,
            export_kind,
            anchor,
        } = candidate;

        if name != ANONYMOUS_DEFAULT && !is_component_name(&name) {
            tracing::trace!(%name, "rejected: not a component name");
            return;
        }
        if self.seen.contains(&name) {
            tracing::trace!(%name, "rejected: duplicate declaration");
            return;
        }
        let Some(lowered) = syntax::lower_function(&function) else {
            tracing::trace!(%name, "rejected: no body");
            return;
        };
        if !returns_ui_element(&lowered.body) {
            tracing::trace!(%name, "rejected: no markup return");
            return;
        }

        let extraction = props::extract_props(&lowered.params, self.registry, hint.as_ref());
        let mut component = ComponentMetadata::new(name.as_str(), self.file_path, export_kind);
        component.props = extraction.props;
        component.extends = extraction.extends;
        if let Some(doc) = jsdoc::comment_before(&anchor) {
            apply_doc(&mut component, doc);
        }
        if self.config.usage_snippets {
            usage::rewrite_examples(&mut component);
        }

        tracing::debug!(
            %name,
            export_kind = %component.export_kind,
            props = component.props.len(),
            "component accepted"
        );
        self.seen.insert(name);
        self.components.push(component);
    }
}

// ── Candidates ─────────────────────────────────────────────────────

fn function_declaration<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<Candidate<'r, D>> {
    let name = node.field("name")?.text().to_string();
    let export = node
        .parent()
        .filter(|p| p.kind().as_ref() == "export_statement");
    let export_kind = if export.as_ref().is_some_and(has_default_token) {
        ExportKind::Default
    } else {
        ExportKind::Named
    };
    Some(Candidate {
        name,
        function: node.clone(),
        hint: None,
        export_kind,
        anchor: export.unwrap_or_else(|| node.clone()),
    })
}

fn variable_declarator<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<Candidate<'r, D>> {
    let name = node
        .field("name")
        .filter(|n| n.kind().as_ref() == "identifier")?
        .text()
        .to_string();
    let (function, wrapper_hint) = component_function(node.field("value")?)?;
    let binding_hint = node
        .field("type")
        .and_then(|t| syntax::lower_type_annotation(&t))
        .and_then(component_type_props);

    let declaration = node.parent().unwrap_or_else(|| node.clone());
    let anchor = declaration
        .parent()
        .filter(|p| p.kind().as_ref() == "export_statement")
        .unwrap_or(declaration);

    Some(Candidate {
        name,
        function,
        hint: binding_hint.or(wrapper_hint),
        export_kind: ExportKind::Named,
        anchor,
    })
}

/// Find the function a binding or default export evaluates to, looking
/// through parentheses and the wrappers in [`WRAPPERS`].
fn component_function<'r, D: ast_grep_core::Doc>(
    value: Node<'r, D>,
) -> Option<(Node<'r, D>, Option<TypeNode>)> {
    match value.kind().as_ref() {
        "arrow_function" | "function_expression" | "function" => Some((value, None)),
        "parenthesized_expression" => component_function(first_named(&value)?),
        "call_expression" => {
            let callee = value.field("function")?;
            let callee = callee.text();
            let callee: String = callee.split_whitespace().collect();
            if !WRAPPERS.contains(&callee.as_str()) {
                return None;
            }
            let hint = if FORWARD_REF.contains(&callee.as_str()) {
                value
                    .field("type_arguments")
                    .and_then(|args| named(&args).nth(1))
                    .map(|props| syntax::lower_type(&props))
            } else {
                None
            };
            let argument = value.field("arguments").and_then(|args| first_named(&args))?;
            let (function, inner_hint) = component_function(argument)?;
            Some((function, hint.or(inner_hint)))
        }
        _ => None,
    }
}

/// `FC<Props>` and friends → `Props`.
fn component_type_props(annotation: TypeNode) -> Option<TypeNode> {
    match annotation {
        TypeNode::Reference { name, args } if COMPONENT_TYPES.contains(&name.as_str()) => {
            args.into_iter().next()
        }
        _ => None,
    }
}

fn named<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> impl Iterator<Item = Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
}

fn first_named<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    named(node).next()
}

fn has_default_token<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.children().any(|c| c.kind().as_ref() == "default")
}

fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

// ── Return analysis ────────────────────────────────────────────────

/// Whether any direct return path of the body yields markup.
fn returns_ui_element(body: &FunctionBody) -> bool {
    match body {
        FunctionBody::Expression(expr) => yields_ui_element(expr),
        FunctionBody::Block { returns } => returns.iter().flatten().any(yields_ui_element),
    }
}

/// Markup, or a conditional/logical/parenthesized expression with markup in
/// one of its branches.
fn yields_ui_element(expr: &Expr) -> bool {
    match expr {
        Expr::Jsx | Expr::JsxFragment => true,
        Expr::Parenthesized(inner) => yields_ui_element(inner),
        Expr::Conditional {
            consequence,
            alternative,
            ..
        } => yields_ui_element(consequence) || yields_ui_element(alternative),
        Expr::Binary { left, op, right } if matches!(op.as_str(), "&&" | "||" | "??") => {
            yields_ui_element(left) || yields_ui_element(right)
        }
        _ => false,
    }
}

// ── Documentation ──────────────────────────────────────────────────

fn apply_doc(component: &mut ComponentMetadata, doc: ParsedComment) {
    let ParsedComment {
        description,
        deprecated,
        returns,
        see,
        since,
        examples,
        param_descriptions,
    } = doc;

    component.description = description;
    component.deprecated = deprecated;
    component.returns = returns.filter(|r| !r.is_empty());
    component.links = see;
    component.since = since;
    component.examples = examples;

    for prop in &mut component.props {
        if prop.description.is_none()
            && let Some(desc) = param_descriptions.get(&prop.name)
        {
            prop.description = Some(desc.clone());
        }
    }
}

#[cfg(test)]
mod tests;
