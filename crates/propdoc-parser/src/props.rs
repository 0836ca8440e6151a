//! Prop derivation from a component's first parameter.

use propdoc_core::PropMetadata;

use crate::examples;
use crate::registry::TypeRegistry;
use crate::serialize::{serialize_type, serialize_type_or_any, serialize_value};
use crate::syntax::{Param, PatternField, TypeMember, TypeNode};

/// Props of one component, plus the intersection members that could not be
/// expanded inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropsExtraction {
    pub props: Vec<PropMetadata>,
    /// Serialized unresolved intersection members, in source order.
    pub extends: Vec<String>,
}

impl PropsExtraction {
    fn from_props(props: Vec<PropMetadata>) -> Self {
        Self {
            props,
            extends: Vec::new(),
        }
    }
}

/// Derive props from the first parameter. Later parameters (`ref`,
/// legacy context) are ignored.
///
/// `hint` stands in for a missing annotation on the first parameter; it
/// comes from typed bindings such as `const X: FC<Props> = ...`.
#[must_use]
pub fn extract_props(
    params: &[Param],
    registry: &TypeRegistry,
    hint: Option<&TypeNode>,
) -> PropsExtraction {
    match params.first() {
        Some(Param::Object { fields, annotation }) => {
            match annotation.as_ref().or(hint) {
                Some(annotation) => {
                    let mut result = from_annotation(annotation, registry);
                    overlay_defaults(&mut result.props, fields);
                    result
                }
                None => PropsExtraction::from_props(fields.iter().map(pattern_prop).collect()),
            }
        }
        Some(Param::Identifier { annotation, .. }) => annotation
            .as_ref()
            .or(hint)
            .map(|a| from_annotation(a, registry))
            .unwrap_or_default(),
        Some(Param::Unsupported(_)) | None => PropsExtraction::default(),
    }
}

/// Resolve `node` far enough to tell whether it names a shape.
///
/// Only a result that is no longer a reference counts; a reference that
/// resolves to another (unregistered) reference is still opaque.
fn resolved(node: &TypeNode, registry: &TypeRegistry) -> Option<TypeNode> {
    registry.resolve(node).filter(|r| !r.is_reference())
}

fn from_annotation(annotation: &TypeNode, registry: &TypeRegistry) -> PropsExtraction {
    match annotation {
        TypeNode::Reference { .. } => resolved(annotation, registry)
            .map(|shape| from_annotation(&shape, registry))
            .unwrap_or_default(),
        TypeNode::Intersection(members) => {
            let mut merged = PropsExtraction::default();
            for member in members {
                let part = match member {
                    TypeNode::Reference { .. } => {
                        if let Some(shape) = resolved(member, registry) {
                            from_annotation(&shape, registry)
                        } else {
                            let name = serialize_type(member);
                            tracing::debug!(extends = %name, "unresolved intersection member");
                            merged.extends.push(name);
                            continue;
                        }
                    }
                    _ => from_annotation(member, registry),
                };
                for prop in part.props {
                    if merged.props.iter().all(|p| p.name != prop.name) {
                        merged.props.push(prop);
                    }
                }
                merged.extends.extend(part.extends);
            }
            merged
        }
        TypeNode::Object(members) | TypeNode::InterfaceBody(members) => {
            PropsExtraction::from_props(member_props(members))
        }
        _ => PropsExtraction::default(),
    }
}

/// One prop per named property signature, in declaration order.
fn member_props(members: &[TypeMember]) -> Vec<PropMetadata> {
    members
        .iter()
        .filter_map(|m| match m {
            TypeMember::Property(sig) => {
                let name = sig.name.as_deref()?;
                let type_name = serialize_type_or_any(sig.annotation.as_ref());
                let examples = examples::generate(name, &type_name, None).unwrap_or_default();
                Some(PropMetadata::new(name, type_name, !sig.optional).with_examples(examples))
            }
            TypeMember::Other(_) => None,
        })
        .collect()
}

/// A prop known only from the destructuring pattern.
fn pattern_prop(field: &PatternField) -> PropMetadata {
    let type_name = "any";
    let default_value = field
        .default
        .as_ref()
        .map(serialize_value)
        .filter(|d| !d.is_empty());
    let examples = examples::generate(&field.key, type_name, default_value.as_deref())
        .unwrap_or_default();
    PropMetadata {
        name: field.key.clone(),
        type_name: type_name.to_string(),
        required: field.default.is_none(),
        default_value,
        description: None,
        examples,
    }
}

/// Apply destructuring defaults to props derived from a type.
///
/// A default always clears `required`, even when its display text is empty.
fn overlay_defaults(props: &mut [PropMetadata], fields: &[PatternField]) {
    for field in fields {
        let Some(default) = &field.default else {
            continue;
        };
        let Some(prop) = props.iter_mut().find(|p| p.name == field.key) else {
            continue;
        };
        prop.required = false;
        let display = serialize_value(default);
        if display.is_empty() {
            continue;
        }
        if let Some(examples) = examples::generate(&prop.name, &prop.type_name, Some(&display)) {
            prop.examples = examples;
        }
        prop.default_value = Some(display);
    }
}

#[cfg(test)]
mod tests {
    use ast_grep_language::{LanguageExt, SupportLang};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::syntax::{self, Expr, Keyword};

    /// Parse `source`, build its registry and extract props from the first
    /// function declaration.
    fn props_of(source: &str) -> PropsExtraction {
        let root = SupportLang::Tsx.ast_grep(source);
        let registry = TypeRegistry::build(&root.root(), SupportLang::Tsx);
        let func = root
            .root()
            .find(ast_grep_core::matcher::KindMatcher::new(
                "function_declaration",
                SupportLang::Tsx,
            ))
            .expect("function declaration");
        let lowered = syntax::lower_function(func.get_node()).expect("body");
        extract_props(&lowered.params, &registry, None)
    }

    fn names(result: &PropsExtraction) -> Vec<&str> {
        result.props.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn no_params_no_props() {
        let result = props_of("function Empty() { return <div />; }");
        assert_eq!(result, PropsExtraction::default());
    }

    #[test]
    fn inline_annotation() {
        let result = props_of(
            "function Button({ label, onClick }: { label: string; onClick?: () => void }) { return <button />; }",
        );
        assert_eq!(
            result.props,
            vec![
                PropMetadata::new("label", "string", true).with_examples(vec!["Click me".into()]),
                PropMetadata::new("onClick", "() => void", false)
                    .with_examples(vec!["() => void".into()]),
            ]
        );
        assert!(result.extends.is_empty());
    }

    #[test]
    fn unannotated_pattern_uses_any_and_defaults() {
        let result = props_of("function Counter({ count = 0, step }) { return <span />; }");
        assert_eq!(
            result.props,
            vec![
                PropMetadata {
                    name: "count".into(),
                    type_name: "any".into(),
                    required: false,
                    default_value: Some("0".into()),
                    description: None,
                    examples: vec!["0".into()],
                },
                PropMetadata::new("step", "any", true),
            ]
        );
    }

    #[test]
    fn defaults_overlay_resolved_interface() {
        let result = props_of(
            r"
            interface CounterProps { count?: number; label: string }
            function Counter({ count = 0, label }: CounterProps) { return <span />; }
            ",
        );
        let count = &result.props[0];
        assert_eq!(count.type_name, "number");
        assert!(!count.required);
        assert_eq!(count.default_value.as_deref(), Some("0"));
        assert_eq!(count.examples, vec!["0".to_string()]);
        assert!(result.props[1].required);
    }

    #[test]
    fn default_forces_optional_even_when_declared_required() {
        let result = props_of(
            "function Tag({ tone = 'info' }: { tone: 'info' | 'warn' }) { return <i />; }",
        );
        let tone = &result.props[0];
        assert!(!tone.required);
        assert_eq!(tone.default_value.as_deref(), Some("info"));
        assert_eq!(tone.examples, vec!["info".to_string(), "warn".to_string()]);
    }

    #[test]
    fn unrenderable_default_still_clears_required() {
        let result = props_of(
            "function Clock({ now = tick++ }: { now: Date }) { return <time />; }",
        );
        let now = &result.props[0];
        assert!(!now.required);
        assert_eq!(now.default_value, None);
    }

    #[test]
    fn unresolved_reference_yields_nothing() {
        let result = props_of(
            "function Link({ href }: ExternalProps) { return <a />; }",
        );
        assert_eq!(result, PropsExtraction::default());
    }

    #[test]
    fn identifier_param_with_interface() {
        let result = props_of(
            r"
            interface CardProps { title: string; elevated?: boolean }
            function Card(props: CardProps) { return <div />; }
            ",
        );
        assert_eq!(names(&result), vec!["title", "elevated"]);
        assert_eq!(result.props[1].examples, vec!["true".to_string(), "false".to_string()]);
    }

    #[test]
    fn identifier_param_without_annotation() {
        let result = props_of("function Card(props) { return <div />; }");
        assert_eq!(result, PropsExtraction::default());
    }

    #[test]
    fn intersection_records_unresolved_members() {
        let result = props_of(
            r"
            type Base = { id: string };
            function Button({ id, kind }: Base & { kind: 'a' | 'b' } & React.ButtonHTMLAttributes<HTMLButtonElement>) {
                return <button />;
            }
            ",
        );
        assert_eq!(names(&result), vec!["id", "kind"]);
        assert_eq!(
            result.extends,
            vec!["React.ButtonHTMLAttributes<HTMLButtonElement>".to_string()]
        );
    }

    #[test]
    fn intersection_fully_resolved_has_no_extends() {
        let result = props_of(
            r"
            type A = { a: string };
            interface B { b: number }
            function Both(props: A & B) { return <div />; }
            ",
        );
        assert_eq!(names(&result), vec!["a", "b"]);
        assert!(result.extends.is_empty());
    }

    #[test]
    fn intersection_dedupes_by_name_first_wins() {
        let result = props_of(
            r"
            type Base = { id: string };
            type Wrapped = Base;
            function Twice(props: Base & Wrapped & { id: number }) { return <div />; }
            ",
        );
        assert_eq!(names(&result), vec!["id"]);
        assert_eq!(result.props[0].type_name, "string");
    }

    #[test]
    fn alias_to_intersection_is_expanded() {
        let result = props_of(
            r"
            type Own = { size: 'sm' | 'lg' };
            type Props = Own & Omit<HTMLAttributes, 'size'>;
            function Box({ size = 'sm' }: Props) { return <div />; }
            ",
        );
        assert_eq!(names(&result), vec!["size"]);
        assert_eq!(result.props[0].default_value.as_deref(), Some("sm"));
        assert_eq!(result.extends, vec!["Omit<HTMLAttributes, size>".to_string()]);
    }

    #[test]
    fn self_referential_alias_degrades_to_no_props() {
        let result = props_of("type A = A; function Loop(props: A) { return <div />; }");
        assert_eq!(result, PropsExtraction::default());
    }

    #[test]
    fn hint_fills_missing_annotation() {
        let registry: TypeRegistry = [(
            "Props".to_string(),
            TypeNode::Object(vec![TypeMember::Property(syntax::PropertySignature {
                name: Some("open".into()),
                optional: true,
                annotation: Some(TypeNode::Keyword(Keyword::Boolean)),
            })]),
        )]
        .into_iter()
        .collect();
        let params = vec![Param::Object {
            fields: vec![PatternField {
                key: "open".into(),
                default: Some(Expr::Bool(false)),
            }],
            annotation: None,
        }];
        let hint = TypeNode::Reference {
            name: "Props".into(),
            args: Vec::new(),
        };
        let result = extract_props(&params, &registry, Some(&hint));
        assert_eq!(
            result.props,
            vec![PropMetadata {
                name: "open".into(),
                type_name: "boolean".into(),
                required: false,
                default_value: Some("false".into()),
                description: None,
                examples: vec!["false".into(), "true".into()],
            }]
        );
    }

    #[test]
    fn second_parameter_is_ignored() {
        let result = props_of(
            "function Input({ value }: { value: string }, ref: Ref<HTMLInputElement>) { return <input />; }",
        );
        assert_eq!(names(&result), vec!["value"]);
    }
}
