//! Lowering from tree-sitter nodes (TypeScript/TSX grammar) to the typed model.

use ast_grep_core::Node;

use super::{
    Expr, FnTypeParam, FunctionBody, FunctionNode, Keyword, MemberProperty, ObjectKey,
    ObjectMember, Param, PatternField, PropertySignature, TypeMember, TypeNode, TypeOperator,
};

/// Node kinds that open a new function or class scope. `return` statements
/// inside them belong to someone else.
const NESTED_SCOPES: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "arrow_function",
    "method_definition",
    "class_declaration",
    "abstract_class_declaration",
    "class",
];

// ── Node helpers ───────────────────────────────────────────────────

/// Named children, with comments (tree-sitter extras) skipped.
fn named_children<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
        .collect()
}

fn first_named<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    named_children(node).into_iter().next()
}

fn field_text<D: ast_grep_core::Doc>(node: &Node<D>, field: &str) -> Option<String> {
    node.field(field).map(|n| n.text().to_string())
}

fn has_token<D: ast_grep_core::Doc>(node: &Node<D>, token: &str) -> bool {
    node.children().any(|c| c.kind().as_ref() == token)
}

/// Strip one pair of matching quotes.
fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

fn boxed<D: ast_grep_core::Doc>(node: Option<Node<D>>, parent_kind: &str) -> Box<TypeNode> {
    Box::new(node.map_or_else(
        || TypeNode::Unsupported(parent_kind.to_string()),
        |n| lower_type(&n),
    ))
}

// ── Types ──────────────────────────────────────────────────────────

/// Lower the type wrapped by a `type_annotation` (`: T`).
///
/// Also accepts a bare type node, so callers need not know whether a field
/// holds the annotation wrapper or the type itself.
pub fn lower_type_annotation<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<TypeNode> {
    let kind = node.kind();
    if kind.as_ref().ends_with("type_annotation") {
        first_named(node).map(|inner| lower_type(&inner))
    } else {
        Some(lower_type(node))
    }
}

/// Lower a type node.
pub fn lower_type<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeNode {
    let kind = node.kind();
    let k = kind.as_ref();
    match k {
        "predefined_type" => lower_keyword_text(node.text().trim()),
        "type_identifier" => {
            let text = node.text();
            Keyword::from_name(&text).map_or_else(
                || TypeNode::Reference {
                    name: text.to_string(),
                    args: Vec::new(),
                },
                TypeNode::Keyword,
            )
        }
        "nested_type_identifier" => TypeNode::Reference {
            name: node.text().split_whitespace().collect(),
            args: Vec::new(),
        },
        "generic_type" => TypeNode::Reference {
            name: node
                .field("name")
                .map(|n| n.text().split_whitespace().collect())
                .unwrap_or_default(),
            args: node
                .field("type_arguments")
                .map(|args| named_children(&args).iter().map(lower_type).collect())
                .unwrap_or_default(),
        },
        "literal_type" => match first_named(node) {
            Some(lit) => match lit.kind().as_ref() {
                "null" => TypeNode::Keyword(Keyword::Null),
                "undefined" => TypeNode::Keyword(Keyword::Undefined),
                _ => TypeNode::Literal(lower_expr(&lit)),
            },
            None => TypeNode::Unsupported(k.to_string()),
        },
        "union_type" => {
            let mut members = Vec::new();
            flatten(node, k, &mut members);
            TypeNode::Union(members)
        }
        "intersection_type" => {
            let mut members = Vec::new();
            flatten(node, k, &mut members);
            TypeNode::Intersection(members)
        }
        "array_type" => TypeNode::Array(boxed(first_named(node), k)),
        "tuple_type" => {
            TypeNode::Tuple(named_children(node).iter().map(lower_tuple_member).collect())
        }
        "object_type" => lower_object_type(node),
        "function_type" => TypeNode::Function {
            params: node
                .field("parameters")
                .map(|p| lower_fn_type_params(&p))
                .unwrap_or_default(),
            ret: node
                .field("return_type")
                .and_then(|rt| lower_type_annotation(&rt))
                .map(Box::new),
        },
        "parenthesized_type" => TypeNode::Parenthesized(boxed(first_named(node), k)),
        "type_query" => TypeNode::Query(
            first_named(node)
                .map(|target| target.text().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ),
        "index_type_query" => TypeNode::Operator {
            op: TypeOperator::KeyOf,
            inner: boxed(first_named(node), k),
        },
        "readonly_type" => TypeNode::Operator {
            op: TypeOperator::Readonly,
            inner: boxed(first_named(node), k),
        },
        "lookup_type" => {
            let mut parts = named_children(node).into_iter();
            let object = boxed(parts.next(), k);
            let index = boxed(parts.next(), k);
            TypeNode::IndexedAccess { object, index }
        }
        "conditional_type" => TypeNode::Conditional {
            check: boxed(node.field("left"), k),
            extends: boxed(node.field("right"), k),
            then: boxed(node.field("consequence"), k),
            otherwise: boxed(node.field("alternative"), k),
        },
        "rest_type" => TypeNode::Rest(boxed(first_named(node), k)),
        "optional_type" => TypeNode::Optional(boxed(first_named(node), k)),
        _ if k.ends_with("type_annotation") => lower_type_annotation(node)
            .unwrap_or_else(|| TypeNode::Unsupported(k.to_string())),
        _ => TypeNode::Unsupported(k.to_string()),
    }
}

fn lower_keyword_text(text: &str) -> TypeNode {
    if let Some(rest) = text.strip_prefix("unique")
        && rest.starts_with(char::is_whitespace)
    {
        return TypeNode::Operator {
            op: TypeOperator::Unique,
            inner: Box::new(lower_keyword_text(rest.trim())),
        };
    }
    Keyword::from_name(text).map_or_else(
        || TypeNode::Reference {
            name: text.to_string(),
            args: Vec::new(),
        },
        TypeNode::Keyword,
    )
}

/// `A | B | C` parses left-nested; collect the members flat, in order.
fn flatten<D: ast_grep_core::Doc>(node: &Node<D>, kind: &str, out: &mut Vec<TypeNode>) {
    for child in named_children(node) {
        if child.kind().as_ref() == kind {
            flatten(&child, kind, out);
        } else {
            out.push(lower_type(&child));
        }
    }
}

fn lower_tuple_member<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeNode {
    let kind = node.kind();
    match kind.as_ref() {
        // Labeled members: `[name: string, age?: number]`.
        "required_parameter" => node
            .field("type")
            .and_then(|t| lower_type_annotation(&t))
            .unwrap_or(TypeNode::Keyword(Keyword::Any)),
        "optional_parameter" => TypeNode::Optional(Box::new(
            node.field("type")
                .and_then(|t| lower_type_annotation(&t))
                .unwrap_or(TypeNode::Keyword(Keyword::Any)),
        )),
        _ => lower_type(node),
    }
}

fn lower_object_type<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeNode {
    let members = named_children(node);
    if let [only] = members.as_slice()
        && only.kind().as_ref() == "index_signature"
        && let Some(clause) = only
            .children()
            .find(|c| c.kind().as_ref() == "mapped_type_clause")
    {
        let value = only
            .field("type")
            .or_else(|| {
                only.children()
                    .find(|c| c.kind().as_ref().ends_with("type_annotation"))
            })
            .and_then(|t| lower_type_annotation(&t))
            .map(Box::new);
        return TypeNode::Mapped {
            param: field_text(&clause, "name").unwrap_or_else(|| "K".to_string()),
            value,
        };
    }
    TypeNode::Object(members.iter().map(lower_member).collect())
}

/// Lower one member of an object type or interface body.
fn lower_member<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeMember {
    let kind = node.kind();
    if kind.as_ref() != "property_signature" {
        return TypeMember::Other(kind.to_string());
    }
    let name = node
        .field("name")
        .filter(|n| n.kind().as_ref() == "property_identifier")
        .map(|n| n.text().to_string());
    TypeMember::Property(PropertySignature {
        name,
        optional: has_token(node, "?"),
        annotation: node.field("type").and_then(|t| lower_type_annotation(&t)),
    })
}

/// Lower the members of an `interface_body`.
pub(crate) fn lower_members<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<TypeMember> {
    named_children(node).iter().map(lower_member).collect()
}

fn lower_fn_type_params<D: ast_grep_core::Doc>(params: &Node<D>) -> Vec<FnTypeParam> {
    named_children(params)
        .iter()
        .map(|p| {
            let name = p
                .field("pattern")
                .filter(|pat| pat.kind().as_ref() == "identifier")
                .map(|pat| pat.text().to_string());
            FnTypeParam {
                name,
                optional: p.kind().as_ref() == "optional_parameter",
                annotation: p.field("type").and_then(|t| lower_type_annotation(&t)),
            }
        })
        .collect()
}

// ── Expressions ────────────────────────────────────────────────────

/// Lower an expression node.
pub fn lower_expr<D: ast_grep_core::Doc>(node: &Node<D>) -> Expr {
    let kind = node.kind();
    let k = kind.as_ref();
    match k {
        "string" => Expr::String(unquote(&node.text()).to_string()),
        "number" => Expr::Number(node.text().to_string()),
        "true" => Expr::Bool(true),
        "false" => Expr::Bool(false),
        "null" => Expr::Null,
        "undefined" => Expr::Undefined,
        "identifier" | "shorthand_property_identifier" | "property_identifier" | "this" => {
            Expr::Identifier(node.text().to_string())
        }
        "template_string" => {
            if has_token(node, "template_substitution") {
                Expr::Template(None)
            } else {
                let text = node.text();
                Expr::Template(Some(text.trim_matches('`').to_string()))
            }
        }
        "regex" => Expr::Regex {
            pattern: field_text(node, "pattern").unwrap_or_default(),
            flags: field_text(node, "flags").unwrap_or_default(),
        },
        "array" => Expr::Array(named_children(node).iter().map(lower_expr).collect()),
        "object" => Expr::Object(
            named_children(node)
                .iter()
                .filter_map(lower_object_member)
                .collect(),
        ),
        "arrow_function" => Expr::Arrow,
        "function_expression" | "function" => Expr::Function,
        "binary_expression" => Expr::Binary {
            left: Box::new(lower_expr_field(node, "left")),
            op: field_text(node, "operator").unwrap_or_default(),
            right: Box::new(lower_expr_field(node, "right")),
        },
        "unary_expression" => Expr::Unary {
            op: field_text(node, "operator").unwrap_or_default(),
            argument: Box::new(lower_expr_field(node, "argument")),
        },
        "ternary_expression" => Expr::Conditional {
            condition: Box::new(lower_expr_field(node, "condition")),
            consequence: Box::new(lower_expr_field(node, "consequence")),
            alternative: Box::new(lower_expr_field(node, "alternative")),
        },
        "member_expression" => Expr::Member {
            object: Box::new(lower_expr_field(node, "object")),
            property: MemberProperty::Named(field_text(node, "property").unwrap_or_default()),
            optional: has_token(node, "optional_chain"),
        },
        "subscript_expression" => Expr::Member {
            object: Box::new(lower_expr_field(node, "object")),
            property: MemberProperty::Computed(Box::new(lower_expr_field(node, "index"))),
            optional: has_token(node, "optional_chain"),
        },
        "call_expression" => Expr::Call {
            callee: Box::new(lower_expr_field(node, "function")),
            args: lower_arguments(node),
        },
        "new_expression" => Expr::New {
            callee: Box::new(lower_expr_field(node, "constructor")),
            args: lower_arguments(node),
        },
        "spread_element" => Expr::Spread(Box::new(
            first_named(node).map_or_else(|| Expr::Unsupported(k.to_string()), |e| lower_expr(&e)),
        )),
        "jsx_element" => {
            let is_fragment = node
                .field("open_tag")
                .is_some_and(|open| open.field("name").is_none());
            if is_fragment {
                Expr::JsxFragment
            } else {
                Expr::Jsx
            }
        }
        "jsx_self_closing_element" => Expr::Jsx,
        "jsx_fragment" => Expr::JsxFragment,
        "parenthesized_expression" => Expr::Parenthesized(Box::new(
            first_named(node).map_or_else(|| Expr::Unsupported(k.to_string()), |e| lower_expr(&e)),
        )),
        // Type-level wrappers vanish at runtime.
        "as_expression" | "satisfies_expression" | "non_null_expression" => first_named(node)
            .map_or_else(|| Expr::Unsupported(k.to_string()), |e| lower_expr(&e)),
        _ => Expr::Unsupported(k.to_string()),
    }
}

fn lower_expr_field<D: ast_grep_core::Doc>(node: &Node<D>, field: &str) -> Expr {
    node.field(field).map_or_else(
        || Expr::Unsupported(node.kind().to_string()),
        |n| lower_expr(&n),
    )
}

fn lower_arguments<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Expr> {
    node.field("arguments")
        .filter(|args| args.kind().as_ref() == "arguments")
        .map(|args| named_children(&args).iter().map(lower_expr).collect())
        .unwrap_or_default()
}

fn lower_object_member<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ObjectMember> {
    match node.kind().as_ref() {
        "pair" => {
            let key = node.field("key").map_or(ObjectKey::Other, |key| {
                match key.kind().as_ref() {
                    "property_identifier" => ObjectKey::Name(key.text().to_string()),
                    "string" => ObjectKey::Quoted(unquote(&key.text()).to_string()),
                    _ => ObjectKey::Other,
                }
            });
            Some(ObjectMember {
                key,
                value: lower_expr_field(node, "value"),
            })
        }
        "shorthand_property_identifier" => {
            let name = node.text().to_string();
            Some(ObjectMember {
                key: ObjectKey::Name(name.clone()),
                value: Expr::Identifier(name),
            })
        }
        _ => None,
    }
}

// ── Parameters and functions ───────────────────────────────────────

/// Lower a `formal_parameters` list.
pub fn lower_params<D: ast_grep_core::Doc>(params: &Node<D>) -> Vec<Param> {
    named_children(params).iter().map(lower_param).collect()
}

fn lower_param<D: ast_grep_core::Doc>(node: &Node<D>) -> Param {
    let kind = node.kind();
    match kind.as_ref() {
        "required_parameter" | "optional_parameter" => {
            let annotation = node.field("type").and_then(|t| lower_type_annotation(&t));
            match node.field("pattern") {
                Some(pattern) => lower_pattern_param(&pattern, annotation),
                None => Param::Unsupported(kind.to_string()),
            }
        }
        _ => lower_pattern_param(node, None),
    }
}

fn lower_pattern_param<D: ast_grep_core::Doc>(
    pattern: &Node<D>,
    annotation: Option<TypeNode>,
) -> Param {
    let kind = pattern.kind();
    match kind.as_ref() {
        "object_pattern" => Param::Object {
            fields: lower_pattern_fields(pattern),
            annotation,
        },
        "identifier" => Param::Identifier {
            name: pattern.text().to_string(),
            annotation,
        },
        "assignment_pattern" => match pattern.field("left") {
            Some(left) => lower_pattern_param(&left, annotation),
            None => Param::Unsupported(kind.to_string()),
        },
        _ => Param::Unsupported(kind.to_string()),
    }
}

/// Identifier-keyed entries of an `object_pattern`, in source order.
/// Rest elements and string/computed keys are skipped.
fn lower_pattern_fields<D: ast_grep_core::Doc>(pattern: &Node<D>) -> Vec<PatternField> {
    named_children(pattern)
        .iter()
        .filter_map(|child| match child.kind().as_ref() {
            "shorthand_property_identifier_pattern" => Some(PatternField {
                key: child.text().to_string(),
                default: None,
            }),
            "object_assignment_pattern" => {
                let left = child.field("left")?;
                if left.kind().as_ref() != "shorthand_property_identifier_pattern" {
                    return None;
                }
                Some(PatternField {
                    key: left.text().to_string(),
                    default: child.field("right").map(|r| lower_expr(&r)),
                })
            }
            "pair_pattern" => {
                let key = child.field("key")?;
                if key.kind().as_ref() != "property_identifier" {
                    return None;
                }
                let default = child
                    .field("value")
                    .filter(|v| v.kind().as_ref() == "assignment_pattern")
                    .and_then(|v| v.field("right"))
                    .map(|r| lower_expr(&r));
                Some(PatternField {
                    key: key.text().to_string(),
                    default,
                })
            }
            _ => None,
        })
        .collect()
}

/// Lower a function declaration, function expression or arrow function.
///
/// Returns `None` for nodes without a body (overload signatures).
pub fn lower_function<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<FunctionNode> {
    let params = if let Some(list) = node.field("parameters") {
        lower_params(&list)
    } else if let Some(single) = node.field("parameter") {
        vec![lower_pattern_param(&single, None)]
    } else {
        Vec::new()
    };

    let body = node.field("body")?;
    let body = if body.kind().as_ref() == "statement_block" {
        let mut returns = Vec::new();
        collect_returns(&body, &mut returns);
        FunctionBody::Block { returns }
    } else {
        FunctionBody::Expression(lower_expr(&body))
    };
    Some(FunctionNode { params, body })
}

/// Collect `return` arguments, entering nested blocks but not nested
/// functions or classes.
fn collect_returns<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut Vec<Option<Expr>>) {
    for child in named_children(node) {
        let kind = child.kind();
        if kind.as_ref() == "return_statement" {
            out.push(first_named(&child).map(|arg| lower_expr(&arg)));
        } else if !NESTED_SCOPES.contains(&kind.as_ref()) {
            collect_returns(&child, out);
        }
    }
}
