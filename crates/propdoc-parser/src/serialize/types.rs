use crate::syntax::{FnTypeParam, TypeMember, TypeNode};

use super::values::serialize_value;

/// Render a type annotation as its canonical string.
#[must_use]
pub fn serialize_type(node: &TypeNode) -> String {
    match node {
        TypeNode::Keyword(kw) => kw.as_str().to_string(),
        TypeNode::Array(element) => format!("{}[]", serialize_type(element)),
        TypeNode::Union(members) => join_members(members, " | "),
        TypeNode::Intersection(members) => join_members(members, " & "),
        TypeNode::Tuple(elements) => format!("[{}]", join(elements, ", ")),
        TypeNode::Literal(value) => serialize_value(value),
        TypeNode::Reference { name, args } if args.is_empty() => name.clone(),
        TypeNode::Reference { name, args } => format!("{name}<{}>", join(args, ", ")),
        TypeNode::Object(members) | TypeNode::InterfaceBody(members) => {
            serialize_members(members)
        }
        TypeNode::Function { params, ret } => {
            let params: Vec<String> = params.iter().map(serialize_fn_param).collect();
            let ret = ret
                .as_deref()
                .map_or_else(|| "void".to_string(), serialize_type);
            format!("({}) => {ret}", params.join(", "))
        }
        TypeNode::Parenthesized(inner) => format!("({})", serialize_type(inner)),
        TypeNode::Query(target) => format!("typeof {target}"),
        TypeNode::IndexedAccess { object, index } => {
            format!("{}[{}]", serialize_type(object), serialize_type(index))
        }
        TypeNode::Conditional {
            check,
            extends,
            then,
            otherwise,
        } => format!(
            "{} extends {} ? {} : {}",
            serialize_type(check),
            serialize_type(extends),
            serialize_type(then),
            serialize_type(otherwise)
        ),
        TypeNode::Mapped { param, value } => format!(
            "{{ [{param}]: {} }}",
            serialize_type_or_any(value.as_deref())
        ),
        TypeNode::Rest(inner) => format!("...{}", serialize_type(inner)),
        TypeNode::Optional(inner) => format!("{}?", serialize_type(inner)),
        TypeNode::Operator { op, inner } => format!("{} {}", op.as_str(), serialize_type(inner)),
        TypeNode::Unsupported(_) => "unknown".to_string(),
    }
}

/// Like [`serialize_type`], rendering a missing annotation as `"any"`.
#[must_use]
pub fn serialize_type_or_any(node: Option<&TypeNode>) -> String {
    node.map_or_else(|| "any".to_string(), serialize_type)
}

fn join(nodes: &[TypeNode], sep: &str) -> String {
    nodes.iter().map(serialize_type).collect::<Vec<_>>().join(sep)
}

fn join_members(members: &[TypeNode], sep: &str) -> String {
    if members.is_empty() {
        "unknown".to_string()
    } else {
        join(members, sep)
    }
}

fn serialize_members(members: &[TypeMember]) -> String {
    let rendered: Vec<String> = members
        .iter()
        .filter_map(|m| match m {
            TypeMember::Property(prop) => Some(format!(
                "{}{}: {}",
                prop.name.as_deref().unwrap_or("unknown"),
                if prop.optional { "?" } else { "" },
                serialize_type_or_any(prop.annotation.as_ref())
            )),
            TypeMember::Other(_) => None,
        })
        .collect();
    if rendered.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", rendered.join("; "))
    }
}

fn serialize_fn_param(param: &FnTypeParam) -> String {
    format!(
        "{}{}: {}",
        param.name.as_deref().unwrap_or("arg"),
        if param.optional { "?" } else { "" },
        serialize_type_or_any(param.annotation.as_ref())
    )
}
