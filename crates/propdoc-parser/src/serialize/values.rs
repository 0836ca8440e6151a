use crate::syntax::{Expr, MemberProperty, ObjectKey};

/// Render an expression for display.
///
/// Textual reconstruction only; nothing is evaluated. Strings render
/// without their quotes.
#[must_use]
pub fn serialize_value(expr: &Expr) -> String {
    match expr {
        Expr::String(s) => s.clone(),
        Expr::Number(n) => n.clone(),
        Expr::Bool(b) => b.to_string(),
        Expr::Null => "null".to_string(),
        Expr::Undefined => "undefined".to_string(),
        Expr::Regex { pattern, flags } => format!("/{pattern}/{flags}"),
        Expr::Identifier(name) => name.clone(),
        Expr::Template(Some(raw)) => format!("`{raw}`"),
        Expr::Template(None) => "`${...}`".to_string(),
        Expr::Array(elements) => {
            let rendered: Vec<String> = elements
                .iter()
                .map(serialize_value)
                .filter(|s| !s.is_empty())
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        Expr::Object(members) => {
            let rendered: Vec<String> = members
                .iter()
                .filter_map(|m| {
                    let key = match &m.key {
                        ObjectKey::Name(name) => name.clone(),
                        ObjectKey::Quoted(key) => format!("\"{key}\""),
                        ObjectKey::Other => return None,
                    };
                    let value = serialize_value(&m.value);
                    (!value.is_empty()).then(|| format!("{key}: {value}"))
                })
                .collect();
            if rendered.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", rendered.join(", "))
            }
        }
        Expr::Arrow => "() => {}".to_string(),
        Expr::Function => "function() {}".to_string(),
        Expr::Binary { left, op, right } => format!(
            "{} {op} {}",
            serialize_value(left),
            serialize_value(right)
        ),
        Expr::Unary { op, argument } => {
            let argument = serialize_value(argument);
            if op.chars().all(char::is_alphabetic) {
                format!("{op} {argument}")
            } else {
                format!("{op}{argument}")
            }
        }
        Expr::Conditional {
            condition,
            consequence,
            alternative,
        } => format!(
            "{} ? {} : {}",
            serialize_value(condition),
            serialize_value(consequence),
            serialize_value(alternative)
        ),
        Expr::Member {
            object,
            property,
            optional,
        } => {
            let object = serialize_value(object);
            let dot = if *optional { "?." } else { "." };
            match property {
                MemberProperty::Named(name) => format!("{object}{dot}{name}"),
                MemberProperty::Computed(index) if *optional => {
                    format!("{object}?.[{}]", serialize_value(index))
                }
                MemberProperty::Computed(index) => {
                    format!("{object}[{}]", serialize_value(index))
                }
            }
        }
        Expr::Call { callee, args } => {
            format!("{}({})", serialize_value(callee), serialize_args(args))
        }
        Expr::New { callee, args } => {
            format!("new {}({})", serialize_value(callee), serialize_args(args))
        }
        Expr::Spread(inner) => format!("...{}", serialize_value(inner)),
        Expr::Jsx => "<jsx>".to_string(),
        Expr::JsxFragment => "<>".to_string(),
        Expr::Parenthesized(inner) => format!("({})", serialize_value(inner)),
        Expr::Unsupported(_) => String::new(),
    }
}

fn serialize_args(args: &[Expr]) -> String {
    args.iter()
        .map(serialize_value)
        .collect::<Vec<_>>()
        .join(", ")
}
