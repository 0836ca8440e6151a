//! JSX usage snippets built from prop examples.

use propdoc_core::{ComponentMetadata, PropMetadata};

/// Replace each prop example with a one-line usage of the component.
pub(super) fn rewrite_examples(component: &mut ComponentMetadata) {
    let name = component.name.clone();
    for prop in &mut component.props {
        let examples = std::mem::take(&mut prop.examples);
        prop.examples = examples
            .iter()
            .map(|value| snippet(&name, prop, value))
            .collect();
    }
}

fn snippet(component: &str, prop: &PropMetadata, value: &str) -> String {
    let ty = prop.type_name.as_str();
    let attr = &prop.name;
    if ty.contains("=>") || ty.contains("function") {
        return format!("<{component} {attr}={{{value}}} />");
    }
    if ty.eq_ignore_ascii_case("boolean") {
        return if value == "true" {
            format!("<{component} {attr} />")
        } else {
            format!("<{component} {attr}={{false}} />")
        };
    }
    if ty.eq_ignore_ascii_case("string") || (ty.contains('|') && is_text_literal(value)) {
        return format!("<{component} {attr}=\"{value}\" />");
    }
    format!("<{component} {attr}={{{value}}} />")
}

/// Union members come through unquoted; anything that is not a number or a
/// boolean was a string literal.
fn is_text_literal(value: &str) -> bool {
    !matches!(value, "true" | "false") && value.parse::<f64>().is_err()
}

#[cfg(test)]
mod tests {
    use propdoc_core::ExportKind;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("label", "string", "Click me", "<Button label=\"Click me\" />")]
    #[case("onClick", "() => void", "() => void", "<Button onClick={() => void} />")]
    #[case("disabled", "boolean", "true", "<Button disabled />")]
    #[case("disabled", "boolean", "false", "<Button disabled={false} />")]
    #[case("count", "number", "42", "<Button count={42} />")]
    #[case("variant", "primary | secondary", "primary", "<Button variant=\"primary\" />")]
    #[case("size", "1 | 2 | 3", "2", "<Button size={2} />")]
    #[case("style", "any", "{ color: red }", "<Button style={{ color: red }} />")]
    fn snippet_shapes(
        #[case] prop: &str,
        #[case] ty: &str,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let prop = PropMetadata::new(prop, ty, false);
        assert_eq!(snippet("Button", &prop, value), expected);
    }

    #[test]
    fn rewrites_every_prop() {
        let mut component = ComponentMetadata::new("Toggle", "Toggle.tsx", ExportKind::Named);
        component.props = vec![
            PropMetadata::new("on", "boolean", true)
                .with_examples(vec!["true".into(), "false".into()]),
            PropMetadata::new("data", "Data", true),
        ];
        rewrite_examples(&mut component);
        assert_eq!(
            component.props[0].examples,
            vec!["<Toggle on />".to_string(), "<Toggle on={false} />".to_string()]
        );
        assert!(component.props[1].examples.is_empty());
    }
}
