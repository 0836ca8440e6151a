//! Representative example values for a prop.
//!
//! Deterministic: the same name, type and default always produce the same
//! list. String heuristics are checked in the fixed order below.

/// Name fragments (matched case-insensitively) and the example each picks
/// for a plain `string` prop. First match wins.
const STRING_HEURISTICS: &[(&[&str], &str)] = &[
    (&["name"], "John Doe"),
    (&["title", "label", "text"], "Click me"),
    (&["id"], "user-123"),
    (&["url", "link"], "https://example.com"),
    (&["email"], "user@example.com"),
    (&["class"], "btn-primary"),
];

const STRING_FALLBACK: &str = "Example value";

/// Function types longer than this are summarised.
const MAX_FUNCTION_EXAMPLE_LEN: usize = 50;

/// Generate examples for a prop.
///
/// - a default value always comes first
/// - union types list their simple members (quotes stripped) and stop there
/// - `string` without a default gets one name-based value
/// - `number` without a default gets `42`
/// - `boolean` gets `true` and `false`
/// - function types get their own signature, or `() => void` when long
///
/// Returns `None` when nothing applies.
#[must_use]
pub fn generate(
    prop_name: &str,
    type_string: &str,
    default_value: Option<&str>,
) -> Option<Vec<String>> {
    let default_value = default_value.filter(|d| !d.is_empty());
    let mut examples = Examples::default();
    if let Some(default) = default_value {
        examples.push(default);
    }

    if type_string.contains('|') {
        type_string
            .split('|')
            .map(str::trim)
            .filter(|m| !m.is_empty() && *m != "undefined" && *m != "null")
            .filter(|m| !m.contains('(') && !m.contains('{'))
            .for_each(|m| examples.push(strip_quotes(m)));
        if !examples.is_empty() {
            return Some(examples.0);
        }
    }

    let lower = type_string.to_ascii_lowercase();
    if lower == "string" && default_value.is_none() {
        examples.push(string_heuristic(prop_name));
    } else if lower == "number" && default_value.is_none() {
        examples.push("42");
    } else if lower == "boolean" {
        examples.push("true");
        examples.push("false");
    } else if type_string.contains("=>") || type_string.contains("function") {
        if type_string.len() < MAX_FUNCTION_EXAMPLE_LEN {
            examples.push(type_string);
        } else {
            examples.push("() => void");
        }
    }

    (!examples.is_empty()).then_some(examples.0)
}

fn string_heuristic(prop_name: &str) -> &'static str {
    let name = prop_name.to_lowercase();
    STRING_HEURISTICS
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| name.contains(f)))
        .map_or(STRING_FALLBACK, |(_, example)| *example)
}

/// Strip one leading and one trailing quote character.
fn strip_quotes(member: &str) -> &str {
    let member = member.strip_prefix(['"', '\'']).unwrap_or(member);
    member.strip_suffix(['"', '\'']).unwrap_or(member)
}

/// Insertion-ordered set.
#[derive(Default)]
struct Examples(Vec<String>);

impl Examples {
    fn push(&mut self, value: &str) {
        if !self.0.iter().any(|v| v == value) {
            self.0.push(value.to_string());
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
