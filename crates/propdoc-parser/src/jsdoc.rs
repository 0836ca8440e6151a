//! `JSDoc` block comment parsing.

use std::collections::HashMap;

use ast_grep_core::Node;
use propdoc_core::Deprecation;

/// Structured content of one documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedComment {
    /// Untagged lines before the first tag, space-joined.
    pub description: Option<String>,
    pub deprecated: Option<Deprecation>,
    pub returns: Option<String>,
    /// `@see` targets.
    pub see: Vec<String>,
    pub since: Option<String>,
    /// One entry per `@example` block, lines newline-joined.
    pub examples: Vec<String>,
    /// `@param` / `@property` descriptions keyed by parameter name.
    pub param_descriptions: HashMap<String, String>,
}

/// Which tag the following untagged lines continue.
enum Open<'a> {
    Description,
    Param(Option<String>),
    Returns,
    Example(Vec<&'a str>),
    Other,
}

impl ParsedComment {
    /// Parse the text between `/**` and `*/`.
    ///
    /// Returns `None` when the comment has no content once the leading `*`
    /// decoration is stripped.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lines: Vec<&str> = raw
            .lines()
            .map(strip_decoration)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return None;
        }

        let mut doc = Self::default();
        let mut description: Vec<&str> = Vec::new();
        let mut open = Open::Description;

        for line in lines {
            let Some((tag, content)) = split_tag(line) else {
                match &mut open {
                    Open::Description => description.push(line),
                    Open::Param(Some(name)) => {
                        append(doc.param_descriptions.entry(name.clone()).or_default(), line);
                    }
                    Open::Returns => append(doc.returns.get_or_insert_with(String::new), line),
                    Open::Example(buf) => buf.push(line),
                    Open::Param(None) | Open::Other => {}
                }
                continue;
            };

            doc.close(std::mem::replace(&mut open, Open::Other));
            open = match tag {
                "param" | "property" => {
                    let param = parse_param(content);
                    if let Some((name, Some(desc))) = &param {
                        doc.param_descriptions.insert(name.clone(), desc.clone());
                    }
                    Open::Param(param.map(|(name, _)| name))
                }
                "returns" | "return" => {
                    let text = strip_type_fragment(content);
                    if !text.is_empty() {
                        doc.returns = Some(text.to_string());
                    }
                    Open::Returns
                }
                "example" => Open::Example(if content.is_empty() {
                    Vec::new()
                } else {
                    vec![content]
                }),
                "deprecated" => {
                    doc.deprecated = Some(if content.is_empty() {
                        Deprecation::Flag(true)
                    } else {
                        Deprecation::Message(content.to_string())
                    });
                    Open::Other
                }
                "see" => {
                    if let Some(target) = see_target(content) {
                        doc.see.push(target.to_string());
                    }
                    Open::Other
                }
                "since" => {
                    if !content.is_empty() {
                        doc.since = Some(content.to_string());
                    }
                    Open::Other
                }
                _ => Open::Other,
            };
        }
        doc.close(open);

        if !description.is_empty() {
            doc.description = Some(description.join(" "));
        }
        Some(doc)
    }

    fn close(&mut self, open: Open<'_>) {
        if let Open::Example(lines) = open
            && !lines.is_empty()
        {
            self.examples.push(lines.join("\n").trim().to_string());
        }
    }
}

/// Read the `JSDoc` block directly preceding `anchor`, if any.
///
/// `anchor` is the outermost node of the declaration: the `export_statement`
/// when exported, else the declaration itself.
pub fn comment_before<D: ast_grep_core::Doc>(anchor: &Node<D>) -> Option<ParsedComment> {
    let prev = anchor.prev()?;
    if prev.kind().as_ref() != "comment" {
        return None;
    }
    let text = prev.text();
    let body = text.strip_prefix("/**")?.strip_suffix("*/")?;
    ParsedComment::parse(body)
}

/// Strip the leading `*` and surrounding whitespace from one comment line.
fn strip_decoration(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix('*').unwrap_or(line).trim()
}

/// `@name rest` → `("name", "rest")`. The name is word characters only and
/// must be followed by whitespace or the end of the line.
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let (name, after) = rest.split_at(end);
    if after.is_empty() {
        Some((name, ""))
    } else if after.starts_with(char::is_whitespace) {
        Some((name, after.trim()))
    } else {
        None
    }
}

/// `{type} name - description`.
///
/// Dotted names (`props.label`) are recorded under their last segment.
fn parse_param(content: &str) -> Option<(String, Option<String>)> {
    let mut rest = content;
    if rest.starts_with('{') {
        let close = rest.find('}')?;
        let after = &rest[close + 1..];
        if close == 1 || !after.starts_with(char::is_whitespace) {
            return None;
        }
        rest = after.trim_start();
    }

    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
        .unwrap_or(rest.len());
    let (path, after) = rest.split_at(end);
    let name = path.rsplit('.').next().filter(|n| !n.is_empty())?;

    if after.is_empty() {
        return Some((name.to_string(), None));
    }
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    let desc = after.trim_start();
    let desc = desc.strip_prefix('-').unwrap_or(desc).trim();
    Some((name.to_string(), (!desc.is_empty()).then(|| desc.to_string())))
}

/// Drop a leading `{type}` fragment.
fn strip_type_fragment(content: &str) -> &str {
    if content.starts_with('{')
        && let Some(close) = content.find('}')
    {
        return content[close + 1..].trim();
    }
    content
}

/// `{@link target}` anywhere, else the first whitespace-delimited token.
fn see_target(content: &str) -> Option<&str> {
    if let Some(start) = content.find("{@link")
        && let Some(len) = content[start..].find('}')
    {
        let inner = content[start + "{@link".len()..start + len].trim();
        if !inner.is_empty() {
            return Some(inner);
        }
    }
    content.split_whitespace().next()
}

fn append(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}
