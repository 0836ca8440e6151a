use super::*;

#[test]
fn jsdoc_fields_attach_to_component() {
    let components = parse_and_extract(
        r"
/**
 * Shows a status badge.
 *
 * @returns A span element
 * @see https://example.com/badge
 * @since 0.4.0
 * @example
 * <Badge tone='ok' />
 */
function Badge({ tone }: { tone: string }) {
    return <span />;
}
",
    );
    let badge = find_by_name(&components, "Badge");
    assert_eq!(badge.description.as_deref(), Some("Shows a status badge."));
    assert_eq!(badge.returns.as_deref(), Some("A span element"));
    assert_eq!(badge.links, vec!["https://example.com/badge".to_string()]);
    assert_eq!(badge.since.as_deref(), Some("0.4.0"));
    assert_eq!(badge.examples, vec!["<Badge tone='ok' />".to_string()]);
    assert_eq!(badge.deprecated, None);
}

#[test]
fn comment_above_export_statement_is_used() {
    let components = parse_and_extract(
        r"
/** Site footer. */
export const Footer = () => <footer />;
",
    );
    assert_eq!(
        find_by_name(&components, "Footer").description.as_deref(),
        Some("Site footer.")
    );
}

#[test]
fn deprecated_flag_and_message() {
    let components = parse_and_extract(
        r"
/** @deprecated */
function Old() { return <i />; }

/** @deprecated Use New */
function Older() { return <i />; }
",
    );
    assert_eq!(
        find_by_name(&components, "Old").deprecated,
        Some(Deprecation::Flag(true))
    );
    assert_eq!(
        find_by_name(&components, "Older").deprecated,
        Some(Deprecation::Message("Use New".into()))
    );
}

#[test]
fn param_descriptions_fill_props() {
    let components = parse_and_extract(
        r"
/**
 * @param label - Visible text
 * @param props.onPress Called on press
 * @param missing Not a prop
 */
function Pressable({ label, onPress }: { label: string; onPress: () => void }) {
    return <button />;
}
",
    );
    let c = find_by_name(&components, "Pressable");
    assert_eq!(find_prop(c, "label").description.as_deref(), Some("Visible text"));
    assert_eq!(find_prop(c, "onPress").description.as_deref(), Some("Called on press"));
    assert_eq!(c.props.len(), 2);
}

#[test]
fn line_comment_is_not_documentation() {
    let components = parse_and_extract(
        r"
// Not a doc block
function Plain() { return <i />; }
",
    );
    assert_eq!(find_by_name(&components, "Plain").description, None);
}

#[test]
fn plain_block_comment_is_not_documentation() {
    let components = parse_and_extract(
        r"
/* single star */
function Plain() { return <i />; }
",
    );
    assert_eq!(find_by_name(&components, "Plain").description, None);
}

#[test]
fn comment_separated_by_code_does_not_attach() {
    let components = parse_and_extract(
        r"
/** Belongs to the constant. */
const LIMIT = 3;
function Listing() { return <ul />; }
",
    );
    assert_eq!(find_by_name(&components, "Listing").description, None);
}
