use pretty_assertions::assert_eq;

use super::*;

fn fixture() -> Vec<ComponentMetadata> {
    parse_and_extract(include_str!("../../../tests/fixtures/components.tsx"))
}

#[test]
fn detects_components_in_source_order() {
    assert_eq!(
        names(&fixture()),
        vec!["Button", "LegacyButton", "Card", "TextInput", "Avatar", "Layout"]
    );
}

#[test]
fn hooks_and_helpers_are_not_components() {
    let components = fixture();
    assert!(components.iter().all(|c| c.name != "useToggle"));
    assert!(components.iter().all(|c| c.name != "calculateSum"));
}

#[test]
fn button_props_merge_intersection() {
    let components = fixture();
    let button = find_by_name(&components, "Button");
    let names: Vec<&str> = button.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "className", "label", "size", "disabled", "onClick"]
    );
    assert_eq!(
        button.extends,
        vec!["ButtonHTMLAttributes<HTMLButtonElement>".to_string()]
    );
}

#[test]
fn button_prop_details() {
    let components = fixture();
    let button = find_by_name(&components, "Button");

    let id = find_prop(button, "id");
    assert!(id.required);
    assert_eq!(id.examples, vec!["user-123".to_string()]);

    let size = find_prop(button, "size");
    assert_eq!(size.type_name, "Size");
    assert_eq!(size.default_value.as_deref(), Some("md"));
    assert_eq!(size.description.as_deref(), Some("Button size"));
    assert!(!size.required);

    let disabled = find_prop(button, "disabled");
    assert_eq!(disabled.default_value.as_deref(), Some("false"));
    assert_eq!(disabled.examples, vec!["false".to_string(), "true".to_string()]);

    assert_eq!(
        find_prop(button, "label").description.as_deref(),
        Some("Visible text")
    );
}

#[test]
fn button_documentation() {
    let components = fixture();
    let button = find_by_name(&components, "Button");
    assert_eq!(
        button.description.as_deref(),
        Some("Primary action button. Renders a native button element.")
    );
    assert_eq!(button.returns.as_deref(), Some("The rendered button"));
    assert_eq!(button.links, vec!["https://example.com/button".to_string()]);
    assert_eq!(button.since.as_deref(), Some("1.2.0"));
    assert_eq!(
        button.examples,
        vec![r#"<Button id="save" label="Save" />"#.to_string()]
    );
}

#[test]
fn legacy_button_is_deprecated() {
    let components = fixture();
    let legacy = find_by_name(&components, "LegacyButton");
    assert_eq!(
        legacy.deprecated,
        Some(Deprecation::Message("Use Button instead".into()))
    );
    assert_eq!(legacy.export_kind, ExportKind::Named);
}

#[test]
fn card_uses_fc_props_and_early_return() {
    let components = fixture();
    let card = find_by_name(&components, "Card");
    assert!(find_prop(card, "title").required);
    assert!(!find_prop(card, "elevated").required);
}

#[test]
fn text_input_uses_forward_ref_props() {
    let components = fixture();
    let input = find_by_name(&components, "TextInput");
    let names: Vec<&str> = input.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["value", "placeholder"]);
}

#[test]
fn avatar_empty_default_is_omitted() {
    let components = fixture();
    let alt = find_prop(find_by_name(&components, "Avatar"), "alt");
    assert!(!alt.required);
    assert_eq!(alt.default_value, None);
}

#[test]
fn layout_is_default_export() {
    let components = fixture();
    let layout = find_by_name(&components, "Layout");
    assert_eq!(layout.export_kind, ExportKind::Default);
    assert_eq!(find_prop(layout, "children").type_name, "React.ReactNode");
}
