//! Serde roundtrip and JsonSchema validation tests for the output records.

use pretty_assertions::assert_eq;
use propdoc_core::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn documented_button() -> ComponentMetadata {
    let mut c = ComponentMetadata::new("Button", "src/Button.tsx", ExportKind::Default);
    c.description = Some("A clickable button".into());
    c.deprecated = Some(Deprecation::Message("Use ActionButton".into()));
    c.returns = Some("The rendered element".into());
    c.links = vec!["https://example.com/button".into()];
    c.since = Some("1.2.0".into());
    c.examples = vec!["<Button label=\"Save\" />".into()];
    c.extends = vec!["ButtonHTMLAttributes<HTMLButtonElement>".into()];
    c.props = vec![
        PropMetadata::new("label", "string", true).with_examples(vec!["Click me".into()]),
        PropMetadata {
            name: "count".into(),
            type_name: "number".into(),
            required: false,
            default_value: Some("0".into()),
            description: Some("Starting value".into()),
            examples: vec!["0".into()],
        },
    ];
    c
}

roundtrip_and_validate!(component_roundtrip, ComponentMetadata, documented_button());

roundtrip_and_validate!(
    bare_component_roundtrip,
    ComponentMetadata,
    ComponentMetadata::new("default", "index.tsx", ExportKind::Default)
);

roundtrip_and_validate!(
    flag_deprecation_roundtrip,
    Deprecation,
    Deprecation::Flag(true)
);

roundtrip_and_validate!(
    report_roundtrip,
    ExtractReport,
    ExtractReport {
        metadata: vec![documented_button()],
        errors: vec![ExtractError {
            file_path: "src/Broken.tsx".into(),
            message: "Parse failed".into(),
            line: Some(3),
            column: Some(14),
        }],
        stats: ExtractStats {
            files_scanned: 2,
            files_processed: 1,
            components_found: 1,
            duration_ms: 4,
        },
    }
);

#[test]
fn serializes_with_camel_case_and_omits_empty_fields() {
    let c = ComponentMetadata::new("Card", "Card.tsx", ExportKind::Named);
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Card",
            "filePath": "Card.tsx",
            "exportKind": "named",
            "props": [],
        })
    );
}

#[test]
fn prop_type_field_is_named_type() {
    let p = PropMetadata {
        name: "size".into(),
        type_name: "\"sm\" | \"lg\"".into(),
        required: false,
        default_value: Some("sm".into()),
        description: None,
        examples: vec!["sm".into(), "lg".into()],
    };
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["type"], "\"sm\" | \"lg\"");
    assert_eq!(json["defaultValue"], "sm");
    assert!(json.get("description").is_none());
}

#[test]
fn deprecation_serializes_untagged() {
    assert_eq!(
        serde_json::to_value(Deprecation::Flag(true)).unwrap(),
        serde_json::json!(true)
    );
    assert_eq!(
        serde_json::to_value(Deprecation::Message("gone".into())).unwrap(),
        serde_json::json!("gone")
    );
}
