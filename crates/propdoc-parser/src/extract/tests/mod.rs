use ast_grep_language::LanguageExt;
use propdoc_config::ExtractConfig;

use super::*;
pub(super) use propdoc_core::{ComponentMetadata, Deprecation, ExportKind, PropMetadata};

mod documentation;
mod exports;
mod fixture;

fn parse_and_extract(source: &str) -> Vec<ComponentMetadata> {
    extract_with(source, &ExtractConfig::default())
}

fn extract_with(source: &str, config: &ExtractConfig) -> Vec<ComponentMetadata> {
    let root = SupportLang::Tsx.ast_grep(source);
    extract(&root, SupportLang::Tsx, "src/Test.tsx", config)
}

fn find_by_name<'a>(components: &'a [ComponentMetadata], name: &str) -> &'a ComponentMetadata {
    components.iter().find(|c| c.name == name).unwrap_or_else(|| {
        let names: Vec<_> = components.iter().map(|c| c.name.as_str()).collect();
        panic!("should find component named '{name}', available: {names:?}")
    })
}

fn find_prop<'a>(component: &'a ComponentMetadata, name: &str) -> &'a PropMetadata {
    component.prop(name).unwrap_or_else(|| {
        let names: Vec<_> = component.props.iter().map(|p| p.name.as_str()).collect();
        panic!(
            "component '{}' should have prop '{name}', available: {names:?}",
            component.name
        )
    })
}

fn names(components: &[ComponentMetadata]) -> Vec<&str> {
    components.iter().map(|c| c.name.as_str()).collect()
}
