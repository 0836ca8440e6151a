use super::*;

#[test]
fn anonymous_default_arrow() {
    let components = parse_and_extract("export default () => <div/>;");
    assert_eq!(components.len(), 1);
    let c = &components[0];
    assert_eq!(c.name, "default");
    assert_eq!(c.export_kind, ExportKind::Default);
    assert!(c.props.is_empty());
}

#[test]
fn anonymous_default_function_expression() {
    let components = parse_and_extract("export default function () { return <main />; }");
    assert_eq!(names(&components), vec!["default"]);
}

#[test]
fn named_default_function() {
    let components = parse_and_extract("export default function Page() { return <main />; }");
    let page = find_by_name(&components, "Page");
    assert_eq!(page.export_kind, ExportKind::Default);
}

#[test]
fn exported_const_is_named() {
    let components = parse_and_extract("export const Chip = () => <span />;");
    assert_eq!(find_by_name(&components, "Chip").export_kind, ExportKind::Named);
}

#[test]
fn default_reexport_upgrades_existing_component() {
    let components = parse_and_extract(
        r"
        const Header = () => <header />;
        export default Header;
        ",
    );
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].export_kind, ExportKind::Default);
}

#[test]
fn default_reexport_before_declaration() {
    let components = parse_and_extract(
        r"
        export { Footer as default };
        function Footer() { return <footer />; }
        ",
    );
    assert_eq!(find_by_name(&components, "Footer").export_kind, ExportKind::Default);
}

#[test]
fn default_reexport_of_unknown_name_adds_nothing() {
    let components = parse_and_extract(
        r"
        const helper = 1;
        export default helper;
        ",
    );
    assert!(components.is_empty());
}

#[test]
fn reexport_from_other_module_is_ignored() {
    let components = parse_and_extract(
        r"
        export { Nav as default } from './Nav';
        function Nav() { return <nav />; }
        ",
    );
    assert_eq!(find_by_name(&components, "Nav").export_kind, ExportKind::Named);
}

#[test]
fn plain_alias_does_not_upgrade() {
    let components = parse_and_extract(
        r"
        function Menu() { return <ul />; }
        export { Menu as AppMenu };
        ",
    );
    assert_eq!(find_by_name(&components, "Menu").export_kind, ExportKind::Named);
}
