//! Resolution behavior of the reference route table.

use spa_router::routing::{ConfigError, Outcome, RouteEntry, RouteTable};

mod common;

use common::{reference_table, view};

#[test]
fn test_home_resolves_to_home_view() {
    let table = reference_table();

    let home = table.resolve("/");
    assert_eq!(home.template_ref, "./views/home.html");
    assert_eq!(home.controller_name, "homeCtrl");
    assert_eq!(home.binding_alias, "vm");
}

#[test]
fn test_login_and_profile() {
    let table = reference_table();

    assert_eq!(table.resolve("/login"), &view("login"));
    assert_eq!(table.resolve("/profile"), &view("profile"));
    assert_eq!(table.resolve("/register"), &view("register"));
}

#[test]
fn test_unknown_path_resolves_to_default() {
    let table = reference_table();

    assert_eq!(table.resolve("/unknown"), table.default_view());
    assert_eq!(table.resolve("/unknown"), table.resolve("/"));
}

#[test]
fn test_empty_path_resolves_to_default() {
    let table = reference_table();

    assert_eq!(table.resolve(""), table.default_view());
    assert_eq!(table.resolve_route("").outcome, Outcome::Fallback);
}

#[test]
fn test_every_registered_pattern_matches_itself() {
    let table = reference_table();

    for entry in table.entries() {
        let res = table.resolve_route(entry.pattern());
        assert_eq!(res.outcome, Outcome::Matched);
        assert_eq!(res.view, entry.view());
        assert_eq!(res.path, entry.pattern());
    }
}

#[test]
fn test_malformed_inputs_never_fail() {
    let table = reference_table();
    let inputs = ["", " ", "login", "//", "/login/", "/\u{0}", "/prof%69le", "?", "#/login"];

    for input in inputs {
        let first = table.resolve(input);
        assert_eq!(first, table.default_view(), "input {:?}", input);
        assert_eq!(first, table.resolve(input));
    }
}

#[test]
fn test_duplicate_pattern_rules() {
    let conflicting = RouteTable::new(
        vec![RouteEntry::new("/x", view("a")), RouteEntry::new("/x", view("b"))],
        view("home"),
    );
    assert!(matches!(conflicting, Err(ConfigError::DuplicatePattern { .. })));

    let identical = RouteTable::new(
        vec![RouteEntry::new("/x", view("a")), RouteEntry::new("/x", view("a"))],
        view("home"),
    )
    .unwrap();
    assert_eq!(identical.len(), 1);
    assert_eq!(identical.resolve("/x"), &view("a"));
}
