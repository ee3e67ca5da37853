//! Tests for mapping table parsing and path precedence.

use super::*;
use crate::window::WindowId;

#[test]
fn test_parse_valid_table() {
    let table = MapTable::parse(
        r#"{"/proj/src": "/mapped/root", "docs": "/srv/docs"}"#,
        Path::new("map.json"),
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("/proj/src"), Some("/mapped/root"));
    assert_eq!(table.get("docs"), Some("/srv/docs"));
    assert_eq!(table.get("missing"), None);
}

#[test]
fn test_parse_empty_object() {
    let table = MapTable::parse("{}", Path::new("map.json")).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_parse_rejects_slash_terminated_key() {
    let err = MapTable::parse(r#"{"a/": "x"}"#, Path::new("map.json")).unwrap_err();
    match err {
        MapError::SlashKey { key, .. } => assert_eq!(key, "a/"),
        other => panic!("expected SlashKey, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_malformed_json() {
    let err = MapTable::parse("not json", Path::new("map.json")).unwrap_err();
    assert!(matches!(err, MapError::Parse { .. }));
}

#[test]
fn test_parse_rejects_non_string_values() {
    let err = MapTable::parse(r#"{"a": 1}"#, Path::new("map.json")).unwrap_err();
    assert!(matches!(err, MapError::Parse { .. }));
}

#[test]
fn test_effective_path_precedence() {
    let mut window = WindowContext::new(WindowId(1));
    let mut settings = Settings::default();

    // nothing configured anywhere
    assert_eq!(effective_path(&window, &settings), None);

    // global setting alone
    settings.map_file = Some("/global/map.json".to_string());
    assert_eq!(
        effective_path(&window, &settings),
        Some("/global/map.json".to_string())
    );

    // project-level setting wins over global
    window.map_file = Some("/project/map.json".to_string());
    assert_eq!(
        effective_path(&window, &settings),
        Some("/project/map.json".to_string())
    );

    // an empty project value counts as absent
    window.map_file = Some(String::new());
    assert_eq!(
        effective_path(&window, &settings),
        Some("/global/map.json".to_string())
    );
}
