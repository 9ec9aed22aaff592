use super::*;

const DOT: &str = r#"{ "shapes": [ { "circle": { "r": 5 } } ] }"#;

fn store_with(docs: &[(&str, &str)]) -> DoodleStore {
    let mut src = MemoryDoodleSource::new();
    for (name, json) in docs {
        src.insert(*name, *json);
    }
    DoodleStore::new(src)
}

#[test]
fn parse_keeps_entry_order() {
    let doodle = Doodle::parse(
        "face",
        r#"{ "shapes": [
            { "circle": { "r": 10 } },
            { "arc": { "rx": 4, "ry": 2, "t0": 1, "t1": 2 } },
            { "poly": { "points": [[0, 0], [1, 1]] } }
        ] }"#,
    )
    .unwrap();

    assert_eq!(doodle.name(), "face");
    let kinds: Vec<_> = doodle.shapes().iter().map(Shape::kind).collect();
    assert_eq!(kinds, [ShapeKind::Circle, ShapeKind::Arc, ShapeKind::Poly]);
}

#[test]
fn multi_key_entry_yields_one_shape_per_key() {
    let doodle = Doodle::parse(
        "pair",
        r#"{ "shapes": [ { "line": { "x2": 1 }, "circle": { "r": 1 } }, {} ] }"#,
    )
    .unwrap();
    let kinds: Vec<_> = doodle.shapes().iter().map(Shape::kind).collect();
    assert_eq!(kinds, [ShapeKind::Line, ShapeKind::Circle]);
}

#[test]
fn unknown_kind_is_reported_with_context() {
    let err = Doodle::parse(
        "odd",
        r#"{ "shapes": [ { "circle": {} }, { "hexagon": {} } ] }"#,
    )
    .unwrap_err();
    let Scene2cError::UnknownShapeKind {
        doodle,
        index,
        kind,
    } = err
    else {
        panic!("expected UnknownShapeKind, got {err:?}");
    };
    assert_eq!(doodle, "odd");
    assert_eq!(index, 1);
    assert_eq!(kind, "hexagon");
}

#[test]
fn empty_poly_is_an_invalid_definition() {
    let err = Doodle::parse("p", r#"{ "shapes": [ { "poly": { "points": [] } } ] }"#).unwrap_err();
    assert!(matches!(
        err,
        Scene2cError::InvalidShapeDefinition { ref doodle, index: 0, .. } if doodle == "p"
    ));
}

#[test]
fn unknown_definition_field_is_an_invalid_definition() {
    let err = Doodle::parse("c", r#"{ "shapes": [ { "circle": { "radius": 1 } } ] }"#)
        .unwrap_err();
    let Scene2cError::InvalidShapeDefinition { reason, .. } = err else {
        panic!("expected InvalidShapeDefinition, got {err:?}");
    };
    assert!(reason.contains("radius"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Doodle::parse("bad", "{ shapes: ").unwrap_err();
    assert!(matches!(err, Scene2cError::Serde(_)));
}

#[test]
fn load_memoizes_and_shares_templates() {
    let mut store = store_with(&[("dot", DOT)]);
    assert!(!store.is_loaded("dot"));

    let a = store.load("dot").unwrap();
    let b = store.load("dot").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(store.loaded_count(), 1);
    assert!(store.is_loaded("dot"));
}

#[test]
fn missing_doodle_is_not_found() {
    let mut store = store_with(&[("dot", DOT)]);
    let err = store.load("missing").unwrap_err();
    assert!(matches!(err, Scene2cError::DoodleNotFound { ref name, .. } if name == "missing"));
    assert_eq!(store.loaded_count(), 0);
}

#[test]
fn path_like_names_are_rejected() {
    let mut store = store_with(&[]);
    for name in ["", "..", "a/b", "a\\b"] {
        assert!(matches!(
            store.load(name),
            Err(Scene2cError::Validation(_))
        ));
    }
}

#[test]
fn dir_source_reads_name_dot_json() {
    let dir = std::path::PathBuf::from("target").join("doodle_store_dir_source");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("dot.json"), DOT).unwrap();

    let src = DirDoodleSource::new(&dir);
    assert_eq!(src.path_for("dot"), dir.join("dot.json"));
    assert!(src.read("dot").unwrap().is_some());
    assert!(src.read("nope").unwrap().is_none());
    assert!(src.locate("nope").contains("nope.json"));

    let mut store = DoodleStore::from_dir(&dir);
    assert_eq!(store.load("dot").unwrap().shapes().len(), 1);
}
