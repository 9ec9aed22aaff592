use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        Scene2cError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        Scene2cError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn compile_errors_name_their_context() {
    let err = Scene2cError::DoodleNotFound {
        name: "missing".to_string(),
        location: "'doodles/missing.json'".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("missing"));
    assert!(msg.contains("doodles/missing.json"));

    let err = Scene2cError::UnknownShapeKind {
        doodle: "star".to_string(),
        index: 2,
        kind: "hexagon".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("'star'"));
    assert!(msg.contains("#2"));
    assert!(msg.contains("hexagon"));

    let err = Scene2cError::InvalidOverride {
        frame: 3,
        doodle: "dot".to_string(),
        field: "radius".to_string(),
        kind: "circle".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("frame #3"));
    assert!(msg.contains("'radius'"));
    assert!(msg.contains("circle"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = Scene2cError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
