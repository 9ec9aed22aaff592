use serde_json::json;

use super::*;

fn fields(v: serde_json::Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn kind_names_round_trip() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ShapeKind::from_name("hexagon"), None);
    assert_eq!(ShapeKind::from_name("Circle"), None);
}

#[test]
fn every_kind_has_transform_fields() {
    for kind in ShapeKind::ALL {
        for f in ["scale", "x_off", "y_off"] {
            assert!(kind.has_field(f), "{kind} missing {f}");
        }
    }
    assert!(ShapeKind::Arc.has_field("t0"));
    assert!(!ShapeKind::Circle.has_field("rx"));
    assert!(ShapeKind::Poly.has_field("points"));
}

#[test]
fn defaults_apply_to_missing_fields() {
    let shape = Shape::from_fields(ShapeKind::Circle, &fields(json!({ "r": 5 }))).unwrap();
    let Shape::Circle(c) = &shape else {
        panic!("expected circle");
    };
    assert_eq!(c.r, Scalar::from(5));
    assert_eq!(c.cx, Scalar::zero());
    assert_eq!(c.cy, Scalar::zero());
    assert_eq!(shape.transform(), &Transform::default());
    assert_eq!(shape.transform().scale, Scalar::one());
}

#[test]
fn unknown_definition_field_is_rejected() {
    let err = Shape::from_fields(ShapeKind::Circle, &fields(json!({ "radius": 5 }))).unwrap_err();
    assert_eq!(err, FieldError::UnknownField("radius".to_string()));
}

#[test]
fn poly_requires_points() {
    let err = Shape::from_fields(ShapeKind::Poly, &fields(json!({ "points": [] }))).unwrap_err();
    assert!(matches!(err, FieldError::Invalid(_)));

    let err = Shape::from_fields(ShapeKind::Poly, &fields(json!({ "polygon": true }))).unwrap_err();
    assert!(matches!(err, FieldError::Invalid(_)));

    let ok = Shape::from_fields(ShapeKind::Poly, &fields(json!({ "points": [[1, 2]] }))).unwrap();
    let Shape::Poly(p) = ok else {
        panic!("expected poly");
    };
    assert!(!p.polygon);
    assert_eq!(p.points.len(), 1);
}

#[test]
fn non_numeric_field_is_invalid() {
    let err =
        Shape::from_fields(ShapeKind::Rect, &fields(json!({ "width": "wide" }))).unwrap_err();
    assert!(matches!(err, FieldError::Invalid(_)));
}

#[test]
fn overrides_produce_new_instance_and_keep_base() {
    let base = Shape::from_fields(
        ShapeKind::Circle,
        &fields(json!({ "cx": 1, "cy": 2, "r": 5 })),
    )
    .unwrap();
    let snapshot = base.clone();

    let placed = base
        .with_overrides(&fields(json!({ "x_off": 10, "scale": 2 })))
        .unwrap();

    assert_eq!(base, snapshot);
    let Shape::Circle(c) = &placed else {
        panic!("expected circle");
    };
    assert_eq!(c.cx, Scalar::from(1));
    assert_eq!(c.r, Scalar::from(5));
    assert_eq!(c.transform.x_off, Scalar::from(10));
    assert_eq!(c.transform.y_off, Scalar::zero());
    assert_eq!(c.transform.scale, Scalar::from(2));
}

#[test]
fn overrides_may_replace_geometry() {
    let base = Shape::from_fields(
        ShapeKind::Poly,
        &fields(json!({ "points": [[0, 0], [1, 1]] })),
    )
    .unwrap();

    let placed = base
        .with_overrides(&fields(json!({ "polygon": true, "points": [[5, 5]] })))
        .unwrap();
    let Shape::Poly(p) = placed else {
        panic!("expected poly");
    };
    assert!(p.polygon);
    assert_eq!(p.points, vec![PolyPoint(Scalar::from(5), Scalar::from(5))]);

    let err = base
        .with_overrides(&fields(json!({ "points": [] })))
        .unwrap_err();
    assert!(matches!(err, FieldError::Invalid(_)));
}

#[test]
fn unknown_override_field_is_reported() {
    let base = Shape::from_fields(ShapeKind::Line, &Map::new()).unwrap();
    let err = base
        .with_overrides(&fields(json!({ "r": 3 })))
        .unwrap_err();
    assert_eq!(err, FieldError::UnknownField("r".to_string()));
}

#[test]
fn to_fields_lists_every_field() {
    let shape = Shape::from_fields(ShapeKind::Arc, &Map::new()).unwrap();
    let map = shape.to_fields().unwrap();
    let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    let mut expected = ShapeKind::Arc.fields().to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}
