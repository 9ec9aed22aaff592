use super::*;

#[test]
fn scalar_keeps_literal_class() {
    let int: Scalar = serde_json::from_str("10").unwrap();
    let float: Scalar = serde_json::from_str("0.5").unwrap();
    let neg: Scalar = serde_json::from_str("-3").unwrap();

    assert_eq!(int.to_string(), "10");
    assert_eq!(float.to_string(), "0.5");
    assert_eq!(neg.to_string(), "-3");
    assert_eq!(float.as_f64(), 0.5);
}

#[test]
fn scalar_defaults() {
    assert_eq!(Scalar::default(), Scalar::zero());
    assert_eq!(Scalar::one().to_string(), "1");
    assert_eq!(Scalar::from(7).as_f64(), 7.0);
    assert!(Scalar::from_f64(f64::NAN).is_none());
    assert_eq!(Scalar::from_f64(2.5).unwrap().to_string(), "2.5");
}

#[test]
fn poly_point_parses_from_pair() {
    let p: PolyPoint = serde_json::from_str("[1, 2.5]").unwrap();
    assert_eq!(p.x().to_string(), "1");
    assert_eq!(p.y().to_string(), "2.5");
    assert!(serde_json::from_str::<PolyPoint>("[1]").is_err());
}

#[test]
fn duration_truncates_toward_zero() {
    assert_eq!(duration_to_ms(0.25), 250);
    assert_eq!(duration_to_ms(1.0), 1000);
    assert_eq!(duration_to_ms(0.5), 500);
    assert_eq!(duration_to_ms(0.0015), 1);
    assert_eq!(duration_to_ms(0.0), 0);
    assert_eq!(duration_to_ms(-0.0015), -1);
}
