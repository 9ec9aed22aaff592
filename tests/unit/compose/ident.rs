use super::*;

#[test]
fn shape_and_frame_symbols_never_collide() {
    let s = Symbols;
    let shape_syms = [s.shape(ShapeId(0)), s.points(ShapeId(0))];
    let frame_syms = [s.frame(FrameId(0)), s.frame_shapes(FrameId(0))];

    for a in &shape_syms {
        assert!(a.starts_with("shape_"));
        for b in &frame_syms {
            assert_ne!(a, b);
        }
    }
    for b in &frame_syms {
        assert!(b.starts_with("doodle_"));
        assert_ne!(b, Symbols::TABLE);
        assert_ne!(b, Symbols::COUNT);
    }
}

#[test]
fn symbols_are_stable_per_id() {
    let s = Symbols;
    assert_eq!(s.shape(ShapeId(7)), "shape_7");
    assert_eq!(s.shape(ShapeId(7)), s.shape(ShapeId(7)));
    assert_eq!(s.points(ShapeId(7)), "shape_points_7");
    assert_eq!(s.frame(FrameId(2)), "doodle_2");
    assert_eq!(s.frame_shapes(FrameId(2)), "doodle_shapes_2");
    assert_ne!(s.shape(ShapeId(1)), s.shape(ShapeId(10)));
}
