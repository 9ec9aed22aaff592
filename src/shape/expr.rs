//! Field composition rules rendered as C arithmetic expression text.
//!
//! Nothing here evaluates numbers. The expressions are wrapped in `FP_STATIC` by the emitter and
//! folded into fixed-point literals when the generated unit is compiled.

use crate::foundation::core::Scalar;
use crate::shape::model::{PolyShape, Shape};

/// Which fixed-point flavour a field is encoded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signedness {
    /// `ufp_t`: positions and sizes.
    Unsigned,
    /// `ifp_t`: angles.
    Signed,
}

impl Signedness {
    /// Type prefix understood by the `FP_STATIC` macro.
    pub fn prefix(self) -> &'static str {
        match self {
            Signedness::Unsigned => "u",
            Signedness::Signed => "i",
        }
    }
}

/// One struct field of an emitted shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldExpr {
    pub name: &'static str,
    pub signedness: Signedness,
    pub expr: String,
}

impl FieldExpr {
    fn unsigned(name: &'static str, expr: String) -> Self {
        Self {
            name,
            signedness: Signedness::Unsigned,
            expr,
        }
    }

    fn signed(name: &'static str, expr: String) -> Self {
        Self {
            name,
            signedness: Signedness::Signed,
            expr,
        }
    }
}

fn position(value: &Scalar, off: &Scalar) -> String {
    format!("{value} + {off}")
}

fn size(value: &Scalar, scale: &Scalar) -> String {
    format!("{value} * {scale}")
}

fn line_coord(value: &Scalar, off: &Scalar, scale: &Scalar) -> String {
    format!("(({value} + {off}) * {scale})")
}

fn poly_coord(value: &Scalar, anchor: &Scalar, scale: &Scalar, off: &Scalar) -> String {
    format!("(({value} - {anchor}) * {scale}) + {off} + {anchor}")
}

impl Shape {
    /// Scalar struct fields in declaration order, excluding the leading `shape` tag.
    ///
    /// Poly shapes carry their geometry in a point array instead and yield no fields here;
    /// see [`PolyShape::point_exprs`].
    pub fn field_exprs(&self) -> Vec<FieldExpr> {
        let t = self.transform();
        match self {
            Shape::Arc(s) => vec![
                FieldExpr::unsigned("cx", position(&s.cx, &t.x_off)),
                FieldExpr::unsigned("cy", position(&s.cy, &t.y_off)),
                FieldExpr::unsigned("rx", size(&s.rx, &t.scale)),
                FieldExpr::unsigned("ry", size(&s.ry, &t.scale)),
                FieldExpr::signed("t0", s.t0.to_string()),
                FieldExpr::signed("t1", s.t1.to_string()),
            ],
            Shape::Rect(s) => vec![
                FieldExpr::unsigned("x", position(&s.x, &t.x_off)),
                FieldExpr::unsigned("y", position(&s.y, &t.y_off)),
                FieldExpr::unsigned("width", size(&s.width, &t.scale)),
                FieldExpr::unsigned("height", size(&s.height, &t.scale)),
                FieldExpr::unsigned("rx", size(&s.rx, &t.scale)),
                FieldExpr::unsigned("ry", size(&s.ry, &t.scale)),
            ],
            Shape::Circle(s) => vec![
                FieldExpr::unsigned("cx", position(&s.cx, &t.x_off)),
                FieldExpr::unsigned("cy", position(&s.cy, &t.y_off)),
                FieldExpr::unsigned("r", size(&s.r, &t.scale)),
            ],
            Shape::Ellipse(s) => vec![
                FieldExpr::unsigned("cx", position(&s.cx, &t.x_off)),
                FieldExpr::unsigned("cy", position(&s.cy, &t.y_off)),
                FieldExpr::unsigned("rx", size(&s.rx, &t.scale)),
                FieldExpr::unsigned("ry", size(&s.ry, &t.scale)),
            ],
            Shape::Line(s) => vec![
                FieldExpr::unsigned("x1", line_coord(&s.x1, &t.x_off, &t.scale)),
                FieldExpr::unsigned("y1", line_coord(&s.y1, &t.y_off, &t.scale)),
                FieldExpr::unsigned("x2", line_coord(&s.x2, &t.x_off, &t.scale)),
                FieldExpr::unsigned("y2", line_coord(&s.y2, &t.y_off, &t.scale)),
            ],
            Shape::Poly(_) => Vec::new(),
        }
    }
}

impl PolyShape {
    /// `[x, y]` expressions for every vertex, scaled around the first one.
    pub fn point_exprs(&self) -> Vec<[String; 2]> {
        let Some(anchor) = self.anchor() else {
            return Vec::new();
        };
        let t = &self.transform;
        self.points
            .iter()
            .map(|p| {
                [
                    poly_coord(p.x(), anchor.x(), &t.scale, &t.x_off),
                    poly_coord(p.y(), anchor.y(), &t.scale, &t.y_off),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/expr.rs"]
mod tests;
