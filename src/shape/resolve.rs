use crate::shape::model::Shape;

/// Shape geometry with offset and scale folded in, as `f64`.
///
/// This mirrors the arithmetic the emitted expressions describe and is meant for inspection and
/// tests. Emission never goes through it.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedShape {
    Arc {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        t0: f64,
        t1: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        ry: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Poly {
        polygon: bool,
        points: Vec<(f64, f64)>,
    },
}

impl Shape {
    /// Evaluate this shape's final geometry.
    pub fn resolve(&self) -> ResolvedShape {
        let t = self.transform();
        let (scale, dx, dy) = (t.scale.as_f64(), t.x_off.as_f64(), t.y_off.as_f64());

        match self {
            Shape::Arc(s) => ResolvedShape::Arc {
                cx: s.cx.as_f64() + dx,
                cy: s.cy.as_f64() + dy,
                rx: s.rx.as_f64() * scale,
                ry: s.ry.as_f64() * scale,
                t0: s.t0.as_f64(),
                t1: s.t1.as_f64(),
            },
            Shape::Rect(s) => ResolvedShape::Rect {
                x: s.x.as_f64() + dx,
                y: s.y.as_f64() + dy,
                width: s.width.as_f64() * scale,
                height: s.height.as_f64() * scale,
                rx: s.rx.as_f64() * scale,
                ry: s.ry.as_f64() * scale,
            },
            Shape::Circle(s) => ResolvedShape::Circle {
                cx: s.cx.as_f64() + dx,
                cy: s.cy.as_f64() + dy,
                r: s.r.as_f64() * scale,
            },
            Shape::Ellipse(s) => ResolvedShape::Ellipse {
                cx: s.cx.as_f64() + dx,
                cy: s.cy.as_f64() + dy,
                rx: s.rx.as_f64() * scale,
                ry: s.ry.as_f64() * scale,
            },
            Shape::Line(s) => ResolvedShape::Line {
                x1: (s.x1.as_f64() + dx) * scale,
                y1: (s.y1.as_f64() + dy) * scale,
                x2: (s.x2.as_f64() + dx) * scale,
                y2: (s.y2.as_f64() + dy) * scale,
            },
            Shape::Poly(s) => {
                let (ax, ay) = s
                    .anchor()
                    .map(|a| (a.x().as_f64(), a.y().as_f64()))
                    .unwrap_or_default();
                ResolvedShape::Poly {
                    polygon: s.polygon,
                    points: s
                        .points
                        .iter()
                        .map(|p| {
                            (
                                (p.x().as_f64() - ax) * scale + dx + ax,
                                (p.y().as_f64() - ay) * scale + dy + ay,
                            )
                        })
                        .collect(),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/resolve.rs"]
mod tests;
