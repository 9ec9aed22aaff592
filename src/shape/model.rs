use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::foundation::core::{PolyPoint, Scalar};

/// Closed set of shape kinds understood by the display runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Elliptical arc between two angles.
    Arc,
    /// Axis-aligned rectangle with optional corner radii.
    Rect,
    /// Circle.
    Circle,
    /// Axis-aligned ellipse.
    Ellipse,
    /// Single line segment.
    Line,
    /// Open polyline or closed polygon.
    Poly,
}

const ARC_FIELDS: &[&str] = &["scale", "x_off", "y_off", "cx", "cy", "rx", "ry", "t0", "t1"];
const RECT_FIELDS: &[&str] = &[
    "scale", "x_off", "y_off", "x", "y", "width", "height", "rx", "ry",
];
const CIRCLE_FIELDS: &[&str] = &["scale", "x_off", "y_off", "cx", "cy", "r"];
const ELLIPSE_FIELDS: &[&str] = &["scale", "x_off", "y_off", "cx", "cy", "rx", "ry"];
const LINE_FIELDS: &[&str] = &["scale", "x_off", "y_off", "x1", "y1", "x2", "y2"];
const POLY_FIELDS: &[&str] = &["scale", "x_off", "y_off", "polygon", "points"];

impl ShapeKind {
    /// Every kind, in runtime enum order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Arc,
        ShapeKind::Rect,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Line,
        ShapeKind::Poly,
    ];

    /// Key used for this kind in doodle definitions.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Arc => "arc",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Poly => "poly",
        }
    }

    /// Inverse of [`ShapeKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Every field name a definition or override may set for this kind.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Arc => ARC_FIELDS,
            ShapeKind::Rect => RECT_FIELDS,
            ShapeKind::Circle => CIRCLE_FIELDS,
            ShapeKind::Ellipse => ELLIPSE_FIELDS,
            ShapeKind::Line => LINE_FIELDS,
            ShapeKind::Poly => POLY_FIELDS,
        }
    }

    /// Whether `field` names one of this kind's fields.
    pub fn has_field(self, field: &str) -> bool {
        self.fields().contains(&field)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-placement composition parameters shared by every kind.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Multiplicative size factor.
    #[serde(default = "Scalar::one")]
    pub scale: Scalar,
    /// Horizontal translation.
    #[serde(default)]
    pub x_off: Scalar,
    /// Vertical translation.
    #[serde(default)]
    pub y_off: Scalar,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Scalar::one(),
            x_off: Scalar::zero(),
            y_off: Scalar::zero(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Arc centered on (`cx`, `cy`) sweeping from `t0` to `t1` (signed angles, in turns of pi).
pub struct ArcShape {
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub cx: Scalar,
    #[serde(default)]
    pub cy: Scalar,
    #[serde(default)]
    pub rx: Scalar,
    #[serde(default)]
    pub ry: Scalar,
    #[serde(default)]
    pub t0: Scalar,
    #[serde(default)]
    pub t1: Scalar,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rectangle with top-left corner (`x`, `y`) and corner radii `rx`/`ry`.
pub struct RectShape {
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub x: Scalar,
    #[serde(default)]
    pub y: Scalar,
    #[serde(default)]
    pub width: Scalar,
    #[serde(default)]
    pub height: Scalar,
    #[serde(default)]
    pub rx: Scalar,
    #[serde(default)]
    pub ry: Scalar,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CircleShape {
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub cx: Scalar,
    #[serde(default)]
    pub cy: Scalar,
    #[serde(default)]
    pub r: Scalar,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EllipseShape {
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub cx: Scalar,
    #[serde(default)]
    pub cy: Scalar,
    #[serde(default)]
    pub rx: Scalar,
    #[serde(default)]
    pub ry: Scalar,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Segment from (`x1`, `y1`) to (`x2`, `y2`).
///
/// Unlike the other kinds, `scale` multiplies the already-offset coordinates.
pub struct LineShape {
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub x1: Scalar,
    #[serde(default)]
    pub y1: Scalar,
    #[serde(default)]
    pub x2: Scalar,
    #[serde(default)]
    pub y2: Scalar,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Polyline through `points`; closed when `polygon` is set.
///
/// Scaling is anchored at the first point, so `scale` never moves the shape itself.
pub struct PolyShape {
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(default)]
    pub polygon: bool,
    pub points: Vec<PolyPoint>,
}

impl PolyShape {
    /// The first vertex, around which scaling happens.
    pub fn anchor(&self) -> Option<&PolyPoint> {
        self.points.first()
    }
}

/// A shape instance: one of the six kinds with its own fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Arc(ArcShape),
    Rect(RectShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Line(LineShape),
    Poly(PolyShape),
}

/// Why a field mapping could not produce a shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The mapping names a field this kind does not have.
    UnknownField(String),
    /// The mapping is well-named but its values are unusable.
    Invalid(String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "unknown field '{name}'"),
            FieldError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl Shape {
    /// Kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Poly(_) => ShapeKind::Poly,
        }
    }

    /// Composition parameters of this shape.
    pub fn transform(&self) -> &Transform {
        match self {
            Shape::Arc(s) => &s.transform,
            Shape::Rect(s) => &s.transform,
            Shape::Circle(s) => &s.transform,
            Shape::Ellipse(s) => &s.transform,
            Shape::Line(s) => &s.transform,
            Shape::Poly(s) => &s.transform,
        }
    }

    /// Build a shape of `kind` from an untyped field mapping, applying per-kind defaults.
    pub fn from_fields(kind: ShapeKind, fields: &Map<String, Value>) -> Result<Self, FieldError> {
        if let Some(unknown) = fields.keys().find(|k| !kind.has_field(k)) {
            return Err(FieldError::UnknownField(unknown.clone()));
        }

        let shape = match kind {
            ShapeKind::Arc => Shape::Arc(typed(fields)?),
            ShapeKind::Rect => Shape::Rect(typed(fields)?),
            ShapeKind::Circle => Shape::Circle(typed(fields)?),
            ShapeKind::Ellipse => Shape::Ellipse(typed(fields)?),
            ShapeKind::Line => Shape::Line(typed(fields)?),
            ShapeKind::Poly => {
                let poly: PolyShape = typed(fields)?;
                if poly.points.is_empty() {
                    return Err(FieldError::Invalid(
                        "poly requires at least one point".to_string(),
                    ));
                }
                Shape::Poly(poly)
            }
        };
        Ok(shape)
    }

    /// Return a new shape equal to `self` with `overrides` substituted field by field.
    ///
    /// `self` is never modified; fields absent from `overrides` keep their current values.
    pub fn with_overrides(&self, overrides: &Map<String, Value>) -> Result<Self, FieldError> {
        let kind = self.kind();
        if let Some(unknown) = overrides.keys().find(|k| !kind.has_field(k)) {
            return Err(FieldError::UnknownField(unknown.clone()));
        }
        if overrides.is_empty() {
            return Ok(self.clone());
        }

        let mut fields = self.to_fields()?;
        for (name, value) in overrides {
            fields.insert(name.clone(), value.clone());
        }
        Self::from_fields(kind, &fields)
    }

    /// Every field of this shape, defaults included, as an untyped mapping.
    pub fn to_fields(&self) -> Result<Map<String, Value>, FieldError> {
        let value = match self {
            Shape::Arc(s) => serde_json::to_value(s),
            Shape::Rect(s) => serde_json::to_value(s),
            Shape::Circle(s) => serde_json::to_value(s),
            Shape::Ellipse(s) => serde_json::to_value(s),
            Shape::Line(s) => serde_json::to_value(s),
            Shape::Poly(s) => serde_json::to_value(s),
        }
        .map_err(|e| FieldError::Invalid(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(FieldError::Invalid(format!(
                "{} fields serialized to {other}",
                self.kind()
            ))),
        }
    }
}

fn typed<T: DeserializeOwned>(fields: &Map<String, Value>) -> Result<T, FieldError> {
    serde_json::from_value(Value::Object(fields.clone()))
        .map_err(|e| FieldError::Invalid(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
