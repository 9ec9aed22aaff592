use std::fmt;

/// A numeric field value as authored in a definition.
///
/// Values keep their literal class: integers render as integers and floats as floats, so the
/// emitted arithmetic expressions reproduce what the author wrote. Evaluation to fixed-point is
/// left to the C build.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Scalar(serde_json::Number);

impl Scalar {
    /// Integer zero, the default for every geometry field.
    pub fn zero() -> Self {
        Self(0.into())
    }

    /// Integer one, the default `scale`.
    pub fn one() -> Self {
        Self(1.into())
    }

    /// Build a float scalar; `None` for NaN or infinities, which JSON cannot carry.
    pub fn from_f64(v: f64) -> Option<Self> {
        serde_json::Number::from_f64(v).map(Self)
    }

    /// Numeric value as `f64`.
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self(v.into())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A polyline vertex, written as a two-element `[x, y]` array.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolyPoint(pub Scalar, pub Scalar);

impl PolyPoint {
    /// Horizontal coordinate.
    pub fn x(&self) -> &Scalar {
        &self.0
    }

    /// Vertical coordinate.
    pub fn y(&self) -> &Scalar {
        &self.1
    }
}

/// Convert a duration in seconds to whole milliseconds, truncating toward zero.
pub fn duration_to_ms(seconds: f64) -> i64 {
    (seconds * 1000.0).trunc() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
