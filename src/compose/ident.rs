//! Compilation-scoped identities and the C symbols derived from them.
//!
//! Shapes are identified by their arena slot, not by value: two equal shapes from different
//! placements get different ids and therefore different symbols.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u32);

impl ShapeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub(crate) u32);

impl FrameId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Symbol naming for emitted declarations.
///
/// Shape-owned symbols start with `shape_` and frame-owned symbols with `doodle_`, so the two
/// namespaces never collide. A poly's point array reuses its owner's id.
#[derive(Clone, Copy, Debug, Default)]
pub struct Symbols;

impl Symbols {
    /// Top-level frame table.
    pub const TABLE: &'static str = "doodles";
    /// Explicit frame count.
    pub const COUNT: &'static str = "doodle_count";

    pub fn shape(self, id: ShapeId) -> String {
        format!("shape_{}", id.0)
    }

    pub fn points(self, id: ShapeId) -> String {
        format!("shape_points_{}", id.0)
    }

    pub fn frame(self, id: FrameId) -> String {
        format!("doodle_{}", id.0)
    }

    pub fn frame_shapes(self, id: FrameId) -> String {
        format!("doodle_shapes_{}", id.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/ident.rs"]
mod tests;
