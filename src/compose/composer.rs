use serde_json::{Map, Value};

use crate::{
    compose::ident::{FrameId, ShapeId},
    doodle::store::DoodleStore,
    foundation::error::{Scene2cError, Scene2cResult},
    scene::model::SceneDef,
    shape::model::{FieldError, Shape},
};

/// A frame after composition: its duration and the shapes it draws, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedFrame {
    pub duration_ms: i64,
    pub shapes: Vec<ShapeId>,
}

/// Every shape instance of a compilation plus the frames that reference them.
///
/// Shapes live in a single arena; a [`ShapeId`] is a slot in it and is never reused, so ids are
/// unique for the whole compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposedScene {
    shapes: Vec<Shape>,
    frames: Vec<ComposedFrame>,
}

impl ComposedScene {
    /// All shape instances, in allocation order.
    pub fn shapes(&self) -> impl ExactSizeIterator<Item = (ShapeId, &Shape)> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, s)| (ShapeId(i as u32), s))
    }

    /// All frames, in scene order.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = (FrameId, &ComposedFrame)> {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, f)| (FrameId(i as u32), f))
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    pub fn frame(&self, id: FrameId) -> Option<&ComposedFrame> {
        self.frames.get(id.index())
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn alloc_shape(&mut self, shape: Shape) -> Scene2cResult<ShapeId> {
        let id = u32::try_from(self.shapes.len())
            .map_err(|_| Scene2cError::validation("too many shape instances"))?;
        self.shapes.push(shape);
        Ok(ShapeId(id))
    }

    fn push_frame(&mut self, frame: ComposedFrame) -> Scene2cResult<FrameId> {
        let id = u32::try_from(self.frames.len())
            .map_err(|_| Scene2cError::validation("too many frames"))?;
        self.frames.push(frame);
        Ok(FrameId(id))
    }
}

/// Resolve every placement of `scene` against `store` into frame-local shape instances.
///
/// Each placement copies its doodle's template shapes with the placement's overrides applied.
/// Placement order within a frame and shape order within a doodle are kept.
#[tracing::instrument(skip_all, fields(frames = scene.frames.len()))]
pub fn compose(scene: &SceneDef, store: &mut DoodleStore) -> Scene2cResult<ComposedScene> {
    let mut out = ComposedScene::default();
    let no_overrides = Map::new();

    for (frame_idx, frame) in scene.frames.iter().enumerate() {
        let mut ids = Vec::new();

        for (name, value) in &frame.doodles {
            let overrides = match value {
                Value::Object(map) => map,
                Value::Null => &no_overrides,
                other => {
                    return Err(Scene2cError::validation(format!(
                        "frame #{frame_idx}, doodle '{name}': overrides must be an object, got {other}"
                    )));
                }
            };

            let doodle = store.load(name)?;
            for (shape_idx, base) in doodle.shapes().iter().enumerate() {
                let shape = base.with_overrides(overrides).map_err(|e| match e {
                    FieldError::UnknownField(field) => Scene2cError::InvalidOverride {
                        frame: frame_idx,
                        doodle: name.clone(),
                        field,
                        kind: base.kind().to_string(),
                    },
                    FieldError::Invalid(reason) => Scene2cError::InvalidShapeDefinition {
                        doodle: name.clone(),
                        index: shape_idx,
                        reason: format!("frame #{frame_idx} override: {reason}"),
                    },
                })?;
                ids.push(out.alloc_shape(shape)?);
            }
        }

        out.push_frame(ComposedFrame {
            duration_ms: frame.duration_ms(),
            shapes: ids,
        })?;
    }

    tracing::debug!(
        shapes = out.shape_count(),
        doodles = store.loaded_count(),
        "composed scene"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
