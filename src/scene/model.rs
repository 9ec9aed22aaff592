use std::{fs::File, io::BufReader, path::Path};

use serde_json::{Map, Value};

use crate::foundation::{
    core::duration_to_ms,
    error::{Scene2cError, Scene2cResult},
};

/// A scene document: timed frames in playback order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    pub frames: Vec<FrameDef>,
}

/// One frame entry of a scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FrameDef {
    /// Display time in seconds.
    pub duration: f64,
    /// Doodle name to override mapping, in placement (draw) order.
    #[serde(default)]
    pub doodles: Map<String, Value>,
}

impl FrameDef {
    /// Duration in whole milliseconds, truncated toward zero.
    pub fn duration_ms(&self) -> i64 {
        duration_to_ms(self.duration)
    }
}

impl SceneDef {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> Scene2cResult<Self> {
        serde_json::from_reader(r).map_err(|e| Scene2cError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from JSON text.
    pub fn from_json(s: &str) -> Scene2cResult<Self> {
        serde_json::from_str(s).map_err(|e| Scene2cError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Scene2cResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            Scene2cError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
