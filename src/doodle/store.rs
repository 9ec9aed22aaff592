use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde_json::{Map, Value};

use crate::{
    foundation::error::{Scene2cError, Scene2cResult},
    shape::model::{FieldError, Shape, ShapeKind},
};

/// Where doodle definitions come from.
pub trait DoodleSource {
    /// Return the JSON text of doodle `name`, or `None` if no such doodle exists.
    fn read(&self, name: &str) -> Scene2cResult<Option<String>>;

    /// Human-readable location of doodle `name`, used in error messages.
    fn locate(&self, name: &str) -> String;
}

/// Doodles stored as `<root>/<name>.json`.
#[derive(Clone, Debug)]
pub struct DirDoodleSource {
    root: PathBuf,
}

impl DirDoodleSource {
    /// Resolve doodles relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory doodles are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds doodle `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl DoodleSource for DirDoodleSource {
    fn read(&self, name: &str) -> Scene2cResult<Option<String>> {
        let path = self.path_for(name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Scene2cError::from(
                anyhow::Error::new(e).context(format!("read doodle '{}'", path.display())),
            )),
        }
    }

    fn locate(&self, name: &str) -> String {
        format!("'{}'", self.path_for(name).display())
    }
}

/// Doodles held in memory, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemoryDoodleSource {
    docs: HashMap<String, String>,
}

impl MemoryDoodleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the JSON definition of doodle `name`.
    pub fn insert(&mut self, name: impl Into<String>, json: impl Into<String>) -> &mut Self {
        self.docs.insert(name.into(), json.into());
        self
    }
}

impl DoodleSource for MemoryDoodleSource {
    fn read(&self, name: &str) -> Scene2cResult<Option<String>> {
        Ok(self.docs.get(name).cloned())
    }

    fn locate(&self, _name: &str) -> String {
        "in-memory doodle set".to_string()
    }
}

#[derive(Debug, serde::Deserialize)]
struct DoodleDef {
    shapes: Vec<Map<String, Value>>,
}

/// A named, immutable list of base shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Doodle {
    name: String,
    shapes: Vec<Shape>,
}

impl Doodle {
    /// Parse doodle `name` from its JSON definition.
    ///
    /// Each entry of `shapes` maps a shape kind to its fields. An entry with several kind keys
    /// yields one shape per key, in document order.
    pub fn parse(name: &str, json: &str) -> Scene2cResult<Self> {
        let def: DoodleDef = serde_json::from_str(json)
            .map_err(|e| Scene2cError::serde(format!("parse doodle '{name}': {e}")))?;

        let mut shapes = Vec::with_capacity(def.shapes.len());
        for entry in &def.shapes {
            for (kind_name, fields) in entry {
                let index = shapes.len();
                let kind = ShapeKind::from_name(kind_name).ok_or_else(|| {
                    Scene2cError::UnknownShapeKind {
                        doodle: name.to_string(),
                        index,
                        kind: kind_name.clone(),
                    }
                })?;
                let invalid = |reason: String| Scene2cError::InvalidShapeDefinition {
                    doodle: name.to_string(),
                    index,
                    reason,
                };

                let shape = match fields {
                    Value::Object(map) => Shape::from_fields(kind, map),
                    Value::Null => Shape::from_fields(kind, &Map::new()),
                    other => Err(FieldError::Invalid(format!(
                        "{kind} fields must be an object, got {other}"
                    ))),
                }
                .map_err(|e| invalid(format!("{kind}: {e}")))?;
                shapes.push(shape);
            }
        }

        Ok(Self {
            name: name.to_string(),
            shapes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// Per-compilation cache of doodle templates.
///
/// Templates are loaded on first reference and shared afterwards; the cache never hands out
/// mutable access, so placements can only derive new shapes from them.
pub struct DoodleStore {
    source: Box<dyn DoodleSource>,
    cache: HashMap<String, Arc<Doodle>>,
}

impl DoodleStore {
    /// Build an empty store reading from `source`.
    pub fn new(source: impl DoodleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: HashMap::new(),
        }
    }

    /// Build an empty store reading `<root>/<name>.json` files.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(DirDoodleSource::new(root))
    }

    /// Load doodle `name`, parsing it on first use and returning the cached template after.
    pub fn load(&mut self, name: &str) -> Scene2cResult<Arc<Doodle>> {
        if let Some(doodle) = self.cache.get(name) {
            tracing::trace!(doodle = name, "doodle cache hit");
            return Ok(Arc::clone(doodle));
        }

        validate_doodle_name(name)?;
        let json = self
            .source
            .read(name)?
            .ok_or_else(|| Scene2cError::DoodleNotFound {
                name: name.to_string(),
                location: self.source.locate(name),
            })?;

        let doodle = Arc::new(Doodle::parse(name, &json)?);
        tracing::debug!(doodle = name, shapes = doodle.shapes().len(), "loaded doodle");
        self.cache.insert(name.to_string(), Arc::clone(&doodle));
        Ok(doodle)
    }

    /// Number of distinct doodles loaded so far.
    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }

    /// Whether doodle `name` is already cached.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }
}

fn validate_doodle_name(name: &str) -> Scene2cResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Scene2cError::validation(format!(
            "invalid doodle name '{name}': must be a plain file stem"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/doodle/store.rs"]
mod tests;
