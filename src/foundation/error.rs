/// Convenience result type used across scene2c.
pub type Scene2cResult<T> = Result<T, Scene2cError>;

/// Top-level error taxonomy of the scene compiler.
///
/// Every variant is fatal: compilation is all-or-nothing and there is no partial output.
#[derive(thiserror::Error, Debug)]
pub enum Scene2cError {
    /// A scene references a doodle that has no definition.
    #[error("doodle '{name}' not found (looked in {location})")]
    DoodleNotFound {
        /// Doodle name as written in the scene.
        name: String,
        /// Where the source looked for it.
        location: String,
    },

    /// A doodle entry names a shape kind outside the closed set.
    #[error("doodle '{doodle}', shape #{index}: unknown shape kind '{kind}'")]
    UnknownShapeKind {
        /// Doodle holding the entry.
        doodle: String,
        /// Position of the shape within the doodle.
        index: usize,
        /// Offending kind key.
        kind: String,
    },

    /// A shape's field mapping cannot build a valid shape.
    #[error("doodle '{doodle}', shape #{index}: invalid shape definition: {reason}")]
    InvalidShapeDefinition {
        /// Doodle holding the shape.
        doodle: String,
        /// Position of the shape within the doodle.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A placement overrides a field the target shape kind does not have.
    #[error("frame #{frame}, doodle '{doodle}': invalid override '{field}' for {kind} shape")]
    InvalidOverride {
        /// Scene frame index.
        frame: usize,
        /// Placed doodle.
        doodle: String,
        /// Offending override field name.
        field: String,
        /// Shape kind name the override was applied to.
        kind: String,
    },

    /// Malformed scene/doodle documents or invalid options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing input documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Scene2cError {
    /// Build a [`Scene2cError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`Scene2cError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
