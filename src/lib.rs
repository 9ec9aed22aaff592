//! scene2c compiles doodle scenes into static C tables for an XY vector display.
//!
//! A *doodle* is a reusable list of shapes. A *scene* is a list of timed frames, each placing
//! doodles with per-placement overrides (`scale`, `x_off`, `y_off`, or any shape field). The
//! compiler resolves every placement at build time and emits plain data declarations that the
//! microcontroller reads directly.
//!
//! # Pipeline overview
//!
//! 1. **Load**: doodle definitions are parsed once per compilation and cached ([`DoodleStore`])
//! 2. **Compose**: `SceneDef -> ComposedScene`, one new shape instance per placed template shape
//! 3. **Emit**: `ComposedScene -> C source`, definitions strictly before references
//!
//! Numbers are never evaluated during emission. Each field becomes an arithmetic expression such
//! as `FP_STATIC(u, 5 * 2)` and the target build folds it into a fixed-point literal.
#![forbid(unsafe_code)]

mod compose;
mod doodle;
mod emit;
mod foundation;
mod pipeline;
mod scene;
mod shape;

/// Sine lookup table generation.
pub mod sinpi;

pub use compose::composer::{ComposedFrame, ComposedScene, compose};
pub use compose::ident::{FrameId, ShapeId, Symbols};
pub use doodle::store::{DirDoodleSource, Doodle, DoodleSource, DoodleStore, MemoryDoodleSource};
pub use emit::c::{EmitOpts, Storage, emit};
pub use emit::writer::SourceWriter;
pub use foundation::core::{PolyPoint, Scalar, duration_to_ms};
pub use foundation::error::{Scene2cError, Scene2cResult};
pub use pipeline::{compile_scene, compile_scene_path};
pub use scene::model::{FrameDef, SceneDef};
pub use shape::expr::{FieldExpr, Signedness};
pub use shape::model::{
    ArcShape, CircleShape, EllipseShape, FieldError, LineShape, PolyShape, RectShape, Shape,
    ShapeKind, Transform,
};
pub use shape::resolve::ResolvedShape;
pub use sinpi::SinpiOpts;
