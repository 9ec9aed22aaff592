//! C translation unit emission.
//!
//! Layout of the generated unit, in order:
//!
//! 1. includes for the doodle, fixed-point and shape headers
//! 2. every shape structure (poly point arrays immediately before their owner)
//! 3. per frame, the shape pointer array followed by the `doodle_t` structure
//! 4. the `doodles` table and the `doodle_count` constant
//!
//! Every declaration only points at declarations above it.

use crate::{
    compose::{
        composer::{ComposedFrame, ComposedScene},
        ident::{FrameId, ShapeId, Symbols},
    },
    emit::writer::SourceWriter,
    foundation::error::Scene2cResult,
    shape::model::{PolyShape, Shape, ShapeKind},
};

/// Where the generated constants are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Storage {
    /// AVR program memory (`PROGMEM`), for targets whose RAM cannot hold the tables.
    #[default]
    Progmem,
    /// Plain `const` data.
    Rodata,
}

impl Storage {
    fn qualifier(self) -> &'static str {
        match self {
            Storage::Progmem => "PROGMEM ",
            Storage::Rodata => "",
        }
    }
}

/// Emitter configuration.
#[derive(Clone, Debug)]
pub struct EmitOpts {
    pub storage: Storage,
    /// Directory prefix of the runtime headers (`#include <prefix/shape.h>`).
    pub include_prefix: String,
    /// Append a `NULL` sentinel to the frame table. `doodle_count` is emitted regardless.
    pub null_terminate: bool,
}

impl Default for EmitOpts {
    fn default() -> Self {
        Self {
            storage: Storage::Progmem,
            include_prefix: "avr-xy-doodles".to_string(),
            null_terminate: true,
        }
    }
}

fn c_struct(kind: ShapeKind) -> String {
    format!("shape_{}_t", kind.name())
}

fn c_tag(kind: ShapeKind) -> String {
    format!("SHAPE_{}", kind.name().to_ascii_uppercase())
}

fn fp_static(prefix: &str, expr: &str) -> String {
    format!("FP_STATIC({prefix}, {expr})")
}

/// Render `scene` as a self-contained C translation unit.
#[tracing::instrument(skip_all, fields(shapes = scene.shape_count(), frames = scene.frame_count()))]
pub fn emit(scene: &ComposedScene, opts: &EmitOpts) -> Scene2cResult<String> {
    let mut w = SourceWriter::new();
    let symbols = Symbols;
    let q = opts.storage.qualifier();

    emit_includes(&mut w, opts);

    for (id, shape) in scene.shapes() {
        w.blank();
        match shape {
            Shape::Poly(poly) => emit_poly(&mut w, symbols, q, id, poly)?,
            other => emit_shape(&mut w, symbols, q, id, other)?,
        }
    }

    for (id, frame) in scene.frames() {
        emit_frame(&mut w, symbols, q, id, frame)?;
    }

    emit_table(&mut w, symbols, q, scene, opts)?;

    tracing::info!(
        shapes = scene.shape_count(),
        frames = scene.frame_count(),
        "emitted scene"
    );
    Ok(w.finish())
}

fn emit_includes(w: &mut SourceWriter, opts: &EmitOpts) {
    if opts.storage == Storage::Progmem {
        w.line("#include <avr/pgmspace.h>").blank();
    }
    let prefix = &opts.include_prefix;
    w.line(format!("#include <{prefix}/doodle.h>"))
        .line(format!("#include <{prefix}/fixed-point.h>"))
        .line(format!("#include <{prefix}/shape.h>"))
        .blank()
        .line("#include <stdbool.h>")
        .line("#include <stddef.h>");
}

fn emit_shape(
    w: &mut SourceWriter,
    symbols: Symbols,
    q: &str,
    id: ShapeId,
    shape: &Shape,
) -> Scene2cResult<()> {
    let kind = shape.kind();
    let sym = symbols.shape(id);

    let mut fields = vec![("shape", c_tag(kind))];
    fields.extend(
        shape
            .field_exprs()
            .into_iter()
            .map(|f| (f.name, fp_static(f.signedness.prefix(), &f.expr))),
    );

    w.designated_struct(
        &format!("static {q}const {} {sym}", c_struct(kind)),
        &fields,
    );
    w.define(&sym)
}

fn emit_poly(
    w: &mut SourceWriter,
    symbols: Symbols,
    q: &str,
    id: ShapeId,
    poly: &PolyShape,
) -> Scene2cResult<()> {
    let points_sym = symbols.points(id);
    let points = poly.point_exprs();

    w.line(format!(
        "static {q}const shape_point_t {points_sym}[{}] = {{",
        points.len()
    ));
    for [x, y] in &points {
        w.line("\t{")
            .line(format!("\t\t{},", fp_static("u", x)))
            .line(format!("\t\t{},", fp_static("u", y)))
            .line("\t},");
    }
    w.line("};").blank();
    w.define(&points_sym)?;

    let sym = symbols.shape(id);
    let fields = [
        ("shape", c_tag(ShapeKind::Poly)),
        ("polygon", poly.polygon.to_string()),
        ("size", points.len().to_string()),
        ("points", w.name_of(&points_sym)?),
    ];
    w.designated_struct(
        &format!("static {q}const {} {sym}", c_struct(ShapeKind::Poly)),
        &fields,
    );
    w.define(&sym)
}

fn emit_frame(
    w: &mut SourceWriter,
    symbols: Symbols,
    q: &str,
    id: FrameId,
    frame: &ComposedFrame,
) -> Scene2cResult<()> {
    let shapes_value = if frame.shapes.is_empty() {
        "NULL".to_string()
    } else {
        let shapes_sym = symbols.frame_shapes(id);
        let refs = frame
            .shapes
            .iter()
            .map(|&s| w.address_of(&symbols.shape(s), Some("shape")))
            .collect::<Scene2cResult<Vec<_>>>()?;

        w.blank().array(
            &format!("static {q}const shape_t * const {shapes_sym}[{}]", refs.len()),
            &refs,
        );
        w.define(&shapes_sym)?;
        w.name_of(&shapes_sym)?
    };

    let sym = symbols.frame(id);
    let fields = [
        ("shapes", shapes_value),
        ("size", frame.shapes.len().to_string()),
        ("duration", frame.duration_ms.to_string()),
    ];
    w.blank()
        .designated_struct(&format!("static {q}const doodle_t {sym}"), &fields);
    w.define(&sym)
}

fn emit_table(
    w: &mut SourceWriter,
    symbols: Symbols,
    q: &str,
    scene: &ComposedScene,
    opts: &EmitOpts,
) -> Scene2cResult<()> {
    let mut entries = scene
        .frames()
        .map(|(id, _)| w.address_of(&symbols.frame(id), None))
        .collect::<Scene2cResult<Vec<_>>>()?;
    // An empty initializer list is not valid C, so an empty table always gets its sentinel.
    if opts.null_terminate || entries.is_empty() {
        entries.push("NULL".to_string());
    }

    w.blank().array(
        &format!("{q}const doodle_t * const {}[]", Symbols::TABLE),
        &entries,
    );
    w.define(Symbols::TABLE)?;

    w.blank().line(format!(
        "const size_t {} = {};",
        Symbols::COUNT,
        scene.frame_count()
    ));
    w.define(Symbols::COUNT)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/c.rs"]
mod tests;
