//! `sin(x * pi)` lookup table generation for the display's arc rasterizer.
//!
//! The table covers one half period, `x` in `[0, 1)`, quantized to the same fractional bit width
//! as the runtime's fixed-point type.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::foundation::error::{Scene2cError, Scene2cResult};

/// Largest supported fractional bit width.
pub const MAX_FRACTIONAL_BITS: u32 = 16;

/// Lookup table options.
#[derive(Clone, Debug)]
pub struct SinpiOpts {
    pub fractional_bits: u32,
    /// C element type of the table.
    pub c_type: String,
    /// C variable name of the table.
    pub variable: String,
}

impl Default for SinpiOpts {
    fn default() -> Self {
        Self {
            fractional_bits: 8,
            c_type: "uint8_t".to_string(),
            variable: "sinpi_lookup_table".to_string(),
        }
    }
}

/// Quantized `sin(i * pi / steps) * steps` for `i` in `0..steps`, where `steps = 1 << bits`.
///
/// Values are rounded half to even and clamped to `steps - 1` so the peak fits the fraction.
pub fn generate_table(fractional_bits: u32) -> Scene2cResult<Vec<u32>> {
    if !(1..=MAX_FRACTIONAL_BITS).contains(&fractional_bits) {
        return Err(Scene2cError::validation(format!(
            "fractional bits must be in 1..={MAX_FRACTIONAL_BITS}, got {fractional_bits}"
        )));
    }

    let steps = 1u32 << fractional_bits;
    let step = 1.0 / f64::from(steps);
    Ok((0..steps)
        .map(|x| {
            let v = ((f64::from(x) * PI * step).sin() * f64::from(steps)).round_ties_even();
            (v as u32).min(steps - 1)
        })
        .collect())
}

/// Render `values` as a C array definition.
pub fn emit_table(values: &[u32], c_type: &str, variable: &str) -> String {
    let mut out = format!("#include <stdint.h>\n\nconst {c_type} {variable}[] = {{\n");
    for v in values {
        let _ = writeln!(out, "\t0x{v:02X},");
    }
    out.push_str("};\n");
    out
}

/// Generate and render the table described by `opts`.
pub fn render(opts: &SinpiOpts) -> Scene2cResult<String> {
    let values = generate_table(opts.fractional_bits)?;
    tracing::debug!(entries = values.len(), "generated sinpi table");
    Ok(emit_table(&values, &opts.c_type, &opts.variable))
}

#[cfg(test)]
#[path = "../tests/unit/sinpi.rs"]
mod tests;
