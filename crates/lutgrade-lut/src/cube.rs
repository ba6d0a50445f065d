//! Adobe/Resolve `.cube` text format.
//!
//! # Format
//!
//! ```text
//! #Created by Online LUT generator
//! TITLE "Punchy"
//!
//! #LUT size
//! LUT_3D_SIZE 32
//!
//! #LUT data points
//! 0.000000 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! Data lines are emitted red fastest-varying, then green, then blue. This
//! is the format's contractual row order; any reordering corrupts sampling
//! in every downstream consumer.

use crate::{LutError, LutLattice, LutResult};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders a lattice into `.cube` text.
///
/// The domain block is omitted when `domain` is `None` or the default
/// `[0, 1]` range; a `.cube` without it means 0-1 by convention.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::{LutLattice, cube};
///
/// let lut = LutLattice::identity(2)?;
/// let text = cube::serialize("Identity", &lut, None);
/// assert!(text.contains("LUT_3D_SIZE 2"));
/// # Ok::<(), lutgrade_lut::LutError>(())
/// ```
pub fn serialize(title: &str, lattice: &LutLattice, domain: Option<([f32; 3], [f32; 3])>) -> String {
    // Header is ~90 bytes, each data line 27.
    let mut out = String::with_capacity(lattice.entry_count() * 27 + 128);

    out.push_str("#Created by Online LUT generator\n");
    let _ = writeln!(out, "TITLE \"{}\"", title);
    out.push('\n');
    out.push_str("#LUT size\n");
    let _ = writeln!(out, "LUT_3D_SIZE {}", lattice.size);
    out.push('\n');

    if let Some((min, max)) = domain {
        if min != [0.0, 0.0, 0.0] || max != [1.0, 1.0, 1.0] {
            out.push_str("#data domain\n");
            let _ = writeln!(out, "DOMAIN_MIN {} {} {}", min[0], min[1], min[2]);
            let _ = writeln!(out, "DOMAIN_MAX {} {} {}", max[0], max[1], max[2]);
            out.push('\n');
        }
    }

    out.push_str("#LUT data points\n");
    for [r, g, b] in &lattice.samples {
        let _ = writeln!(out, "{:.6} {:.6} {:.6}", r, g, b);
    }

    out
}

/// Writes a lattice to a `.cube` file.
pub fn write<P: AsRef<Path>>(
    path: P,
    title: &str,
    lattice: &LutLattice,
    domain: Option<([f32; 3], [f32; 3])>,
) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writer.write_all(serialize(title, lattice, domain).as_bytes())?;
    Ok(())
}

/// Parses `.cube` text into a lattice size and flattened triples.
///
/// Returns samples in file order (red fastest-varying), ready for
/// [`LutLattice::from_samples`]. Comments and blank lines are skipped;
/// `TITLE` and `DOMAIN_*` lines are accepted and ignored.
///
/// # Errors
///
/// [`LutError::Parse`] on a missing or malformed `LUT_3D_SIZE` header,
/// a 1D size header, non-numeric data, or a data line count that does not
/// match the declared size.
pub fn parse(text: &str) -> LutResult<(usize, Vec<[f32; 3]>)> {
    let mut size: Option<usize> = None;
    let mut samples: Vec<[f32; 3]> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("TITLE") || line.starts_with("DOMAIN_") {
            continue;
        } else if line.starts_with("LUT_3D_SIZE") {
            size = Some(parse_size(line)?);
        } else if line.starts_with("LUT_1D_SIZE") {
            return Err(LutError::Parse("expected 3D LUT, found 1D".into()));
        } else {
            samples.push(parse_rgb(line)?);
        }
    }

    let size = size.ok_or_else(|| LutError::Parse("missing LUT_3D_SIZE".into()))?;
    let expected = size * size * size;
    if samples.len() != expected {
        return Err(LutError::Parse(format!(
            "expected {} data lines for size {}, found {}",
            expected,
            size,
            samples.len()
        )));
    }

    Ok((size, samples))
}

fn parse_size(line: &str) -> LutResult<usize> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(LutError::Parse("invalid size line".into()));
    }
    parts[1]
        .parse()
        .map_err(|_| LutError::Parse(format!("invalid size value: {}", parts[1])))
}

fn parse_rgb(line: &str) -> LutResult<[f32; 3]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(LutError::Parse(format!("invalid RGB line: {}", line)));
    }
    let mut rgb = [0.0f32; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| LutError::Parse(format!("invalid value: {}", part)))?;
    }
    Ok(rgb)
}
