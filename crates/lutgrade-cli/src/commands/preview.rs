//! Image preview command.

use crate::PreviewArgs;
use anyhow::{Context, Result};
use lutgrade_lut::{LutLattice, cube};
use lutgrade_preview::{PackedLutTexture, preview};
use tracing::debug;

pub fn run(args: PreviewArgs, verbose: bool) -> Result<()> {
    let text = std::fs::read_to_string(&args.lut)
        .with_context(|| format!("failed to read {}", args.lut.display()))?;

    // An empty LUT artifact renders the source unmodified.
    let packed = if text.trim().is_empty() {
        debug!("empty LUT file, rendering source as-is");
        None
    } else {
        let (size, samples) = cube::parse(&text)
            .with_context(|| format!("failed to parse {}", args.lut.display()))?;
        let lattice = LutLattice::from_samples(samples, size)?;
        Some(PackedLutTexture::from_lattice(&lattice))
    };

    let img = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?
        .to_rgba32f();
    let (width, height) = img.dimensions();
    debug!(width, height, "loaded source image");

    let out = preview::apply(
        img.as_raw(),
        width as usize,
        height as usize,
        packed.as_ref(),
        args.intensity,
    )?;

    let bytes: Vec<u8> = out
        .iter()
        .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();
    let out_img = image::RgbaImage::from_raw(width, height, bytes)
        .context("preview buffer size mismatch")?;
    out_img
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    if verbose {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
