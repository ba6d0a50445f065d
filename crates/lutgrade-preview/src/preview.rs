//! CPU preview rendering.

use crate::{PackedLutTexture, PreviewError, PreviewResult, sampler};
use tracing::debug;

/// Applies a packed LUT to an RGBA f32 image buffer.
///
/// `src` is `width * height * 4` scalars in [0, 1]. Each pixel's RGB is
/// run through the LUT sampler and blended with the original by
/// `intensity` (0 = original pixel, 1 = full LUT effect); alpha passes
/// through unchanged. `None` for the LUT means "no LUT effect": the source
/// is returned unmodified, which is how an empty or absent LUT artifact
/// renders.
///
/// Pixels are independent, so with the `parallel` feature they are
/// processed with rayon.
///
/// # Errors
///
/// [`PreviewError::InvalidDimensions`] if the buffer length does not match
/// the dimensions.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::LutLattice;
/// use lutgrade_preview::{PackedLutTexture, preview};
///
/// let packed = PackedLutTexture::from_lattice(&LutLattice::identity(8)?);
/// let src = vec![0.5f32; 2 * 2 * 4];
/// let out = preview::apply(&src, 2, 2, Some(&packed), 1.0)?;
/// assert_eq!(out.len(), src.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn apply(
    src: &[f32],
    width: usize,
    height: usize,
    lut: Option<&PackedLutTexture>,
    intensity: f32,
) -> PreviewResult<Vec<f32>> {
    if width == 0 || height == 0 {
        return Err(PreviewError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| PreviewError::InvalidDimensions("image dimensions overflow".into()))?;
    if src.len() != expected {
        return Err(PreviewError::InvalidDimensions(format!(
            "expected {} scalars for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            src.len()
        )));
    }

    let Some(lut) = lut else {
        debug!("no LUT bound, passing source through");
        return Ok(src.to_vec());
    };

    let intensity = intensity.clamp(0.0, 1.0);
    let mut out = src.to_vec();

    let shade = |px: &mut [f32]| {
        let texel = [px[0], px[1], px[2]];
        let lut_rgb = sampler::sample(lut, texel);
        for i in 0..3 {
            px[i] = sampler::mix(texel[i], lut_rgb[i], intensity);
        }
        // px[3] (alpha) passes through.
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.par_chunks_mut(4).for_each(shade);
    }
    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(4).for_each(shade);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutgrade_lut::LutLattice;

    fn checker(width: usize, height: usize) -> Vec<f32> {
        let mut src = Vec::with_capacity(width * height * 4);
        for i in 0..width * height {
            let v = if i % 2 == 0 { 0.2 } else { 0.8 };
            src.extend_from_slice(&[v, 1.0 - v, 0.5, 1.0]);
        }
        src
    }

    #[test]
    fn absent_lut_passes_through() {
        let src = checker(4, 3);
        let out = apply(&src, 4, 3, None, 1.0).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn zero_intensity_returns_source_exactly() {
        let packed = PackedLutTexture::from_lattice(&LutLattice::identity(8).unwrap());
        let src = checker(4, 4);
        let out = apply(&src, 4, 4, Some(&packed), 0.0).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn full_intensity_matches_sampler() {
        let packed = PackedLutTexture::from_lattice(&LutLattice::identity(8).unwrap());
        let src = checker(4, 4);
        let out = apply(&src, 4, 4, Some(&packed), 1.0).unwrap();
        for (px, orig) in out.chunks(4).zip(src.chunks(4)) {
            let expected = sampler::sample(&packed, [orig[0], orig[1], orig[2]]);
            for i in 0..3 {
                // a + (b - a) * 1.0 is not ulp-exact, only near b.
                assert!((px[i] - expected[i]).abs() < 1e-6);
            }
            assert_eq!(px[3], orig[3]);
        }
    }

    #[test]
    fn alpha_is_untouched() {
        let packed = PackedLutTexture::from_lattice(&LutLattice::identity(4).unwrap());
        let src = vec![0.3, 0.6, 0.9, 0.25, 0.1, 0.2, 0.3, 0.75];
        let out = apply(&src, 2, 1, Some(&packed), 1.0).unwrap();
        assert_eq!(out[3], 0.25);
        assert_eq!(out[7], 0.75);
    }

    #[test]
    fn bad_dimensions_rejected() {
        let src = vec![0.0f32; 10];
        assert!(matches!(
            apply(&src, 2, 2, None, 1.0),
            Err(PreviewError::InvalidDimensions(_))
        ));
        assert!(apply(&src, 0, 2, None, 1.0).is_err());
    }
}
