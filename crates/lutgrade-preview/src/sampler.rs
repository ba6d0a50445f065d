//! CPU reference for the GPU LUT sampler.
//!
//! Reproduces the arithmetic of [`shaders::LUT_PREVIEW`] exactly: the same
//! texel-center pre-warp, nearest-slice selection, green-offset clamp, and
//! bilinear taps with clamp-to-edge addressing. Tests and the CLI preview
//! run against this; the GPU path must agree within filtering precision.
//!
//! [`shaders::LUT_PREVIEW`]: crate::shaders::LUT_PREVIEW

use crate::PackedLutTexture;

/// Linear interpolation, GLSL `mix`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// GLSL/WGSL `sign`: zero maps to zero, unlike `f32::signum`.
#[inline]
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Bilinear texture tap with texel-center convention and clamp-to-edge.
fn tex_sample(lut: &PackedLutTexture, u: f32, v: f32) -> [f32; 3] {
    let w = lut.width();
    let h = lut.height();

    let x = u * w as f32 - 0.5;
    let y = v * h as f32 - 0.5;
    let fx = x - x.floor();
    let fy = y - y.floor();

    let clamp_idx = |v: f32, n: usize| -> usize { (v.max(0.0) as usize).min(n - 1) };
    let x0 = clamp_idx(x.floor(), w);
    let x1 = clamp_idx(x.floor() + 1.0, w);
    let y0 = clamp_idx(y.floor(), h);
    let y1 = clamp_idx(y.floor() + 1.0, h);

    let t00 = lut.texel(x0, y0);
    let t10 = lut.texel(x1, y0);
    let t01 = lut.texel(x0, y1);
    let t11 = lut.texel(x1, y1);

    let mut out = [0.0f32; 3];
    for i in 0..3 {
        let top = mix(t00[i], t10[i], fx);
        let bottom = mix(t01[i], t11[i], fx);
        out[i] = mix(top, bottom, fy);
    }
    out
}

/// The shader's `lut_lookup`: trilinear reconstruction from the packed
/// texture, given coordinates already warped into texel-center space.
fn lut_lookup(lut: &PackedLutTexture, rgb: [f32; 3]) -> [f32; 3] {
    let size = lut.size() as f32;
    let slice_height = 1.0 / size;
    let y_pixel_height = 1.0 / (size * size);

    // Slices on either side of the sample; interpolate toward whichever
    // neighbor is nearer.
    let slice = rgb[2] * size;
    let interp = slice.fract();
    let slice0 = slice - interp;
    let centered_interp = interp - 0.5;
    let slice1 = slice0 + sign(centered_interp);

    // Pull the y sample in by half a texel to avoid bleeding across the
    // neighboring slice's rows.
    let green_offset = (rgb[1] * slice_height)
        .clamp(y_pixel_height * 0.5, slice_height - y_pixel_height * 0.5);

    let s0 = tex_sample(lut, rgb[0], slice0 * slice_height + green_offset);
    let s1 = tex_sample(lut, rgb[0], slice1 * slice_height + green_offset);

    let t = centered_interp.abs();
    [mix(s0[0], s1[0], t), mix(s0[1], s1[1], t), mix(s0[2], s1[2], t)]
}

/// Samples the packed LUT at a source color in [0, 1].
///
/// Applies the texel-center pre-warp and the trilinear lookup; at an input
/// exactly on a lattice grid point this returns that point's stored value
/// up to 8-bit quantization.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::LutLattice;
/// use lutgrade_preview::{PackedLutTexture, sampler};
///
/// let packed = PackedLutTexture::from_lattice(&LutLattice::identity(8)?);
/// let out = sampler::sample(&packed, [0.5, 0.5, 0.5]);
/// assert!((out[0] - 0.5).abs() < 0.01);
/// # Ok::<(), lutgrade_lut::LutError>(())
/// ```
pub fn sample(lut: &PackedLutTexture, rgb: [f32; 3]) -> [f32; 3] {
    let size = lut.size() as f32;
    let pixel_width = 1.0 / size;
    let half_pixel_width = 0.5 / size;
    let uvw = [
        half_pixel_width + rgb[0] * (1.0 - pixel_width),
        half_pixel_width + rgb[1] * (1.0 - pixel_width),
        half_pixel_width + rgb[2] * (1.0 - pixel_width),
    ];
    lut_lookup(lut, uvw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutgrade_lut::LutLattice;

    #[test]
    fn gl_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(2.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }

    #[test]
    fn identity_lut_is_near_identity() {
        let packed = PackedLutTexture::from_lattice(&LutLattice::identity(16).unwrap());
        for &rgb in &[
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.2, 0.5, 0.8],
            [0.123, 0.456, 0.789],
            [0.99, 0.01, 0.5],
        ] {
            let out = sample(&packed, rgb);
            for i in 0..3 {
                assert!(
                    (out[i] - rgb[i]).abs() < 0.01,
                    "channel {} drifted: {} -> {}",
                    i,
                    rgb[i],
                    out[i]
                );
            }
        }
    }

    #[test]
    fn blue_interpolation_spans_slices() {
        // Between two blue slices the result must be the linear blend of
        // both, not a clamp to either side.
        let packed = PackedLutTexture::from_lattice(&LutLattice::identity(4).unwrap());
        let out = sample(&packed, [0.0, 0.0, 0.5]);
        assert!((out[2] - 0.5).abs() < 0.01);
    }
}
