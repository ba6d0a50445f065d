//! Grading-parameter and color-matrix transforms.

use crate::hsl;

/// Clamps a value to [0, 1]. NaN clamps to 0.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v > 1.0 {
        1.0
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Color grading parameters.
///
/// None of the fields have an enforced range; downstream clamping handles
/// out-of-range values. The defaults are neutral: applying them leaves
/// every color unchanged.
///
/// # Example
///
/// ```rust
/// use lutgrade_color::GradingSettings;
///
/// let warm = GradingSettings {
///     brightness: 0.05,
///     hue: -10.0,
///     ..GradingSettings::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GradingSettings {
    /// Additive brightness (0 = no change).
    pub brightness: f32,
    /// Contrast around mid-gray (1 = no change).
    pub contrast: f32,
    /// Per-channel power function (1 = no change).
    pub gamma: f32,
    /// Hue rotation in degrees (0 = no change).
    pub hue: f32,
    /// Saturation factor (1 = no change, 0 = grayscale).
    pub saturation: f32,
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            gamma: 1.0,
            hue: 0.0,
            saturation: 1.0,
        }
    }
}

impl GradingSettings {
    /// Applies brightness, contrast, and gamma to a single channel.
    ///
    /// The base is clamped to [0, 1] before the power function so a
    /// negative base never reaches `powf` with a fractional exponent.
    #[inline]
    fn grade_channel(&self, c: f32) -> f32 {
        let v = clamp01((c - 0.5) * self.contrast + 0.5 + self.brightness);
        clamp01(v.powf(self.gamma))
    }

    /// Applies the full grading chain to an RGB triple.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let r = self.grade_channel(rgb[0]);
        let g = self.grade_channel(rgb[1]);
        let b = self.grade_channel(rgb[2]);

        // Skip the HSL round trip when hue/saturation are neutral.
        if self.hue == 0.0 && self.saturation == 1.0 {
            return [r, g, b];
        }

        let (h, s, l) = hsl::rgb_to_hsl(r, g, b);
        let h = (h + self.hue / 360.0).rem_euclid(1.0);
        let s = (s * self.saturation).clamp(0.0, 1.0);
        let (r, g, b) = hsl::hsl_to_rgb(h, s, l);
        [r, g, b]
    }
}

/// A 3x4 affine color matrix, row-major.
///
/// Maps `(r, g, b, 1)` to `(r', g', b')` via three dot-products plus
/// offset; each output channel is clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMatrix(pub [f32; 12]);

impl ColorMatrix {
    /// The identity matrix (no color change).
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    ]);

    /// Creates a matrix from 12 row-major values.
    pub fn new(values: [f32; 12]) -> Self {
        Self(values)
    }

    /// Applies the matrix to an RGB triple.
    pub fn apply(&self, [r, g, b]: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        [
            clamp01(m[0] * r + m[1] * g + m[2] * b + m[3]),
            clamp01(m[4] * r + m[5] * g + m[6] * b + m[7]),
            clamp01(m[8] * r + m[9] * g + m[10] * b + m[11]),
        ]
    }
}

/// A color transform a LUT can be baked from.
///
/// # Example
///
/// ```rust
/// use lutgrade_color::{ColorMatrix, Transform};
///
/// let t = Transform::Matrix(ColorMatrix::IDENTITY);
/// assert_eq!(t.apply([0.5, 0.3, 0.2]), [0.5, 0.3, 0.2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Brightness/contrast/gamma/hue/saturation grading.
    Grading(GradingSettings),
    /// Explicit 3x4 affine matrix.
    Matrix(ColorMatrix),
}

impl Transform {
    /// Maps an input RGB triple in [0, 1] to an output RGB triple in [0, 1].
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Grading(settings) => settings.apply(rgb),
            Self::Matrix(matrix) => matrix.apply(rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_grading_is_identity() {
        let t = Transform::Grading(GradingSettings::default());
        for &rgb in &[[0.0, 0.0, 0.0], [0.25, 0.5, 0.75], [1.0, 1.0, 1.0]] {
            let out = t.apply(rgb);
            for i in 0..3 {
                assert_relative_eq!(out[i], rgb[i], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn identity_matrix_is_identity() {
        let t = Transform::Matrix(ColorMatrix::IDENTITY);
        assert_eq!(t.apply([0.1, 0.6, 0.9]), [0.1, 0.6, 0.9]);
    }

    #[test]
    fn brightness_clamps_to_extremes() {
        let dark = GradingSettings {
            brightness: -10.0,
            ..Default::default()
        };
        assert_eq!(dark.apply([0.3, 0.5, 0.9]), [0.0, 0.0, 0.0]);

        let bright = GradingSettings {
            brightness: 10.0,
            ..Default::default()
        };
        assert_eq!(bright.apply([0.1, 0.5, 0.7]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn contrast_two_at_lattice_corners() {
        let s = GradingSettings {
            contrast: 2.0,
            ..Default::default()
        };
        // (0 - 0.5) * 2 + 0.5 = -0.5, clamps to 0
        assert_eq!(s.apply([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        // (1 - 0.5) * 2 + 0.5 = 1.5, clamps to 1
        assert_eq!(s.apply([1.0, 1.0, 1.0]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn clamp01_handles_non_finite_values() {
        // NaN must clamp to 0, not propagate; f32::clamp would keep it.
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(f32::INFINITY), 1.0);
        assert_eq!(clamp01(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn negative_base_with_fractional_gamma_is_finite() {
        let s = GradingSettings {
            contrast: 2.0,
            gamma: 0.5,
            ..Default::default()
        };
        // (0 - 0.5) * 2 + 0.5 = -0.5; must clamp before powf, not NaN.
        let out = s.apply([0.0, 0.0, 0.0]);
        assert_eq!(out, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hue_rotation_cycles_primaries() {
        let s = GradingSettings {
            hue: 120.0,
            ..Default::default()
        };
        let out = s.apply([1.0, 0.0, 0.0]);
        assert_relative_eq!(out[0], 0.0, epsilon = 1e-5);
        assert_relative_eq!(out[1], 1.0, epsilon = 1e-5);
        assert_relative_eq!(out[2], 0.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_saturation_is_achromatic() {
        let s = GradingSettings {
            saturation: 0.0,
            ..Default::default()
        };
        let [r, g, b] = s.apply([0.9, 0.1, 0.4]);
        assert_relative_eq!(r, g, epsilon = 1e-6);
        assert_relative_eq!(g, b, epsilon = 1e-6);
    }

    #[test]
    fn saturation_output_stays_in_range() {
        let s = GradingSettings {
            saturation: 5.0,
            ..Default::default()
        };
        let out = s.apply([0.7, 0.3, 0.5]);
        for c in out {
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn matrix_offsets_clamp() {
        let m = ColorMatrix::new([
            1.0, 0.0, 0.0, 0.5, //
            0.0, 1.0, 0.0, -0.5, //
            0.0, 0.0, 1.0, 0.0,
        ]);
        assert_eq!(m.apply([0.8, 0.2, 0.4]), [1.0, 0.0, 0.4]);
    }
}
