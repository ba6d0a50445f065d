//! # lutgrade-color
//!
//! Per-pixel color math for 3D LUT generation.
//!
//! This crate provides the two transform variants a LUT can be baked from:
//!
//! - [`GradingSettings`] - brightness / contrast / gamma / hue / saturation
//! - [`ColorMatrix`] - explicit 3x4 affine RGB matrix
//!
//! Both are wrapped by [`Transform`], which exposes a single capability:
//! map an RGB triple in [0, 1] to an RGB triple in [0, 1].
//!
//! # Example
//!
//! ```rust
//! use lutgrade_color::{GradingSettings, Transform};
//!
//! let settings = GradingSettings {
//!     contrast: 1.2,
//!     saturation: 0.8,
//!     ..GradingSettings::default()
//! };
//! let rgb = Transform::Grading(settings).apply([0.5, 0.3, 0.2]);
//! ```
//!
//! # Error handling
//!
//! There is none: both transforms are total functions over finite floats.
//! Out-of-range values are clamped, never rejected.
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for the parameter types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hsl;
mod transform;

pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use transform::{ColorMatrix, GradingSettings, Transform, clamp01};
