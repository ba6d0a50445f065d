//! # lutgrade-lut
//!
//! 3D LUT lattice generation and `.cube` text serialization.
//!
//! A [`LutLattice`] is an N x N x N grid of RGB samples: each lattice point
//! holds the transformed output color for its own input coordinate. The
//! [`cube`] module renders a lattice into the Adobe/Resolve `.cube` text
//! format and parses it back.
//!
//! # Example
//!
//! ```rust
//! use lutgrade_color::{GradingSettings, Transform};
//! use lutgrade_lut::{LutLattice, cube};
//!
//! let transform = Transform::Grading(GradingSettings {
//!     contrast: 1.3,
//!     ..GradingSettings::default()
//! });
//! let lattice = LutLattice::generate(&transform, 32)?;
//! let text = cube::serialize("Punchy", &lattice, None);
//! # Ok::<(), lutgrade_lut::LutError>(())
//! ```
//!
//! # Sample order
//!
//! Samples are stored red fastest-varying, then green, then blue:
//! `i = x + y*N + z*N^2`. This matches the `.cube` file order, so
//! serialization is a straight walk over the sample buffer.
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Evaluate lattice points with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lattice;
pub mod cube;

pub use error::{LutError, LutResult};
pub use lattice::LutLattice;
