//! # lutgrade-preview
//!
//! Packed LUT textures and the trilinear preview sampler.
//!
//! The rendering target consumes only 2D textures, so a 3D lattice is
//! flattened into an N-wide, N^2-tall 8-bit texture with the blue slices
//! stacked vertically ([`PackedLutTexture`]). The [`shaders`] module holds
//! the WGSL that reconstructs a trilinear 3D lookup from that packing on
//! the GPU; the [`sampler`] module is a CPU reference that reproduces the
//! same arithmetic and backs the tests and the CLI preview.
//!
//! # Example
//!
//! ```rust
//! use lutgrade_lut::LutLattice;
//! use lutgrade_preview::{PackedLutTexture, sampler};
//!
//! let lut = LutLattice::identity(16)?;
//! let packed = PackedLutTexture::from_lattice(&lut);
//! let rgb = sampler::sample(&packed, [0.4, 0.6, 0.1]);
//! # Ok::<(), lutgrade_lut::LutError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Process preview pixels with rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod pack;
pub mod preview;
pub mod sampler;
pub mod shaders;

pub use error::{PreviewError, PreviewResult};
pub use pack::PackedLutTexture;
