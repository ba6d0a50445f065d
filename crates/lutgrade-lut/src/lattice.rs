//! 3-dimensional LUT lattice.

use crate::{LutError, LutResult};
use lutgrade_color::Transform;
use tracing::debug;

/// An N x N x N lattice of RGB samples.
///
/// Each sample holds the transformed output color for the lattice point's
/// input coordinate. Input coordinates are the grid positions normalized by
/// `N - 1`, so the identity lattice spans exactly [0, 1] on every axis.
///
/// # Example
///
/// ```rust
/// use lutgrade_lut::LutLattice;
///
/// let lut = LutLattice::identity(32)?;
/// assert_eq!(lut.samples.len(), 32 * 32 * 32);
/// # Ok::<(), lutgrade_lut::LutError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LutLattice {
    /// Lattice size per axis (at least 2).
    pub size: usize,
    /// `size^3` RGB triples, red fastest-varying, then green, then blue.
    pub samples: Vec<[f32; 3]>,
}

impl LutLattice {
    /// Creates an identity (pass-through) lattice.
    pub fn identity(size: usize) -> LutResult<Self> {
        check_size(size)?;
        let mut samples = Vec::with_capacity(size * size * size);
        let scale = 1.0 / (size - 1) as f32;
        for z in 0..size {
            for y in 0..size {
                for x in 0..size {
                    samples.push([x as f32 * scale, y as f32 * scale, z as f32 * scale]);
                }
            }
        }
        Ok(Self { size, samples })
    }

    /// Generates a lattice by applying `transform` to every lattice point.
    ///
    /// O(size^3) pure computation; with the `parallel` feature the points
    /// are evaluated with rayon.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutgrade_color::{ColorMatrix, Transform};
    /// use lutgrade_lut::LutLattice;
    ///
    /// let lut = LutLattice::generate(&Transform::Matrix(ColorMatrix::IDENTITY), 16)?;
    /// assert_eq!(lut.size, 16);
    /// # Ok::<(), lutgrade_lut::LutError>(())
    /// ```
    pub fn generate(transform: &Transform, size: usize) -> LutResult<Self> {
        check_size(size)?;
        let samples = compute_samples(transform, size);
        debug!(size, points = samples.len(), "generated LUT lattice");
        Ok(Self { size, samples })
    }

    /// Creates a lattice from an existing sample buffer in lattice order.
    ///
    /// This is the entry point for externally parsed `.cube` data.
    pub fn from_samples(samples: Vec<[f32; 3]>, size: usize) -> LutResult<Self> {
        check_size(size)?;
        let expected = size * size * size;
        if samples.len() != expected {
            return Err(LutError::SampleCount {
                size,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { size, samples })
    }

    /// Returns the total number of lattice points.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Returns the sample at grid position (x, y, z).
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        self.samples[x + y * self.size + z * self.size * self.size]
    }
}

fn check_size(size: usize) -> LutResult<()> {
    if size < 2 {
        return Err(LutError::InvalidLatticeSize(size));
    }
    Ok(())
}

/// Input coordinate for flat index `i`: x (red) varies fastest.
#[inline]
fn input_coord(size: usize, i: usize) -> [f32; 3] {
    let scale = 1.0 / (size - 1) as f32;
    let x = i % size;
    let y = (i / size) % size;
    let z = i / (size * size);
    [x as f32 * scale, y as f32 * scale, z as f32 * scale]
}

#[cfg(feature = "parallel")]
fn compute_samples(transform: &Transform, size: usize) -> Vec<[f32; 3]> {
    use rayon::prelude::*;
    (0..size * size * size)
        .into_par_iter()
        .map(|i| transform.apply(input_coord(size, i)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_samples(transform: &Transform, size: usize) -> Vec<[f32; 3]> {
    (0..size * size * size)
        .map(|i| transform.apply(input_coord(size, i)))
        .collect()
}
