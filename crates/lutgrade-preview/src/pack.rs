//! 3D-to-2D LUT texture packing.

use lutgrade_lut::LutLattice;

/// A lattice packed into a 2D RGB texture for GPU upload.
///
/// Layout: width `N`, height `N^2`, 3 bytes per texel. Row `y` decomposes
/// as `z = y / N` (blue slice index) and `y % N` (green row within the
/// slice); column `x` is the red index. Scalars are quantized to 8 bits via
/// `round(255 * clamp01(v))` - lossy, deterministic, no dithering.
///
/// Because the lattice stores red fastest-varying, then green, then blue,
/// the packed byte order is exactly the quantized sample buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLutTexture {
    size: usize,
    data: Vec<u8>,
}

impl PackedLutTexture {
    /// Packs a lattice into texture bytes.
    pub fn from_lattice(lattice: &LutLattice) -> Self {
        let mut data = Vec::with_capacity(lattice.samples.len() * 3);
        for sample in &lattice.samples {
            for &v in sample {
                data.push(quantize(v));
            }
        }
        Self {
            size: lattice.size,
            data,
        }
    }

    /// Lattice size per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Texture width in texels.
    #[inline]
    pub fn width(&self) -> usize {
        self.size
    }

    /// Texture height in texels.
    #[inline]
    pub fn height(&self) -> usize {
        self.size * self.size
    }

    /// Raw texture bytes, row-major RGB.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The texel at (x, y), dequantized to [0, 1] floats.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> [f32; 3] {
        let i = (y * self.size + x) * 3;
        [
            self.data[i] as f32 / 255.0,
            self.data[i + 1] as f32 / 255.0,
            self.data[i + 2] as f32 / 255.0,
        ]
    }
}

#[inline]
fn quantize(v: f32) -> u8 {
    (255.0 * v.clamp(0.0, 1.0)).round() as u8
}
