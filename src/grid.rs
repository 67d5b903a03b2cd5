//! The N×N byte grid holding the mask samples.
//!
//! Cells are stored row-major: index `i` lives at `(i % N, i / N)`. After
//! creation the grid is only ever mutated by swapping two cells, so the
//! multiset of values is fixed for its whole lifetime (apart from explicit
//! [`ValueGrid::set`] calls made by the owner).

use crate::{MaskError, RandomSource, Result};
#[cfg(feature = "image")]
use std::path::Path;

/// Square grid of byte samples on a torus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValueGrid {
    size: usize,
    values: Vec<u8>,
}

/// Returns `size²`, rejecting zero and overflowing sizes.
fn cell_count(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(MaskError::InvalidArgument("grid size must be positive"));
    }
    size.checked_mul(size).ok_or(MaskError::InvalidArgument(
        "grid size overflows cell count",
    ))
}

impl ValueGrid {
    /// Creates a `size`×`size` grid where every cell is an independent
    /// `next_u32() % 256` draw from `rng`.
    ///
    /// Values are not a permutation; duplicates are expected.
    pub fn random<R: RandomSource>(size: usize, rng: &mut R) -> Result<Self> {
        let len = cell_count(size)?;
        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        values.extend((0..len).map(|_| rng.below(256) as u8));

        Ok(Self { size, values })
    }

    /// Creates a grid from explicit row-major `values`.
    pub fn from_values(size: usize, values: Vec<u8>) -> Result<Self> {
        if cell_count(size)? != values.len() {
            return Err(MaskError::InvalidArgument(
                "value count must equal size * size",
            ));
        }

        Ok(Self { size, values })
    }

    /// Edge length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, N².
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row-major view of all samples.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// `(x, y)` of cell `index`.
    #[inline(always)]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Cell index of `(x, y)`.
    #[inline(always)]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(MaskError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<u8> {
        self.check(index)?;
        Ok(self.values[index])
    }

    pub fn set(&mut self, index: usize, value: u8) -> Result<()> {
        self.check(index)?;
        self.values[index] = value;
        Ok(())
    }

    /// Exchanges the samples at `a` and `b`.
    ///
    /// Swapping a cell with itself is a no-op. Applying the same swap twice
    /// restores the grid exactly.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        self.values.swap(a, b);
        Ok(())
    }

    /// Unchecked swap for callers that draw indices from `0..len`.
    #[inline(always)]
    pub(crate) fn swap_cells(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Copy of the grid with every cell moved to
    /// `((x + sx) mod N, (y + sy) mod N)`.
    pub fn shifted(&self, sx: usize, sy: usize) -> Self {
        let mut values = vec![0; self.values.len()];

        for (i, &value) in self.values.iter().enumerate() {
            let (x, y) = self.position(i);
            values[self.index((x + sx) % self.size, (y + sy) % self.size)] =
                value;
        }

        Self {
            size: self.size,
            values,
        }
    }

    /// Count of each byte value; equal histograms mean equal multisets.
    pub fn histogram(&self) -> [usize; 256] {
        let mut bins = [0; 256];
        self.values.iter().for_each(|&v| bins[v as usize] += 1);
        bins
    }

    /// Resizes `buffer` to N×N and copies every sample verbatim.
    pub fn export_mono(&self, buffer: &mut Vec<u8>) {
        buffer.clear();
        buffer.extend_from_slice(&self.values);
    }

    /// Resizes `buffer` to N×N RGBA pixels.
    ///
    /// R, G and B receive the raw byte value as a float -- *not* normalized
    /// to `0..=1`. Alpha is `1.0`.
    pub fn export_rgba(&self, buffer: &mut Vec<[f32; 4]>) {
        buffer.clear();
        buffer.extend(self.values.iter().map(|&v| {
            let v = v as f32;
            [v, v, v, 1.0]
        }));
    }
}

#[cfg(feature = "image")]
impl ValueGrid {
    /// The mono export as an 8-bit grayscale image.
    pub fn to_luma8(&self) -> image::GrayImage {
        let side = self.size as u32;
        image::GrayImage::from_fn(side, side, |x, y| {
            image::Luma([self.values[self.index(x as usize, y as usize)]])
        })
    }

    /// The RGBA export as a 32-bit float image (un-normalized channels).
    pub fn to_rgba32f(&self) -> image::Rgba32FImage {
        let side = self.size as u32;
        image::Rgba32FImage::from_fn(side, side, |x, y| {
            let v = self.values[self.index(x as usize, y as usize)] as f32;
            image::Rgba([v, v, v, 1.0])
        })
    }

    /// Writes the mask as a grayscale PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        if self.is_empty() {
            return Err(MaskError::InvalidArgument("cannot save an empty grid"));
        }
        self.to_luma8()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
