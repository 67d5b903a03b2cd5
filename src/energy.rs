//! Pairwise spatial-plus-intensity energy.
//!
//! For two distinct cells `i`, `j` with toroidal displacement `(dx, dy)`:
//!
//! *exp(-(dx² + dy²) / σ - √|vᵢ - vⱼ|)*
//!
//! Cells that are close together *and* similar in value contribute the most,
//! so lowering the total pushes similar values apart. The total sums every
//! unordered pair exactly once (`j < i`).

use crate::{ValueGrid, WrapMode};

/// Default spatial falloff σ.
pub const DEFAULT_SIGMA: f32 = 2.1;

/// Scoring function for a grid configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyModel {
    /// Spatial falloff σ. Must be finite and positive.
    pub sigma: f32,
    /// Wrap folding; has no influence on the resulting energy.
    pub wrap: WrapMode,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            wrap: WrapMode::default(),
        }
    }
}

impl EnergyModel {
    pub fn new(sigma: f32, wrap: WrapMode) -> Self {
        Self { sigma, wrap }
    }

    /// Contribution of the unordered pair `(i, j)`, `i != j`.
    ///
    /// The spatial exponent is evaluated in single precision, the rest in
    /// double precision.
    #[inline(always)]
    pub fn pair(&self, grid: &ValueGrid, i: usize, j: usize) -> f64 {
        let (dx, dy) = self.wrap.displacement(
            grid.position(i),
            grid.position(j),
            grid.size(),
        );
        let values = grid.values();
        let distance_squared = (dx * dx + dy * dy) as f32;
        let spatial = -distance_squared / self.sigma;
        let intensity = (values[i] as f64 - values[j] as f64).abs().sqrt();

        (spatial as f64 - intensity).exp()
    }

    /// Partial sum of `pair(i, j)` over all `j < i`.
    #[inline]
    pub fn row(&self, grid: &ValueGrid, i: usize) -> f64 {
        (0..i).map(|j| self.pair(grid, i, j)).sum()
    }

    /// Total energy on the calling thread.
    pub fn total_sequential(&self, grid: &ValueGrid) -> f64 {
        (0..grid.len()).map(|i| self.row(grid, i)).sum()
    }
}
