//! Fork-join evaluation of the O(M²) pair sum.
//!
//! Workers each compute the row partial sums for a share of the outer index
//! without touching shared state. Once every worker has finished, the partial
//! sums are merged in index order on the calling thread. No lock is taken and
//! the total is bit-identical to [`EnergyModel::total_sequential()`] for any
//! number of threads.

use crate::{EnergyModel, MaskError, Result, ValueGrid};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Strategy used to evaluate the total energy of a grid.
#[derive(Debug, Clone)]
pub enum Reducer {
    /// Everything on the calling thread.
    Sequential,
    /// Rows fanned out over `rayon`; `None` uses the global pool.
    #[cfg(feature = "rayon")]
    Parallel(Option<Arc<rayon::ThreadPool>>),
}

impl Default for Reducer {
    /// The global `rayon` pool, or the calling thread without `rayon`.
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            Self::Parallel(None)
        }
        #[cfg(not(feature = "rayon"))]
        {
            Self::Sequential
        }
    }
}

impl Reducer {
    /// Picks a reducer for `threads` workers.
    ///
    /// `None` uses the global `rayon` pool (or runs sequentially without the
    /// `rayon` feature), `Some(1)` runs on the calling thread and anything
    /// larger builds a dedicated pool.
    pub fn with_threads(threads: Option<usize>) -> Result<Self> {
        match threads {
            Some(0) => Err(MaskError::InvalidArgument(
                "thread count must be positive",
            )),
            Some(1) => Ok(Self::Sequential),
            #[cfg(feature = "rayon")]
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .thread_name(|i| format!("bluenoise-energy-{i}"))
                .build()
                .map(|pool| Self::Parallel(Some(Arc::new(pool))))
                .map_err(MaskError::from),
            #[cfg(not(feature = "rayon"))]
            Some(_) => Ok(Self::Sequential),
            None => Ok(Self::default()),
        }
    }

    /// Number of workers an evaluation fans out to.
    pub fn threads(&self) -> usize {
        match self {
            Self::Sequential => 1,
            #[cfg(feature = "rayon")]
            Self::Parallel(Some(pool)) => pool.current_num_threads(),
            #[cfg(feature = "rayon")]
            Self::Parallel(None) => rayon::current_num_threads(),
        }
    }

    /// Total energy of `grid` under `model`. Blocks until every worker is
    /// done.
    pub fn total(&self, model: &EnergyModel, grid: &ValueGrid) -> f64 {
        match self {
            Self::Sequential => model.total_sequential(grid),
            #[cfg(feature = "rayon")]
            Self::Parallel(Some(pool)) => {
                pool.install(|| parallel_total(model, grid))
            }
            #[cfg(feature = "rayon")]
            Self::Parallel(None) => parallel_total(model, grid),
        }
    }
}

#[cfg(feature = "rayon")]
fn parallel_total(model: &EnergyModel, grid: &ValueGrid) -> f64 {
    // Row `i` costs O(i); small minimum lengths keep the long tail balanced.
    let rows: Vec<f64> = (0..grid.len())
        .into_par_iter()
        .with_min_len(16)
        .map(|i| model.row(grid, i))
        .collect();

    rows.iter().sum()
}
