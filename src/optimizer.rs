//! Greedy swap optimizer.
//!
//! Each [`BlueNoise::step()`] evaluates the current energy once and then runs
//! a fixed number of trials. A trial swaps two random cells, re-evaluates,
//! and keeps the swap only if the energy went strictly down; otherwise the
//! same swap is applied again to restore the grid. No uphill move is ever
//! accepted.

use crate::{
    EnergyModel, MaskConfig, RandomSource, Reducer, Result, ValueGrid,
    Xoshiro128StarStar,
};
use std::cell::Cell;
use tracing::{debug, info, trace};

/// A committed swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Improvement {
    /// Energy before the swap.
    pub before: f64,
    /// Energy after the swap; always `< before`.
    pub after: f64,
    pub a: usize,
    pub b: usize,
}

/// What happened during one [`BlueNoise::step()`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Energy at the start of the step.
    pub baseline: f64,
    /// Energy at the end of the step.
    pub energy: f64,
    /// Full energy evaluations performed, baseline included.
    pub evaluations: usize,
    /// Committed swaps, in order.
    pub improvements: Vec<Improvement>,
}

impl StepReport {
    /// Whether any swap was kept.
    pub fn improved(&self) -> bool {
        !self.improvements.is_empty()
    }
}

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Trial {
    /// Both draws hit the same cell.
    Skipped,
    /// The swap lowered the energy to the contained value and was kept.
    Committed(f64),
    /// The swap did not help and was undone.
    Reverted,
}

/// Blue-noise mask generator.
///
/// ## Examples
///
/// ```
/// use bluenoise_swap::{BlueNoise, MaskConfig};
///
/// let mut noise = BlueNoise::new(MaskConfig::default().with_seed(1))?;
/// noise.allocate(8)?;
///
/// let before = noise.energy();
/// let report = noise.step();
/// assert!(report.energy <= before);
///
/// let mut pixels = Vec::new();
/// noise.export_mono(&mut pixels);
/// assert_eq!(pixels.len(), 64);
/// # Ok::<(), bluenoise_swap::MaskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BlueNoise<R: RandomSource = Xoshiro128StarStar> {
    config: MaskConfig,
    model: EnergyModel,
    reducer: Reducer,
    grid: ValueGrid,
    rng: R,
    ticks: u64,
    evaluations: Cell<u64>,
}

impl BlueNoise<Xoshiro128StarStar> {
    /// Creates an unallocated optimizer driven by xoshiro128**.
    pub fn new(config: MaskConfig) -> Result<Self> {
        Self::with_rng(config)
    }

    /// Creates an optimizer and allocates a grid of `config.size`.
    pub fn generate(config: MaskConfig) -> Result<Self> {
        let mut noise = Self::new(config)?;
        noise.allocate(config.size)?;
        Ok(noise)
    }
}

impl<R: RandomSource> BlueNoise<R> {
    /// Creates an unallocated optimizer with a custom random source.
    pub fn with_rng(config: MaskConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            model: config.energy_model(),
            reducer: Reducer::with_threads(config.threads)?,
            grid: ValueGrid::default(),
            rng: R::from_seed_u64(config.seed),
            ticks: 0,
            evaluations: Cell::new(0),
            config,
        })
    }

    /// Replaces the grid with a freshly filled `size`×`size` one.
    ///
    /// The fill uses its own generator seeded with the configured seed, so
    /// the same seed and size always give the same starting grid. On error
    /// the previous grid is kept.
    pub fn allocate(&mut self, size: usize) -> Result<()> {
        let mut fill = R::from_seed_u64(self.config.seed);
        self.grid = ValueGrid::random(size, &mut fill)?;
        self.config.size = size;
        self.ticks = 0;
        self.evaluations.set(0);

        info!(size, seed = self.config.seed, "allocated blue-noise grid");
        Ok(())
    }

    /// Current total energy; `0.0` before allocation.
    pub fn energy(&self) -> f64 {
        if self.grid.is_empty() {
            return 0.0;
        }
        self.evaluations.set(self.evaluations.get() + 1);
        self.reducer.total(&self.model, &self.grid)
    }

    /// Runs one optimization tick.
    ///
    /// Performs at most `trials + 1` energy evaluations. Does nothing before
    /// [`allocate()`](Self::allocate).
    pub fn step(&mut self) -> StepReport {
        let len = self.grid.len();
        if len == 0 {
            return StepReport::default();
        }

        let baseline = self.energy();
        let mut report = StepReport {
            baseline,
            energy: baseline,
            evaluations: 1,
            improvements: Vec::new(),
        };

        for _ in 0..self.config.trials {
            let a = self.rng.below(len);
            let b = self.rng.below(len);

            match self.trial(a, b, report.energy) {
                Trial::Skipped => continue,
                Trial::Committed(after) => {
                    debug!(before = report.energy, after, a, b, "flipped");
                    report.improvements.push(Improvement {
                        before: report.energy,
                        after,
                        a,
                        b,
                    });
                    report.energy = after;
                }
                Trial::Reverted => {}
            }
            report.evaluations += 1;
        }

        self.ticks += 1;
        trace!(
            tick = self.ticks,
            baseline = report.baseline,
            energy = report.energy,
            committed = report.improvements.len(),
            "step finished"
        );
        report
    }

    /// Runs `ticks` steps and returns the report of the last one.
    pub fn run(&mut self, ticks: usize) -> StepReport {
        let mut last = StepReport::default();
        for _ in 0..ticks {
            last = self.step();
        }
        last
    }

    fn trial(&mut self, a: usize, b: usize, current: f64) -> Trial {
        if a == b {
            return Trial::Skipped;
        }

        self.grid.swap_cells(a, b);
        let proposed = self.energy();

        if proposed < current {
            Trial::Committed(proposed)
        } else {
            self.grid.swap_cells(a, b);
            Trial::Reverted
        }
    }

    pub fn grid(&self) -> &ValueGrid {
        &self.grid
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn model(&self) -> &EnergyModel {
        &self.model
    }

    /// Full energy evaluations since the last allocation, including calls
    /// to [`energy()`](Self::energy) made by the owner.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.get()
    }

    /// Completed steps since the last allocation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// See [`ValueGrid::export_mono()`].
    pub fn export_mono(&self, buffer: &mut Vec<u8>) {
        self.grid.export_mono(buffer);
    }

    /// See [`ValueGrid::export_rgba()`].
    pub fn export_rgba(&self, buffer: &mut Vec<[f32; 4]>) {
        self.grid.export_rgba(buffer);
    }

    /// See [`ValueGrid::save_png()`].
    #[cfg(feature = "image")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.grid.save_png(path)
    }
}
