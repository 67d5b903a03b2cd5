use crate::{DEFAULT_SIGMA, EnergyModel, MaskError, Result, WrapMode};

/// Default grid edge length.
pub const DEFAULT_SIZE: usize = 64;
/// Swap trials per [`step()`](crate::BlueNoise::step).
pub const DEFAULT_TRIALS: usize = 16;

/// Knobs for a [`BlueNoise`](crate::BlueNoise) optimizer.
///
/// ## Examples
///
/// ```
/// use bluenoise_swap::MaskConfig;
///
/// let config = MaskConfig::default().with_size(32).with_trials(8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskConfig {
    /// Edge length N of the square grid.
    pub size: usize,
    /// Randomized swap trials per tick.
    pub trials: usize,
    /// Spatial falloff σ of the energy.
    pub sigma: f32,
    /// Seed for both the initial fill and the trial stream.
    pub seed: u64,
    /// Per-axis wrap folding.
    pub wrap: WrapMode,
    /// Worker threads for energy evaluation; `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            trials: DEFAULT_TRIALS,
            sigma: DEFAULT_SIGMA,
            seed: 0,
            wrap: WrapMode::default(),
            threads: None,
        }
    }
}

impl MaskConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// The energy model described by this configuration.
    pub fn energy_model(&self) -> EnergyModel {
        EnergyModel::new(self.sigma, self.wrap)
    }

    /// Checks everything that does not need an allocation to validate.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(MaskError::InvalidArgument(
                "grid size must be positive",
            ));
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(MaskError::InvalidArgument(
                "sigma must be finite and positive",
            ));
        }
        if self.threads == Some(0) {
            return Err(MaskError::InvalidArgument(
                "thread count must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MaskConfig::default();
        assert_eq!(config.size, 64);
        assert_eq!(config.trials, 16);
        assert_eq!(config.sigma, 2.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let base = MaskConfig::default();
        assert!(base.with_size(0).validate().is_err());
        assert!(base.with_sigma(0.0).validate().is_err());
        assert!(base.with_sigma(f32::NAN).validate().is_err());
        assert!(base.with_threads(Some(0)).validate().is_err());
    }

    #[test]
    fn zero_trials_is_allowed() {
        assert!(MaskConfig::default().with_trials(0).validate().is_ok());
    }
}
