//! SA configuration and cooling schedules.

use crate::error::{Result, SantaError};

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingSchedule {
    /// Geometric cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Linear cooling from `T_0` to `T_min` over
    /// `max_iterations / iterations_per_temperature` steps.
    Linear,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99 }
    }
}

/// Configuration for a Simulated Annealing run.
///
/// The defaults give each tour search a fixed budget of 100 temperature
/// steps of 1000 moves each, cooling by 1% per step.
///
/// # Examples
///
/// ```
/// use secret_santa_pp::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 })
///     .with_iterations_per_temperature(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The run stops once the temperature drops to this value.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    /// Moves evaluated at each temperature level.
    pub iterations_per_temperature: usize,

    /// Hard budget on total moves. 0 = no limit.
    pub max_iterations: usize,

    /// Seed for the generator owned by whoever drives the runner.
    /// `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 1000,
            max_iterations: 100_000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SantaError::InvalidConfig(msg));

        if !(self.initial_temperature > 0.0) {
            return invalid("initial_temperature must be positive".into());
        }
        if !(self.min_temperature > 0.0) {
            return invalid("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if self.iterations_per_temperature == 0 {
            return invalid("iterations_per_temperature must be at least 1".into());
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if !(alpha > 0.0 && alpha < 1.0) {
                return invalid(format!("geometric alpha must be in (0, 1), got {alpha}"));
            }
        }
        Ok(())
    }

    /// Number of temperature steps for linear cooling.
    pub(crate) fn linear_steps(&self) -> usize {
        if self.max_iterations > 0 {
            (self.max_iterations / self.iterations_per_temperature).max(1)
        } else {
            1000
        }
    }
}
