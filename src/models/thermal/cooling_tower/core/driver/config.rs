/// Absolute tolerance on `|required - delivered|`.
pub const TOLERANCE: f64 = 0.000_004;

/// Iteration cap for the cold water temperature search.
pub const TEMPERATURE_MAX_ITERS: usize = 100;

/// Iteration cap for the liquid-to-gas ratio search.
pub const LIQUID_GAS_MAX_ITERS: usize = 50;

/// Driver configuration.
///
/// The presets carry the constants the tower ratings were produced with.
/// Changing them changes reported numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
    /// Maximum iteration count.
    pub max_iters: usize,

    /// Absolute tolerance on the coefficient residual.
    pub tolerance: f64,

    /// First step; halved after every move.
    pub initial_step: f64,
}

impl DriverConfig {
    /// Settings for the cold water temperature search.
    #[must_use]
    pub const fn temperature() -> Self {
        Self {
            max_iters: TEMPERATURE_MAX_ITERS,
            tolerance: TOLERANCE,
            initial_step: 1.0,
        }
    }

    /// Settings for the liquid-to-gas ratio search.
    #[must_use]
    pub const fn liquid_gas() -> Self {
        Self {
            max_iters: LIQUID_GAS_MAX_ITERS,
            tolerance: TOLERANCE,
            initial_step: 1.0,
        }
    }
}
