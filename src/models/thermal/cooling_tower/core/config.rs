use crate::support::psychrometrics::Constants;

use super::driver::DriverConfig;

/// Standard atmospheric pressure, kPa.
pub const STANDARD_PRESSURE_KPA: f64 = 101.325;

/// Engine-wide settings shared by every solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Psychrometric constants.
    pub constants: Constants,

    /// Barometric pressure at the site, kPa.
    pub pressure_kpa: f64,

    /// Driver settings for the cold water temperature search.
    pub temperature: DriverConfig,

    /// Driver settings for the liquid-to-gas ratio search used by capacity
    /// and flow rate selection.
    pub liquid_gas: DriverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            constants: Constants::default(),
            pressure_kpa: STANDARD_PRESSURE_KPA,
            temperature: DriverConfig::temperature(),
            liquid_gas: DriverConfig::liquid_gas(),
        }
    }
}

impl EngineConfig {
    /// Returns this configuration at a different site pressure.
    #[must_use]
    pub const fn with_pressure(self, pressure_kpa: f64) -> Self {
        Self {
            pressure_kpa,
            ..self
        }
    }
}
