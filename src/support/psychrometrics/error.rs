use thiserror::Error;

/// Domain errors raised by the psychrometric functions.
///
/// These indicate caller misuse and are never part of a normal solve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PsychrometricError {
    /// The temperature lies outside the saturation correlation's range.
    #[error("temperature {temperature_c} °C outside [{min_c}, {max_c}] °C")]
    TemperatureOutOfRange {
        temperature_c: f64,
        min_c: f64,
        max_c: f64,
    },

    /// The wet-bulb temperature is above the dry-bulb temperature.
    #[error("wet bulb {wet_bulb_c} °C exceeds dry bulb {dry_bulb_c} °C")]
    WetBulbAboveDryBulb { dry_bulb_c: f64, wet_bulb_c: f64 },
}
