//! Required transfer coefficient by the CTI four-point method.
//!
//! The Merkel integral `∫ cp dT / (h_w − h_a)` over the cooling range is
//! approximated with the Chebyshev nodes at 0.1, 0.4, 0.6 and 0.9 of the
//! range. Water-side enthalpy is saturated-air enthalpy at the water
//! temperature; air-side enthalpy rises from the wet-bulb enthalpy along the
//! operating line of slope `N`.

use crate::support::psychrometrics::{PsychrometricError, saturated_air_enthalpy};

use super::{DesignConditions, EngineConfig, FlowConfiguration};

/// Chebyshev node fractions of the cooling range, hot end first.
const NODES: [f64; 4] = [0.9, 0.6, 0.4, 0.1];

/// Coefficient of the crossflow efficiency factor `1 − k·(1 − SS)^e`.
///
/// Empirical fit with no published derivation; kept as found.
pub const CROSSFLOW_CORRECTION_COEFFICIENT: f64 = 0.106;

/// Exponent of the crossflow efficiency factor.
pub const CROSSFLOW_CORRECTION_EXPONENT: f64 = 3.5;

/// How the air-side enthalpy rise is scaled along the operating line.
///
/// The two variants give different numbers for the same inputs. They are
/// kept apart on purpose: temperature selection and capacity selection were
/// calibrated against different forms and existing reports depend on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Air enthalpy rise `N·Δt·cp_water`. Used by the temperature search.
    Full,

    /// Air enthalpy rise `N·Δt`, omitting `cp_water`. Used by the capacity
    /// and flow rate search.
    Simplified,
}

impl Scaling {
    fn factor(self, cp_water: f64) -> f64 {
        match self {
            Self::Full => cp_water,
            Self::Simplified => 1.0,
        }
    }
}

/// Returns the KaV/L required to cool water across `conditions` at
/// liquid-to-gas ratio `n`.
///
/// Returns `0.0` when the air-side enthalpy reaches the water-side enthalpy
/// at any node, or when the crossflow factor input `SS` is at least one. The
/// driver reads zero as "no solution at this trial" and moves on.
///
/// # Errors
///
/// Returns a [`PsychrometricError`] if a node temperature lies outside the
/// saturation correlation's range.
pub fn required_coefficient(
    conditions: &DesignConditions,
    n: f64,
    flow_config: FlowConfiguration,
    scaling: Scaling,
    config: &EngineConfig,
) -> Result<f64, PsychrometricError> {
    let EngineConfig {
        constants,
        pressure_kpa: p,
        ..
    } = config;
    let cp_water = constants.cp_water;
    let k = scaling.factor(cp_water);

    let range = conditions.range();
    let i_hot = saturated_air_enthalpy(conditions.hot_water_c, *p, constants)?;
    let i_cold = saturated_air_enthalpy(conditions.cold_water_c, *p, constants)?;
    let i_wet_bulb = saturated_air_enthalpy(conditions.wet_bulb_c, *p, constants)?;

    let mut sum = 0.0;
    for frac in NODES {
        let water_c = conditions.cold_water_c + frac * range;
        let i_water = saturated_air_enthalpy(water_c, *p, constants)?;
        let i_air = i_wet_bulb + n * frac * range * k;
        let driving_force = i_water - i_air;
        if driving_force <= 0.0 {
            return Ok(0.0);
        }
        sum += 1.0 / driving_force;
    }

    let counterflow = range * cp_water * sum / 4.0;

    match flow_config {
        FlowConfiguration::Counterflow => Ok(counterflow),
        FlowConfiguration::Crossflow => {
            let ss = (i_cold - (i_wet_bulb + n * range * k)) / (i_hot - i_wet_bulb);
            if ss >= 1.0 {
                return Ok(0.0);
            }
            let ff = 1.0
                - CROSSFLOW_CORRECTION_COEFFICIENT
                    * (1.0 - ss).powf(CROSSFLOW_CORRECTION_EXPONENT);
            Ok(counterflow / ff)
        }
    }
}
