use super::{Constants, PsychrometricError, saturated_vapor_pressure, saturation_factor};

const PSI_PER_KPA: f64 = 0.145_037_738;

fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 1.8 + 32.0
}

/// Returns the humidity ratio (kg/kg dry air) of moist air.
///
/// The saturated ratio at the wet bulb is corrected to the dry-bulb state
/// through the adiabatic saturation energy balance.
///
/// # Errors
///
/// Returns [`PsychrometricError::WetBulbAboveDryBulb`] if `wet_bulb_c` is
/// above `dry_bulb_c`, or a range error from [`saturated_vapor_pressure`].
pub fn humidity_ratio(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    pressure_kpa: f64,
    constants: &Constants,
) -> Result<f64, PsychrometricError> {
    if wet_bulb_c > dry_bulb_c {
        return Err(PsychrometricError::WetBulbAboveDryBulb {
            dry_bulb_c,
            wet_bulb_c,
        });
    }

    let pws = saturated_vapor_pressure(wet_bulb_c)?;
    let factor = saturation_factor(
        celsius_to_fahrenheit(wet_bulb_c),
        pressure_kpa * PSI_PER_KPA,
    );
    let partial = factor * pws;
    let saturated = constants.molecular_weight_ratio * partial / (pressure_kpa - partial);

    let Constants {
        cp_air,
        cp_vapor,
        cp_water,
        latent_heat,
        ..
    } = *constants;

    let numerator = (latent_heat - (cp_water - cp_vapor) * wet_bulb_c) * saturated
        - cp_air * (dry_bulb_c - wet_bulb_c);
    let denominator = latent_heat + cp_vapor * dry_bulb_c - cp_water * wet_bulb_c;

    Ok(numerator / denominator)
}

/// Returns the enthalpy of moist air in kJ per kg of dry air.
///
/// # Errors
///
/// Propagates any error from [`humidity_ratio`].
pub fn moist_air_enthalpy(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    pressure_kpa: f64,
    constants: &Constants,
) -> Result<f64, PsychrometricError> {
    let w = humidity_ratio(dry_bulb_c, wet_bulb_c, pressure_kpa, constants)?;
    let vapor = constants.latent_heat + constants.cp_vapor * dry_bulb_c;
    Ok(constants.cp_air * dry_bulb_c + w * vapor)
}

/// Returns the enthalpy of saturated air at `temp_c`.
///
/// # Errors
///
/// Returns a range error from [`saturated_vapor_pressure`].
pub fn saturated_air_enthalpy(
    temp_c: f64,
    pressure_kpa: f64,
    constants: &Constants,
) -> Result<f64, PsychrometricError> {
    moist_air_enthalpy(temp_c, temp_c, pressure_kpa, constants)
}
