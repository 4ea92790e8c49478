use super::PsychrometricError;

/// Lowest temperature accepted by [`saturated_vapor_pressure`], in °C.
pub const MIN_TEMPERATURE_C: f64 = -100.0;

/// Highest temperature accepted by [`saturated_vapor_pressure`], in °C.
pub const MAX_TEMPERATURE_C: f64 = 200.0;

const ABSOLUTE_ZERO_C: f64 = 273.15;

/// Hyland–Wexler coefficients over ice, valid on [-100, 0) °C.
const ICE: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024e-13,
    4.163_501_9,
];

/// Hyland–Wexler coefficients over liquid water, valid on [0, 200] °C.
const LIQUID: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_3,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];

/// Enhancement factor coefficients, `FACTOR[i][j]` multiplying `t^i · p^j`
/// with `t` in °F and `p` in psi.
const FACTOR: [[f64; 3]; 4] = [
    [1.000_72, 2.334_889_19e-4, 0.0],
    [0.0, -8.035_374_59e-7, 0.0],
    [0.0, 1.255_527_28e-8, 0.0],
    [0.0, 0.0, 0.0],
];

/// Returns the saturation pressure of water vapour in kPa.
///
/// Uses the ASHRAE correlation over ice below 0 °C and over liquid water from
/// 0 °C upward.
///
/// # Errors
///
/// Returns [`PsychrometricError::TemperatureOutOfRange`] outside
/// [-100, 200] °C (including `NaN`). The correlation is never extrapolated.
pub fn saturated_vapor_pressure(temp_c: f64) -> Result<f64, PsychrometricError> {
    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&temp_c) {
        return Err(PsychrometricError::TemperatureOutOfRange {
            temperature_c: temp_c,
            min_c: MIN_TEMPERATURE_C,
            max_c: MAX_TEMPERATURE_C,
        });
    }

    let t = temp_c + ABSOLUTE_ZERO_C;
    let ln_pws = if temp_c < 0.0 {
        let [c1, c2, c3, c4, c5, c6, c7] = ICE;
        c1 / t + c2 + t * (c3 + t * (c4 + t * (c5 + t * c6))) + c7 * t.ln()
    } else {
        let [c8, c9, c10, c11, c12, c13] = LIQUID;
        c8 / t + c9 + t * (c10 + t * (c11 + t * c12)) + c13 * t.ln()
    };

    // Correlation yields Pa.
    Ok(ln_pws.exp() / 1000.0)
}

/// Returns the enhancement factor applied to the saturation pressure of
/// vapour in moist air.
///
/// The polynomial is fitted in °F and psi; convert before calling.
#[must_use]
pub fn saturation_factor(temp_f: f64, pressure_psi: f64) -> f64 {
    FACTOR.iter().rev().fold(0.0, |acc, row| {
        let in_pressure = row.iter().rev().fold(0.0, |inner, c| inner * pressure_psi + c);
        acc * temp_f + in_pressure
    })
}
