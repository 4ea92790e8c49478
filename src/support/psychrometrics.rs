//! Psychrometric properties of moist air.
//!
//! These are the property functions the sizing engine evaluates at every
//! node of the Merkel integral. Temperatures are in °C, pressures in kPa,
//! humidity ratios in kg of vapour per kg of dry air, and enthalpies in kJ
//! per kg of dry air.
//!
//! All functions are pure. Physical constants are passed explicitly through
//! [`Constants`] rather than read from globals.
//!
//! # Example
//!
//! ```
//! use tower_sizing::support::psychrometrics::{Constants, saturated_air_enthalpy};
//!
//! let constants = Constants::default();
//! let h = saturated_air_enthalpy(27.0, 101.325, &constants).unwrap();
//! assert!(h > 80.0 && h < 90.0);
//! ```

mod constants;
mod error;
mod moist_air;
mod saturation;

pub use constants::Constants;
pub use error::PsychrometricError;
pub use moist_air::{humidity_ratio, moist_air_enthalpy, saturated_air_enthalpy};
pub use saturation::{
    MAX_TEMPERATURE_C, MIN_TEMPERATURE_C, saturated_vapor_pressure, saturation_factor,
};
