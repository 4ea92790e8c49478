//! Extensions to [`uom`].
//!
//! Public model inputs use [`uom`] quantities. The sizing core works in the
//! legacy engineering units (°C, kPa, m³/h) and converts at the adapter
//! boundary.
//!
//! ## Temperature differences
//!
//! Range and approach are differences of two absolute temperatures. The
//! [`TemperatureDifference`] trait returns them as a [`TemperatureInterval`]:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use tower_sizing::support::units::TemperatureDifference;
//!
//! let hot = ThermodynamicTemperature::new::<degree_celsius>(37.0);
//! let cold = ThermodynamicTemperature::new::<degree_celsius>(32.0);
//! let range = hot.minus(cold);
//! assert!((range.get::<delta_kelvin>() - 5.0).abs() < 1e-12);
//! ```
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
