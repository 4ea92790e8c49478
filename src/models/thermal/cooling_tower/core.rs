//! Thermal sizing core for counterflow and crossflow cooling towers.
//!
//! A tower is sized by equating two transfer coefficients (KaV/L):
//!
//! - the coefficient the duty *requires*, from the CTI four-point Merkel
//!   integral over the cooling range ([`merkel`]), and
//! - the coefficient the fill *delivers* at a given liquid-to-gas ratio, from
//!   a power-law fill correlation ([`fill`]).
//!
//! The [`driver`] moves a single trial quantity until the two agree. What the
//! trial means is decided by a [`search`] model: the hot water temperature
//! when solving for cold water temperature, or the liquid-to-gas ratio when
//! solving for capacity or flow rate.
//!
//! Everything here is pure and synchronous. Each solve owns its state and
//! may run on any thread alongside others.

mod conditions;
mod config;
mod curves;
pub mod driver;
mod error;
mod fill;
mod flow;
mod merkel;
mod outcome;
mod rating;
pub mod search;
mod sizing;

#[cfg(test)]
mod test_support;

pub use conditions::DesignConditions;
pub use config::EngineConfig;
pub use curves::{Curve, CurvePoint, PerformanceCurves, operating_liquid_gas_ratio};
pub use error::SizingError;
pub use fill::{FillCorrelation, FillSet, FormulaKind, ParseFormulaKindError};
pub use flow::{FlowConfiguration, ParseFlowConfigurationError};
pub use merkel::{
    CROSSFLOW_CORRECTION_COEFFICIENT, CROSSFLOW_CORRECTION_EXPONENT, Scaling,
    required_coefficient,
};
pub use outcome::{Infeasible, Outcome};
pub use rating::{RatingConstants, RatingTable};
pub use sizing::{cold_water_temperature, cooling_capacity, flow_rate, liquid_gas_ratio};
