//! Trial models for the [`driver`](super::driver).
//!
//! Both models map a trial to the same two coefficients; they differ in what
//! the trial stands for and which way it must move when the duty demands
//! more than the fill delivers.

use twine_core::Model;

use crate::support::psychrometrics::PsychrometricError;

use super::{
    DesignConditions, EngineConfig, FillCorrelation, FlowConfiguration, Scaling,
    driver::{Coefficients, Direction, Start},
    required_coefficient,
};

/// Model adapter over the hot water temperature at a fixed range and L/G.
///
/// The wet bulb stays fixed, so moving the hot water temperature moves the
/// cold water temperature with it and changes the approach. Raising the
/// water temperature widens the enthalpy driving force and lowers the
/// required coefficient, so excess demand moves the trial up.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureModel<'a> {
    conditions: DesignConditions,
    liquid_gas_ratio: f64,
    flow_config: FlowConfiguration,
    fill: &'a FillCorrelation,
    config: &'a EngineConfig,
}

impl<'a> TemperatureModel<'a> {
    #[must_use]
    pub fn new(
        conditions: DesignConditions,
        liquid_gas_ratio: f64,
        flow_config: FlowConfiguration,
        fill: &'a FillCorrelation,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            conditions,
            liquid_gas_ratio,
            flow_config,
            fill,
            config,
        }
    }

    /// Starts from the design hot water temperature and raises on excess.
    #[must_use]
    pub fn start(&self) -> Start {
        Start {
            trial: self.conditions.hot_water_c,
            excess: Direction::Raise,
        }
    }

    /// Cold water temperature for a given hot water trial.
    #[must_use]
    pub fn cold_water(&self, trial: f64) -> f64 {
        trial - self.conditions.range()
    }
}

impl Model for TemperatureModel<'_> {
    type Input = f64;
    type Output = Coefficients;
    type Error = PsychrometricError;

    fn call(&self, hot_water_c: &f64) -> Result<Self::Output, Self::Error> {
        let required = required_coefficient(
            &self.conditions.shifted_to(*hot_water_c),
            self.liquid_gas_ratio,
            self.flow_config,
            Scaling::Full,
            self.config,
        )?;
        Ok(Coefficients {
            required,
            delivered: self.fill.delivered_coefficient(self.liquid_gas_ratio),
        })
    }
}

/// Model adapter over the liquid-to-gas ratio at fixed water and air
/// temperatures.
///
/// More water per unit air narrows the driving force and raises the
/// required coefficient, so excess demand moves the trial down.
#[derive(Debug, Clone, Copy)]
pub struct LiquidGasModel<'a> {
    conditions: DesignConditions,
    initial_ratio: f64,
    flow_config: FlowConfiguration,
    scaling: Scaling,
    fill: &'a FillCorrelation,
    config: &'a EngineConfig,
}

impl<'a> LiquidGasModel<'a> {
    /// Capacity and flow rate selection use [`Scaling::Simplified`].
    #[must_use]
    pub fn new(
        conditions: DesignConditions,
        initial_ratio: f64,
        flow_config: FlowConfiguration,
        scaling: Scaling,
        fill: &'a FillCorrelation,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            conditions,
            initial_ratio,
            flow_config,
            scaling,
            fill,
            config,
        }
    }

    /// Starts from `initial_ratio`, normally the design L/G, and lowers on
    /// excess.
    #[must_use]
    pub fn start(&self) -> Start {
        Start {
            trial: self.initial_ratio,
            excess: Direction::Lower,
        }
    }
}

impl Model for LiquidGasModel<'_> {
    type Input = f64;
    type Output = Coefficients;
    type Error = PsychrometricError;

    fn call(&self, n: &f64) -> Result<Self::Output, Self::Error> {
        let required = required_coefficient(
            &self.conditions,
            *n,
            self.flow_config,
            self.scaling,
            self.config,
        )?;
        Ok(Coefficients {
            required,
            delivered: self.fill.delivered_coefficient(*n),
        })
    }
}
