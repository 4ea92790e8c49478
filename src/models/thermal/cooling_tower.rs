//! Cooling tower selection models.
//!
//! Three [`twine_core::Model`] adapters share one [`Tower`] description:
//!
//! - [`ColdWaterTemperature`]: cold water temperature at an operating L/G.
//! - [`CoolingCapacity`]: rated capacity for a circulating flow.
//! - [`CirculatingFlow`]: circulating flow for a rated capacity.
//!
//! Each returns an [`Outcome`]; [`Outcome::Infeasible`] means the inputs are
//! outside the tower's operating envelope. The computational core is in the
//! internal [`core`] module.
//!
//! # Example
//!
//! ```
//! use tower_sizing::models::thermal::cooling_tower::{
//!     CapacityInput, CoolingCapacity, DesignPoint, FillCorrelation, FillSet,
//!     FlowConfiguration, FormulaKind, Tower,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{ThermodynamicTemperature, VolumeRate},
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let fills = FillSet {
//!     counterflow: FillCorrelation::new(0.85, -0.6, FormulaKind::Double),
//!     crossflow: FillCorrelation::new(-0.1, 0.0, FormulaKind::Single),
//! };
//! let model = CoolingCapacity::new(Tower::new(FlowConfiguration::Counterflow, fills));
//!
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//! let capacity = model
//!     .call(&CapacityInput {
//!         design: DesignPoint::new(celsius(37.0), celsius(32.0), celsius(27.0)),
//!         flow_rate: VolumeRate::new::<cubic_meter_per_hour>(78.0),
//!     })
//!     .unwrap()
//!     .solved()
//!     .unwrap();
//!
//! assert!((capacity.rt() - 98.9).abs() < 0.1);
//! ```

pub(crate) mod core;

pub use self::core::{
    CROSSFLOW_CORRECTION_COEFFICIENT, CROSSFLOW_CORRECTION_EXPONENT, Curve, CurvePoint,
    DesignConditions, EngineConfig, FillCorrelation, FillSet, FlowConfiguration, FormulaKind,
    Infeasible, Outcome, ParseFlowConfigurationError, ParseFormulaKindError, PerformanceCurves,
    RatingConstants, RatingTable, Scaling, SizingError, cold_water_temperature, cooling_capacity,
    driver, flow_rate, liquid_gas_ratio, operating_liquid_gas_ratio, required_coefficient, search,
};

use twine_core::Model;
use uom::si::{
    f64::{Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature, VolumeRate},
    pressure::kilopascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::units::TemperatureDifference;

/// Cooling capacity in cooling tons (RT).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CoolingTons(f64);

impl CoolingTons {
    #[must_use]
    pub const fn new(rt: f64) -> Self {
        Self(rt)
    }

    #[must_use]
    pub const fn rt(self) -> f64 {
        self.0
    }
}

/// Water and air temperatures at the design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignPoint {
    pub hot_water: ThermodynamicTemperature,
    pub cold_water: ThermodynamicTemperature,
    pub wet_bulb: ThermodynamicTemperature,
}

impl DesignPoint {
    #[must_use]
    pub const fn new(
        hot_water: ThermodynamicTemperature,
        cold_water: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
    ) -> Self {
        Self {
            hot_water,
            cold_water,
            wet_bulb,
        }
    }

    /// Hot minus cold water temperature.
    #[must_use]
    pub fn range(&self) -> TemperatureInterval {
        self.hot_water.minus(self.cold_water)
    }

    /// Cold water minus wet-bulb temperature.
    #[must_use]
    pub fn approach(&self) -> TemperatureInterval {
        self.cold_water.minus(self.wet_bulb)
    }

    fn conditions(&self) -> DesignConditions {
        DesignConditions::new(
            self.hot_water.get::<degree_celsius>(),
            self.cold_water.get::<degree_celsius>(),
            self.wet_bulb.get::<degree_celsius>(),
        )
    }
}

/// A tower family: its flow configuration, fill data and rating constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tower {
    pub flow_config: FlowConfiguration,
    pub fills: FillSet,
    pub ratings: RatingTable,
    pub engine: EngineConfig,
}

impl Tower {
    /// Creates a tower with default rating constants at standard pressure.
    #[must_use]
    pub fn new(flow_config: FlowConfiguration, fills: FillSet) -> Self {
        Self {
            flow_config,
            fills,
            ratings: RatingTable::default(),
            engine: EngineConfig::default(),
        }
    }

    /// Returns this tower at a different site pressure.
    #[must_use]
    pub fn with_pressure(self, pressure: Pressure) -> Self {
        Self {
            engine: self.engine.with_pressure(pressure.get::<kilopascal>()),
            ..self
        }
    }

    fn fill(&self) -> &FillCorrelation {
        self.fills.get(self.flow_config)
    }

    fn rating(&self) -> &RatingConstants {
        self.ratings.get(self.flow_config)
    }
}

/// Input to [`ColdWaterTemperature`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColdWaterInput {
    /// Design point. The range and the starting hot water temperature come
    /// from here; the wet bulb is the operating one.
    pub design: DesignPoint,

    /// Operating liquid-to-gas ratio.
    pub liquid_gas_ratio: Ratio,
}

/// Cold water temperature a tower achieves at an operating L/G.
#[derive(Debug, Clone, Copy)]
pub struct ColdWaterTemperature {
    tower: Tower,
}

impl ColdWaterTemperature {
    #[must_use]
    pub const fn new(tower: Tower) -> Self {
        Self { tower }
    }
}

impl Model for ColdWaterTemperature {
    type Input = ColdWaterInput;
    type Output = Outcome<ThermodynamicTemperature>;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let outcome = cold_water_temperature(
            &input.design.conditions(),
            input.liquid_gas_ratio.get::<ratio>(),
            self.tower.flow_config,
            self.tower.fill(),
            &self.tower.engine,
            (),
        )?;
        Ok(outcome.map(ThermodynamicTemperature::new::<degree_celsius>))
    }
}

/// Input to [`CoolingCapacity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityInput {
    pub design: DesignPoint,
    pub flow_rate: VolumeRate,
}

/// Rated capacity of a tower for a circulating flow.
#[derive(Debug, Clone, Copy)]
pub struct CoolingCapacity {
    tower: Tower,
}

impl CoolingCapacity {
    #[must_use]
    pub const fn new(tower: Tower) -> Self {
        Self { tower }
    }
}

impl Model for CoolingCapacity {
    type Input = CapacityInput;
    type Output = Outcome<CoolingTons>;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let outcome = cooling_capacity(
            &input.design.conditions(),
            input.flow_rate.get::<cubic_meter_per_hour>(),
            self.tower.flow_config,
            self.tower.fill(),
            self.tower.rating(),
            &self.tower.engine,
            (),
        )?;
        Ok(outcome.map(CoolingTons::new))
    }
}

/// Input to [`CirculatingFlow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowInput {
    pub design: DesignPoint,
    pub capacity: CoolingTons,
}

/// Circulating flow a tower needs for a rated capacity.
#[derive(Debug, Clone, Copy)]
pub struct CirculatingFlow {
    tower: Tower,
}

impl CirculatingFlow {
    #[must_use]
    pub const fn new(tower: Tower) -> Self {
        Self { tower }
    }
}

impl Model for CirculatingFlow {
    type Input = FlowInput;
    type Output = Outcome<VolumeRate>;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let outcome = flow_rate(
            &input.design.conditions(),
            input.capacity.rt(),
            self.tower.flow_config,
            self.tower.fill(),
            self.tower.rating(),
            &self.tower.engine,
            (),
        )?;
        Ok(outcome.map(VolumeRate::new::<cubic_meter_per_hour>))
    }
}
