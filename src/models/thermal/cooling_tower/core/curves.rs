//! Performance curves: cold water temperature against wet bulb, one curve
//! per circulating flow percentage.
//!
//! Every cell is an independent solve. A cell outside the operating
//! envelope stays in the grid as [`Outcome::Infeasible`] so a chart can
//! leave a gap; only domain errors abort the grid.

use crate::support::constraint::StrictlyPositive;

use super::{
    DesignConditions, EngineConfig, FillCorrelation, FlowConfiguration, Outcome, SizingError,
    cold_water_temperature,
};

/// Liquid-to-gas ratio when circulating `flow_percent` of design flow at
/// design air flow.
#[must_use]
pub fn operating_liquid_gas_ratio(design_ratio: f64, flow_percent: f64) -> f64 {
    design_ratio * flow_percent / 100.0
}

/// One solved cell of a performance curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub wet_bulb_c: f64,
    pub cold_water: Outcome<f64>,
}

/// Cold water temperatures across wet bulbs at one flow percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub flow_percent: f64,
    pub liquid_gas_ratio: f64,
    pub points: Vec<CurvePoint>,
}

/// A family of performance curves for one tower.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceCurves {
    pub flow_config: FlowConfiguration,
    pub design: DesignConditions,
    pub curves: Vec<Curve>,
}

impl PerformanceCurves {
    /// Solves the cold water temperature at every wet bulb for every flow
    /// percentage, holding the design hot water temperature and range.
    ///
    /// # Errors
    ///
    /// Returns [`SizingError::InvalidInput`] if the design ratio or a flow
    /// percentage is not strictly positive, or [`SizingError::Property`] on
    /// a psychrometric domain error.
    pub fn compute(
        design: &DesignConditions,
        design_ratio: f64,
        wet_bulbs: &[f64],
        flow_percents: &[f64],
        flow_config: FlowConfiguration,
        fill: &FillCorrelation,
        config: &EngineConfig,
    ) -> Result<Self, SizingError> {
        let design_ratio = StrictlyPositive::new(design_ratio)
            .map_err(SizingError::invalid("design liquid-to-gas ratio"))?
            .into_inner();

        let curves = flow_percents
            .iter()
            .map(|&flow_percent| {
                let flow_percent = StrictlyPositive::new(flow_percent)
                    .map_err(SizingError::invalid("flow percentage"))?
                    .into_inner();
                let n = operating_liquid_gas_ratio(design_ratio, flow_percent);

                let points = wet_bulbs
                    .iter()
                    .map(|&wet_bulb_c| {
                        let cold_water = cold_water_temperature(
                            &design.with_wet_bulb(wet_bulb_c),
                            n,
                            flow_config,
                            fill,
                            config,
                            (),
                        )?;
                        Ok(CurvePoint {
                            wet_bulb_c,
                            cold_water,
                        })
                    })
                    .collect::<Result<_, SizingError>>()?;

                Ok(Curve {
                    flow_percent,
                    liquid_gas_ratio: n,
                    points,
                })
            })
            .collect::<Result<_, SizingError>>()?;

        Ok(Self {
            flow_config,
            design: *design,
            curves,
        })
    }

    /// Returns the curve for `flow_percent`, if computed.
    #[must_use]
    pub fn curve(&self, flow_percent: f64) -> Option<&Curve> {
        self.curves.iter().find(|c| c.flow_percent == flow_percent)
    }
}
