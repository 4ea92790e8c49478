//! Sizing operations built on the driver.

use twine_core::Observer;

use crate::support::constraint::StrictlyPositive;

use super::{
    DesignConditions, EngineConfig, FillCorrelation, FlowConfiguration, Infeasible, Outcome,
    RatingConstants, Scaling, SizingError,
    driver::{Action, Event, Solution, Status, drive},
    search::{LiquidGasModel, TemperatureModel},
};

fn positive(value: f64, name: &'static str) -> Result<f64, SizingError> {
    StrictlyPositive::new(value)
        .map(|v| v.into_inner())
        .map_err(SizingError::invalid(name))
}

fn into_outcome(solution: Solution) -> Outcome<f64> {
    match solution.status {
        Status::Converged => Outcome::Solved(solution.trial),
        Status::Degenerate => Outcome::Infeasible(Infeasible::Degenerate),
        Status::MaxIters => Outcome::Infeasible(Infeasible::NotConverged {
            iters: solution.iters,
            residual: solution.residual,
        }),
        Status::StoppedByObserver => Outcome::Infeasible(Infeasible::Stopped {
            iters: solution.iters,
            residual: solution.residual,
        }),
    }
}

/// Cold water temperature (°C) the fill achieves at `liquid_gas_ratio`.
///
/// The search starts from the hot water temperature in `conditions` and
/// keeps the range fixed; the cold water temperature in `conditions` only
/// sets the range.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if `liquid_gas_ratio` is not
/// strictly positive, or [`SizingError::Property`] on a psychrometric domain
/// error.
pub fn cold_water_temperature(
    conditions: &DesignConditions,
    liquid_gas_ratio: f64,
    flow_config: FlowConfiguration,
    fill: &FillCorrelation,
    config: &EngineConfig,
    observer: impl Observer<Event, Action>,
) -> Result<Outcome<f64>, SizingError> {
    let n = positive(liquid_gas_ratio, "liquid-to-gas ratio")?;
    if !conditions.is_ordered() {
        return Ok(Outcome::Infeasible(Infeasible::InvalidOrdering));
    }

    let model = TemperatureModel::new(*conditions, n, flow_config, fill, config);
    let solution = drive(&model, model.start(), &config.temperature, observer)?;
    Ok(into_outcome(solution).map(|hot| model.cold_water(hot)))
}

/// Liquid-to-gas ratio at which the fill delivers the coefficient the duty
/// requires.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if `initial_ratio` is not strictly
/// positive, or [`SizingError::Property`] on a psychrometric domain error.
pub fn liquid_gas_ratio(
    conditions: &DesignConditions,
    flow_config: FlowConfiguration,
    scaling: Scaling,
    fill: &FillCorrelation,
    initial_ratio: f64,
    config: &EngineConfig,
    observer: impl Observer<Event, Action>,
) -> Result<Outcome<f64>, SizingError> {
    let initial_ratio = positive(initial_ratio, "initial liquid-to-gas ratio")?;
    if !conditions.is_ordered() {
        return Ok(Outcome::Infeasible(Infeasible::InvalidOrdering));
    }

    let model =
        LiquidGasModel::new(*conditions, initial_ratio, flow_config, scaling, fill, config);
    let solution = drive(&model, model.start(), &config.liquid_gas, observer)?;
    Ok(into_outcome(solution))
}

/// Cooling capacity (RT) of a tower circulating `flow_rate_m3h`.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if the flow rate or the design L/G
/// is not strictly positive, or [`SizingError::Property`] on a psychrometric
/// domain error.
pub fn cooling_capacity(
    conditions: &DesignConditions,
    flow_rate_m3h: f64,
    flow_config: FlowConfiguration,
    fill: &FillCorrelation,
    rating: &RatingConstants,
    config: &EngineConfig,
    observer: impl Observer<Event, Action>,
) -> Result<Outcome<f64>, SizingError> {
    let flow = positive(flow_rate_m3h, "flow rate")?;
    let n = liquid_gas_ratio(
        conditions,
        flow_config,
        Scaling::Simplified,
        fill,
        rating.design_liquid_gas_ratio,
        config,
        observer,
    )?;
    Ok(n.map(|n| rating.capacity_rt(flow, n)))
}

/// Circulating flow (m³/h) a tower needs to deliver `capacity_rt`.
///
/// # Errors
///
/// Returns [`SizingError::InvalidInput`] if the capacity or the design L/G
/// is not strictly positive, or [`SizingError::Property`] on a psychrometric
/// domain error.
pub fn flow_rate(
    conditions: &DesignConditions,
    capacity_rt: f64,
    flow_config: FlowConfiguration,
    fill: &FillCorrelation,
    rating: &RatingConstants,
    config: &EngineConfig,
    observer: impl Observer<Event, Action>,
) -> Result<Outcome<f64>, SizingError> {
    let capacity = positive(capacity_rt, "capacity")?;
    let n = liquid_gas_ratio(
        conditions,
        flow_config,
        Scaling::Simplified,
        fill,
        rating.design_liquid_gas_ratio,
        config,
        observer,
    )?;
    Ok(n.map(|n| rating.flow_rate_m3h(capacity, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::thermal::cooling_tower::core::{
            FormulaKind,
            test_support::{COUNTER_FILL, CROSS_FILL, DESIGN, DESIGN_N, MATCHED_FILL},
        },
        support::{constraint::ConstraintError, psychrometrics::PsychrometricError},
    };

    fn capacity(conditions: &DesignConditions, config: FlowConfiguration) -> Outcome<f64> {
        let fill = match config {
            FlowConfiguration::Counterflow => &COUNTER_FILL,
            FlowConfiguration::Crossflow => &CROSS_FILL,
        };
        cooling_capacity(
            conditions,
            78.0,
            config,
            fill,
            &RatingConstants::default(),
            &EngineConfig::default(),
            (),
        )
        .unwrap()
    }

    #[test]
    fn counterflow_capacity() {
        let rt = capacity(&DESIGN, FlowConfiguration::Counterflow).solved().unwrap();
        assert_relative_eq!(rt, 98.93, epsilon = 0.05);
    }

    #[test]
    fn crossflow_capacity() {
        let rt = capacity(&DESIGN, FlowConfiguration::Crossflow).solved().unwrap();
        assert_relative_eq!(rt, 87.77, epsilon = 0.05);
    }

    #[test]
    fn capacity_continuous_in_wet_bulb() {
        let at = |wb: f64| {
            capacity(&DESIGN.with_wet_bulb(wb), FlowConfiguration::Counterflow)
                .solved()
                .unwrap()
        };

        let base = at(27.0);
        for delta in [-0.1, -0.05, 0.05, 0.1] {
            let perturbed = at(27.0 + delta);
            // Roughly 19 RT per °C of wet bulb at this point.
            assert!((perturbed - base).abs() < 25.0 * delta.abs());
        }
        // A higher wet bulb balances at a lower L/G, which rates higher.
        assert!(at(26.9) < base && base < at(27.1));
    }

    #[test]
    fn flow_rate_inverts_capacity() {
        let rating = RatingConstants::default();
        let config = EngineConfig::default();
        let rt = capacity(&DESIGN, FlowConfiguration::Counterflow).solved().unwrap();

        let flow = flow_rate(
            &DESIGN,
            rt,
            FlowConfiguration::Counterflow,
            &COUNTER_FILL,
            &rating,
            &config,
            (),
        )
        .unwrap()
        .solved()
        .unwrap();

        assert_relative_eq!(flow, 78.0, max_relative = 1e-12);
    }

    #[test]
    fn cold_water_at_matched_design() {
        let cold = cold_water_temperature(
            &DESIGN,
            DESIGN_N,
            FlowConfiguration::Counterflow,
            &MATCHED_FILL,
            &EngineConfig::default(),
            (),
        )
        .unwrap()
        .solved()
        .unwrap();

        assert_relative_eq!(cold, 32.0, epsilon = 1e-3);
    }

    #[test]
    fn better_fill_gives_colder_water() {
        let solve = |a: f64| {
            cold_water_temperature(
                &DESIGN,
                DESIGN_N,
                FlowConfiguration::Counterflow,
                &FillCorrelation::new(a, -0.6, FormulaKind::Double),
                &EngineConfig::default(),
                (),
            )
            .unwrap()
            .solved()
            .unwrap()
        };

        assert_relative_eq!(solve(1.2), 32.526, epsilon = 1e-3);
        assert_relative_eq!(solve(1.5), 31.764, epsilon = 1e-3);
    }

    #[test]
    fn crossflow_cold_water() {
        // Delivers 1.30 at design L/G against 1.23 required at design.
        let cold = cold_water_temperature(
            &DESIGN,
            DESIGN_N,
            FlowConfiguration::Crossflow,
            &FillCorrelation::new(-0.1, 0.3, FormulaKind::Single),
            &EngineConfig::default(),
            (),
        )
        .unwrap()
        .solved()
        .unwrap();

        assert_relative_eq!(cold, 31.854, epsilon = 1e-3);
    }

    #[test]
    fn observer_can_stop_a_selection() {
        let outcome = cold_water_temperature(
            &DESIGN,
            DESIGN_N,
            FlowConfiguration::Counterflow,
            &COUNTER_FILL,
            &EngineConfig::default(),
            |event: &Event| (event.iter == 5).then_some(Action::StopEarly),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            Outcome::Infeasible(Infeasible::Stopped { iters: 5, .. })
        ));
    }

    #[test]
    fn undersized_fill_exhausts_temperature_cap() {
        let outcome = cold_water_temperature(
            &DESIGN,
            DESIGN_N,
            FlowConfiguration::Counterflow,
            &COUNTER_FILL,
            &EngineConfig::default(),
            (),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            Outcome::Infeasible(Infeasible::NotConverged { iters: 100, .. })
        ));
        assert_eq!(outcome.value_or_zero(), 0.0);
    }

    #[test]
    fn round_trip_through_liquid_gas_ratio() {
        let config = EngineConfig::default();

        let n = liquid_gas_ratio(
            &DESIGN,
            FlowConfiguration::Counterflow,
            Scaling::Full,
            &MATCHED_FILL,
            DESIGN_N,
            &config,
            (),
        )
        .unwrap()
        .solved()
        .unwrap();

        let cold = cold_water_temperature(
            &DESIGN,
            n,
            FlowConfiguration::Counterflow,
            &MATCHED_FILL,
            &config,
            (),
        )
        .unwrap()
        .solved()
        .unwrap();

        assert_relative_eq!(cold, DESIGN.cold_water_c, epsilon = 1e-3);
    }

    #[test]
    fn ordering_violations_are_infeasible() {
        let config = EngineConfig::default();
        let rating = RatingConstants::default();

        for conditions in [
            DesignConditions::new(32.0, 37.0, 27.0),
            DesignConditions::new(37.0, 32.0, 33.0),
            DesignConditions::new(37.0, 37.0, 27.0),
        ] {
            let mut iterations = 0;
            let outcome = cooling_capacity(
                &conditions,
                78.0,
                FlowConfiguration::Counterflow,
                &COUNTER_FILL,
                &rating,
                &config,
                |_: &Event| -> Option<Action> {
                    iterations += 1;
                    None
                },
            )
            .unwrap();
            assert_eq!(outcome, Outcome::Infeasible(Infeasible::InvalidOrdering));
            assert_eq!(iterations, 0);

            let outcome = cold_water_temperature(
                &conditions,
                DESIGN_N,
                FlowConfiguration::Crossflow,
                &CROSS_FILL,
                &config,
                (),
            )
            .unwrap();
            assert_eq!(outcome.value_or_zero(), 0.0);
        }
    }

    #[test]
    fn zero_fill_is_degenerate() {
        let outcome = cooling_capacity(
            &DESIGN,
            78.0,
            FlowConfiguration::Counterflow,
            &FillCorrelation::new(0.0, -0.6, FormulaKind::Double),
            &RatingConstants::default(),
            &EngineConfig::default(),
            (),
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Infeasible(Infeasible::Degenerate));
    }

    #[test]
    fn terminates_across_envelope() {
        let config = EngineConfig::default();
        let rating = RatingConstants::default();

        for wet_bulb in [20.0, 24.0, 27.0, 29.0] {
            for range in [3.0, 5.0, 8.0] {
                let cold = wet_bulb + 2.5;
                let conditions = DesignConditions::new(cold + range, cold, wet_bulb);
                let mut iterations = 0;
                cooling_capacity(
                    &conditions,
                    78.0,
                    FlowConfiguration::Counterflow,
                    &COUNTER_FILL,
                    &rating,
                    &config,
                    |_: &Event| -> Option<Action> {
                        iterations += 1;
                        None
                    },
                )
                .unwrap();
                assert!(iterations <= config.liquid_gas.max_iters);
            }
        }
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let err = cooling_capacity(
            &DESIGN,
            0.0,
            FlowConfiguration::Counterflow,
            &COUNTER_FILL,
            &RatingConstants::default(),
            &EngineConfig::default(),
            (),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SizingError::InvalidInput {
                name: "flow rate",
                source: ConstraintError::Zero,
            }
        );

        let err = cold_water_temperature(
            &DESIGN,
            -1.0,
            FlowConfiguration::Counterflow,
            &COUNTER_FILL,
            &EngineConfig::default(),
            (),
        )
        .unwrap_err();
        assert!(matches!(err, SizingError::InvalidInput { .. }));
    }

    #[test]
    fn domain_errors_propagate() {
        let conditions = DesignConditions::new(37.0, 32.0, -150.0);
        let err = cold_water_temperature(
            &conditions,
            DESIGN_N,
            FlowConfiguration::Counterflow,
            &MATCHED_FILL,
            &EngineConfig::default(),
            (),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SizingError::Property(PsychrometricError::TemperatureOutOfRange { .. })
        ));
    }
}
