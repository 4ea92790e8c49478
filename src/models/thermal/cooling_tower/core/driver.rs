//! Step-halving search shared by every sizing operation.
//!
//! The driver is not a bracketing method. It starts from an initial trial,
//! moves a fixed step in the direction the residual points, and halves the
//! step after every move. The total excursion from the initial trial is
//! therefore bounded by twice the initial step. This mirrors the selection
//! program the tower ratings were produced with, and existing reports
//! depend on matching its numbers.
//!
//! What a trial means is up to the [`Model`] being driven. It maps a trial
//! to the pair of [`Coefficients`] that must agree, and [`CoefficientBalance`]
//! turns that pair into the residual.
//!
//! # Observer Events
//!
//! Every evaluated trial is reported as an [`Event`] carrying the driver's
//! [`Decision`]. Observers can return [`Action::StopEarly`] to end the drive
//! before a pending move.

mod config;
mod observer;

pub use config::{DriverConfig, LIQUID_GAS_MAX_ITERS, TEMPERATURE_MAX_ITERS, TOLERANCE};
pub use observer::{Action, Decision, Event};

use std::convert::Infallible;

use twine_core::{EquationProblem, Model, Observer};
use twine_solvers::equation::{EvalError, evaluate};

/// Transfer coefficients at one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// KaV/L the duty requires, or `0.0` if none exists.
    pub required: f64,

    /// KaV/L the fill delivers.
    pub delivered: f64,
}

/// Equation problem equating the required and delivered coefficients.
///
/// The single solver variable is the trial itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoefficientBalance;

impl EquationProblem<1> for CoefficientBalance {
    type Input = f64;
    type Output = Coefficients;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.required - output.delivered])
    }
}

/// Direction of a trial move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Raise,
    Lower,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Raise => Self::Lower,
            Self::Lower => Self::Raise,
        }
    }

    fn apply(self, trial: f64, step: f64) -> f64 {
        match self {
            Self::Raise => trial + step,
            Self::Lower => trial - step,
        }
    }
}

/// How a drive ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Required and delivered agree within the tolerance.
    Converged,

    /// The delivered coefficient was zero; the search was abandoned.
    Degenerate,

    /// The iteration cap was reached.
    MaxIters,

    /// An observer returned [`Action::StopEarly`].
    StoppedByObserver,
}

/// Final state of a drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub status: Status,

    /// Trial at exit. For [`Status::MaxIters`] this includes the last move.
    pub trial: f64,

    /// `required - delivered` at the last evaluation.
    pub residual: f64,

    /// Iterations counted. A degenerate first evaluation counts none.
    pub iters: usize,
}

/// Where a drive starts and which way excess demand pushes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Start {
    /// Value of the trial before the first iteration.
    pub trial: f64,

    /// Direction to move the trial when the required coefficient exceeds
    /// the delivered one, or when no required coefficient exists.
    pub excess: Direction,
}

/// Drives `model` until the required and delivered coefficients agree.
///
/// Each iteration:
///
/// 1. Evaluates the coefficients at the trial.
/// 2. Abandons the search if the delivered coefficient is zero.
/// 3. Counts the iteration.
/// 4. Moves in the excess direction if the required coefficient is zero or
///    larger than the delivered one, stops if they agree within
///    [`DriverConfig::tolerance`], or otherwise moves the opposite way.
/// 5. Halves the step, and stops once [`DriverConfig::max_iters`] is reached.
///
/// # Errors
///
/// Propagates errors from the model call.
pub fn drive<M, Obs>(
    model: &M,
    start: Start,
    config: &DriverConfig,
    mut observer: Obs,
) -> Result<Solution, M::Error>
where
    M: Model<Input = f64, Output = Coefficients>,
    Obs: Observer<Event, Action>,
{
    let mut trial = start.trial;
    let mut step = config.initial_step;
    let mut iters = 0;

    loop {
        let evaluation =
            evaluate(model, &CoefficientBalance, [trial]).map_err(|error| match error {
                EvalError::Model(error) => error,
                EvalError::Problem(never) => match never {},
            })?;
        let Coefficients { required, delivered } = evaluation.snapshot.output;
        let [residual] = evaluation.residuals;

        let mut event = Event {
            iter: iters,
            trial,
            required,
            delivered,
            decision: Decision::Abandon,
        };

        if delivered == 0.0 {
            observer.observe(&event);
            return Ok(Solution {
                status: Status::Degenerate,
                trial,
                residual,
                iters,
            });
        }

        iters += 1;
        event.iter = iters;

        let direction = if required == 0.0 {
            start.excess
        } else if residual.abs() <= config.tolerance {
            event.decision = Decision::Converge;
            observer.observe(&event);
            return Ok(Solution {
                status: Status::Converged,
                trial,
                residual,
                iters,
            });
        } else if required > delivered {
            start.excess
        } else {
            start.excess.opposite()
        };

        event.decision = Decision::Move { direction, step };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trial,
                residual,
                iters,
            });
        }

        trial = direction.apply(trial, step);
        step /= 2.0;

        if iters >= config.max_iters {
            return Ok(Solution {
                status: Status::MaxIters,
                trial,
                residual,
                iters,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Required falls linearly with the trial; delivered is constant.
    struct Linear {
        root: f64,
        delivered: f64,
    }

    impl Model for Linear {
        type Input = f64;
        type Output = Coefficients;
        type Error = Infallible;

        fn call(&self, trial: &f64) -> Result<Self::Output, Self::Error> {
            Ok(Coefficients {
                required: self.delivered + (self.root - trial),
                delivered: self.delivered,
            })
        }
    }

    const FROM_TEN: Start = Start {
        trial: 10.0,
        excess: Direction::Raise,
    };

    #[test]
    fn converges_within_reach() {
        let model = Linear {
            root: 11.3,
            delivered: 1.0,
        };
        let solution = drive(&model, FROM_TEN, &DriverConfig::temperature(), ()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.residual.abs() <= TOLERANCE);
        assert_relative_eq!(solution.trial, 11.3, epsilon = TOLERANCE);
    }

    #[test]
    fn root_beyond_reach_exhausts_cap() {
        // Steps sum to less than two, so a root three away is never reached.
        let model = Linear {
            root: 13.0,
            delivered: 1.0,
        };
        let solution = drive(&model, FROM_TEN, &DriverConfig::liquid_gas(), ()).unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, LIQUID_GAS_MAX_ITERS);
        assert!(solution.trial <= 12.0);
    }

    #[test]
    fn zero_delivered_abandons_immediately() {
        let model = Linear {
            root: 11.0,
            delivered: 0.0,
        };
        let mut events = Vec::new();
        let solution = drive(
            &model,
            FROM_TEN,
            &DriverConfig::temperature(),
            |event: &Event| -> Option<Action> {
                events.push(*event);
                None
            },
        )
        .unwrap();

        assert_eq!(solution.status, Status::Degenerate);
        assert_eq!(solution.iters, 0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].decision, Decision::Abandon);
    }

    #[test]
    fn zero_required_moves_in_excess_direction() {
        struct Pinched;

        impl Model for Pinched {
            type Input = f64;
            type Output = Coefficients;
            type Error = Infallible;

            fn call(&self, trial: &f64) -> Result<Self::Output, Self::Error> {
                // No coefficient above 0.5; matches delivered at 0.25.
                let required = if *trial > 0.5 { 0.0 } else { 1.0 + (trial - 0.25) };
                Ok(Coefficients {
                    required,
                    delivered: 1.0,
                })
            }
        }

        let start = Start {
            trial: 0.0,
            excess: Direction::Lower,
        };
        let mut moves = Vec::new();
        let solution = drive(
            &Pinched,
            start,
            &DriverConfig::liquid_gas(),
            |event: &Event| -> Option<Action> {
                if let Decision::Move { direction, step } = event.decision {
                    moves.push((event.trial, direction, step));
                }
                None
            },
        )
        .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.trial, 0.25, epsilon = TOLERANCE);
        // 0 → 1 (too small), 1 → 0.5 (pinched), 0.5 → 0.25 (too large).
        assert_eq!(moves[0], (0.0, Direction::Raise, 1.0));
        assert_eq!(moves[1], (1.0, Direction::Lower, 0.5));
        assert_eq!(moves[2], (0.5, Direction::Lower, 0.25));
    }

    #[test]
    fn observer_stops_before_move() {
        let model = Linear {
            root: 11.3,
            delivered: 1.0,
        };
        let solution = drive(
            &model,
            FROM_TEN,
            &DriverConfig::temperature(),
            |event: &Event| (event.iter == 3).then_some(Action::StopEarly),
        )
        .unwrap();

        // Raises by 1 and 0.5 happen; the third move, a lowering, does not.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.trial, 11.5);
        assert_relative_eq!(solution.residual, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn stop_is_ignored_on_convergence() {
        let model = Linear {
            root: 10.0,
            delivered: 1.0,
        };
        let solution = drive(
            &model,
            FROM_TEN,
            &DriverConfig::temperature(),
            |_: &Event| Some(Action::StopEarly),
        )
        .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
    }

    #[test]
    fn balance_residual_is_required_minus_delivered() {
        let output = Coefficients {
            required: 1.2,
            delivered: 0.9,
        };
        let [residual] = CoefficientBalance.residuals(&0.0, &output).unwrap();
        assert_relative_eq!(residual, 0.3, epsilon = 1e-12);
        assert_eq!(CoefficientBalance.input(&[1.8]).unwrap(), 1.8);
    }

    #[test]
    fn deterministic() {
        let model = Linear {
            root: 10.7,
            delivered: 2.0,
        };
        let first = drive(&model, FROM_TEN, &DriverConfig::temperature(), ()).unwrap();
        let second = drive(&model, FROM_TEN, &DriverConfig::temperature(), ()).unwrap();
        assert_eq!(first.trial.to_bits(), second.trial.to_bits());
        assert_eq!(first.iters, second.iters);
    }
}
