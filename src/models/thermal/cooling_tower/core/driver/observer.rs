use super::Direction;

/// What the driver decided after evaluating a trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// The delivered coefficient was zero.
    Abandon,

    /// The residual was within tolerance.
    Converge,

    /// The trial moves by `step` in `direction`.
    Move { direction: Direction, step: f64 },
}

/// One driver iteration, reported to a [`twine_core::Observer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration number, starting at one. Zero for an abandoned first trial.
    pub iter: usize,
    pub trial: f64,
    pub required: f64,
    pub delivered: f64,
    pub decision: Decision,
}

/// Control actions an observer may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before the pending move and report the trial as it stands.
    ///
    /// Ignored for [`Decision::Abandon`] and [`Decision::Converge`], which
    /// end the drive anyway.
    StopEarly,
}
