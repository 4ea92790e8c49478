/// Result of a solve that ran to completion.
///
/// `Infeasible` is an expected outcome: the inputs lie outside the tower's
/// operating envelope. Report code that predates this type reads it as zero,
/// see [`Outcome::value_or_zero`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T> {
    Solved(T),
    Infeasible(Infeasible),
}

/// Why a solve produced no value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Infeasible {
    /// The inputs do not satisfy `hot > cold > wet bulb`.
    InvalidOrdering,

    /// The fill delivered a zero coefficient at the trial.
    Degenerate,

    /// The driver reached its iteration cap.
    NotConverged {
        /// Iterations performed.
        iters: usize,

        /// `required - delivered` at the last evaluation.
        residual: f64,
    },

    /// An observer stopped the driver before it converged.
    Stopped {
        /// Iterations performed.
        iters: usize,

        /// `required - delivered` at the last evaluation.
        residual: f64,
    },
}

impl<T> Outcome<T> {
    /// Returns the solved value, if any.
    #[must_use]
    pub fn solved(self) -> Option<T> {
        match self {
            Self::Solved(value) => Some(value),
            Self::Infeasible(_) => None,
        }
    }

    /// Returns `true` if the solve produced a value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Maps the solved value, leaving an infeasible outcome untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Solved(value) => Outcome::Solved(f(value)),
            Self::Infeasible(reason) => Outcome::Infeasible(reason),
        }
    }
}

impl Outcome<f64> {
    /// Returns the solved value, or `0.0` if infeasible.
    #[must_use]
    pub fn value_or_zero(self) -> f64 {
        match self {
            Self::Solved(value) => value,
            Self::Infeasible(_) => 0.0,
        }
    }
}
