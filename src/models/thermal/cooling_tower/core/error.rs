use thiserror::Error;

use crate::support::{constraint::ConstraintError, psychrometrics::PsychrometricError};

/// Errors that abort a sizing call.
///
/// Failing to find a solution is not an error; it is reported as
/// [`Outcome::Infeasible`](super::Outcome::Infeasible).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// A psychrometric property was requested outside its domain.
    #[error("psychrometric property failed")]
    Property(#[from] PsychrometricError),

    /// A caller-supplied value violates its constraint.
    #[error("invalid {name}")]
    InvalidInput {
        /// Name of the offending input.
        name: &'static str,

        #[source]
        source: ConstraintError,
    },
}

impl SizingError {
    pub(super) fn invalid(name: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { name, source }
    }
}
