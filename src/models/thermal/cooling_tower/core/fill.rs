use std::str::FromStr;

use thiserror::Error;

use super::FlowConfiguration;

/// Form of the fill's KaV/L versus L/G power law.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaKind {
    /// `KaV/L = 10^(a·N + b)`.
    Single,

    /// `KaV/L = a·N^b`.
    Double,
}

/// Error returned when a fill formula token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fill formula {token:?}, expected SINGLE or DOUBLE")]
pub struct ParseFormulaKindError {
    pub token: String,
}

impl FromStr for FormulaKind {
    type Err = ParseFormulaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SINGLE" => Ok(Self::Single),
            "DOUBLE" => Ok(Self::Double),
            _ => Err(ParseFormulaKindError {
                token: s.to_owned(),
            }),
        }
    }
}

/// Fill performance curve: the transfer coefficient a fill delivers as a
/// function of liquid-to-gas ratio.
///
/// The constants come from the manufacturer's test data for a tower family
/// and are supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillCorrelation {
    pub a: f64,
    pub b: f64,
    pub kind: FormulaKind,
}

impl FillCorrelation {
    #[must_use]
    pub const fn new(a: f64, b: f64, kind: FormulaKind) -> Self {
        Self { a, b, kind }
    }

    /// Builds a correlation from a catalog row with a textual formula kind.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFormulaKindError`] if `kind` is neither `SINGLE` nor `DOUBLE`.
    pub fn from_token(a: f64, b: f64, kind: &str) -> Result<Self, ParseFormulaKindError> {
        Ok(Self::new(a, b, kind.parse()?))
    }

    /// Returns the delivered KaV/L at liquid-to-gas ratio `n`.
    #[must_use]
    pub fn delivered_coefficient(&self, n: f64) -> f64 {
        match self.kind {
            FormulaKind::Single => 10f64.powf(self.a * n + self.b),
            FormulaKind::Double => self.a * n.powf(self.b),
        }
    }
}

/// Fill correlations for both flow configurations of a tower family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSet {
    pub counterflow: FillCorrelation,
    pub crossflow: FillCorrelation,
}

impl FillSet {
    /// Returns the correlation for `config`.
    #[must_use]
    pub const fn get(&self, config: FlowConfiguration) -> &FillCorrelation {
        match config {
            FlowConfiguration::Counterflow => &self.counterflow,
            FlowConfiguration::Crossflow => &self.crossflow,
        }
    }
}
