use std::{fmt, str::FromStr};

use thiserror::Error;

/// Physical arrangement of air and water flow through the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowConfiguration {
    /// Air rises against falling water.
    Counterflow,

    /// Air crosses falling water horizontally.
    ///
    /// The Merkel integral is divided by the crossflow efficiency factor.
    Crossflow,
}

impl FlowConfiguration {
    /// Returns the canonical token, `COUNTER` or `CROSS`.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Counterflow => "COUNTER",
            Self::Crossflow => "CROSS",
        }
    }
}

impl fmt::Display for FlowConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Error returned when a flow configuration token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flow configuration {token:?}, expected COUNTER or CROSS")]
pub struct ParseFlowConfigurationError {
    pub token: String,
}

/// Parses a flow configuration token.
///
/// Surrounding whitespace and case are ignored. `COUNTER`, `COUNTERFLOW`,
/// `CROSS` and `CROSSFLOW` are accepted; anything else is rejected rather
/// than defaulted.
impl FromStr for FlowConfiguration {
    type Err = ParseFlowConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COUNTER" | "COUNTERFLOW" => Ok(Self::Counterflow),
            "CROSS" | "CROSSFLOW" => Ok(Self::Crossflow),
            _ => Err(ParseFlowConfigurationError {
                token: s.to_owned(),
            }),
        }
    }
}
