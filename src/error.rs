use std::fmt::{Debug, Display};

/// Raised before any derivation work begins; never retryable.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// N is zero or not a power of two, or r or p is zero. The payload
    /// names the offending parameter.
    InvalidCostParameter(&'static str),
    /// The requested parameters would overflow the platform's operand
    /// limits. The payload names the violated bound.
    ParameterTooLarge(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCostParameter(what) => write!(f, "invalid cost parameter: {what}"),
            Self::ParameterTooLarge(what) => write!(f, "parameter too large: {what}"),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}
