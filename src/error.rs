//! Error taxonomy for the crate.
//!
//! Configuration and data errors are recoverable and propagate to the caller
//! before a run starts (or while loading a data file). Internal invariant
//! violations (bad operator code, empty postfix stack, ...) are programmer
//! errors and `panic!` instead, per the error handling design.

use std::fmt;

/// A run configuration was invalid (bad mask, bound inversion, malformed
/// preset form, too few sample points, or a builder step was skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl ConfigError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// A data file could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataError(pub String);

impl DataError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DataError {}

/// Umbrella error for call sites that want a single `?`-friendly type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GaError {
    Config(ConfigError),
    Data(DataError),
}

impl fmt::Display for GaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaError::Config(e) => write!(f, "{e}"),
            GaError::Data(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GaError {}

impl From<ConfigError> for GaError {
    fn from(e: ConfigError) -> Self {
        GaError::Config(e)
    }
}

impl From<DataError> for GaError {
    fn from(e: DataError) -> Self {
        GaError::Data(e)
    }
}
