use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = SimfingerError> = result::Result<T, E>;

/// Errors in simfinger.
#[derive(Debug)]
pub enum SimfingerError {
    /// Contains [`ConfigurationError`].
    Configuration(ConfigurationError),
    /// Contains [`CoercionError`].
    Coercion(CoercionError),
}

impl fmt::Display for SimfingerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Configuration(e) => e.fmt(f),
            Self::Coercion(e) => e.fmt(f),
        }
    }
}

impl Error for SimfingerError {}

impl SimfingerError {
    pub(crate) const fn configuration(msg: &'static str) -> Self {
        Self::Configuration(ConfigurationError { msg })
    }

    pub(crate) const fn coercion(msg: &'static str) -> Self {
        Self::Coercion(CoercionError { msg })
    }
}

/// Error used when the fingerprint configuration is invalid.
#[derive(Debug)]
pub struct ConfigurationError {
    msg: &'static str,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConfigurationError: {}", self.msg)
    }
}

/// Error used when a comparison operand cannot be coerced to a fingerprint value.
#[derive(Debug)]
pub struct CoercionError {
    msg: &'static str,
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CoercionError: {}", self.msg)
    }
}
