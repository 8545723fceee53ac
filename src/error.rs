//! Top-level error type.
//!
//! Extraction itself never fails; these are the errors of setting a run up.

use jsbind_core::{ConfigError, RegistrationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn as_registration_error(&self) -> Option<&RegistrationError> {
        match self {
            Error::Registration(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_config_error(&self) -> Option<&ConfigError> {
        match self {
            Error::Config(err) => Some(err),
            _ => None,
        }
    }
}
