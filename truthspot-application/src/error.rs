use thiserror::Error;
use truthspot_core::{gateways::Error as GatewayError, mode::ModeError, usecases::Error as ParameterError};

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> AppError {
        AppError::Business(BError::Parameter(err.into()))
    }
}

impl From<ModeError> for AppError {
    fn from(err: ModeError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
}

impl AppError {
    /// The gateway error if the backend or a device failed.
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Business(BError::Parameter(ParameterError::Gateway(err))) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Mode(#[from] ModeError),
}
