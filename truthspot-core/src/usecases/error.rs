use crate::{gateways, util::validate::SpotInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is missing")]
    Name,
    #[error("The description is missing")]
    Description,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Select a category and a sub-category")]
    Category,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid email address")]
    Email,
    #[error("The password must have at least {min} characters")]
    Password { min: usize },
    #[error("The passwords do not match")]
    PasswordConfirmation,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
}

impl From<SpotInvalidation> for Error {
    fn from(err: SpotInvalidation) -> Self {
        match err {
            SpotInvalidation::Name => Self::Name,
            SpotInvalidation::Description => Self::Description,
            SpotInvalidation::Position => Self::InvalidPosition,
            SpotInvalidation::Category => Self::Category,
            SpotInvalidation::Owner => Self::Unauthorized,
        }
    }
}
