use thiserror::Error;

pub mod backend;
pub mod geolocation;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("Authentication required")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Unable to reach the backend: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
