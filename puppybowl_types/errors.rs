use thiserror::Error;

mod api_error;

pub use api_error::ApiError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}
