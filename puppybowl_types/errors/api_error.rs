use thiserror::Error;

/// Failures talking to the remote roster API.
///
/// The application treats every variant the same way (log and keep the
/// previous state); the split only makes the logs readable.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{operation}: transport failure: {reason}")]
    Transport {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation}: unexpected response: {reason}")]
    Decode {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation}: remote error: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },
}
