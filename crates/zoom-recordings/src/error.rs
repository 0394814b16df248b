//! Error type shared by every client operation.

use reqwest::StatusCode;

use crate::auth::AuthError;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// Every variant keeps the underlying cause reachable through
/// [`std::error::Error::source`]. Nothing is retried or swallowed: the first
/// failure is returned to the caller as-is.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller supplied an argument the API cannot accept (empty user ID,
    /// non-positive meeting ID, empty endpoint, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A request URL could not be built.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The authenticator refused to decorate the request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request never produced an HTTP response.
    #[error("Zoom API transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Zoom API request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },

    /// A recording file download answered with something other than 200.
    #[error("could not download recording file {file_id}: {status}")]
    Download { file_id: String, status: StatusCode },

    /// The response body was not the JSON document we expected.
    #[error("could not decode Zoom API response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Reading the download body or writing it to the sink failed.
    #[error("could not copy response body when downloading recording file: {0}")]
    Copy(#[source] std::io::Error),

    /// The sink could not be flushed once the body had been copied.
    #[error("could not flush sink after copying: {0}")]
    Release(#[source] std::io::Error),
}

impl Error {
    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::Download { status, .. } => Some(*status),
            _ => None,
        }
    }
}
