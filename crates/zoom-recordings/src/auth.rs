//! Request authentication.
//!
//! The client never knows how credentials are obtained. It hands every
//! outgoing request to an [`Authenticator`], which decorates it (usually with
//! an `Authorization` header) or refuses.

use std::fmt;

use serde::Deserialize;

/// Errors raised while decorating a request with credentials.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AuthError {
    /// No usable access token was configured.
    #[error("access_token must not be empty")]
    EmptyToken,

    /// The authenticator declined to sign the request.
    #[error("failed to authenticate request: {0}")]
    Rejected(String),
}

/// Capability that attaches credentials to an outgoing request.
///
/// Implementations must be cheap to call and safe to share between tasks; the
/// client holds one behind an `Arc` and calls it once per request.
pub trait Authenticator: fmt::Debug + Send + Sync {
    /// Decorates `request` with credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request cannot be authenticated.
    fn authenticate(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError>;
}

/// Static OAuth access token sent as `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyToken`] if the token is empty or whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(Self { token })
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BearerToken {
    fn authenticate(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        Ok(request.bearer_auth(&self.token))
    }
}

/// Credentials as they appear in configuration files.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// OAuth access token.
    pub access_token: String,
    /// API base URL override, defaults to `https://api.zoom.us/v2`.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_rejects_blank_token() {
        let result = BearerToken::new("   ");
        assert!(matches!(result, Err(AuthError::EmptyToken)));
    }

    #[test]
    fn test_bearer_token_debug_does_not_leak_token() {
        let token = BearerToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");

        assert!(debug.contains("redacted"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_bearer_token_sets_authorization_header() {
        let token = BearerToken::new("test-token").unwrap();
        let request = token
            .authenticate(reqwest::Client::new().get("https://api.zoom.us/v2/users/me"))
            .unwrap()
            .build()
            .unwrap();

        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer test-token");
    }

    #[test]
    fn test_credentials_deserialize_without_endpoint() {
        let credentials: Credentials =
            serde_json::from_str(r#"{ "access_token": "abc" }"#).unwrap();

        assert_eq!(credentials.access_token, "abc");
        assert!(credentials.endpoint.is_none());
        assert!(!format!("{credentials:?}").contains("abc"));
    }
}
