//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("GraphQL error: {0}")]
    Graphql(#[from] GraphqlError),

    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// GraphQL transport-layer errors.
#[derive(Error, Debug)]
pub enum GraphqlError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("GraphQL response errors: {}", messages.join("; "))]
    Response { messages: Vec<String> },

    #[error("Response data missing field `{0}`")]
    MissingField(&'static str),

    #[error("Malformed response payload: {0}")]
    Decode(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Relay submission and indexing errors.
///
/// These map 1:1 onto the terminal failure modes of the dispatcher/broadcast
/// paths and the indexing poller.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Dispatcher rejected the request: {0}")]
    DispatcherRejected(String),

    #[error("Broadcast rejected the signed request: {0}")]
    BroadcastRejected(String),

    #[error("Transaction reverted on-chain: {0}")]
    Reverted(String),

    #[error("Metadata validation failed: {0}")]
    MetadataValidationFailed(String),

    #[error("Transaction not indexed after {attempts} poll attempts")]
    PollTimeout { attempts: u32 },
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("No refresh token available")]
    NoRefreshToken,
}

/// Signing errors surfaced by [`crate::signer::ProfileSigner`] implementations.
#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Wallet refused to sign: {0}")]
    Rejected(String),

    #[error("Signing failed: {0}")]
    Failed(String),
}
