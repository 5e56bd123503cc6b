//! Authentication — challenge signing, token custody, session state.
//!
//! ## Security model
//!
//! The access and refresh tokens returned by `Authenticate` are stored
//! inside the client (private fields) and injected as the `x-access-token`
//! header; they are never exposed through the public API. What callers can
//! observe is [`AuthCredentials`]: which address authenticated, and when.

#[cfg(feature = "http")]
pub mod client;

use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::error::{AuthError, SdkError};
use crate::graphql::operations;
use crate::graphql::transport::{query_field, GraphqlTransport};
use crate::signer::{signature_hex, ProfileSigner};

/// Observable session state after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCredentials {
    pub address: Address,
    pub authenticated_at: DateTime<Utc>,
}

/// Wire response of the `Challenge` query.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChallengeText {
    pub text: String,
}

/// Wire response of the `Authenticate` and `Refresh` mutations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Challenge → sign → authenticate.
///
/// Transport-generic so the flow is testable without HTTP; token custody is
/// the sub-client's job.
pub(crate) async fn login_flow<G, S>(
    transport: &G,
    signer: &S,
) -> Result<(AuthTokens, AuthCredentials), SdkError>
where
    G: GraphqlTransport,
    S: ProfileSigner,
{
    let address = signer.address();

    let challenge: ChallengeText = query_field(
        transport,
        &operations::CHALLENGE,
        "challenge",
        json!({ "request": { "address": address } }),
    )
    .await?;

    let signature = signer.sign_message(&challenge.text).await?;

    let tokens: AuthTokens = query_field(
        transport,
        &operations::AUTHENTICATE,
        "authenticate",
        json!({ "request": {
            "address": address,
            "signature": signature_hex(&signature)
        } }),
    )
    .await
    .map_err(|e| match e {
        SdkError::Graphql(g) => AuthError::LoginFailed(g.to_string()).into(),
        other => other,
    })?;

    let credentials = AuthCredentials {
        address,
        authenticated_at: Utc::now(),
    };
    Ok((tokens, credentials))
}

/// Exchange a refresh token for fresh tokens.
pub(crate) async fn refresh_flow<G>(
    transport: &G,
    refresh_token: &str,
) -> Result<AuthTokens, SdkError>
where
    G: GraphqlTransport,
{
    query_field(
        transport,
        &operations::REFRESH,
        "refresh",
        json!({ "request": { "refreshToken": refresh_token } }),
    )
    .await
}
