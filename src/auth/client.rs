//! Auth sub-client — token custody around the login/refresh flows.

use crate::auth::{login_flow, refresh_flow, AuthCredentials, AuthTokens};
use crate::client::LensClient;
use crate::error::{AuthError, SdkError};
use crate::signer::ProfileSigner;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a LensClient,
}

impl<'a> Auth<'a> {
    /// Authenticate the signer's address.
    ///
    /// Requests a challenge, has `signer` sign its text, and exchanges the
    /// signature for access/refresh tokens. The tokens are stored internally
    /// for header injection; the returned [`AuthCredentials`] carry only the
    /// observable session state.
    pub async fn login(
        &self,
        signer: &impl ProfileSigner,
    ) -> Result<AuthCredentials, SdkError> {
        let (tokens, credentials) = login_flow(&self.client.graphql, signer).await?;

        self.store_tokens(&tokens).await;
        *self.client.credentials.write().await = Some(credentials.clone());

        Ok(credentials)
    }

    /// Re-issue tokens from the stored refresh token.
    pub async fn refresh(&self) -> Result<(), SdkError> {
        let refresh_token = self
            .client
            .refresh_token
            .read()
            .await
            .clone()
            .ok_or(AuthError::NoRefreshToken)?;

        let tokens = refresh_flow(&self.client.graphql, &refresh_token).await?;

        self.store_tokens(&tokens).await;
        Ok(())
    }

    /// Drop tokens and session state.
    pub async fn logout(&self) {
        self.client.graphql.clear_access_token().await;
        *self.client.refresh_token.write().await = None;
        *self.client.credentials.write().await = None;
    }

    /// Current session state, if authenticated.
    pub async fn credentials(&self) -> Option<AuthCredentials> {
        self.client.credentials.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.graphql.has_access_token().await
    }

    async fn store_tokens(&self, tokens: &AuthTokens) {
        self.client
            .graphql
            .set_access_token(Some(tokens.access_token.clone()))
            .await;
        *self.client.refresh_token.write().await = Some(tokens.refresh_token.clone());
    }
}
