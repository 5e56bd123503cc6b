//! High-level client — `LensClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs` (auth
//! lives in `auth/client.rs`). This module keeps the builder, shared session
//! state, and accessor methods.

use std::sync::Arc;

use async_lock::RwLock;
use tokio::sync::watch;

use crate::auth::client::Auth;
use crate::auth::AuthCredentials;
use crate::domain::metadata::client::Metadata;
use crate::domain::nft::client::Nfts;
use crate::domain::profile::client::Profiles;
use crate::error::SdkError;
use crate::graphql::LensGraphql;
use crate::network::{NetworkEnv, SupportedNetwork};
use crate::relay::poll::PollConfig;
use crate::relay::status::{PostTxStatus, TxStatusBoard};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::metadata::client::Metadata as MetadataClient;
pub use crate::domain::nft::client::Nfts as NftsClient;
pub use crate::domain::profile::client::Profiles as ProfilesClient;

/// The primary entry point for the Lens relay SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.auth()`, `client.profiles()`, `client.metadata()`,
/// `client.nfts()`, plus per-network transaction-status subscription.
pub struct LensClient {
    pub(crate) graphql: LensGraphql,
    pub(crate) env: NetworkEnv,
    /// Network transactions are posted on (profiles live on Polygon).
    pub(crate) tx_network: SupportedNetwork,
    pub(crate) poll: PollConfig,
    /// Internal session state.
    pub(crate) credentials: Arc<RwLock<Option<AuthCredentials>>>,
    pub(crate) refresh_token: Arc<RwLock<Option<String>>>,
    /// Per-network transaction status slots.
    pub(crate) status: Arc<TxStatusBoard>,
}

impl LensClient {
    pub fn builder() -> LensClientBuilder {
        LensClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    pub fn metadata(&self) -> Metadata<'_> {
        Metadata { client: self }
    }

    pub fn nfts(&self) -> Nfts<'_> {
        Nfts { client: self }
    }

    // ── Transaction status ───────────────────────────────────────────────

    /// Subscribe to transaction status changes on `network`.
    pub fn tx_status(&self, network: SupportedNetwork) -> watch::Receiver<PostTxStatus> {
        self.status.subscribe(network)
    }

    /// Snapshot of the current transaction status on `network`.
    pub fn current_tx_status(&self, network: SupportedNetwork) -> PostTxStatus {
        self.status.current(network)
    }

    /// Which deployment this client talks to.
    pub fn env(&self) -> NetworkEnv {
        self.env
    }
}

impl Clone for LensClient {
    fn clone(&self) -> Self {
        Self {
            graphql: self.graphql.clone(),
            env: self.env,
            tx_network: self.tx_network,
            poll: self.poll.clone(),
            credentials: self.credentials.clone(),
            refresh_token: self.refresh_token.clone(),
            status: self.status.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LensClientBuilder {
    endpoint: Option<String>,
    env: NetworkEnv,
    tx_network: SupportedNetwork,
    poll: PollConfig,
}

impl Default for LensClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            env: NetworkEnv::Mainnet,
            tx_network: SupportedNetwork::Polygon,
            poll: PollConfig::default(),
        }
    }
}

impl LensClientBuilder {
    /// Override the API endpoint (defaults to the `env`'s deployment URL).
    pub fn endpoint(mut self, url: &str) -> Self {
        self.endpoint = Some(url.to_string());
        self
    }

    pub fn env(mut self, env: NetworkEnv) -> Self {
        self.env = env;
        self
    }

    /// Network metadata transactions are posted on.
    pub fn tx_network(mut self, network: SupportedNetwork) -> Self {
        self.tx_network = network;
        self
    }

    /// Indexing poll cadence and bound.
    pub fn poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn build(self) -> Result<LensClient, SdkError> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| self.env.api_url().to_string());

        Ok(LensClient {
            graphql: LensGraphql::new(&endpoint),
            env: self.env,
            tx_network: self.tx_network,
            poll: self.poll,
            credentials: Arc::new(RwLock::new(None)),
            refresh_token: Arc::new(RwLock::new(None)),
            status: Arc::new(TxStatusBoard::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::MAINNET_API_URL;

    #[test]
    fn test_builder_defaults() {
        let client = LensClient::builder().build().unwrap();
        assert_eq!(client.env(), NetworkEnv::Mainnet);
        assert_eq!(client.graphql.endpoint(), MAINNET_API_URL);
        assert_eq!(client.tx_network, SupportedNetwork::Polygon);
    }

    #[test]
    fn test_builder_testnet_endpoint() {
        let client = LensClient::builder()
            .env(NetworkEnv::Testnet)
            .build()
            .unwrap();
        assert_eq!(client.graphql.endpoint(), crate::network::TESTNET_API_URL);
    }

    #[test]
    fn test_status_slots_start_ready() {
        let client = LensClient::builder().build().unwrap();
        assert_eq!(
            client.current_tx_status(SupportedNetwork::Polygon),
            PostTxStatus::Ready
        );
    }
}
