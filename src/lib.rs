//! Rust SDK for gasless Lens Protocol transactions.
//!
//! Wraps the Lens GraphQL API's relay machinery: dispatcher-relayed and
//! sign-then-broadcast transaction submission, bounded indexing polling,
//! and per-network transaction status observation.
//!
//! # Architecture
//!
//! The crate is organized in layers, lowest first:
//!
//! - **Layer 0 — shared/network/error**: newtypes ([`ProfileId`], [`TxHash`],
//!   [`TxId`], [`Uri`]), pagination, supported networks, and the [`SdkError`]
//!   hierarchy.
//! - **Layer 1 — graphql**: operation documents, retry policy, the
//!   [`GraphqlTransport`] seam, and the reqwest-backed [`LensGraphql`]
//!   client (behind the `http` feature).
//! - **Layer 2 — signer**: the [`ProfileSigner`] trait over EIP-191 messages
//!   and EIP-712 typed data, plus a [`LocalSigner`] for in-process keys
//!   (behind the `local-signer` feature).
//! - **Layer 3 — relay**: the submission pipeline, the indexing poller, and
//!   the [`TxStatusBoard`].
//! - **Layer 4 — domain + client**: profiles, profile metadata, NFTs, auth,
//!   and the high-level [`LensClient`] with nested sub-client accessors.
//!
//! # Example
//!
//! ```no_run
//! use lens_relay::prelude::*;
//!
//! # async fn run(signer: impl ProfileSigner) -> Result<(), SdkError> {
//! let client = LensClient::builder().env(NetworkEnv::Testnet).build()?;
//! client.auth().login(&signer).await?;
//!
//! let profile = client
//!     .profiles()
//!     .default_profile(signer.address())
//!     .await?
//!     .expect("wallet has no default profile");
//!
//! let metadata = ProfileMetadata::new()
//!     .name("carol")
//!     .bio("gm");
//! // Upload `metadata` to content-addressed storage out of band, then:
//! let receipt = client
//!     .metadata()
//!     .set(&signer, &profile, Uri::new("ipfs://Qm..."))
//!     .await?;
//! println!("indexed in tx {}", receipt.tx_hash);
//! # Ok(())
//! # }
//! ```
//!
//! [`ProfileId`]: shared::ProfileId
//! [`TxHash`]: shared::TxHash
//! [`TxId`]: shared::TxId
//! [`Uri`]: shared::Uri
//! [`SdkError`]: error::SdkError
//! [`GraphqlTransport`]: graphql::GraphqlTransport
//! [`LensGraphql`]: graphql::LensGraphql
//! [`ProfileSigner`]: signer::ProfileSigner
//! [`LocalSigner`]: signer::local::LocalSigner
//! [`TxStatusBoard`]: relay::status::TxStatusBoard
//! [`LensClient`]: client::LensClient

pub mod auth;
#[cfg(feature = "http")]
pub mod client;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod network;
pub mod relay;
pub mod shared;
pub mod signer;

/// Commonly used types, for `use lens_relay::prelude::*`.
pub mod prelude {
    pub use crate::auth::AuthCredentials;
    #[cfg(feature = "http")]
    pub use crate::client::{LensClient, LensClientBuilder};
    pub use crate::domain::metadata::{MetadataAttribute, ProfileMetadata};
    pub use crate::domain::nft::Nft;
    pub use crate::domain::profile::{Dispatcher, Profile};
    pub use crate::error::{AuthError, GraphqlError, RelayError, SdkError, SignerError};
    pub use crate::graphql::GraphqlTransport;
    pub use crate::network::{NetworkEnv, SupportedNetwork};
    pub use crate::relay::poll::PollConfig;
    pub use crate::relay::status::{PostTxStatus, TxStatusBoard};
    pub use crate::relay::{MetadataUpdateReceipt, RelaySubmission};
    pub use crate::shared::{PageInfo, Paginated, ProfileId, TxHash, TxId, Uri};
    #[cfg(feature = "local-signer")]
    pub use crate::signer::local::LocalSigner;
    pub use crate::signer::ProfileSigner;
}
