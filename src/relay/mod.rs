//! Gasless transaction relay — submission, indexing, and status reporting.
//!
//! This is the orchestration core of the SDK. A metadata update moves through
//! a fixed pipeline:
//!
//! ```text
//! Ready → Pending → Broadcast → (polling) → Done
//!                  \________________________→ Error
//! ```
//!
//! Submission takes one of two mutually exclusive paths, chosen by the
//! profile's dispatcher capability:
//!
//! - **Dispatcher relay** — the API relays the mutation itself; no client
//!   signature is involved.
//! - **Sign + broadcast** — the API returns EIP-712 typed data, the caller's
//!   signer signs it, and the signed payload is broadcast through the relayer.
//!
//! Both paths yield the same [`RelaySubmission`], so the indexing poller and
//! status reporting are branch-agnostic. Once broadcast, a transaction cannot
//! be cancelled or rolled back — failures after that point are only reported.

pub mod client;
pub mod poll;
pub mod status;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::{ProfileId, TxHash, TxId, Uri};

pub use client::{execute_metadata_update, submit_metadata_update};
pub use poll::{poll_until_indexed, PollConfig};
pub use status::{PostTxStatus, TxStatusBoard};

/// A request to point a profile at a new metadata document.
///
/// `metadata` is the content-addressed URI of the already-uploaded document;
/// uploading is the storage collaborator's job, not this crate's. Immutable
/// once submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataUpdateRequest {
    pub profile_id: ProfileId,
    pub metadata: Uri,
}

/// The relayer's acknowledgement of an accepted submission.
///
/// Identical shape for both submission paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaySubmission {
    pub tx_hash: TxHash,
    pub tx_id: TxId,
}

/// Reference handed to the indexing poller.
///
/// Serializes as `{"txHash": …}` or `{"txId": …}`, matching the
/// `HasTxHashBeenIndexedRequest` input shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TxRef {
    TxHash(TxHash),
    TxId(TxId),
}

/// Final result of a successful metadata update.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataUpdateReceipt {
    pub tx_hash: TxHash,
    pub tx_id: TxId,
    /// The URI the profile now points at.
    pub metadata: Uri,
    /// On-chain receipt, when the indexer returned one.
    pub receipt: Option<wire::TransactionReceipt>,
}
