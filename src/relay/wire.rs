//! Wire types for relay and indexing responses.
//!
//! The Lens API returns union results discriminated by `__typename`; they are
//! modelled here as closed enums so callers match exhaustively instead of
//! string-checking type tags.

use alloy_dyn_abi::TypedData;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{GraphqlError, SdkError};
use crate::shared::{TxHash, TxId};

/// Result union of the dispatcher, broadcast, and create-profile mutations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum RelayResponse {
    #[serde(rename_all = "camelCase")]
    RelayerResult { tx_hash: TxHash, tx_id: TxId },
    RelayError { reason: String },
}

/// Result union of the `HasTxHashBeenIndexed` query.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum IndexedResponse {
    TransactionIndexedResult(TransactionIndexedResult),
    TransactionError { reason: String },
}

/// Indexer state for a transaction that has not reverted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionIndexedResult {
    pub indexed: bool,
    #[serde(default)]
    pub tx_hash: Option<TxHash>,
    #[serde(default)]
    pub tx_receipt: Option<TransactionReceipt>,
    /// Secondary validation status, present only for metadata transactions.
    #[serde(default)]
    pub metadata_status: Option<MetadataStatusWire>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MetadataStatusWire {
    pub status: TxMetadataStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Off-chain metadata validation status attached to an indexing poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxMetadataStatus {
    NotFound,
    Pending,
    MetadataValidationFailed,
    Success,
    #[serde(other)]
    Other,
}

/// Minimal on-chain receipt as the indexer reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: TxHash,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub status: Option<u64>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub address: Address,
    pub topics: Vec<String>,
    pub data: String,
}

/// Response of the `CreateSet…TypedData` mutations: a server-side request id
/// plus the EIP-712 payload to sign.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataResponse {
    pub id: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    pub typed_data: TypedDataWire,
}

/// The raw typed-data sections as the API sends them. Kept as JSON until the
/// moment of signing; [`TypedDataResponse::to_eip712`] assembles the alloy
/// representation.
#[derive(Debug, Clone, Deserialize)]
pub struct TypedDataWire {
    pub types: Value,
    pub domain: Value,
    pub value: Value,
}

impl TypedDataResponse {
    /// Build the signable EIP-712 payload.
    ///
    /// The API omits `primaryType`; it is recovered as the single struct type
    /// in `types` besides the domain itself.
    pub fn to_eip712(&self) -> Result<TypedData, SdkError> {
        let primary_type = self
            .typed_data
            .types
            .as_object()
            .and_then(|types| types.keys().find(|name| *name != "EIP712Domain"))
            .cloned()
            .ok_or_else(|| {
                GraphqlError::Decode("typed data carries no primary struct type".to_string())
            })?;

        let assembled = json!({
            "types": self.typed_data.types,
            "domain": self.typed_data.domain,
            "primaryType": primary_type,
            "message": self.typed_data.value,
        });

        serde_json::from_value(assembled).map_err(SdkError::Serde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed_data_response() -> TypedDataResponse {
        serde_json::from_value(json!({
            "id": "req-1",
            "expiresAt": "2024-01-01T00:00:00Z",
            "typedData": {
                "types": {
                    "SetProfileMetadataURIWithSig": [
                        { "name": "profileId", "type": "uint256" },
                        { "name": "metadata", "type": "string" },
                        { "name": "nonce", "type": "uint256" },
                        { "name": "deadline", "type": "uint256" }
                    ]
                },
                "domain": {
                    "name": "Lens Protocol Profiles",
                    "version": "1",
                    "chainId": 137,
                    "verifyingContract": "0xDb46d1Dc155634FbC732f92E853b10B288AD5a1d"
                },
                "value": {
                    "profileId": "0x2d",
                    "metadata": "ipfs://QmExample",
                    "nonce": 3,
                    "deadline": 1700000000u64
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_relay_response_discriminates_on_typename() {
        let ok: RelayResponse = serde_json::from_value(json!({
            "__typename": "RelayerResult",
            "txHash": "0xabc",
            "txId": "t1"
        }))
        .unwrap();
        assert_eq!(
            ok,
            RelayResponse::RelayerResult {
                tx_hash: "0xabc".into(),
                tx_id: "t1".into()
            }
        );

        let err: RelayResponse = serde_json::from_value(json!({
            "__typename": "RelayError",
            "reason": "REJECTED"
        }))
        .unwrap();
        assert_eq!(
            err,
            RelayResponse::RelayError {
                reason: "REJECTED".into()
            }
        );
    }

    #[test]
    fn test_indexed_response_variants() {
        let pending: IndexedResponse = serde_json::from_value(json!({
            "__typename": "TransactionIndexedResult",
            "indexed": false
        }))
        .unwrap();
        match pending {
            IndexedResponse::TransactionIndexedResult(r) => {
                assert!(!r.indexed);
                assert!(r.metadata_status.is_none());
            }
            other => panic!("unexpected variant: {other:?}"),
        }

        let reverted: IndexedResponse = serde_json::from_value(json!({
            "__typename": "TransactionError",
            "reason": "reverted"
        }))
        .unwrap();
        assert_eq!(
            reverted,
            IndexedResponse::TransactionError {
                reason: "reverted".into()
            }
        );
    }

    #[test]
    fn test_metadata_status_parses_screaming_snake() {
        let status: TxMetadataStatus =
            serde_json::from_value(json!("METADATA_VALIDATION_FAILED")).unwrap();
        assert_eq!(status, TxMetadataStatus::MetadataValidationFailed);

        let unknown: TxMetadataStatus = serde_json::from_value(json!("SOMETHING_NEW")).unwrap();
        assert_eq!(unknown, TxMetadataStatus::Other);
    }

    #[test]
    fn test_typed_data_assembly_recovers_primary_type() {
        let typed = typed_data_response().to_eip712().unwrap();
        assert_eq!(typed.primary_type, "SetProfileMetadataURIWithSig");
        // The assembled payload must hash without error.
        typed.eip712_signing_hash().unwrap();
    }
}
