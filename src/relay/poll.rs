//! Indexing poller — blocks until a broadcast transaction reaches a terminal
//! indexing state.
//!
//! Indexing is an asynchronous off-chain side effect of an on-chain
//! broadcast; the fixed-delay poll substitutes for a push notification, which
//! is acceptable at one call per user action. The loop is deadline-bounded: a
//! backend that never terminates a status surfaces as
//! [`RelayError::PollTimeout`] instead of suspending the caller forever.

use std::time::Duration;

use serde_json::json;

use crate::error::{RelayError, SdkError};
use crate::graphql::operations;
use crate::graphql::transport::{query_field, GraphqlTransport};
use crate::relay::wire::{IndexedResponse, TransactionIndexedResult, TxMetadataStatus};
use crate::relay::TxRef;

/// Poll cadence and bound.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between consecutive indexing queries.
    pub interval: Duration,
    /// Total queries issued before giving up.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    /// 1500 ms between polls, 40 attempts (~one minute of wall clock).
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1500),
            max_attempts: 40,
        }
    }
}

/// Query indexing status for `tx` until it is terminal.
///
/// Returns the indexer's result unchanged on success. Fails immediately,
/// without further polling, on an on-chain revert or metadata validation
/// failure.
pub async fn poll_until_indexed<G: GraphqlTransport>(
    transport: &G,
    tx: &TxRef,
    config: &PollConfig,
) -> Result<TransactionIndexedResult, SdkError> {
    for attempt in 0..config.max_attempts {
        let response: IndexedResponse = query_field(
            transport,
            &operations::HAS_TX_HASH_BEEN_INDEXED,
            "hasTxHashBeenIndexed",
            json!({ "request": tx }),
        )
        .await?;

        let result = match response {
            IndexedResponse::TransactionError { reason } => {
                return Err(RelayError::Reverted(reason).into());
            }
            IndexedResponse::TransactionIndexedResult(result) => result,
        };

        match &result.metadata_status {
            Some(status) => match status.status {
                TxMetadataStatus::Success => return Ok(result),
                TxMetadataStatus::MetadataValidationFailed => {
                    let reason = status
                        .reason
                        .clone()
                        .unwrap_or_else(|| "METADATA_VALIDATION_FAILED".to_string());
                    return Err(RelayError::MetadataValidationFailed(reason).into());
                }
                _ => {}
            },
            None if result.indexed => return Ok(result),
            None => {}
        }

        tracing::debug!(
            attempt = attempt + 1,
            max = config.max_attempts,
            "transaction not yet indexed"
        );
        if attempt + 1 < config.max_attempts {
            futures_timer::Delay::new(config.interval).await;
        }
    }

    Err(RelayError::PollTimeout {
        attempts: config.max_attempts,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use serde_json::json;

    use super::*;
    use crate::graphql::transport::testing::MockTransport;
    use crate::shared::TxId;

    fn fast_config() -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(50),
            max_attempts: 5,
        }
    }

    fn tx() -> TxRef {
        TxRef::TxId(TxId::new("t1"))
    }

    fn not_indexed() -> serde_json::Value {
        json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionIndexedResult",
                "indexed": false
            }
        })
    }

    #[tokio::test]
    async fn test_reverted_fails_immediately() {
        let transport = MockTransport::new();
        transport.push_data(json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionError",
                "reason": "CALL_EXCEPTION"
            }
        }));

        let err = poll_until_indexed(&transport, &tx(), &fast_config())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SdkError::Relay(RelayError::Reverted(reason)) if reason == "CALL_EXCEPTION"
        ));
        assert_eq!(transport.executed().len(), 1);
    }

    #[tokio::test]
    async fn test_metadata_validation_failure_fails_without_retry() {
        let transport = MockTransport::new();
        transport.push_data(json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionIndexedResult",
                "indexed": true,
                "metadataStatus": { "status": "METADATA_VALIDATION_FAILED", "reason": "bad uri" }
            }
        }));

        let started = Instant::now();
        let err = poll_until_indexed(&transport, &tx(), &fast_config())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SdkError::Relay(RelayError::MetadataValidationFailed(reason)) if reason == "bad uri"
        ));
        assert_eq!(transport.executed().len(), 1);
        // Terminal failure must not wait out a poll interval.
        assert!(started.elapsed() < fast_config().interval);
    }

    #[tokio::test]
    async fn test_metadata_success_returns_result_unchanged() {
        let transport = MockTransport::new();
        transport.push_data(json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionIndexedResult",
                "indexed": true,
                "txHash": "0xabc",
                "metadataStatus": { "status": "SUCCESS" }
            }
        }));

        let result = poll_until_indexed(&transport, &tx(), &fast_config())
            .await
            .unwrap();

        assert!(result.indexed);
        assert_eq!(result.tx_hash, Some("0xabc".into()));
        assert_eq!(
            result.metadata_status.unwrap().status,
            TxMetadataStatus::Success
        );
    }

    #[tokio::test]
    async fn test_pending_metadata_status_keeps_polling() {
        let transport = MockTransport::new();
        transport.push_data(json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionIndexedResult",
                "indexed": false,
                "metadataStatus": { "status": "PENDING" }
            }
        }));
        transport.push_data(json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionIndexedResult",
                "indexed": true,
                "metadataStatus": { "status": "SUCCESS" }
            }
        }));

        let result = poll_until_indexed(&transport, &tx(), &fast_config())
            .await
            .unwrap();
        assert!(result.indexed);
        assert_eq!(transport.executed().len(), 2);
    }

    #[tokio::test]
    async fn test_retries_are_rate_limited_by_interval() {
        let config = fast_config();
        let transport = MockTransport::new();
        transport.push_data(not_indexed());
        transport.push_data(not_indexed());
        transport.push_data(json!({
            "hasTxHashBeenIndexed": {
                "__typename": "TransactionIndexedResult",
                "indexed": true
            }
        }));

        poll_until_indexed(&transport, &tx(), &config)
            .await
            .unwrap();

        let instants = transport.call_instants();
        assert_eq!(instants.len(), 3);
        for pair in instants.windows(2) {
            assert!(
                pair[1].duration_since(pair[0]) >= config.interval,
                "consecutive polls closer than the configured interval"
            );
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates_without_retry() {
        let transport = MockTransport::new();
        transport.push_error(crate::error::GraphqlError::Timeout);

        let err = poll_until_indexed(&transport, &tx(), &fast_config())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SdkError::Graphql(crate::error::GraphqlError::Timeout)
        ));
        assert_eq!(transport.executed().len(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_attempts_time_out() {
        let config = PollConfig {
            interval: Duration::from_millis(10),
            max_attempts: 3,
        };
        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.push_data(not_indexed());
        }

        let err = poll_until_indexed(&transport, &tx(), &config)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SdkError::Relay(RelayError::PollTimeout { attempts: 3 })
        ));
        assert_eq!(transport.executed().len(), 3);
    }

    #[tokio::test]
    async fn test_default_interval_matches_indexer_cadence() {
        let config = PollConfig::default();
        assert_eq!(config.interval, Duration::from_millis(1500));
        assert!(config.max_attempts > 0);
    }
}
