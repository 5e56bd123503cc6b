//! Transaction status reporting.
//!
//! One observable slot per supported network, owned by the client instance
//! rather than ambient global state. Writers overwrite (last-writer-wins);
//! readers subscribe through a watch channel and see eventually-consistent
//! snapshots. The UI layer serializes user-initiated transactions per
//! network, so no mutual exclusion is layered on top.

use std::collections::HashMap;

use tokio::sync::watch;

use crate::network::SupportedNetwork;
use crate::relay::wire::TransactionReceipt;
use crate::shared::TxHash;

/// Lifecycle of the most recent user-initiated transaction on a network.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PostTxStatus {
    /// No transaction in flight.
    #[default]
    Ready,
    /// Submission accepted by the SDK, not yet relayed.
    Pending,
    /// The relayer acknowledged the transaction.
    Broadcast { tx_hash: TxHash },
    /// Indexed successfully.
    Done { receipt: Option<TransactionReceipt> },
    /// Failed at any stage; the transaction is not recoverable.
    Error { message: String },
}

/// Per-network transaction status slots.
pub struct TxStatusBoard {
    slots: HashMap<SupportedNetwork, watch::Sender<PostTxStatus>>,
}

impl TxStatusBoard {
    pub fn new() -> Self {
        let slots = SupportedNetwork::ALL
            .into_iter()
            .map(|network| (network, watch::channel(PostTxStatus::default()).0))
            .collect();
        Self { slots }
    }

    /// Overwrite the slot for `network`.
    pub fn set(&self, network: SupportedNetwork, status: PostTxStatus) {
        tracing::debug!(%network, ?status, "tx status");
        // Slots exist for every SupportedNetwork variant by construction.
        if let Some(sender) = self.slots.get(&network) {
            sender.send_replace(status);
        }
    }

    /// Subscribe to status changes for `network`.
    pub fn subscribe(&self, network: SupportedNetwork) -> watch::Receiver<PostTxStatus> {
        self.slots
            .get(&network)
            .expect("slot exists for every network")
            .subscribe()
    }

    /// Snapshot of the current status for `network`.
    pub fn current(&self, network: SupportedNetwork) -> PostTxStatus {
        self.slots
            .get(&network)
            .expect("slot exists for every network")
            .borrow()
            .clone()
    }
}

impl Default for TxStatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_ready() {
        let board = TxStatusBoard::new();
        for network in SupportedNetwork::ALL {
            assert_eq!(board.current(network), PostTxStatus::Ready);
        }
    }

    #[tokio::test]
    async fn test_happy_path_transitions_are_observable() {
        let board = TxStatusBoard::new();
        let mut rx = board.subscribe(SupportedNetwork::Polygon);

        board.set(SupportedNetwork::Polygon, PostTxStatus::Pending);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), PostTxStatus::Pending);

        board.set(
            SupportedNetwork::Polygon,
            PostTxStatus::Broadcast {
                tx_hash: "0xabc".into(),
            },
        );
        rx.changed().await.unwrap();
        assert!(matches!(
            &*rx.borrow_and_update(),
            PostTxStatus::Broadcast { tx_hash } if tx_hash.as_str() == "0xabc"
        ));

        board.set(SupportedNetwork::Polygon, PostTxStatus::Done { receipt: None });
        rx.changed().await.unwrap();
        assert!(matches!(&*rx.borrow_and_update(), PostTxStatus::Done { .. }));
    }

    #[test]
    fn test_networks_are_independent() {
        let board = TxStatusBoard::new();
        board.set(SupportedNetwork::Ethereum, PostTxStatus::Pending);
        assert_eq!(board.current(SupportedNetwork::Ethereum), PostTxStatus::Pending);
        assert_eq!(board.current(SupportedNetwork::Polygon), PostTxStatus::Ready);
    }

    #[test]
    fn test_last_writer_wins() {
        let board = TxStatusBoard::new();
        board.set(SupportedNetwork::Polygon, PostTxStatus::Pending);
        board.set(
            SupportedNetwork::Polygon,
            PostTxStatus::Error {
                message: "boom".into(),
            },
        );
        assert!(matches!(
            board.current(SupportedNetwork::Polygon),
            PostTxStatus::Error { message } if message == "boom"
        ));
    }
}
