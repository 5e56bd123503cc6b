//! NFT domain — tokens owned by an address, as the indexer reports them.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::Nft;

/// Collection-name fragments that mark social-graph plumbing tokens
/// (follow NFTs, messaging collections) rather than user-facing items.
const PLUMBING_NAME_FRAGMENTS: [&str; 2] = ["-Follower", "Dispatch-Messaging"];

/// Whether an NFT is social-graph plumbing that galleries should hide.
pub fn is_plumbing(nft: &Nft) -> bool {
    let name = nft.contract_name.as_deref().unwrap_or_default();
    let collection = nft.collection_name.as_deref().unwrap_or_default();
    PLUMBING_NAME_FRAGMENTS
        .iter()
        .any(|fragment| name.contains(fragment) || collection.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nft(contract_name: &str) -> Nft {
        Nft {
            contract_name: Some(contract_name.to_string()),
            contract_address: alloy_primitives::Address::ZERO,
            symbol: None,
            token_id: "1".to_string(),
            name: None,
            description: None,
            collection_name: None,
            chain_id: 137,
            content_uri: None,
        }
    }

    #[test]
    fn test_follow_nfts_are_plumbing() {
        assert!(is_plumbing(&nft("alice.lens-Follower")));
        assert!(is_plumbing(&nft("Dispatch-Messaging-0x2d")));
        assert!(!is_plumbing(&nft("Cool Cats")));
    }
}
