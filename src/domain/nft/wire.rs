//! Wire types for NFT responses.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// An NFT owned by an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    #[serde(default)]
    pub contract_name: Option<String>,
    pub contract_address: Address,
    #[serde(default)]
    pub symbol: Option<String>,
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    pub chain_id: u64,
    #[serde(default, rename = "contentURI")]
    pub content_uri: Option<String>,
}
