//! Shared newtypes and pagination containers used across all domain modules.
//!
//! The newtypes are serialization-transparent: they serialize/deserialize as
//! the plain JSON strings the Lens API sends, so they can be used directly in
//! wire types without conversion overhead.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── ProfileId ───────────────────────────────────────────────────────────────

/// Lens profile identifier (a hex string such as `"0x2d"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ProfileId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProfileId(s.to_string()))
    }
}

// ─── TxHash / TxId ───────────────────────────────────────────────────────────

/// On-chain transaction hash, as returned by the relayer (`"0x…"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Relayer-side tracking id for a submitted transaction.
///
/// Unlike [`TxHash`] this is assigned before the transaction is mined and is
/// the preferred reference for indexing polls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TxId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ─── Uri ─────────────────────────────────────────────────────────────────────

/// A content-addressed URI (typically `ipfs://…` or an IPFS gateway URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Cursor information attached to every paginated Lens response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub prev: Option<String>,
    pub next: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// A page of items plus the cursors to fetch its neighbors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Paginated<T> {
    /// Cursor for the next page, if the server reports one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.page_info.next.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newtypes_serialize_transparently() {
        let id = ProfileId::new("0x2d");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""0x2d""#);

        let hash: TxHash = "0xabc".into();
        assert_eq!(serde_json::to_string(&hash).unwrap(), r#""0xabc""#);
    }

    #[test]
    fn test_paginated_roundtrip() {
        let json = r#"{
            "items": ["0x01", "0x02"],
            "pageInfo": { "prev": null, "next": "cursor-2", "totalCount": 9 }
        }"#;
        let page: Paginated<ProfileId> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor(), Some("cursor-2"));
        assert_eq!(page.page_info.total_count, Some(9));
    }
}
