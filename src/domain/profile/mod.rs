//! Profile domain — identity records on the social graph.

#[cfg(feature = "http")]
pub mod client;
pub mod image;
pub mod wire;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::shared::{ProfileId, Uri};

/// A Lens profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub handle: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub owned_by: Address,
    #[serde(default)]
    pub is_default: bool,
    /// URI of the profile's current metadata document.
    #[serde(default)]
    pub metadata: Option<Uri>,
    #[serde(default)]
    pub dispatcher: Option<Dispatcher>,
}

impl Profile {
    /// Whether metadata updates for this profile can go through the
    /// dispatcher relay instead of sign + broadcast.
    ///
    /// Read at request time; the capability is owned by the API, not by this
    /// SDK.
    pub fn can_use_relay(&self) -> bool {
        self.dispatcher
            .as_ref()
            .map(|d| d.can_use_relay)
            .unwrap_or(false)
    }
}

/// Dispatcher delegation attached to a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dispatcher {
    #[serde(default)]
    pub address: Option<Address>,
    pub can_use_relay: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_use_relay_defaults_false() {
        let json = serde_json::json!({
            "id": "0x2d",
            "handle": "alice.lens",
            "ownedBy": "0x1111111111111111111111111111111111111111"
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert!(!profile.can_use_relay());
    }

    #[test]
    fn test_can_use_relay_reads_dispatcher() {
        let json = serde_json::json!({
            "id": "0x2d",
            "handle": "alice.lens",
            "ownedBy": "0x1111111111111111111111111111111111111111",
            "dispatcher": { "address": null, "canUseRelay": true }
        });
        let profile: Profile = serde_json::from_value(json).unwrap();
        assert!(profile.can_use_relay());
    }
}
