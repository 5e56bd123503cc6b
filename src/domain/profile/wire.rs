//! Wire types for profile requests.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::shared::{ProfileId, Uri};

/// Filter for the paginated `Profiles` query.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_ids: Option<Vec<ProfileId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Request body for the `CreateProfile` mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_uri: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_nft_uri: Option<Uri>,
}

/// NFT-ownership challenge issued before an image update.
#[derive(Debug, Clone, Deserialize)]
pub struct NftOwnershipChallenge {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub timeout: Option<u64>,
}

/// One NFT named in an ownership challenge request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedNftRef {
    pub contract_address: Address,
    pub token_id: String,
    pub chain_id: u64,
}
