//! Profiles sub-client — queries, profile creation, and image updates.

use alloy_primitives::Address;
use serde_json::json;

use crate::client::LensClient;
use crate::domain::profile::image::{execute_image_update, ImageUpdateReceipt};
use crate::domain::profile::wire::{CreateProfileRequest, ProfilesRequest};
use crate::domain::profile::Profile;
use crate::error::{RelayError, SdkError};
use crate::graphql::operations;
use crate::graphql::transport::{query_field, query_optional_field};
use crate::network::SupportedNetwork;
use crate::relay::wire::RelayResponse;
use crate::relay::RelaySubmission;
use crate::shared::{Paginated, ProfileId};
use crate::signer::ProfileSigner;

/// Sub-client for profile operations.
pub struct Profiles<'a> {
    pub(crate) client: &'a LensClient,
}

impl<'a> Profiles<'a> {
    /// Fetch a single profile by id, or `None` if it does not exist.
    pub async fn get(&self, profile_id: &ProfileId) -> Result<Option<Profile>, SdkError> {
        query_optional_field(
            &self.client.graphql,
            &operations::PROFILE,
            "profile",
            json!({ "request": { "profileId": profile_id } }),
        )
        .await
    }

    /// Fetch a page of profiles matching the request filters.
    pub async fn get_many(
        &self,
        request: &ProfilesRequest,
    ) -> Result<Paginated<Profile>, SdkError> {
        query_field(
            &self.client.graphql,
            &operations::PROFILES,
            "profiles",
            json!({ "request": request }),
        )
        .await
    }

    /// The default profile of an address, if it has one.
    pub async fn default_profile(&self, address: Address) -> Result<Option<Profile>, SdkError> {
        query_optional_field(
            &self.client.graphql,
            &operations::DEFAULT_PROFILE,
            "defaultProfile",
            json!({ "request": { "ethereumAddress": address } }),
        )
        .await
    }

    /// Create a new profile through the relayer.
    pub async fn create(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<RelaySubmission, SdkError> {
        let response: RelayResponse = query_field(
            &self.client.graphql,
            &operations::CREATE_PROFILE,
            "createProfile",
            json!({ "request": request }),
        )
        .await?;

        match response {
            RelayResponse::RelayerResult { tx_hash, tx_id } => {
                Ok(RelaySubmission { tx_hash, tx_id })
            }
            RelayResponse::RelayError { reason } => {
                Err(RelayError::DispatcherRejected(reason).into())
            }
        }
    }

    /// Point a profile's picture at an NFT the signer owns.
    ///
    /// Ownership is proven by signing the API's challenge; the resulting
    /// typed data is signed and broadcast through the relayer, then polled to
    /// a terminal indexing state. Progress is published on the status board
    /// slot for `network`.
    pub async fn update_image(
        &self,
        signer: &impl ProfileSigner,
        profile_id: &ProfileId,
        contract_address: Address,
        token_id: &str,
        network: SupportedNetwork,
    ) -> Result<ImageUpdateReceipt, SdkError> {
        execute_image_update(
            &self.client.graphql,
            signer,
            &self.client.status,
            network,
            network.chain_id(self.client.env),
            &self.client.poll,
            profile_id,
            contract_address,
            token_id,
        )
        .await
    }
}
