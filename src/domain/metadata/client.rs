//! Metadata sub-client — the gasless metadata-update entry point.

use crate::client::LensClient;
use crate::domain::profile::Profile;
use crate::error::SdkError;
use crate::relay::client::execute_metadata_update;
use crate::relay::{MetadataUpdateReceipt, MetadataUpdateRequest};
use crate::shared::Uri;
use crate::signer::ProfileSigner;

/// Sub-client for profile metadata updates.
pub struct Metadata<'a> {
    pub(crate) client: &'a LensClient,
}

impl<'a> Metadata<'a> {
    /// Point `profile` at a new metadata document.
    ///
    /// `metadata_uri` must reference the already-uploaded document (e.g. an
    /// `ipfs://` URI); pinning it is the caller's storage concern. The
    /// dispatcher capability is read from `profile` at call time and selects
    /// the relay path. Progress is published on the status board slot for
    /// the client's transaction network.
    pub async fn set(
        &self,
        signer: &impl ProfileSigner,
        profile: &Profile,
        metadata_uri: Uri,
    ) -> Result<MetadataUpdateReceipt, SdkError> {
        let request = MetadataUpdateRequest {
            profile_id: profile.id.clone(),
            metadata: metadata_uri,
        };

        execute_metadata_update(
            &self.client.graphql,
            signer,
            &self.client.status,
            self.client.tx_network,
            &self.client.poll,
            request,
            profile.can_use_relay(),
        )
        .await
    }
}
