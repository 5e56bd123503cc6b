//! NFTs sub-client — cursor-paginated ownership queries.

use alloy_primitives::Address;
use serde_json::json;

use crate::client::LensClient;
use crate::domain::nft::{is_plumbing, Nft};
use crate::error::SdkError;
use crate::graphql::operations;
use crate::graphql::transport::query_field;
use crate::network::SupportedNetwork;
use crate::shared::Paginated;

/// Sub-client for NFT queries.
pub struct Nfts<'a> {
    pub(crate) client: &'a LensClient,
}

impl<'a> Nfts<'a> {
    /// One page of NFTs owned by `owner` on the given chains.
    ///
    /// Social-graph plumbing tokens (follow NFTs and messaging collections)
    /// are filtered out of the page; the cursor still advances over them.
    pub async fn owned(
        &self,
        owner: Address,
        chains: &[SupportedNetwork],
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<Paginated<Nft>, SdkError> {
        let chain_ids: Vec<u64> = chains
            .iter()
            .map(|network| network.chain_id(self.client.env))
            .collect();

        let mut request = json!({
            "ownerAddress": owner,
            "chainIds": chain_ids,
        });
        if let Some(limit) = limit {
            request["limit"] = json!(limit);
        }
        if let Some(cursor) = cursor {
            request["cursor"] = json!(cursor);
        }

        let mut page: Paginated<Nft> = query_field(
            &self.client.graphql,
            &operations::NFTS,
            "nfts",
            json!({ "request": request }),
        )
        .await?;

        page.items.retain(|nft| !is_plumbing(nft));
        Ok(page)
    }
}
