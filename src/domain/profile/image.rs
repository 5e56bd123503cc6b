//! Profile-image update pipeline.
//!
//! Same shape as the metadata orchestration in [`crate::relay::client`]:
//! generic over [`GraphqlTransport`] and [`ProfileSigner`] so the full flow
//! runs against in-memory fakes, with a single catch boundary writing the
//! status board.

use alloy_primitives::Address;
use serde_json::json;

use crate::domain::profile::wire::{NftOwnershipChallenge, OwnedNftRef};
use crate::error::SdkError;
use crate::graphql::operations;
use crate::graphql::transport::{query_field, GraphqlTransport};
use crate::network::SupportedNetwork;
use crate::relay::client::sign_and_broadcast;
use crate::relay::poll::{poll_until_indexed, PollConfig};
use crate::relay::status::{PostTxStatus, TxStatusBoard};
use crate::relay::wire::{TransactionReceipt, TypedDataResponse};
use crate::relay::TxRef;
use crate::shared::{ProfileId, TxHash, TxId};
use crate::signer::{signature_hex, ProfileSigner};

/// Final result of a successful profile-image update.
#[derive(Debug, Clone)]
pub struct ImageUpdateReceipt {
    pub tx_hash: TxHash,
    pub tx_id: TxId,
    pub receipt: Option<TransactionReceipt>,
}

/// Run the full image-update pipeline: ownership challenge → challenge
/// signature → typed data → broadcast → poll, reported through the status
/// board.
///
/// Like [`crate::relay::client::execute_metadata_update`], this is a single
/// catch boundary: every failure is written to the status board exactly once
/// and returned to the caller.
#[allow(clippy::too_many_arguments)]
pub async fn execute_image_update<G, S>(
    transport: &G,
    signer: &S,
    status: &TxStatusBoard,
    network: SupportedNetwork,
    chain_id: u64,
    poll: &PollConfig,
    profile_id: &ProfileId,
    contract_address: Address,
    token_id: &str,
) -> Result<ImageUpdateReceipt, SdkError>
where
    G: GraphqlTransport,
    S: ProfileSigner,
{
    status.set(network, PostTxStatus::Pending);

    let outcome = image_update_inner(
        transport,
        signer,
        status,
        network,
        chain_id,
        poll,
        profile_id,
        contract_address,
        token_id,
    )
    .await;

    if let Err(error) = &outcome {
        tracing::warn!(%network, %error, "profile image update failed");
        status.set(
            network,
            PostTxStatus::Error {
                message: error.to_string(),
            },
        );
    }

    outcome
}

#[allow(clippy::too_many_arguments)]
async fn image_update_inner<G, S>(
    transport: &G,
    signer: &S,
    status: &TxStatusBoard,
    network: SupportedNetwork,
    chain_id: u64,
    poll: &PollConfig,
    profile_id: &ProfileId,
    contract_address: Address,
    token_id: &str,
) -> Result<ImageUpdateReceipt, SdkError>
where
    G: GraphqlTransport,
    S: ProfileSigner,
{
    let nft_ref = OwnedNftRef {
        contract_address,
        token_id: token_id.to_string(),
        chain_id,
    };
    let challenge: NftOwnershipChallenge = query_field(
        transport,
        &operations::NFT_OWNERSHIP_CHALLENGE,
        "nftOwnershipChallenge",
        json!({ "request": {
            "ethereumAddress": signer.address(),
            "nfts": [nft_ref]
        } }),
    )
    .await?;

    let challenge_signature = signer.sign_message(&challenge.text).await?;

    let typed: TypedDataResponse = query_field(
        transport,
        &operations::CREATE_SET_PROFILE_IMAGE_URI_TYPED_DATA,
        "createSetProfileImageURITypedData",
        json!({ "request": {
            "profileId": profile_id,
            "nftData": {
                "id": challenge.id,
                "signature": signature_hex(&challenge_signature)
            }
        } }),
    )
    .await?;

    let submission = sign_and_broadcast(transport, signer, &typed).await?;
    status.set(
        network,
        PostTxStatus::Broadcast {
            tx_hash: submission.tx_hash.clone(),
        },
    );

    let indexed =
        poll_until_indexed(transport, &TxRef::TxId(submission.tx_id.clone()), poll).await?;
    status.set(
        network,
        PostTxStatus::Done {
            receipt: indexed.tx_receipt.clone(),
        },
    );

    Ok(ImageUpdateReceipt {
        tx_hash: submission.tx_hash,
        tx_id: submission.tx_id,
        receipt: indexed.tx_receipt,
    })
}
