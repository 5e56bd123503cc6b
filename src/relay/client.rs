//! Relay submission and the metadata-update orchestration.
//!
//! Generic over [`GraphqlTransport`] and [`ProfileSigner`] so the full
//! pipeline runs against in-memory fakes in tests.

use serde_json::json;

use crate::error::{RelayError, SdkError};
use crate::graphql::operations;
use crate::graphql::transport::{query_field, GraphqlTransport};
use crate::network::SupportedNetwork;
use crate::relay::poll::{poll_until_indexed, PollConfig};
use crate::relay::status::{PostTxStatus, TxStatusBoard};
use crate::relay::wire::{RelayResponse, TypedDataResponse};
use crate::relay::{MetadataUpdateReceipt, MetadataUpdateRequest, RelaySubmission, TxRef};
use crate::signer::{signature_hex, ProfileSigner};

/// Submit a metadata update through exactly one of the two relay paths.
///
/// With `can_use_relay`, the dispatcher relays the mutation directly and no
/// client-side signature is involved. Without it, the API's typed data is
/// signed by `signer` and broadcast. Rejections are hard failures; nothing
/// here retries.
pub async fn submit_metadata_update<G, S>(
    transport: &G,
    signer: &S,
    request: &MetadataUpdateRequest,
    can_use_relay: bool,
) -> Result<RelaySubmission, SdkError>
where
    G: GraphqlTransport,
    S: ProfileSigner,
{
    if can_use_relay {
        tracing::debug!(profile = %request.profile_id, "submitting via dispatcher");
        let response: RelayResponse = query_field(
            transport,
            &operations::CREATE_SET_PROFILE_METADATA_VIA_DISPATCHER,
            "createSetProfileMetadataViaDispatcher",
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
    } else {
        tracing::debug!(profile = %request.profile_id, "submitting via sign + broadcast");
        let typed: TypedDataResponse = query_field(
            transport,
            &operations::CREATE_SET_PROFILE_METADATA_TYPED_DATA,
            "createSetProfileMetadataTypedData",
            json!({ "request": request }),
        )
        .await?;

        sign_and_broadcast(transport, signer, &typed).await
    }
}

/// Sign a server-provided typed-data payload and broadcast it.
///
/// Shared by the metadata and profile-image broadcast paths.
pub(crate) async fn sign_and_broadcast<G, S>(
    transport: &G,
    signer: &S,
    typed: &TypedDataResponse,
) -> Result<RelaySubmission, SdkError>
where
    G: GraphqlTransport,
    S: ProfileSigner,
{
    let payload = typed.to_eip712()?;
    let signature = signer.sign_typed_data(&payload).await?;

    let response: RelayResponse = query_field(
        transport,
        &operations::BROADCAST,
        "broadcast",
        json!({ "request": { "id": typed.id, "signature": signature_hex(&signature) } }),
    )
    .await?;

    match response {
        RelayResponse::RelayerResult { tx_hash, tx_id } => Ok(RelaySubmission { tx_hash, tx_id }),
        RelayResponse::RelayError { reason } => Err(RelayError::BroadcastRejected(reason).into()),
    }
}

/// Run the full metadata-update pipeline: submit, report broadcast, poll to a
/// terminal indexing state, report the outcome.
///
/// This is the single catch boundary of the orchestration: every failure is
/// written to the status board exactly once and returned to the caller. No
/// rollback is attempted — a broadcast transaction can only be reported.
pub async fn execute_metadata_update<G, S>(
    transport: &G,
    signer: &S,
    status: &TxStatusBoard,
    network: SupportedNetwork,
    poll: &PollConfig,
    request: MetadataUpdateRequest,
    can_use_relay: bool,
) -> Result<MetadataUpdateReceipt, SdkError>
where
    G: GraphqlTransport,
    S: ProfileSigner,
{
    status.set(network, PostTxStatus::Pending);

    let outcome: Result<MetadataUpdateReceipt, SdkError> = async {
        let submission = submit_metadata_update(transport, signer, &request, can_use_relay).await?;
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

        Ok(MetadataUpdateReceipt {
            tx_hash: submission.tx_hash,
            tx_id: submission.tx_id,
            metadata: request.metadata,
            receipt: indexed.tx_receipt,
        })
    }
    .await;

    if let Err(error) = &outcome {
        tracing::warn!(%network, %error, "metadata update failed");
        status.set(
            network,
            PostTxStatus::Error {
                message: error.to_string(),
            },
        );
    }

    outcome
}
