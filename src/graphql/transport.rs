//! The transport seam between the orchestration logic and the wire.
//!
//! The relay client, the indexing poller, and every sub-client issue
//! operations through [`GraphqlTransport`], never through `reqwest` directly.
//! Tests drive them with the in-memory transport in this module's test
//! support; production uses [`crate::graphql::LensGraphql`].

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GraphqlError, SdkError};
use crate::graphql::operations::Operation;

/// Executes a GraphQL operation and returns the `data` payload.
pub trait GraphqlTransport: Send + Sync {
    fn execute(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> impl Future<Output = Result<Value, GraphqlError>> + Send;
}

/// Execute `operation` and deserialize the single top-level `field` of its
/// `data` payload.
///
/// Every Lens operation returns exactly one root field named after the
/// operation, so this is the shape all sub-clients use.
pub(crate) async fn query_field<T, G>(
    transport: &G,
    operation: &Operation,
    field: &'static str,
    variables: Value,
) -> Result<T, SdkError>
where
    T: DeserializeOwned,
    G: GraphqlTransport,
{
    let data = transport.execute(operation, variables).await?;
    let value = data
        .get(field)
        .filter(|v| !v.is_null())
        .cloned()
        .ok_or(GraphqlError::MissingField(field))?;
    serde_json::from_value(value).map_err(SdkError::Serde)
}

/// Like [`query_field`], but treat a missing or `null` field as `None`.
///
/// Lookup operations (`profile`, `defaultProfile`) return `null` for ids and
/// addresses the API does not know; that is an absent value, not a fault.
pub(crate) async fn query_optional_field<T, G>(
    transport: &G,
    operation: &Operation,
    field: &'static str,
    variables: Value,
) -> Result<Option<T>, SdkError>
where
    T: DeserializeOwned,
    G: GraphqlTransport,
{
    let data = transport.execute(operation, variables).await?;
    match data.get(field) {
        None => Ok(None),
        Some(value) if value.is_null() => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(SdkError::Serde),
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::testing::MockTransport;
    use super::*;
    use crate::error::SdkError;
    use crate::graphql::operations;

    #[derive(serde::Deserialize)]
    struct ChallengeText {
        text: String,
    }

    #[tokio::test]
    async fn test_query_field_extracts_and_deserializes() {
        let transport = MockTransport::new();
        transport.push_data(json!({ "challenge": { "text": "sign me" } }));

        let challenge: ChallengeText = query_field(
            &transport,
            &operations::CHALLENGE,
            "challenge",
            json!({ "request": { "address": "0x0" } }),
        )
        .await
        .unwrap();

        assert_eq!(challenge.text, "sign me");
        assert_eq!(transport.executed(), vec!["Challenge"]);
    }

    #[tokio::test]
    async fn test_query_field_missing_field_is_an_error() {
        let transport = MockTransport::new();
        transport.push_data(json!({ "somethingElse": {} }));

        let result: Result<ChallengeText, _> = query_field(
            &transport,
            &operations::CHALLENGE,
            "challenge",
            json!({}),
        )
        .await;

        assert!(matches!(
            result,
            Err(SdkError::Graphql(GraphqlError::MissingField("challenge")))
        ));
    }

    #[tokio::test]
    async fn test_optional_field_maps_null_to_none() {
        let transport = MockTransport::new();
        transport.push_data(json!({ "profile": null }));

        let profile: Option<ChallengeText> = query_optional_field(
            &transport,
            &operations::PROFILE,
            "profile",
            json!({ "request": { "profileId": "0xffff" } }),
        )
        .await
        .unwrap();

        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn test_optional_field_deserializes_present_value() {
        let transport = MockTransport::new();
        transport.push_data(json!({ "challenge": { "text": "sign me" } }));

        let challenge: Option<ChallengeText> = query_optional_field(
            &transport,
            &operations::CHALLENGE,
            "challenge",
            json!({}),
        )
        .await
        .unwrap();

        assert_eq!(challenge.unwrap().text, "sign me");
    }

    #[tokio::test]
    async fn test_query_field_null_field_is_an_error() {
        let transport = MockTransport::new();
        transport.push_data(json!({ "challenge": null }));

        let result: Result<ChallengeText, _> = query_field(
            &transport,
            &operations::CHALLENGE,
            "challenge",
            json!({}),
        )
        .await;

        assert!(matches!(
            result,
            Err(SdkError::Graphql(GraphqlError::MissingField("challenge")))
        ));
    }
}
