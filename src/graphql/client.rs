//! Low-level GraphQL client — `LensGraphql`.
//!
//! Posts operation documents to the Lens API endpoint and unwraps the
//! GraphQL envelope. Queries retry on transient transport faults; mutations
//! are submitted exactly once. Internal to the SDK — the high-level client
//! wraps this.

use std::sync::Arc;
use std::time::Duration;

use async_lock::RwLock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GraphqlError;
use crate::graphql::operations::{Operation, OperationKind};
use crate::graphql::retry::RetryConfig;
use crate::graphql::transport::GraphqlTransport;

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GraphqlEnvelope {
    data: Option<Value>,
    errors: Option<Vec<GraphqlResponseError>>,
}

#[derive(Deserialize, Debug)]
struct GraphqlResponseError {
    message: String,
}

/// Low-level HTTP transport for the Lens GraphQL API.
pub struct LensGraphql {
    endpoint: String,
    client: Client,
    /// Bearer token injected as `x-access-token`. NEVER exposed publicly.
    access_token: Arc<RwLock<Option<String>>>,
    retry: RetryConfig,
}

impl LensGraphql {
    pub fn new(endpoint: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            access_token: Arc::new(RwLock::new(None)),
            retry: RetryConfig::default(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Set the access token used for authenticated operations.
    pub(crate) async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }

    pub(crate) async fn clear_access_token(&self) {
        *self.access_token.write().await = None;
    }

    pub(crate) async fn has_access_token(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    async fn execute_with_retry(
        &self,
        operation: &Operation,
        variables: &Value,
    ) -> Result<Value, GraphqlError> {
        // Mutations are not idempotent: a duplicate dispatcher or broadcast
        // submission would relay the transaction twice.
        if operation.kind == OperationKind::Mutation {
            return self.do_execute(operation, variables).await;
        }

        let config = &self.retry;
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_execute(operation, variables).await {
                Ok(data) => return Ok(data),
                Err(e) => {
                    let should_retry = match &e {
                        GraphqlError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        GraphqlError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        GraphqlError::Timeout => true,
                        GraphqlError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            operation = operation.name,
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying query"
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(GraphqlError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_execute(
        &self,
        operation: &Operation,
        variables: &Value,
    ) -> Result<Value, GraphqlError> {
        let body = GraphqlRequest {
            query: operation.document,
            variables,
        };

        let mut req = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = self.access_token.read().await.as_ref() {
            req = req.header("x-access-token", format!("Bearer {}", token));
        }

        let resp = req.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(match status_code {
                401 => GraphqlError::Unauthorized,
                429 => GraphqlError::RateLimited {
                    retry_after_ms: None,
                },
                400..=499 => GraphqlError::BadRequest(body_text),
                _ => GraphqlError::ServerError {
                    status: status_code,
                    body: body_text,
                },
            });
        }

        let envelope = resp.json::<GraphqlEnvelope>().await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                return Err(GraphqlError::Response {
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }

        envelope
            .data
            .ok_or_else(|| GraphqlError::Decode("envelope carried no data".to_string()))
    }
}

impl GraphqlTransport for LensGraphql {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<Value, GraphqlError> {
        self.execute_with_retry(operation, &variables).await
    }
}

impl Clone for LensGraphql {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            client: self.client.clone(),
            access_token: self.access_token.clone(),
            retry: self.retry.clone(),
        }
    }
}
