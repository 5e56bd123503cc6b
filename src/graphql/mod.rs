//! GraphQL transport layer — operation documents, retry policy, and the
//! `LensGraphql` client.
//!
//! Everything above this layer talks to the API through the
//! [`GraphqlTransport`] trait, so the relay orchestration and sub-clients can
//! be exercised against an in-memory transport in tests.

#[cfg(feature = "http")]
pub mod client;
pub mod operations;
pub mod retry;
pub mod transport;

#[cfg(feature = "http")]
pub use client::LensGraphql;
pub use operations::{Operation, OperationKind};
pub use retry::RetryConfig;
pub use transport::GraphqlTransport;
