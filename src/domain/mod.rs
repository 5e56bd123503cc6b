//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching API responses/requests
//! - `client.rs` — Sub-client issuing the slice's operations

pub mod metadata;
pub mod nft;
pub mod profile;
