//! Local keypair signing — only available with the `local-signer` feature.

use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, Signature};
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;

use crate::error::SignerError;
use crate::signer::ProfileSigner;

/// A [`ProfileSigner`] backed by an in-process secp256k1 private key.
///
/// Intended for CLIs, tests, and server-side automation. Mobile/browser
/// integrations should implement [`ProfileSigner`] over their wallet bridge
/// instead of exporting key material.
pub struct LocalSigner {
    inner: PrivateKeySigner,
}

impl LocalSigner {
    pub fn new(inner: PrivateKeySigner) -> Self {
        Self { inner }
    }

    /// Parse a `0x`-prefixed private key.
    pub fn from_hex(private_key: &str) -> Result<Self, SignerError> {
        let inner: PrivateKeySigner = private_key
            .parse()
            .map_err(|e: alloy_signer_local::LocalSignerError| SignerError::Failed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Generate a signer from OS randomness.
    pub fn random() -> Self {
        Self {
            inner: PrivateKeySigner::random(),
        }
    }
}

impl ProfileSigner for LocalSigner {
    fn address(&self) -> Address {
        self.inner.address()
    }

    async fn sign_message(&self, message: &str) -> Result<Signature, SignerError> {
        self.inner
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| SignerError::Failed(e.to_string()))
    }

    async fn sign_typed_data(&self, typed_data: &TypedData) -> Result<Signature, SignerError> {
        self.inner
            .sign_dynamic_typed_data(typed_data)
            .await
            .map_err(|e| SignerError::Failed(e.to_string()))
    }
}
