//! Wallet signing abstraction.
//!
//! The SDK never holds key material itself. Everything that needs a
//! signature takes a [`ProfileSigner`] by reference, so the same relay code
//! works with a local keypair (the `local-signer` feature), a hardware
//! wallet, or an embedded-wallet bridge.

#[cfg(feature = "local-signer")]
pub mod local;

#[cfg(feature = "local-signer")]
pub use local::LocalSigner;

use std::future::Future;

use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, Signature};

use crate::error::SignerError;

/// A wallet capable of plain-message and EIP-712 typed-data signing.
pub trait ProfileSigner: Send + Sync {
    /// The signer's EVM address.
    fn address(&self) -> Address;

    /// Sign a human-readable message (EIP-191 personal sign).
    fn sign_message(
        &self,
        message: &str,
    ) -> impl Future<Output = Result<Signature, SignerError>> + Send;

    /// Sign an EIP-712 typed-data payload.
    fn sign_typed_data(
        &self,
        typed_data: &TypedData,
    ) -> impl Future<Output = Result<Signature, SignerError>> + Send;
}

/// Hex-encode a signature the way the Lens broadcast endpoint expects it:
/// 65 bytes of `r || s || v`, `0x`-prefixed.
pub fn signature_hex(signature: &Signature) -> String {
    format!("0x{}", hex::encode(signature.as_bytes()))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic signers for unit tests.

    use alloy_dyn_abi::TypedData;
    use alloy_primitives::{Address, Signature, U256};

    use crate::error::SignerError;

    use super::ProfileSigner;

    /// Returns a fixed signature for every request.
    pub(crate) struct StaticSigner {
        pub address: Address,
    }

    impl StaticSigner {
        pub fn new() -> Self {
            Self {
                address: Address::repeat_byte(0x11),
            }
        }

        fn signature() -> Signature {
            Signature::new(U256::from(1u64), U256::from(2u64), false)
        }
    }

    impl ProfileSigner for StaticSigner {
        fn address(&self) -> Address {
            self.address
        }

        async fn sign_message(&self, _message: &str) -> Result<Signature, SignerError> {
            Ok(Self::signature())
        }

        async fn sign_typed_data(
            &self,
            _typed_data: &TypedData,
        ) -> Result<Signature, SignerError> {
            Ok(Self::signature())
        }
    }

    /// Refuses every signing request, as a user declining a wallet prompt.
    pub(crate) struct RefusingSigner;

    impl ProfileSigner for RefusingSigner {
        fn address(&self) -> Address {
            Address::repeat_byte(0x22)
        }

        async fn sign_message(&self, _message: &str) -> Result<Signature, SignerError> {
            Err(SignerError::Rejected("user declined".to_string()))
        }

        async fn sign_typed_data(
            &self,
            _typed_data: &TypedData,
        ) -> Result<Signature, SignerError> {
            Err(SignerError::Rejected("user declined".to_string()))
        }
    }
}
