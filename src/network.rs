//! Network constants and supported chains.

use serde::{Deserialize, Serialize};

/// Lens API endpoint for mainnet (Polygon).
pub const MAINNET_API_URL: &str = "https://api.lens.dev";

/// Lens API endpoint for testnet (Mumbai).
pub const TESTNET_API_URL: &str = "https://api-mumbai.lens.dev";

/// Which deployment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkEnv {
    #[default]
    Mainnet,
    Testnet,
}

impl NetworkEnv {
    pub fn api_url(&self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_API_URL,
            Self::Testnet => TESTNET_API_URL,
        }
    }
}

/// Chains the app posts transactions on.
///
/// One transaction-status slot exists per network (see
/// [`crate::relay::status::TxStatusBoard`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedNetwork {
    Ethereum,
    Polygon,
    Klaytn,
}

impl SupportedNetwork {
    /// All supported networks, in slot order.
    pub const ALL: [SupportedNetwork; 3] = [Self::Ethereum, Self::Polygon, Self::Klaytn];

    /// EVM chain id for the given deployment.
    pub fn chain_id(&self, env: NetworkEnv) -> u64 {
        match (self, env) {
            (Self::Ethereum, NetworkEnv::Mainnet) => 1,
            (Self::Ethereum, NetworkEnv::Testnet) => 5,
            (Self::Polygon, NetworkEnv::Mainnet) => 137,
            (Self::Polygon, NetworkEnv::Testnet) => 80001,
            (Self::Klaytn, NetworkEnv::Mainnet) => 8217,
            (Self::Klaytn, NetworkEnv::Testnet) => 1001,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::Klaytn => "klaytn",
        }
    }
}

impl std::fmt::Display for SupportedNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
