//! Network identity and per-network configuration maps
//!
//! The chain runs three long-lived networks. All per-network configuration is
//! held in explicit immutable maps constructed once at startup; nothing here
//! is a hidden process-wide default.

use serde::{Deserialize, Serialize};

/// The three long-lived networks of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Stagenet,
    Testnet,
}

impl Network {
    /// All networks, in the order they appear in configuration maps.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Stagenet, Network::Testnet];
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Stagenet => "stagenet",
            Network::Testnet => "testnet",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "stagenet" => Ok(Network::Stagenet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// An immutable value held once per network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerNetwork<T> {
    pub mainnet: T,
    pub stagenet: T,
    pub testnet: T,
}

impl<T> PerNetwork<T> {
    pub fn new(mainnet: T, stagenet: T, testnet: T) -> Self {
        Self {
            mainnet,
            stagenet,
            testnet,
        }
    }

    /// The entry for the given network.
    pub fn for_network(&self, network: Network) -> &T {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Stagenet => &self.stagenet,
            Network::Testnet => &self.testnet,
        }
    }
}

/// REST and Tendermint RPC endpoints of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeUrl {
    /// REST (LCD) endpoint, e.g. `https://thornode.ninerealms.com`.
    pub node: String,
    /// Tendermint RPC endpoint.
    pub rpc: String,
}

/// Node endpoints per network.
pub type ClientUrl = PerNetwork<NodeUrl>;

/// One explorer URL template per network. Templates may carry a `?query`
/// suffix; path segments are inserted before it.
pub type ExplorerUrl = PerNetwork<String>;

/// Explorer URL templates for the three page kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerUrls {
    pub root: ExplorerUrl,
    pub tx: ExplorerUrl,
    pub address: ExplorerUrl,
}

/// A chain id as reported by a node, e.g. `"thorchain-mainnet-v1"`.
pub type ChainId = String;

/// Chain ids per network.
pub type ChainIds = PerNetwork<ChainId>;
