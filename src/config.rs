//! Client configuration and per-network defaults
//!
//! Default endpoint and explorer tables for the three networks, plus the
//! immutable [`ClientConfig`] aggregate constructed once at startup and
//! passed by reference to collaborators. Chain ids cannot be defaulted; they
//! are resolved at construction time via [`crate::get_chain_ids`].

use url::Url;

use crate::errors::ConfigError;
use crate::types::{
    ChainIds, ClientUrl, ExplorerUrl, ExplorerUrls, Network, NodeUrl, PerNetwork,
};

/// Explorer root shared by the non-testnet networks.
const EXPLORER_ROOT: &str = "https://viewblock.io/thorchain";

/// Query suffix the explorer expects for testnet pages.
const TESTNET_QUERY: &str = "?network=testnet";

/// Default node and RPC endpoints per network.
pub fn default_client_url() -> ClientUrl {
    PerNetwork::new(
        NodeUrl {
            node: "https://thornode.ninerealms.com".to_string(),
            rpc: "https://rpc.ninerealms.com".to_string(),
        },
        NodeUrl {
            node: "https://stagenet-thornode.ninerealms.com".to_string(),
            rpc: "https://stagenet-rpc.ninerealms.com".to_string(),
        },
        NodeUrl {
            node: "https://testnet.thornode.thorchain.info".to_string(),
            rpc: "https://testnet.rpc.thorchain.info".to_string(),
        },
    )
}

/// Default explorer URL templates per network.
///
/// The testnet templates carry the `?network=testnet` suffix; the URL
/// builders in [`crate::explorer`] insert path segments before it.
pub fn default_explorer_urls() -> ExplorerUrls {
    let with_paths = |path: &str| -> ExplorerUrl {
        PerNetwork::new(
            format!("{EXPLORER_ROOT}{path}"),
            format!("{EXPLORER_ROOT}{path}"),
            format!("{EXPLORER_ROOT}{path}{TESTNET_QUERY}"),
        )
    };
    ExplorerUrls {
        root: with_paths(""),
        tx: with_paths("/tx"),
        address: with_paths("/address"),
    }
}

/// Bech32 address prefix of the given network.
pub fn get_prefix(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "thor",
        Network::Stagenet => "sthor",
        Network::Testnet => "tthor",
    }
}

/// Immutable client configuration.
///
/// Constructed once at startup, with defaults applied for anything not
/// overridden, and passed by reference to all collaborators. There is no
/// hidden process-wide configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub client_url: ClientUrl,
    pub explorer_urls: ExplorerUrls,
    pub chain_ids: ChainIds,
}

impl ClientConfig {
    /// Build a configuration from resolved chain ids and default endpoints.
    pub fn new(chain_ids: ChainIds) -> Self {
        Self {
            client_url: default_client_url(),
            explorer_urls: default_explorer_urls(),
            chain_ids,
        }
    }

    /// Override the node endpoints.
    pub fn with_client_url(mut self, client_url: ClientUrl) -> Self {
        self.client_url = client_url;
        self
    }

    /// Override the explorer URL templates.
    pub fn with_explorer_urls(mut self, explorer_urls: ExplorerUrls) -> Self {
        self.explorer_urls = explorer_urls;
        self
    }

    /// Check that every configured endpoint parses as a URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for network in Network::ALL {
            let node_url = self.client_url.for_network(network);
            check_url(network, "node", &node_url.node)?;
            check_url(network, "rpc", &node_url.rpc)?;
            check_url(network, "explorer", self.explorer_urls.root.for_network(network))?;
            check_url(network, "explorer tx", self.explorer_urls.tx.for_network(network))?;
            check_url(
                network,
                "explorer address",
                self.explorer_urls.address.for_network(network),
            )?;
        }
        Ok(())
    }
}

fn check_url(network: Network, kind: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        network,
        kind,
        value: value.to_string(),
        source,
    })?;
    Ok(())
}
