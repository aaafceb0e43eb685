//! Chain-id resolution against node endpoints
//!
//! A network's chain id is read from the node-info endpoint
//! (`/cosmos/base/tendermint/v1beta1/node_info`). The id is needed once per
//! network at client construction; the three networks are queried
//! concurrently and independently.

use serde::Deserialize;
use tracing::debug;

use crate::errors::NodeError;
use crate::types::{ChainId, ChainIds, ClientUrl};

/// Path of the Tendermint node-info endpoint, relative to a node URL.
const NODE_INFO_PATH: &str = "cosmos/base/tendermint/v1beta1/node_info";

/// Response envelope of the node-info endpoint.
///
/// Only `network` (the chain id) is of interest; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfoResponse {
    pub default_node_info: DefaultNodeInfo,
}

/// The `default_node_info` object of a node-info response.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultNodeInfo {
    /// Chain id, e.g. `"thorchain-mainnet-v1"`.
    pub network: String,
}

/// Fetch the chain id from a node's node-info endpoint.
///
/// # Errors
///
/// Fails if the request cannot be completed, the response is non-2xx or does
/// not match the node-info envelope, or the reported chain id is empty.
pub async fn get_chain_id(client: &reqwest::Client, node_url: &str) -> Result<ChainId, NodeError> {
    let url = format!("{}/{}", node_url.trim_end_matches('/'), NODE_INFO_PATH);

    let response = client
        .get(&url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| NodeError::request_failed(&url, e))?;

    let info: NodeInfoResponse = response
        .json()
        .await
        .map_err(|e| NodeError::malformed_response(&url, e))?;

    let chain_id = info.default_node_info.network;
    if chain_id.is_empty() {
        return Err(NodeError::MissingChainId { url });
    }

    debug!(node_url, chain_id, "resolved chain id");
    Ok(chain_id)
}

/// Fetch the chain ids of all three networks concurrently.
///
/// The per-network requests are independent; the first failure is returned.
pub async fn get_chain_ids(
    client: &reqwest::Client,
    client_url: &ClientUrl,
) -> Result<ChainIds, NodeError> {
    let (mainnet, stagenet, testnet) = futures::future::try_join3(
        get_chain_id(client, &client_url.mainnet.node),
        get_chain_id(client, &client_url.stagenet.node),
        get_chain_id(client, &client_url.testnet.node),
    )
    .await?;
    Ok(ChainIds {
        mainnet,
        stagenet,
        testnet,
    })
}
