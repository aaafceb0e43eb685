//! Core value types for thorscan.
//!
//! Everything in this tree is plain value data with no shared mutable state:
//! - Asset identity and the unknown-denomination sentinel
//! - Base-unit amounts (arbitrary precision, fixed decimal exponent)
//! - Transaction log wire types and decoded transfer data
//! - Network identity and per-network configuration maps

mod amount;
mod asset;
mod log;
mod network;

pub use amount::BaseAmount;
pub use asset::{Asset, DecodedAsset};
pub use log::{Attribute, LogEvent, TxData, TxFrom, TxLog, TxTo};
pub use network::{
    ChainId, ChainIds, ClientUrl, ExplorerUrl, ExplorerUrls, Network, NodeUrl, PerNetwork,
};
