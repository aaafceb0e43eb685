//! Decoding helpers for THORChain-family chains.
//!
//! Translates between the chain's wire/log representations and an
//! application-level model of assets, amounts, and transfers, and resolves
//! per-network endpoints and identifiers. All decode paths are pure,
//! synchronous, and total: malformed chain data degrades to sentinel values,
//! never to errors.

mod asset;
mod broadcast;
mod config;
mod deposit;
mod errors;
mod explorer;
mod node;
mod tx_type;
mod types;

pub use asset::*;
pub use broadcast::*;
pub use config::*;
pub use deposit::*;
pub use errors::*;
pub use explorer::*;
pub use node::*;
pub use tx_type::*;
pub use types::*;
