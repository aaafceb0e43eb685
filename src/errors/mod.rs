//! Error types for the thorscan library.
//!
//! The decode paths (asset codec, event classifier, log aggregator, broadcast
//! classifier) never error: their inputs originate from an external,
//! independently-evolving chain, so they degrade to well-defined sentinel
//! values instead. Errors here come from the two concerns that can genuinely
//! fail:
//!
//! - [`NodeError`] for HTTP queries against a chain node
//! - [`ConfigError`] for client configuration validation
//!
//! [`ThorscanError`] wraps both for callers who don't need to distinguish
//! the source; module errors convert into it via `From`, so `?` composes.

mod config;
mod node;

pub use config::ConfigError;
pub use node::NodeError;

/// Unified error type for all thorscan operations.
#[derive(Debug, thiserror::Error)]
pub enum ThorscanError {
    /// Error from a node endpoint query.
    #[error("node error: {0}")]
    Node(#[from] NodeError),

    /// Error from client configuration validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
