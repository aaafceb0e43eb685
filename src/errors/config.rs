//! Errors from client configuration validation.

use crate::types::Network;

/// Errors raised when validating a client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configured endpoint is not a parseable URL.
    #[error("invalid {kind} URL for {network}: {value}")]
    InvalidUrl {
        /// Which network the endpoint belongs to
        network: Network,
        /// What the endpoint is for (`"node"`, `"rpc"`, `"explorer"`)
        kind: &'static str,
        /// The offending value
        value: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}
