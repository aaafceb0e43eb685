//! Errors from node endpoint queries.

/// Errors that can occur while querying a chain node.
///
/// Only the HTTP collaborator fails; the decode paths in this crate degrade
/// to sentinel values instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The HTTP request could not be completed or came back non-2xx.
    #[error("node request failed for {url}")]
    RequestFailed {
        /// Endpoint that was queried
        url: String,
        /// The underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected envelope shape.
    #[error("malformed node-info response from {url}")]
    MalformedResponse {
        /// Endpoint that was queried
        url: String,
        /// The underlying deserialization error
        #[source]
        source: reqwest::Error,
    },

    /// The node-info envelope parsed but carried an empty chain id.
    #[error("node info from {url} carried no chain id")]
    MissingChainId {
        /// Endpoint that was queried
        url: String,
    },
}

impl NodeError {
    /// Helper to create a `RequestFailed` error.
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        NodeError::RequestFailed {
            url: url.into(),
            source,
        }
    }

    /// Helper to create a `MalformedResponse` error.
    pub fn malformed_response(url: impl Into<String>, source: reqwest::Error) -> Self {
        NodeError::MalformedResponse {
            url: url.into(),
            source,
        }
    }
}
