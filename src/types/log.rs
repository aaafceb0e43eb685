//! Transaction log wire types and decoded transfer data
//!
//! These mirror the Cosmos SDK log envelope attached to a transaction query:
//! each message produces one [`TxLog`] holding a flat list of typed events,
//! each event a list of ordered string key/value attributes. Values are
//! strings even when numeric.

use serde::{Deserialize, Serialize};

use super::amount::BaseAmount;

/// One key/value pair inside a log event.
///
/// Attribute order is significant: transfer events pack several legs into one
/// event by repeating the `sender`/`recipient`/`amount` keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// A typed event emitted by one message of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event type tag, e.g. `"transfer"`, `"message"`, `"coin_spent"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Ordered attribute list as emitted by the node.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// The log entry for one message of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxLog {
    #[serde(default)]
    pub msg_index: Option<u64>,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub events: Vec<LogEvent>,
}

/// One sending side of a transfer leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxFrom {
    /// Sender address.
    pub from: String,
    /// Amount moved by this leg, in base units.
    pub amount: BaseAmount,
}

/// One receiving side of a transfer leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxTo {
    /// Recipient address.
    pub to: String,
    /// Amount moved by this leg, in base units.
    pub amount: BaseAmount,
}

/// Reconstructed value movement of one transaction.
///
/// `from` and `to` are parallel in emission order: the n-th entry of each
/// describes the n-th transfer leg, which is how callers split fee and
/// principal legs positionally. The two lists are not guaranteed equal-length
/// in general and must not be assumed symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxData {
    pub from: Vec<TxFrom>,
    pub to: Vec<TxTo>,
    /// `"transfer"` when at least one leg was decoded, `""` otherwise.
    #[serde(rename = "type")]
    pub tx_type: String,
}
