//! Transfer reconstruction from transaction logs
//!
//! A transaction query returns an unordered grab-bag of typed log events; the
//! value movement is buried in `transfer` events, one `(sender, recipient,
//! amount)` triple per leg, several legs packed into a single event via
//! repeated keys. [`get_deposit_tx_data_from_logs`] replays those events in
//! emission order and rebuilds who sent what to whom.

use tracing::{debug, trace};

use crate::asset::{RUNE_DECIMAL, RUNE_DENOM};
use crate::types::{BaseAmount, TxData, TxFrom, TxLog, TxTo};

/// Event type carrying value-movement legs.
const TRANSFER_EVENT_TYPE: &str = "transfer";

/// Label reported on [`TxData`] when at least one leg was decoded.
const TX_TYPE_TRANSFER: &str = "transfer";

/// One decoded `(sender, recipient, amount)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TransferLeg {
    sender: String,
    recipient: String,
    amount: BaseAmount,
}

/// Reconstruct the value movement of one transaction from its logs.
///
/// Scans every `transfer` event across all logs, grouping attributes into
/// legs in emission order. A leg participates when its sender or recipient
/// equals `address` (the signer, or any address of interest); each
/// participating leg appends one entry to `from` *and* one to `to`, so the
/// n-th entries of both lists describe the same leg. Legs are never
/// deduplicated by address: a sender fanning out to several recipients
/// surfaces once per leg, which is how callers split fee and principal.
///
/// Events the decoder does not understand are skipped silently; chain
/// upgrades add event types over time and only value transfer is
/// reconstructed here. A transaction with no transfer side effects (a pure
/// governance vote, say) yields empty lists and an empty type label, never
/// an error.
///
/// Pure over its inputs: re-running on the same log list yields identical
/// output.
pub fn get_deposit_tx_data_from_logs(logs: &[TxLog], address: &str) -> TxData {
    let legs = collect_transfer_legs(logs);

    let mut data = TxData::default();
    for leg in legs {
        if leg.sender != address && leg.recipient != address {
            trace!(
                sender = %leg.sender,
                recipient = %leg.recipient,
                "leg does not involve address, skipping"
            );
            continue;
        }
        data.from.push(TxFrom {
            from: leg.sender,
            amount: leg.amount.clone(),
        });
        data.to.push(TxTo {
            to: leg.recipient,
            amount: leg.amount,
        });
    }

    if !data.from.is_empty() || !data.to.is_empty() {
        data.tx_type = TX_TYPE_TRANSFER.to_string();
    }
    data
}

/// Replay transfer events in order, grouping each contiguous
/// `(sender, recipient, amount)` triple into one leg.
fn collect_transfer_legs(logs: &[TxLog]) -> Vec<TransferLeg> {
    let mut legs = Vec::new();

    for log in logs {
        for event in &log.events {
            if event.event_type != TRANSFER_EVENT_TYPE {
                continue;
            }

            let mut sender: Option<&str> = None;
            let mut recipient: Option<&str> = None;
            for attr in &event.attributes {
                match attr.key.as_str() {
                    "sender" => sender = Some(&attr.value),
                    "recipient" => recipient = Some(&attr.value),
                    "amount" => match (sender.take(), recipient.take(), parse_amount(&attr.value))
                    {
                        (Some(sender), Some(recipient), Some(amount)) => {
                            legs.push(TransferLeg {
                                sender: sender.to_string(),
                                recipient: recipient.to_string(),
                                amount,
                            });
                        }
                        _ => {
                            debug!(value = %attr.value, "dropping incomplete transfer leg");
                        }
                    },
                    // nodes add attribute keys over time
                    _ => {}
                }
            }
        }
    }

    legs
}

/// Parse a coin string of the form `"<digits><denom>"` (no separator) into a
/// base amount at the denomination's precision.
fn parse_amount(value: &str) -> Option<BaseAmount> {
    let denom_start = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, denom) = value.split_at(denom_start);
    if digits.is_empty() {
        return None;
    }
    BaseAmount::from_base_str(digits, decimals_for_denom(denom))
}

/// Precision for amounts in the given denomination.
///
/// Everything settled on this chain, native coin and synthetics alike,
/// accounts at the native precision. Resolving a foreign denomination's own
/// exponent would need the external asset registry; until then unresolved
/// denominations fall back to the native default.
fn decimals_for_denom(denom: &str) -> u8 {
    if !denom.is_empty() && denom != RUNE_DENOM && !denom.contains('/') {
        trace!(denom, "no precision registered for denom, using native default");
    }
    RUNE_DECIMAL
}
