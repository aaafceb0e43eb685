//! Test helpers for thorscan integration tests
//!
//! Log fixtures here mirror the JSON shape of real thornode transaction
//! query results: every message produces a bundle of `coin_spent`,
//! `coin_received`, `message`, and `transfer` events, with transfer legs
//! packed into one event via repeated attribute keys.

// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use bigdecimal::BigDecimal;
use std::str::FromStr;
use thorscan::{BaseAmount, TxLog};

/// Install a fmt subscriber honoring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a decimal asset amount into base units at native precision.
pub fn base_amount(value: &str) -> BaseAmount {
    BaseAmount::from_asset_amount(&BigDecimal::from_str(value).unwrap(), 8)
}

/// Deserialize a `logs` array literal into typed logs.
pub fn logs_from_json(raw: &str) -> Vec<TxLog> {
    serde_json::from_str(raw).expect("fixture should match the wire shape")
}

/// Logs of a swap deposit: a 0.02 RUNE fee leg and a 36000 RUNE principal
/// leg, both from the signer, to two different module addresses.
pub fn swap_deposit_logs() -> Vec<TxLog> {
    logs_from_json(
        r#"[
          {
            "msg_index": 0,
            "log": "",
            "events": [
              {
                "type": "coin_received",
                "attributes": [
                  { "key": "receiver", "value": "thor1dheycdevq39qlkxs2a6wuuzyn4aqxhve4qxtxt" },
                  { "key": "amount", "value": "2000000rune" },
                  { "key": "receiver", "value": "thor1g98cy3n9mmjrpn0sxmn63lztelera37n8n67c0" },
                  { "key": "amount", "value": "3600000000000rune" }
                ]
              },
              {
                "type": "coin_spent",
                "attributes": [
                  { "key": "spender", "value": "thor1g3nvdxgmdte8cfhl8592lz5tuzjd9hjsglazhr" },
                  { "key": "amount", "value": "2000000rune" },
                  { "key": "spender", "value": "thor1g3nvdxgmdte8cfhl8592lz5tuzjd9hjsglazhr" },
                  { "key": "amount", "value": "3600000000000rune" }
                ]
              },
              {
                "type": "message",
                "attributes": [
                  { "key": "action", "value": "deposit" },
                  { "key": "sender", "value": "thor1g3nvdxgmdte8cfhl8592lz5tuzjd9hjsglazhr" }
                ]
              },
              {
                "type": "transfer",
                "attributes": [
                  { "key": "recipient", "value": "thor1dheycdevq39qlkxs2a6wuuzyn4aqxhve4qxtxt" },
                  { "key": "sender", "value": "thor1g3nvdxgmdte8cfhl8592lz5tuzjd9hjsglazhr" },
                  { "key": "amount", "value": "2000000rune" },
                  { "key": "recipient", "value": "thor1g98cy3n9mmjrpn0sxmn63lztelera37n8n67c0" },
                  { "key": "sender", "value": "thor1g3nvdxgmdte8cfhl8592lz5tuzjd9hjsglazhr" },
                  { "key": "amount", "value": "3600000000000rune" }
                ]
              }
            ]
          }
        ]"#,
    )
}

/// Logs of a plain send: a 0.02 RUNE fee leg and a 5 RUNE payment leg.
pub fn send_logs() -> Vec<TxLog> {
    logs_from_json(
        r#"[
          {
            "msg_index": 0,
            "log": "",
            "events": [
              {
                "type": "message",
                "attributes": [
                  { "key": "action", "value": "send" },
                  { "key": "sender", "value": "thor1ws0sltg9ayyxp2777xykkqakwv2hll5ywuwkzl" },
                  { "key": "module", "value": "bank" }
                ]
              },
              {
                "type": "transfer",
                "attributes": [
                  { "key": "recipient", "value": "thor1dheycdevq39qlkxs2a6wuuzyn4aqxhve4qxtxt" },
                  { "key": "sender", "value": "thor1ws0sltg9ayyxp2777xykkqakwv2hll5ywuwkzl" },
                  { "key": "amount", "value": "2000000rune" },
                  { "key": "recipient", "value": "thor1mryx88xxhvwu9yepmg968zcdaza2nzz4rltjcp" },
                  { "key": "sender", "value": "thor1ws0sltg9ayyxp2777xykkqakwv2hll5ywuwkzl" },
                  { "key": "amount", "value": "500000000rune" }
                ]
              }
            ]
          }
        ]"#,
    )
}

/// Logs of a testnet bond: one sender fanning out to two distinct
/// recipients (fee module and bond module) at different amounts.
pub fn bond_logs() -> Vec<TxLog> {
    logs_from_json(
        r#"[
          {
            "msg_index": 0,
            "log": "",
            "events": [
              {
                "type": "message",
                "attributes": [
                  { "key": "action", "value": "deposit" },
                  { "key": "sender", "value": "tthor137kees65jmhjm3gxyune0km5ea0zkpnj4lw29f" }
                ]
              },
              {
                "type": "transfer",
                "attributes": [
                  { "key": "recipient", "value": "tthor1dheycdevq39qlkxs2a6wuuzyn4aqxhve3hhmlw" },
                  { "key": "sender", "value": "tthor137kees65jmhjm3gxyune0km5ea0zkpnj4lw29f" },
                  { "key": "amount", "value": "2000000rune" },
                  { "key": "recipient", "value": "tthor17gw75axcnr8747pkanye45pnrwk7p9c3uhzgff" },
                  { "key": "sender", "value": "tthor137kees65jmhjm3gxyune0km5ea0zkpnj4lw29f" },
                  { "key": "amount", "value": "170000000000rune" }
                ]
              }
            ]
          }
        ]"#,
    )
}
