//! Explorer URL templating
//!
//! Pure string substitution over the per-network explorer templates. A
//! template may carry a `?query` suffix (testnet pages do); path segments
//! are inserted before it.

use crate::types::{ExplorerUrls, Network};

/// The explorer root URL of the given network.
pub fn get_explorer_url(urls: &ExplorerUrls, network: Network) -> String {
    urls.root.for_network(network).clone()
}

/// The explorer page URL of a transaction.
pub fn get_explorer_tx_url(urls: &ExplorerUrls, network: Network, tx_id: &str) -> String {
    append_segment(urls.tx.for_network(network), tx_id)
}

/// The explorer page URL of an address.
pub fn get_explorer_address_url(urls: &ExplorerUrls, network: Network, address: &str) -> String {
    append_segment(urls.address.for_network(network), address)
}

/// Append a path segment to a template, keeping any query suffix last.
fn append_segment(template: &str, segment: &str) -> String {
    match template.split_once('?') {
        Some((base, query)) => format!("{base}/{segment}?{query}"),
        None => format!("{template}/{segment}"),
    }
}
