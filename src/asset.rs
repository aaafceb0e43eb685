//! Asset/denomination codec
//!
//! Bidirectional mapping between an [`Asset`] and its on-chain denomination
//! string. Three denomination families exist:
//!
//! - the reserved literal `"rune"` for the chain's own native coin,
//! - `"<chain>/<symbol>"` (lowercased) for synthetic assets,
//! - `"<chain>.<SYMBOL>"` for everything else, chain lowercased and symbol
//!   case preserved, with an optional `-<contract>` suffix on the symbol.
//!
//! Decoding is total: a denomination the codec does not own decodes to
//! [`DecodedAsset::Unknown`] rather than failing, since new assets appear
//! on-chain without client upgrades.

use tracing::trace;

use crate::types::{Asset, DecodedAsset};

/// Chain tag of the native chain.
pub const CHAIN: &str = "THOR";

/// Reserved denomination of the chain's native coin.
pub const RUNE_DENOM: &str = "rune";

/// Base-unit precision of the native coin, and the default precision for
/// every amount settled on this chain.
pub const RUNE_DECIMAL: u8 = 8;

/// The native RUNE asset.
pub fn asset_rune_native() -> Asset {
    Asset::new(CHAIN, "RUNE", false)
}

/// Whether the given asset is native (non-synthetic) RUNE.
///
/// A synthetic RUNE variant is not native even though chain and symbol match.
pub fn is_rune_native_asset(asset: &Asset) -> bool {
    *asset == asset_rune_native()
}

/// Encode an asset as its on-chain denomination string.
///
/// Total and deterministic. Inverse of [`asset_from_denom`] for every
/// representable asset (chain and ticker uppercase, contract suffix
/// uppercase hex).
///
/// # Examples
///
/// ```
/// use thorscan::{asset_rune_native, get_denom, Asset};
///
/// assert_eq!(get_denom(&asset_rune_native()), "rune");
/// assert_eq!(get_denom(&Asset::new("BNB", "BNB", true)), "bnb/bnb");
/// assert_eq!(get_denom(&Asset::new("BTC", "BTC", false)), "btc.BTC");
/// ```
pub fn get_denom(asset: &Asset) -> String {
    if asset.synth {
        return format!(
            "{}/{}",
            asset.chain.to_lowercase(),
            asset.symbol.to_lowercase()
        );
    }
    if is_rune_native_asset(asset) {
        return RUNE_DENOM.to_string();
    }
    format!("{}.{}", asset.chain.to_lowercase(), asset.symbol)
}

/// Decode an on-chain denomination into an asset.
///
/// A denomination containing `/` is a synthetic; the reserved literal
/// `"rune"` is the native coin; `<chain>.<symbol>` is an ordinary asset.
/// Anything else comes back as [`DecodedAsset::Unknown`] carrying the raw
/// string; callers must tolerate the sentinel instead of expecting a hard
/// failure.
///
/// # Examples
///
/// ```
/// use thorscan::{asset_from_denom, asset_rune_native, Asset, DecodedAsset};
///
/// assert_eq!(
///     asset_from_denom("rune"),
///     DecodedAsset::Asset(asset_rune_native())
/// );
/// assert_eq!(
///     asset_from_denom("bnb/bnb"),
///     DecodedAsset::Asset(Asset::new("BNB", "BNB", true))
/// );
/// assert!(asset_from_denom("uatom").is_unknown());
/// ```
pub fn asset_from_denom(denom: &str) -> DecodedAsset {
    if let Some((chain, symbol)) = denom.split_once('/') {
        if chain.is_empty() || symbol.is_empty() {
            return unknown(denom);
        }
        return DecodedAsset::Asset(Asset::new(
            chain.to_uppercase(),
            symbol.to_uppercase(),
            true,
        ));
    }

    if denom == RUNE_DENOM {
        return DecodedAsset::Asset(asset_rune_native());
    }

    if let Some((chain, symbol)) = denom.split_once('.') {
        if chain.is_empty() || symbol.is_empty() {
            return unknown(denom);
        }
        // Symbol case is registry-defined and kept verbatim
        return DecodedAsset::Asset(Asset::new(chain.to_uppercase(), symbol, false));
    }

    unknown(denom)
}

fn unknown(denom: &str) -> DecodedAsset {
    trace!(denom, "denomination not owned by codec, returning sentinel");
    DecodedAsset::Unknown {
        denom: denom.to_string(),
    }
}
