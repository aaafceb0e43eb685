//! Asset identity types
//!
//! An [`Asset`] is the application-level view of a fungible asset: which chain
//! it lives on, its symbol and ticker, and whether it is a synthetic minted on
//! the THORChain side. The on-chain string form is the *denomination*; the
//! mapping between the two lives in the codec functions in [`crate::asset`].

use serde::{Deserialize, Serialize};

/// Application-level asset identity.
///
/// `symbol` may carry a contract suffix (`"USDT-0X..."`) while `ticker` is
/// always the bare ticker portion before any `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Chain tag, e.g. `"THOR"`, `"BTC"`, `"ETH"`.
    pub chain: String,
    /// Full symbol, including any contract id suffix.
    pub symbol: String,
    /// Bare ticker, the symbol up to the first `-`.
    pub ticker: String,
    /// Whether this is a synthetic asset minted on the native chain.
    pub synth: bool,
}

impl Asset {
    /// Construct an asset, deriving the ticker from the symbol.
    pub fn new(chain: impl Into<String>, symbol: impl Into<String>, synth: bool) -> Self {
        let chain = chain.into();
        let symbol = symbol.into();
        let ticker = symbol.split('-').next().unwrap_or_default().to_string();
        Self {
            chain,
            symbol,
            ticker,
            synth,
        }
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Synthetics print with the slash separator, like their denomination
        let sep = if self.synth { '/' } else { '.' };
        write!(f, "{}{}{}", self.chain, sep, self.symbol)
    }
}

/// Result of decoding an on-chain denomination.
///
/// New denominations appear on-chain without client upgrades, so decoding is
/// total: anything the codec does not own comes back as [`Unknown`] carrying
/// the raw string for diagnostics, never as an error.
///
/// [`Unknown`]: DecodedAsset::Unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedAsset {
    /// A denomination this codec owns, decoded to its asset identity.
    Asset(Asset),
    /// An unrecognized denomination, preserved verbatim.
    Unknown {
        /// The raw denomination string as seen on-chain.
        denom: String,
    },
}

impl DecodedAsset {
    /// The decoded asset, if the denomination was recognized.
    pub fn known(self) -> Option<Asset> {
        match self {
            DecodedAsset::Asset(asset) => Some(asset),
            DecodedAsset::Unknown { .. } => None,
        }
    }

    /// Whether the denomination fell through to the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, DecodedAsset::Unknown { .. })
    }
}
