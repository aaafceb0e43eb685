//! Transaction message-type classification
//!
//! The chain wraps message-type names in a small protobuf-style envelope: a
//! `0x0a` tag byte and length, then a nested `0x0a` tag and length, then the
//! ASCII type literal (`"deposit"`, `"set_observed_txin"`, ...). The envelope
//! arrives as an encoded token in transaction query results.
//!
//! This decode runs against arbitrary chain data the client does not control,
//! so it is strictly best-effort: any malformed, truncated, or unrecognizable
//! token classifies as the empty label. Nothing here panics or errors.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine as _, GeneralPurpose, GeneralPurposeConfig};
use tracing::trace;

/// Encoding of an event-type token, named by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    Hex,
}

/// Nodes are observed to prepend stray quote characters to base64 tokens, so
/// decode after discarding anything outside the alphabet, and tolerate
/// missing padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Classify a transaction's message type from its encoded event-type token.
///
/// Returns the canonical lowercase type label, or `""` if the token cannot
/// be decoded or its envelope contains no recognizable ASCII literal.
///
/// # Examples
///
/// ```
/// use thorscan::{get_tx_type, Encoding};
///
/// assert_eq!(get_tx_type("CgkKB2RlcG9zaXQ=", Encoding::Base64), "deposit");
/// assert_eq!(
///     get_tx_type("\"ChMKEXNldF9vYnNlcnZlZF90eGlu", Encoding::Base64),
///     "set_observed_txin"
/// );
/// assert_eq!(get_tx_type("\"abc", Encoding::Base64), "");
/// ```
pub fn get_tx_type(tx_data: &str, encoding: Encoding) -> String {
    let Some(bytes) = decode_token(tx_data, encoding) else {
        trace!(token = tx_data, "event type token failed to decode");
        return String::new();
    };
    match extract_type_literal(&bytes) {
        Some(literal) => literal,
        None => {
            trace!(token = tx_data, "event type envelope carried no literal");
            String::new()
        }
    }
}

fn decode_token(tx_data: &str, encoding: Encoding) -> Option<Vec<u8>> {
    match encoding {
        Encoding::Base64 => {
            let filtered: String = tx_data
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
                .collect();
            LENIENT_BASE64.decode(filtered).ok()
        }
        Encoding::Hex => hex::decode(tx_data.trim_start_matches("0x")).ok(),
    }
}

/// Walk the length-prefixed envelope and pull out the embedded type literal.
///
/// Whether the chain guarantees this exact envelope shape across upgrades is
/// unverified, so the walk bails to `None` on the first byte that does not
/// fit. Only single-byte lengths are handled; type names are short.
fn extract_type_literal(bytes: &[u8]) -> Option<String> {
    const TAG: u8 = 0x0a;

    let (&outer_tag, rest) = bytes.split_first()?;
    if outer_tag != TAG {
        return None;
    }
    let (&outer_len, rest) = rest.split_first()?;
    if outer_len > 0x7f {
        return None;
    }
    let body = rest.get(..outer_len as usize)?;

    let (&inner_tag, body) = body.split_first()?;
    if inner_tag != TAG {
        return None;
    }
    let (&inner_len, body) = body.split_first()?;
    if inner_len > 0x7f {
        return None;
    }
    let literal = body.get(..inner_len as usize)?;

    if literal.is_empty() || !literal.iter().all(|b| b.is_ascii_graphic()) {
        return None;
    }
    // The slice is pure ASCII at this point
    Some(String::from_utf8_lossy(literal).to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_token() {
        assert_eq!(get_tx_type("CgkKB2RlcG9zaXQ=", Encoding::Base64), "deposit");
    }

    #[test]
    fn test_token_with_stray_quote() {
        assert_eq!(
            get_tx_type("\"ChMKEXNldF9vYnNlcnZlZF90eGlu", Encoding::Base64),
            "set_observed_txin"
        );
    }

    #[test]
    fn test_hex_token() {
        // Same envelope as the deposit token, hex-encoded
        assert_eq!(
            get_tx_type("0a090a076465706f736974", Encoding::Hex),
            "deposit"
        );
        assert_eq!(
            get_tx_type("0x0a090a076465706f736974", Encoding::Hex),
            "deposit"
        );
    }

    #[test]
    fn test_unknown_token_yields_empty_label() {
        assert_eq!(get_tx_type("\"abc", Encoding::Base64), "");
    }

    #[test]
    fn test_malformed_tokens_never_panic() {
        let tokens = [
            "",
            "!!!",
            "====",
            "Cg==",            // envelope truncated after outer tag
            "CgkKB2Rl",        // inner length exceeds payload
            "AAAA",            // wrong outer tag
            "CgMKAQA=",        // literal is not printable ASCII
            "not base64 at all ~~~",
        ];
        for token in tokens {
            assert_eq!(get_tx_type(token, Encoding::Base64), "", "token {token:?}");
        }
        assert_eq!(get_tx_type("zz", Encoding::Hex), "");
        assert_eq!(get_tx_type("0a09", Encoding::Hex), "");
    }

    #[test]
    fn test_literal_is_lowercased() {
        // 0x0a 0x09 0x0a 0x07 "DEPOSIT"
        let bytes = [0x0a, 0x09, 0x0a, 0x07, b'D', b'E', b'P', b'O', b'S', b'I', b'T'];
        assert_eq!(extract_type_literal(&bytes).unwrap(), "deposit");
    }

    #[test]
    fn test_multi_byte_length_bails() {
        let bytes = [0x0a, 0x80, 0x01, 0x0a];
        assert!(extract_type_literal(&bytes).is_none());
    }
}
