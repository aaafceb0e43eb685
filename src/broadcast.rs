//! Broadcast result classification

use serde_json::Value;

/// Whether a broadcast result envelope reads as success.
///
/// True iff the envelope is a JSON object carrying a `logs` key, even when
/// the log list is empty. This is a structural check, not a semantic one:
/// absence of an explicit error code is treated as success, so an envelope
/// with `logs: []` and no failure code still reads as success. Known
/// limitation; callers needing certainty must inspect error codes themselves.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use thorscan::is_broadcast_success;
///
/// assert!(is_broadcast_success(&json!({ "logs": [] })));
/// assert!(!is_broadcast_success(&json!({})));
/// ```
pub fn is_broadcast_success(result: &Value) -> bool {
    result
        .as_object()
        .is_some_and(|envelope| envelope.contains_key("logs"))
}
