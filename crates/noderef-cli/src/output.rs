//! Output formatting utilities.

use noderef_core::{GlobalId, IdScope};
use serde_json::json;

/// Formats an encode result as JSON.
pub fn format_encoded(value: &str, scope: IdScope) -> String {
    serde_json::to_string_pretty(&json!({ "id": value, "scope": scope }))
        .unwrap_or_else(|_| "{}".to_string())
}

/// Formats a decoded pair as JSON.
pub fn format_decoded(id: &GlobalId) -> String {
    serde_json::to_string_pretty(&json!({ "type": id.type_name, "id": id.raw_id }))
        .unwrap_or_else(|_| "{}".to_string())
}
