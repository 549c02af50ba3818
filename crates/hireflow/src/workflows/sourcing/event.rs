use serde::Serialize;
use serde_json::Value;

/// Sentinel used when no project identifier can be extracted from a payload.
pub const UNKNOWN_PROJECT_ID: &str = "Unknown Project ID";

/// Sentinel used when no role title can be extracted from a payload.
pub const UNKNOWN_ROLE_TITLE: &str = "Unknown Role";

/// Canonical form of an inbound sourcing-request event.
///
/// Database triggers deliver the entity nested under `record`; manual calls
/// flatten the same fields at the top level. Normalization resolves each
/// field independently: the nested value wins, then the flattened value,
/// then the sentinel. Malformed or non-object bodies fall through to the
/// sentinels instead of failing intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcingEvent {
    pub project_id: String,
    pub role_title: String,
}

impl SourcingEvent {
    /// Parse raw request bytes, tolerating anything that is not a JSON object.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::unknown(),
        }
    }

    /// Normalize an already-parsed payload per the nested-over-flattened rule.
    pub fn from_value(value: &Value) -> Self {
        let record = value.get("record");

        let project_id = string_field(record, "id")
            .or_else(|| string_field(Some(value), "id"))
            .unwrap_or_else(|| UNKNOWN_PROJECT_ID.to_string());
        let role_title = string_field(record, "role_title")
            .or_else(|| string_field(Some(value), "role_title"))
            .unwrap_or_else(|| UNKNOWN_ROLE_TITLE.to_string());

        Self {
            project_id,
            role_title,
        }
    }

    fn unknown() -> Self {
        Self {
            project_id: UNKNOWN_PROJECT_ID.to_string(),
            role_title: UNKNOWN_ROLE_TITLE.to_string(),
        }
    }
}

// Non-string values are treated as absent so a numeric `id` from an
// unexpected trigger shape cannot leak into the notification text.
fn string_field(container: Option<&Value>, key: &str) -> Option<String> {
    container?
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_record_fields_win() {
        let payload = json!({
            "record": { "id": "proj_42", "role_title": "Backend Engineer" },
            "id": "proj_override",
            "role_title": "Shadow Role",
        });
        let event = SourcingEvent::from_value(&payload);
        assert_eq!(event.project_id, "proj_42");
        assert_eq!(event.role_title, "Backend Engineer");
    }

    #[test]
    fn flattened_fields_used_when_record_absent() {
        let payload = json!({ "id": "proj_7", "role_title": "Data Analyst" });
        let event = SourcingEvent::from_value(&payload);
        assert_eq!(event.project_id, "proj_7");
        assert_eq!(event.role_title, "Data Analyst");
    }

    #[test]
    fn precedence_is_resolved_per_field() {
        let payload = json!({
            "record": { "id": "proj_9" },
            "role_title": "Product Designer",
        });
        let event = SourcingEvent::from_value(&payload);
        assert_eq!(event.project_id, "proj_9");
        assert_eq!(event.role_title, "Product Designer");
    }

    #[test]
    fn missing_fields_fall_back_to_sentinels() {
        let event = SourcingEvent::from_value(&json!({}));
        assert_eq!(event.project_id, UNKNOWN_PROJECT_ID);
        assert_eq!(event.role_title, UNKNOWN_ROLE_TITLE);
    }

    #[test]
    fn non_object_and_malformed_bodies_fall_back_to_sentinels() {
        for body in [&b"[1, 2, 3]"[..], b"\"just a string\"", b"{not json"] {
            let event = SourcingEvent::from_body(body);
            assert_eq!(event.project_id, UNKNOWN_PROJECT_ID);
            assert_eq!(event.role_title, UNKNOWN_ROLE_TITLE);
        }
    }

    #[test]
    fn non_string_values_are_treated_as_absent() {
        let payload = json!({ "record": { "id": 42 }, "id": "proj_fallback" });
        let event = SourcingEvent::from_value(&payload);
        assert_eq!(event.project_id, "proj_fallback");
        assert_eq!(event.role_title, UNKNOWN_ROLE_TITLE);
    }
}
