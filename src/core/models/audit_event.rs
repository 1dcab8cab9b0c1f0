use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the activity log (JSON lines format).
///
/// `details` is untyped: its shape depends on `action` and may differ
/// between old and new records of the same action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: i64,
    pub created_at: String,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub action: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    /// Parsed `created_at`, or `None` when the stored text is not RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Archive selection: a readable timestamp strictly before `cutoff`.
    pub fn is_older_than(&self, cutoff: DateTime<Utc>) -> bool {
        self.timestamp().is_some_and(|ts| ts < cutoff)
    }

    /// Details with JSON `null` folded into `None`.
    pub fn details(&self) -> Option<&serde_json::Value> {
        self.details.as_ref().filter(|d| !d.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_row() {
        let event: AuditEvent =
            serde_json::from_str(r#"{"id":1,"created_at":"2026-03-01T10:00:00Z","action":"USER_CREATED"}"#)
                .unwrap();
        assert_eq!(event.action, "USER_CREATED");
        assert!(event.user_email.is_none());
        assert!(event.details().is_none());
    }

    #[test]
    fn null_details_read_as_absent() {
        let event: AuditEvent = serde_json::from_str(
            r#"{"id":2,"created_at":"2026-03-01T10:00:00Z","action":"X","details":null}"#,
        )
        .unwrap();
        assert!(event.details().is_none());
    }

    #[test]
    fn timestamp_accepts_offsets() {
        let event: AuditEvent = serde_json::from_str(
            r#"{"id":3,"created_at":"2026-03-01T12:00:00+02:00","action":"X"}"#,
        )
        .unwrap();
        let ts = event.timestamp().unwrap();
        assert_eq!(ts.format("%H:%M").to_string(), "10:00");
    }

    #[test]
    fn timestamp_is_none_for_garbage() {
        let event: AuditEvent =
            serde_json::from_str(r#"{"id":4,"created_at":"yesterday","action":"X"}"#).unwrap();
        assert!(event.timestamp().is_none());
    }
}
