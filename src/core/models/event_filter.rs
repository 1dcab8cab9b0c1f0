use chrono::NaiveDate;

use crate::core::models::audit_event::AuditEvent;

/// Filters applied when querying the activity log.
///
/// Dates are inclusive calendar days in UTC.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Case-insensitive substring of the user's name or email.
    pub search: Option<String>,
    /// Exact action code.
    pub action: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EventFilter {
    pub fn matches(&self, event: &AuditEvent) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let in_name = event
                .user_full_name
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
            let in_email = event
                .user_email
                .as_ref()
                .is_some_and(|e| e.to_lowercase().contains(&needle));
            if !in_name && !in_email {
                return false;
            }
        }

        if let Some(action) = self.action.as_deref().filter(|a| !a.is_empty())
            && event.action != action
        {
            return false;
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            let Some(day) = event.timestamp().map(|ts| ts.date_naive()) else {
                return false;
            };
            if self.start_date.is_some_and(|start| day < start) {
                return false;
            }
            if self.end_date.is_some_and(|end| day > end) {
                return false;
            }
        }

        true
    }
}
