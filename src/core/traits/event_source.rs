use chrono::{DateTime, Utc};

use crate::core::errors::Result;
use crate::core::models::audit_event::AuditEvent;
use crate::core::models::event_filter::EventFilter;

/// Port for reading (and pruning) recorded activity.
pub trait EventSource: Send + Sync {
    /// All events matching `filter`, newest first.
    fn query(&self, filter: &EventFilter) -> Result<Vec<AuditEvent>>;

    /// Distinct action codes present in the source, sorted.
    fn distinct_actions(&self) -> Result<Vec<String>>;

    /// Delete every event for which `AuditEvent::is_older_than(cutoff)`
    /// holds, leaving all other records unchanged. Returns how many were removed.
    fn remove_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize>;
}
