use chrono::{DateTime, Months, NaiveDate, Utc};

use crate::core::errors::{AuditLensError, Result};
use crate::core::models::audit_event::AuditEvent;
use crate::core::services::event_describer::EventDescriber;
use crate::core::traits::translate::Translate;

/// What an archive run will export, before anything touches disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivePlan {
    pub file_name: String,
    pub content: String,
    /// Ids of the exported events, oldest first.
    pub ids: Vec<i64>,
    pub cutoff: DateTime<Utc>,
}

impl ArchivePlan {
    pub fn record_count(&self) -> usize {
        self.ids.len()
    }
}

/// Selects events older than a number of months and renders them as text.
pub struct ArchiveService<'a, T: Translate> {
    describer: EventDescriber<'a, T>,
}

impl<'a, T: Translate> ArchiveService<'a, T> {
    pub fn new(translator: &'a T) -> Self {
        Self {
            describer: EventDescriber::new(translator),
        }
    }

    /// `now` minus `months` calendar months.
    pub fn cutoff(now: DateTime<Utc>, months: u32) -> Result<DateTime<Utc>> {
        if months == 0 {
            return Err(AuditLensError::InvalidArgument {
                detail: "archive period must be at least 1 month".into(),
            });
        }
        now.checked_sub_months(Months::new(months))
            .ok_or_else(|| AuditLensError::InvalidArgument {
                detail: format!("archive period of {months} months is out of range"),
            })
    }

    pub fn file_name(months: u32, today: NaiveDate) -> String {
        format!(
            "activity_log_archive_older_than_{months}_months_{}.txt",
            today.format("%Y-%m-%d")
        )
    }

    /// Build the archive for events strictly older than the cutoff.
    ///
    /// Events whose timestamp cannot be parsed are never archived.
    pub fn plan(&self, events: &[AuditEvent], months: u32, now: DateTime<Utc>) -> Result<ArchivePlan> {
        let cutoff = Self::cutoff(now, months)?;

        let mut selected: Vec<&AuditEvent> = events
            .iter()
            .filter(|e| e.is_older_than(cutoff))
            .collect();

        if selected.is_empty() {
            return Err(AuditLensError::NothingToArchive { months });
        }

        // Oldest first in the archive file.
        selected.sort_by_key(|e| (e.timestamp(), e.id));

        let mut content = String::new();
        for event in &selected {
            content.push_str(&self.line(event));
            content.push('\n');
        }

        Ok(ArchivePlan {
            file_name: Self::file_name(months, now.date_naive()),
            content,
            ids: selected.iter().map(|e| e.id).collect(),
            cutoff,
        })
    }

    fn line(&self, event: &AuditEvent) -> String {
        let user = event.user_full_name.as_deref().unwrap_or("System");
        let email = event.user_email.as_deref().unwrap_or("N/A");
        let summary = self.describer.describe(&event.action, event.details()).to_plain();
        let details = event
            .details()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "{}".to_string());

        format!(
            "{} | {user} <{email}> | {} | {summary} | {details}",
            event.created_at, event.action
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::translate::Language;
    use chrono::TimeZone;
    use serde_json::json;

    struct Keys;

    impl Translate for Keys {
        fn t(&self, key: &str) -> String {
            match key {
                "log_summary_USER_CREATED" => "Created {email}".to_string(),
                other => other.to_string(),
            }
        }

        fn language(&self) -> Language {
            Language::En
        }
    }

    fn event(id: i64, at: &str) -> AuditEvent {
        AuditEvent {
            id,
            created_at: at.to_string(),
            user_full_name: Some("Admin".into()),
            user_email: Some("admin@corp.io".into()),
            action: "USER_CREATED".into(),
            ip_address: None,
            details: Some(json!({"email": "x@corp.io"})),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn file_name_carries_period_and_date() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(
            ArchiveService::<Keys>::file_name(3, today),
            "activity_log_archive_older_than_3_months_2026-06-15.txt"
        );
    }

    #[test]
    fn cutoff_subtracts_calendar_months() {
        let cutoff = ArchiveService::<Keys>::cutoff(now(), 6).unwrap();
        assert_eq!(cutoff, Utc.with_ymd_and_hms(2025, 12, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn zero_months_is_rejected() {
        assert!(ArchiveService::<Keys>::cutoff(now(), 0).is_err());
    }

    #[test]
    fn selects_only_older_events_oldest_first() {
        let svc = ArchiveService::new(&Keys);
        let events = vec![
            event(3, "2026-06-01T00:00:00Z"),
            event(2, "2025-11-01T00:00:00Z"),
            event(1, "2025-01-01T00:00:00Z"),
            event(4, "not a date"),
        ];
        let plan = svc.plan(&events, 3, now()).unwrap();
        assert_eq!(plan.ids, vec![1, 2]);
        assert_eq!(plan.record_count(), 2);

        let first = plan.content.lines().next().unwrap();
        assert_eq!(
            first,
            "2025-01-01T00:00:00Z | Admin <admin@corp.io> | USER_CREATED | Created x@corp.io | {\"email\":\"x@corp.io\"}"
        );
    }

    #[test]
    fn nothing_old_enough_is_an_error() {
        let svc = ArchiveService::new(&Keys);
        let events = vec![event(1, "2026-06-10T00:00:00Z")];
        let err = svc.plan(&events, 1, now()).unwrap_err();
        assert!(matches!(err, AuditLensError::NothingToArchive { months: 1 }));
    }
}
