use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::errors::{AuditLensError, Result};
use crate::core::models::audit_event::AuditEvent;
use crate::core::models::event_filter::EventFilter;
use crate::core::traits::event_source::EventSource;

/// Activity log stored as JSON lines, one `AuditEvent` per line.
///
/// Blank lines are skipped. A malformed line fails the whole read with its
/// line number, so a corrupt export is noticed instead of silently shrinking.
pub struct JsonlEventSource {
    path: PathBuf,
}

impl JsonlEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(AuditLensError::FileNotFound {
                path: self.path.clone(),
            });
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Every event in file order.
    fn read_all(&self) -> Result<Vec<AuditEvent>> {
        let content = self.read_content()?;
        Ok(parse_lines(&content)?
            .into_iter()
            .filter_map(|(_, event)| event)
            .collect())
    }
}

/// Split `content` into raw lines (terminator included) paired with the
/// event each one holds. Blank lines carry `None`.
fn parse_lines(content: &str) -> Result<Vec<(&str, Option<AuditEvent>)>> {
    content
        .split_inclusive('\n')
        .enumerate()
        .map(|(idx, raw)| -> Result<(&str, Option<AuditEvent>)> {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok((raw, None));
            }
            let event: AuditEvent = serde_json::from_str(trimmed).map_err(|e| AuditLensError::MalformedEvent {
                line: idx + 1,
                detail: e.to_string(),
            })?;
            Ok((raw, Some(event)))
        })
        .collect()
}

impl EventSource for JsonlEventSource {
    fn query(&self, filter: &EventFilter) -> Result<Vec<AuditEvent>> {
        let mut events: Vec<AuditEvent> = self
            .read_all()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();

        // Newest first; rows with unreadable timestamps sink to the bottom.
        events.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(events)
    }

    fn distinct_actions(&self) -> Result<Vec<String>> {
        let actions: BTreeSet<String> = self.read_all()?.into_iter().map(|e| e.action).collect();
        Ok(actions.into_iter().collect())
    }

    fn remove_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let content = self.read_content()?;
        let mut kept = String::with_capacity(content.len());
        let mut removed = 0;

        // Kept lines are written back untouched, including fields the
        // event model does not know about.
        for (raw, event) in parse_lines(&content)? {
            if event.is_some_and(|e| e.is_older_than(cutoff)) {
                removed += 1;
            } else {
                kept.push_str(raw);
            }
        }

        if removed == 0 {
            return Ok(0);
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(kept.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| AuditLensError::Io(e.error))?;

        Ok(removed)
    }
}
