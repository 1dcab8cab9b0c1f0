use colored::Colorize;

use crate::core::models::action_kind::ActionTone;
use crate::core::models::audit_event::AuditEvent;
use crate::core::models::change_cell::{ChangeCell, NOT_APPLICABLE};
use crate::core::models::page::{Page, PageSlot};
use crate::core::models::rich_text::{RichText, Segment};
use crate::core::traits::translate::Translate;

/// Plain runs as-is, highlighted runs in bold.
pub fn rich_text(text: &RichText) -> String {
    text.segments
        .iter()
        .map(|s| match s {
            Segment::Plain(t) => t.clone(),
            Segment::Highlight(t) => t.bold().to_string(),
        })
        .collect()
}

/// A before/after cell, with a hint when a long value is collapsed.
pub fn change_cell(cell: &ChangeCell) -> String {
    match cell {
        ChangeCell::NotApplicable => NOT_APPLICABLE.dimmed().to_string(),
        ChangeCell::Highlight(label) => label.bold().to_string(),
        ChangeCell::Value(value) => {
            let hidden = value.hidden_chars();
            if hidden > 0 {
                format!(
                    "{} {}",
                    value.display(),
                    format!("(+{hidden} chars, --expand)").dimmed()
                )
            } else {
                value.display()
            }
        }
    }
}

/// Localized action label colored by its tone.
pub fn action_badge<T: Translate>(action: &str, translator: &T) -> String {
    let label = translator.t(&format!("log_action_{action}"));
    match ActionTone::classify(action) {
        ActionTone::Positive => label.green().to_string(),
        ActionTone::Negative => label.red().to_string(),
        ActionTone::Change => label.yellow().to_string(),
        ActionTone::Access => label.blue().to_string(),
        ActionTone::Neutral => label,
    }
}

/// `(YYYY/MM/DD, HH:MM:SS)` in UTC; raw text and an empty time when unparsable.
pub fn date_time(event: &AuditEvent) -> (String, String) {
    match event.timestamp() {
        Some(ts) => (
            ts.format("%Y/%m/%d").to_string(),
            ts.format("%H:%M:%S").to_string(),
        ),
        None => (event.created_at.clone(), String::new()),
    }
}

/// `(name, email)` with `system_label` and `N/A` fallbacks.
pub fn user_cell(event: &AuditEvent, system_label: &str) -> (String, String) {
    let name = event
        .user_full_name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(system_label)
        .to_string();
    let email = event
        .user_email
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(NOT_APPLICABLE)
        .to_string();
    (name, email)
}

pub fn ip_cell(event: &AuditEvent) -> String {
    event
        .ip_address
        .as_deref()
        .filter(|ip| !ip.is_empty())
        .unwrap_or(NOT_APPLICABLE)
        .to_string()
}

/// `1 … 4 [5] 6 … 10`
pub fn page_selector(page: &Page) -> String {
    page.window()
        .into_iter()
        .map(|slot| match slot {
            PageSlot::Number(n) if n == page.current => format!("[{n}]"),
            PageSlot::Number(n) => n.to_string(),
            PageSlot::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
