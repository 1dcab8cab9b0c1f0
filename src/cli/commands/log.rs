use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::commands::render;
use crate::cli::commands::session::Session;
use crate::cli::output;
use crate::core::errors::{AuditLensError, Result};
use crate::core::models::audit_event::AuditEvent;
use crate::core::models::event_filter::EventFilter;
use crate::core::models::page::Page;
use crate::core::services::change_describer::{ChangeDescriber, Side};
use crate::core::services::event_describer::EventDescriber;
use crate::core::traits::event_source::EventSource;
use crate::core::traits::translate::Translate;

/// Filters and paging for `auditlens log`.
pub struct LogArgs<'a> {
    pub search: Option<&'a str>,
    pub action: Option<&'a str>,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub page: usize,
    pub expand: bool,
}

/// Execute the `auditlens log` command.
///
/// Displays one page of the activity log, newest first, with summary and
/// before/after columns.
pub fn execute(session: &Session, file: Option<&str>, args: &LogArgs<'_>) -> Result<()> {
    let filter = EventFilter {
        search: args.search.map(str::to_string),
        action: args.action.map(str::to_string),
        start_date: args.from.map(parse_date).transpose()?,
        end_date: args.to.map(parse_date).transpose()?,
    };

    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date)
        && start > end
    {
        return Err(AuditLensError::InvalidArgument {
            detail: format!("--from {start} is after --to {end}"),
        });
    }

    let source = session.event_source(file);
    let events = source.query(&filter)?;
    output::verbose(&format!("{} matching entries", events.len()));

    let t = &session.catalog;
    output::header(&t.t("activity_log"));

    if events.is_empty() {
        output::warning(&t.t("no_logs_found"));
        if filter != EventFilter::default() {
            println!("  {}", t.t("no_logs_filter_hint"));
        }
        return Ok(());
    }

    let page = Page::new(events.len(), args.page, session.config.log.page_size);
    if page.current != args.page {
        output::verbose(&format!("page {} out of range, showing {}", args.page, page.current));
    }
    println!();

    let describer = EventDescriber::new(t);
    let changes = ChangeDescriber::new(t);
    for event in &events[page.range()] {
        print_entry(event, &describer, &changes, t, args.expand);
    }

    println!(
        "  {} - {} {} {}",
        page.start_index(),
        page.end_index(),
        t.t("of"),
        page.total_items
    );
    if page.total_pages() > 1 {
        println!("  {}: {}", t.t("page"), render::page_selector(&page));

        let mut hints = Vec::new();
        if page.has_previous() {
            hints.push(format!("{}: --page {}", t.t("previous"), page.current - 1));
        }
        if page.has_next() {
            hints.push(format!("{}: --page {}", t.t("next"), page.current + 1));
        }
        println!("  {}", hints.join("  ").dimmed());
    }

    Ok(())
}

/// Parse a date string (ISO 8601: `YYYY-MM-DD`).
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AuditLensError::InvalidDate {
        input: s.to_string(),
    })
}

/// Print a single event as a block: header line, summary, before/after.
fn print_entry<T: Translate>(
    event: &AuditEvent,
    describer: &EventDescriber<'_, T>,
    changes: &ChangeDescriber<'_, T>,
    t: &T,
    expand: bool,
) {
    let (date, time) = render::date_time(event);
    let (name, email) = render::user_cell(event, &t.t("system_user"));
    let details = event.details();

    println!(
        "  {} {} {} {} {} <{}> {} {}",
        date.dimmed(),
        time.dimmed(),
        "│".dimmed(),
        render::action_badge(&event.action, t),
        name,
        email,
        "│".dimmed(),
        render::ip_cell(event).dimmed(),
    );
    println!(
        "      {}",
        render::rich_text(&describer.describe(&event.action, details))
    );

    for (side, label) in [(Side::Before, "data_before"), (Side::After, "data_after")] {
        let mut cell = changes.describe_change(&event.action, details, side);
        cell.set_expanded(expand);
        println!("      {}: {}", t.t(label).dimmed(), render::change_cell(&cell));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso() {
        assert_eq!(
            parse_date("2026-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(matches!(
            parse_date("15/01/2026"),
            Err(AuditLensError::InvalidDate { .. })
        ));
    }
}
