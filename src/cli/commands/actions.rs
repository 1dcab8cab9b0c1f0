use colored::Colorize;

use crate::cli::commands::render;
use crate::cli::commands::session::Session;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::event_source::EventSource;
use crate::core::traits::translate::Translate;

/// Execute the `auditlens actions` command.
///
/// Lists each distinct action code with its localized label, for use
/// with `auditlens log --action`.
pub fn execute(session: &Session, file: Option<&str>) -> Result<()> {
    let source = session.event_source(file);
    let actions = source.distinct_actions()?;
    let t = &session.catalog;

    output::header(&format!("{} ({})", t.t("all_actions"), actions.len()));

    if actions.is_empty() {
        output::warning(&t.t("no_logs_found"));
        return Ok(());
    }

    let width = actions.iter().map(|a| a.chars().count()).max().unwrap_or(0);
    for action in &actions {
        println!(
            "  {:<width$} {} {}",
            action,
            "│".dimmed(),
            render::action_badge(action, t)
        );
    }

    Ok(())
}
