use colored::Colorize;
use serde_json::Value;

use crate::cli::commands::render;
use crate::cli::commands::session::Session;
use crate::core::errors::{AuditLensError, Result};
use crate::core::services::change_describer::{ChangeDescriber, Side};
use crate::core::services::event_describer::EventDescriber;
use crate::core::traits::translate::Translate;

/// Execute the `auditlens describe` command.
///
/// Renders what the log table would show for one event, without needing
/// a log file: summary, before and after.
pub fn execute(session: &Session, action: &str, details: Option<&str>, expand: bool) -> Result<()> {
    let details = details.map(parse_details).transpose()?;
    let details = details.as_ref();
    let t = &session.catalog;

    println!(
        "  {}: {}",
        t.t("action_type").dimmed(),
        render::action_badge(action, t)
    );
    println!(
        "  {}: {}",
        t.t("summary").dimmed(),
        render::rich_text(&EventDescriber::new(t).describe(action, details))
    );

    let changes = ChangeDescriber::new(t);
    for (side, label) in [(Side::Before, "data_before"), (Side::After, "data_after")] {
        let mut cell = changes.describe_change(action, details, side);
        cell.set_expanded(expand);
        println!("  {}: {}", t.t(label).dimmed(), render::change_cell(&cell));
    }

    Ok(())
}

/// `--details` must be a JSON object (or `null`).
fn parse_details(raw: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(raw).map_err(|e| AuditLensError::InvalidArgument {
        detail: format!("--details is not valid JSON: {e}"),
    })?;
    match value {
        Value::Object(_) | Value::Null => Ok(value),
        other => Err(AuditLensError::InvalidArgument {
            detail: format!("--details must be a JSON object, got {other}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_accept_objects_and_null() {
        assert!(parse_details(r#"{"email":"a@b.c"}"#).unwrap().is_object());
        assert!(parse_details("null").unwrap().is_null());
    }

    #[test]
    fn details_reject_scalars_and_garbage() {
        assert!(parse_details("[1]").is_err());
        assert!(parse_details("{oops").is_err());
    }
}
