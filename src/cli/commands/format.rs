use std::io::Read;

use serde_json::Value;

use crate::cli::output;
use crate::core::errors::{AuditLensError, Result};
use crate::core::models::change_cell::ExpandableValue;
use crate::core::models::change_value::ChangeValue;
use crate::core::services::value_formatter::ValueFormatter;

/// Execute the `auditlens format` command.
///
/// By default the value is treated as stored text, exactly like a setting
/// value in the log: JSON objects and arrays inside it are unwrapped, other
/// text is shown verbatim. With `--json` it is parsed as a JSON document
/// first, so `null` becomes `N/A` and `"..."` becomes the inner string.
pub fn execute(value: &str, json: bool, expand: bool) -> Result<()> {
    let raw = if value == "-" {
        read_stdin()?
    } else {
        value.to_string()
    };

    let decoded = decode(&raw, json)?;
    let mut cell = ExpandableValue::new(ValueFormatter.format(Some(&decoded)));
    cell.set_expanded(expand);

    println!("{}", cell.display());
    if cell.hidden_chars() > 0 {
        output::verbose(&format!(
            "{} of {} characters shown, pass --expand for the full value",
            cell.display().chars().count(),
            cell.full().chars().count()
        ));
    }

    Ok(())
}

fn decode(raw: &str, json: bool) -> Result<ChangeValue> {
    if !json {
        return Ok(ChangeValue::decode_text(raw));
    }
    let parsed: Value = serde_json::from_str(raw).map_err(|e| AuditLensError::InvalidArgument {
        detail: format!("value is not valid JSON: {e}"),
    })?;
    Ok(ChangeValue::decode(&parsed))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}
