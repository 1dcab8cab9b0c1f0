use crate::core::models::change_cell::{NOT_APPLICABLE, truncate};
use crate::core::models::change_value::ChangeValue;

/// Width of each side of a localized `en`/`ar` pair.
const LOCALIZED_SIDE_LIMIT: usize = 30;

/// Width of each value in a small `key: value` object.
const FIELD_LIMIT: usize = 20;

/// Objects with more keys than this collapse to `{N fields}`.
const INLINE_FIELD_COUNT: usize = 2;

/// Turns before/after payloads into short, readable strings.
///
/// Pure: the output depends only on the value.
pub struct ValueFormatter;

impl ValueFormatter {
    /// Format a decoded value. `None` and `Null` become `N/A`.
    pub fn format(&self, value: Option<&ChangeValue>) -> String {
        match value {
            None | Some(ChangeValue::Null) => NOT_APPLICABLE.to_string(),
            Some(ChangeValue::Text(text)) => text.clone(),
            Some(ChangeValue::Bool(b)) => b.to_string(),
            Some(ChangeValue::Number(n)) => n.to_string(),
            Some(ChangeValue::Array(items)) => format!("[{} items]", items.len()),
            Some(object @ ChangeValue::Object(fields)) => self.format_object(object, fields),
        }
    }

    /// Decode a stored JSON payload and format it.
    pub fn format_json(&self, raw: Option<&serde_json::Value>) -> String {
        let decoded = raw.map(ChangeValue::decode);
        self.format(decoded.as_ref())
    }

    fn format_object(&self, object: &ChangeValue, fields: &[(String, ChangeValue)]) -> String {
        if let Some(pair) = self.format_localized_pair(object) {
            return pair;
        }

        if fields.is_empty() || fields.len() > INLINE_FIELD_COUNT {
            return format!("{{{} fields}}", fields.len());
        }

        fields
            .iter()
            .map(|(key, value)| format!("{key}: {}", truncate(&self.format(Some(value)), FIELD_LIMIT)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `EN: … | AR: …` when at least one side carries text.
    fn format_localized_pair(&self, object: &ChangeValue) -> Option<String> {
        let side = |key: &str| object.get(key).filter(|v| is_present(v));

        let sides: Vec<String> = [("EN", side("en")), ("AR", side("ar"))]
            .into_iter()
            .filter_map(|(label, value)| {
                value.map(|v| format!("{label}: {}", truncate(&self.format(Some(v)), LOCALIZED_SIDE_LIMIT)))
            })
            .collect();

        if sides.is_empty() {
            None
        } else {
            Some(sides.join(" | "))
        }
    }
}

/// A localized side counts only when it has something to show.
fn is_present(value: &ChangeValue) -> bool {
    !value.is_null() && !matches!(value, ChangeValue::Text(t) if t.is_empty())
}
