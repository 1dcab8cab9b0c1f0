use serde_json::Value;

use crate::core::models::action_kind::{ActionKind, PlaceholderRule, Transform};
use crate::core::models::change_cell::NOT_APPLICABLE;
use crate::core::models::rich_text::RichText;
use crate::core::services::template_renderer::render_with_placeholders;
use crate::core::traits::translate::Translate;

/// Renders the one-line summary of an audit event.
///
/// Known actions use the localized `log_summary_<CODE>` template with
/// highlighted parameters; everything else gets `log_action_<CODE>`.
pub struct EventDescriber<'a, T: Translate> {
    translator: &'a T,
}

impl<'a, T: Translate> EventDescriber<'a, T> {
    pub fn new(translator: &'a T) -> Self {
        Self { translator }
    }

    pub fn describe(&self, action: &str, details: Option<&Value>) -> RichText {
        let kind = ActionKind::parse(action);
        let details = details.filter(|d| !d.is_null());

        match details {
            Some(details) if kind.is_templated() => {
                let template = self.translator.t(&format!("log_summary_{}", kind.code()));
                let values: Vec<(&str, String)> = kind
                    .placeholders()
                    .iter()
                    .map(|rule| (rule.placeholder, self.placeholder_value(rule, details)))
                    .collect();
                render_with_placeholders(&template, &values)
            }
            _ => self.generic(action),
        }
    }

    /// The localized action label used for untemplated or detail-less rows.
    pub fn generic(&self, action: &str) -> RichText {
        RichText::plain(self.translator.t(&format!("log_action_{action}")))
    }

    fn placeholder_value(&self, rule: &PlaceholderRule, details: &Value) -> String {
        let Some(raw) = details.get(rule.field).and_then(field_text) else {
            return NOT_APPLICABLE.to_string();
        };

        match rule.transform {
            Transform::Verbatim => raw,
            // Only the first separator is rewritten: `write:app:settings` → `perm_write_app:settings`.
            Transform::Permission => self.translator.t(&format!("perm_{}", raw.replacen(':', "_", 1))),
            Transform::Role => self.translator.t(&format!("role_{raw}")),
        }
    }
}

/// Text form of a detail field; `None` for null and empty strings.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
