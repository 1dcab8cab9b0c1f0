use serde_json::Value;

use crate::core::models::action_kind::ActionKind;
use crate::core::models::change_cell::{ChangeCell, ExpandableValue};
use crate::core::services::event_describer::field_text;
use crate::core::services::value_formatter::ValueFormatter;
use crate::core::traits::translate::Translate;

/// Which half of a before/after diff is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    fn pick(self, before: &'static str, after: &'static str) -> &'static str {
        match self {
            Side::Before => before,
            Side::After => after,
        }
    }
}

/// Renders the before/after cells of an activity row.
///
/// Only role and setting changes carry a diff; every other action,
/// and every row without details, renders `N/A`.
pub struct ChangeDescriber<'a, T: Translate> {
    translator: &'a T,
    formatter: ValueFormatter,
}

impl<'a, T: Translate> ChangeDescriber<'a, T> {
    pub fn new(translator: &'a T) -> Self {
        Self {
            translator,
            formatter: ValueFormatter,
        }
    }

    pub fn describe_change(&self, action: &str, details: Option<&Value>, side: Side) -> ChangeCell {
        let Some(details) = details.filter(|d| !d.is_null()) else {
            return ChangeCell::NotApplicable;
        };

        match ActionKind::parse(action) {
            ActionKind::RoleChanged => {
                let field = side.pick("old_role_name", "new_role_name");
                match details.get(field).and_then(field_text) {
                    Some(role) => ChangeCell::Highlight(self.translator.t(&format!("role_{role}"))),
                    None => ChangeCell::NotApplicable,
                }
            }
            ActionKind::SettingChanged => {
                let field = side.pick("old_value", "new_value");
                match details.get(field) {
                    Some(value) => {
                        ChangeCell::Value(ExpandableValue::new(self.formatter.format_json(Some(value))))
                    }
                    None => ChangeCell::NotApplicable,
                }
            }
            _ => ChangeCell::NotApplicable,
        }
    }
}
