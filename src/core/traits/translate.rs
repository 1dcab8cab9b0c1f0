use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::AuditLensError;

/// Display languages with a bundled catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Arabic is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AuditLensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(AuditLensError::InvalidArgument {
                detail: format!("unsupported language '{other}' (expected 'en' or 'ar')"),
            }),
        }
    }
}

/// Port for localized string lookup.
///
/// Keys are often built at runtime (`log_action_<CODE>`, `role_<name>`),
/// so implementations must never fail and never return an empty string:
/// an unknown key resolves to a visible fallback.
pub trait Translate {
    fn t(&self, key: &str) -> String;

    fn language(&self) -> Language;
}
