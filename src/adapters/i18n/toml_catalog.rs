use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::errors::{AuditLensError, Result};
use crate::core::traits::translate::{Language, Translate};

const BUILTIN_EN: &str = include_str!("../../../locales/en.toml");
const BUILTIN_AR: &str = include_str!("../../../locales/ar.toml");

/// Flat `key = "value"` translation catalog.
///
/// Lookup order: user overrides, then the bundled catalog, then the key
/// itself. Empty values count as missing so a cell is never blank.
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    language: Language,
    entries: HashMap<String, String>,
}

impl TomlCatalog {
    /// The catalog shipped with the binary.
    pub fn builtin(language: Language) -> Result<Self> {
        let source = match language {
            Language::En => BUILTIN_EN,
            Language::Ar => BUILTIN_AR,
        };
        let origin = PathBuf::from(format!("<builtin:{language}>"));
        Self::parse(language, source, &origin)
    }

    /// Bundled catalog with an optional override file layered on top.
    pub fn load(language: Language, overrides: Option<&Path>) -> Result<Self> {
        let mut catalog = Self::builtin(language)?;

        if let Some(path) = overrides {
            if !path.exists() {
                return Err(AuditLensError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let content = std::fs::read_to_string(path)?;
            let user = Self::parse(language, &content, path)?;
            catalog
                .entries
                .extend(user.entries.into_iter().filter(|(_, v)| !v.trim().is_empty()));
        }

        Ok(catalog)
    }

    pub fn parse(language: Language, content: &str, origin: &Path) -> Result<Self> {
        let entries: HashMap<String, String> =
            toml::from_str(content).map_err(|e| AuditLensError::TranslationError {
                path: origin.to_path_buf(),
                detail: e.to_string(),
            })?;
        Ok(Self { language, entries })
    }
}

impl Translate for TomlCatalog {
    fn t(&self, key: &str) -> String {
        self.entries
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn language(&self) -> Language {
        self.language
    }
}
