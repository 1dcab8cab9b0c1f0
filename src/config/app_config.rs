use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{AuditLensError, Result};
use crate::core::models::page::DEFAULT_PAGE_SIZE;
use crate::core::traits::translate::Language;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "auditlens.toml";

/// Current format version supported by this build of auditlens.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Largest accepted `[log] page_size`.
const MAX_PAGE_SIZE: usize = 500;

/// Top-level configuration read from `auditlens.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auditlens: AuditLensSection,
    #[serde(default)]
    pub log: LogSection,
    #[serde(default)]
    pub translations: TranslationsSection,
    /// Directory relative paths in the file are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Resolution order:
    /// 1. `explicit` path (must exist)
    /// 2. `auditlens.toml` in the working directory
    /// 3. `<user config dir>/auditlens/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AuditLensError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_file(&local);
        }

        if let Some(user) = Self::user_config_path()
            && user.exists()
        {
            return Self::load_file(&user);
        }

        Ok(Self {
            base_dir: PathBuf::from("."),
            ..Self::default()
        })
    }

    /// `~/.config/auditlens/config.toml` on Linux, platform equivalent elsewhere.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("auditlens").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::parse(&content, base_dir)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str, base_dir: PathBuf) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| AuditLensError::InvalidConfig {
            detail: format!("Failed to parse {LOCAL_CONFIG_FILE}: {e}"),
        })?;
        config.base_dir = base_dir;

        if config.auditlens.format_version > CURRENT_FORMAT_VERSION {
            return Err(AuditLensError::FormatVersionTooNew {
                project_version: config.auditlens.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        if config.log.page_size == 0 || config.log.page_size > MAX_PAGE_SIZE {
            return Err(AuditLensError::InvalidConfig {
                detail: format!(
                    "[log] page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                    config.log.page_size
                ),
            });
        }

        if config.log.file.trim().is_empty() {
            return Err(AuditLensError::InvalidConfig {
                detail: "[log] file must not be empty".into(),
            });
        }

        Ok(config)
    }

    /// The activity log path, resolved against the config file's directory.
    pub fn log_file(&self) -> PathBuf {
        self.resolve(&self.log.file)
    }

    /// User override catalog for `language`, if configured.
    pub fn translation_override(&self, language: Language) -> Option<PathBuf> {
        let entry = match language {
            Language::En => self.translations.en.as_deref(),
            Language::Ar => self.translations.ar.as_deref(),
        };
        entry.map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base_dir.join(p)
        }
    }
}

/// The `[auditlens]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditLensSection {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub language: Language,
}

impl Default for AuditLensSection {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            language: Language::default(),
        }
    }
}

fn default_format_version() -> u32 {
    1
}

/// The `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            page_size: default_page_size(),
        }
    }
}

fn default_log_file() -> String {
    "activity_log.jsonl".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// The `[translations]` section: per-language override catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationsSection {
    pub en: Option<String>,
    pub ar: Option<String>,
}
