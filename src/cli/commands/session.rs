use std::path::{Path, PathBuf};

use crate::adapters::events::jsonl_event_source::JsonlEventSource;
use crate::adapters::i18n::toml_catalog::TomlCatalog;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::traits::translate::{Language, Translate};

/// Everything a command needs: resolved config and the active catalog.
pub struct Session {
    pub config: AppConfig,
    pub catalog: TomlCatalog,
}

impl Session {
    /// Load config, pick the language (flag over config), and build the catalog.
    pub fn open(lang: Option<&str>, config_path: Option<&str>) -> Result<Self> {
        let config = AppConfig::load(config_path.map(Path::new))?;
        output::verbose(&format!("config base: {}", config.base_dir.display()));

        let language = match lang {
            Some(code) => code.parse::<Language>()?,
            None => config.auditlens.language,
        };

        let overrides = config.translation_override(language);
        if let Some(path) = &overrides {
            output::verbose(&format!("translation overrides: {}", path.display()));
        }
        let catalog = TomlCatalog::load(language, overrides.as_deref())?;
        let direction = if catalog.language().is_rtl() { "rtl" } else { "ltr" };
        output::verbose(&format!("language: {} ({direction})", catalog.language()));

        Ok(Self { config, catalog })
    }

    /// The activity log: `--file` when given, else `[log] file`.
    pub fn event_source(&self, file: Option<&str>) -> JsonlEventSource {
        let source = JsonlEventSource::new(
            file.map(PathBuf::from)
                .unwrap_or_else(|| self.config.log_file()),
        );
        output::verbose(&format!("activity log: {}", source.path().display()));
        source
    }
}
