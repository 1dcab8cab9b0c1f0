use std::path::PathBuf;

/// All operational errors for auditlens.
///
/// Rendering itself never fails; these cover reading sources, parsing
/// arguments and configuration, and writing archives.
#[derive(Debug, thiserror::Error)]
pub enum AuditLensError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Set [log] file in auditlens.toml or pass --file <path>."
    )]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Malformed event at line {line}: {detail}\n\n  \
         Each line of the activity log must be one JSON object with at least\n  \
         \"id\", \"created_at\" and \"action\" fields."
    )]
    MalformedEvent { line: usize, detail: String },

    #[error(
        "Invalid date: '{input}'\n\n  \
         Expected ISO 8601 (YYYY-MM-DD), e.g. 2026-01-15"
    )]
    InvalidDate { input: String },

    #[error("Invalid argument: {detail}")]
    InvalidArgument { detail: String },

    #[error(
        "No logs to archive for the selected period ({months} months)\n\n  \
         Try a shorter period, or run 'auditlens log' to see what is recorded."
    )]
    NothingToArchive { months: u32 },

    #[error("Translation catalog error in {path}: {detail}")]
    TranslationError { path: PathBuf, detail: String },

    #[error(
        "Archive failed: {reason}\n\n  \
         The activity log source was NOT modified."
    )]
    ArchiveError { reason: String },

    #[error(
        "This configuration uses format version {project_version}, but your \
         auditlens only supports up to version {supported_version}.\n\n  \
         Install a newer release: cargo install auditlens --force"
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditLensError>;
