use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;

use crate::adapters::archive::text_archive_writer::TextArchiveWriter;
use crate::cli::commands::session::Session;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::event_filter::EventFilter;
use crate::core::services::archive_service::ArchiveService;
use crate::core::traits::event_source::EventSource;
use crate::core::traits::translate::Translate;

/// Execute the `auditlens archive` command.
///
/// Step 1 writes entries older than `months` to a text file. Step 2, only
/// with `--delete` and only after the file is written, removes those
/// entries from the log.
pub fn execute(
    session: &Session,
    file: Option<&str>,
    months: u32,
    out: Option<&str>,
    delete: bool,
) -> Result<()> {
    let t = &session.catalog;
    let source = session.event_source(file);
    let events = source.query(&EventFilter::default())?;

    let plan = ArchiveService::new(t).plan(&events, months, Utc::now())?;
    output::verbose(&format!(
        "cutoff: {}",
        plan.cutoff.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    let writer = TextArchiveWriter::new(out.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")));
    output::verbose(&format!("archive directory: {}", writer.out_dir().display()));
    let written = writer.write(&plan)?;

    output::header(&t.t("archive_and_clear_log"));
    output::success(&format!("{}: {}", t.t("log_archived"), written.path.display()));
    println!(
        "  {} {}",
        plan.record_count().to_string().cyan(),
        t.t("records_archived")
    );
    println!("  SHA-256: {}", written.sha256.dimmed());

    if delete {
        let removed = source.remove_older_than(plan.cutoff)?;
        output::success(&t.t("log_archived_and_deleted"));
        println!("  {} {}", removed.to_string().cyan(), t.t("records_deleted"));
    }

    Ok(())
}
