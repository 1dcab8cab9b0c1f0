pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Read, describe, and archive administrative activity logs.
#[derive(Parser, Debug)]
#[command(name = "auditlens", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Display language (en, ar). Defaults to the configured language
    #[arg(long, global = true, env = "AUDITLENS_LANG")]
    pub lang: Option<String>,

    /// Activity log file (JSON lines). Defaults to [log] file in config
    #[arg(long, global = true, env = "AUDITLENS_LOG")]
    pub file: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true, env = "AUDITLENS_CONFIG")]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the activity log as a table
    Log {
        /// Filter by user name or email (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Filter by exact action code (see 'auditlens actions')
        #[arg(long)]
        action: Option<String>,
        /// Only entries on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Only entries on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Show long before/after values in full
        #[arg(long)]
        expand: bool,
    },

    /// Describe a single event: summary, before and after
    Describe {
        /// Action code, e.g. APP_SETTING_CHANGED
        action: String,
        /// Event details as a JSON object
        #[arg(long)]
        details: Option<String>,
        /// Show long before/after values in full
        #[arg(long)]
        expand: bool,
    },

    /// Format one before/after value the way the log table does
    Format {
        /// The value; '-' reads it from stdin
        value: String,
        /// Treat the value as a JSON document instead of stored text
        #[arg(long)]
        json: bool,
        /// Show long values in full
        #[arg(long)]
        expand: bool,
    },

    /// List the distinct action codes in the log
    Actions,

    /// Export entries older than N months to a text file
    Archive {
        /// Archive entries older than this many months
        #[arg(long)]
        months: u32,
        /// Directory for the archive file (default: current directory)
        #[arg(long)]
        out: Option<String>,
        /// Remove the archived entries from the log afterwards
        #[arg(long)]
        delete: bool,
    },
}
