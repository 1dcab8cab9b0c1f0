use colored::Colorize;

use crate::cli::context::{Verbosity, verbosity};

/// Print a success message.
pub fn success(msg: &str) {
    if verbosity() == Verbosity::Quiet {
        return;
    }
    println!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if verbosity() == Verbosity::Quiet {
        return;
    }
    println!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line.
pub fn header(msg: &str) {
    if verbosity() == Verbosity::Quiet {
        return;
    }
    println!("\n{}", msg.bold());
}

/// Print a diagnostic line to stderr, only with `--verbose`.
pub fn verbose(msg: &str) {
    if verbosity() == Verbosity::Verbose {
        eprintln!("  {} {}", "·".dimmed(), msg.dimmed());
    }
}
