mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::commands::log::LogArgs;
use cli::commands::session::Session;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    cli::context::init(args.verbose, args.quiet);

    let file = args.file.as_deref();
    let open = || Session::open(args.lang.as_deref(), args.config.as_deref());

    let result = match &args.command {
        Commands::Log {
            search,
            action,
            from,
            to,
            page,
            expand,
        } => open().and_then(|session| {
            cli::commands::log::execute(
                &session,
                file,
                &LogArgs {
                    search: search.as_deref(),
                    action: action.as_deref(),
                    from: from.as_deref(),
                    to: to.as_deref(),
                    page: *page,
                    expand: *expand,
                },
            )
        }),
        Commands::Describe {
            action,
            details,
            expand,
        } => open().and_then(|session| {
            cli::commands::describe::execute(&session, action, details.as_deref(), *expand)
        }),
        // Formatting a single value needs no config or catalog.
        Commands::Format { value, json, expand } => {
            cli::commands::format::execute(value, *json, *expand)
        }
        Commands::Actions => open().and_then(|session| cli::commands::actions::execute(&session, file)),
        Commands::Archive {
            months,
            out,
            delete,
        } => open().and_then(|session| {
            cli::commands::archive::execute(&session, file, *months, out.as_deref(), *delete)
        }),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
