//! Levelforge - Terminal front panel for a procedural level generator

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use levelforge::App;
use levelforge::Settings;

/// Terminal front panel for a procedural level generator
#[derive(Parser)]
#[command(name = "levelforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset all options to their default values
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Show the active configuration
    Config {
        /// Print the settings file path instead of its contents
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let settings = Settings::load();
    init_logging(&settings);

    match cli.command {
        Some(Commands::Reset { force }) => cmd_reset(force),
        Some(Commands::Config { path }) => cmd_config(path, &settings),
        None => levelforge::tui::run(App::new(settings)),
    }
}

/// Set up file logging when requested.
///
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug).
/// The debug-messages option forces debug verbosity regardless of DEBUG.
fn init_logging(settings: &Settings) {
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 && !settings.debug_messages {
        return;
    }

    // Clear the log file on startup; tail with: tail -f <temp dir>/levelforge.log
    if let Err(e) = std::fs::write(levelforge::paths::log_path(), "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let level = if settings.debug_messages {
        tracing::Level::DEBUG
    } else {
        match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    };

    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "levelforge.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn cmd_reset(force: bool) -> Result<()> {
    use std::io::{self, Write};

    let path = Settings::path();
    println!("This resets all options in {} to defaults.", path.display());

    if !force {
        print!("Continue? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Settings::default().save()?;
    println!("Options reset to defaults.");
    Ok(())
}

fn cmd_config(path_only: bool, settings: &Settings) -> Result<()> {
    if path_only {
        println!("{}", Settings::path().display());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
