//! Concordia CLI - Command-line tools for map network files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Concordia - map network tools for a trade-route board game
#[derive(Parser, Debug)]
#[command(name = "concordia")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a city file (and optional route file) for problems
    Validate {
        /// City file (name::id::letter::good per line)
        #[arg(required = true)]
        cities: PathBuf,

        /// Route file (from::to::mode per line)
        #[arg(short, long)]
        routes: Option<PathBuf>,

        /// Fail on the first malformed line instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Print a summary of the network
    Show {
        /// City file
        #[arg(required = true)]
        cities: PathBuf,

        /// Route file
        #[arg(short, long)]
        routes: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Write a normalised copy of a map, dropping comments and bad lines
    Rewrite {
        /// City file to read
        #[arg(required = true)]
        cities: PathBuf,

        /// City file to write
        #[arg(required = true)]
        out: PathBuf,

        /// Route file to read
        #[arg(short, long, requires = "routes_out")]
        routes: Option<PathBuf>,

        /// Route file to write
        #[arg(long, requires = "routes")]
        routes_out: Option<PathBuf>,

        /// Write cities in id order instead of file order
        #[arg(long)]
        sort: bool,
    },
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let result = match args.command {
        Commands::Validate {
            cities,
            routes,
            strict,
        } => cli::validate::execute(&cities, routes.as_deref(), strict),

        Commands::Show {
            cities,
            routes,
            format,
        } => cli::show::execute(&cities, routes.as_deref(), format),

        Commands::Rewrite {
            cities,
            out,
            routes,
            routes_out,
            sort,
        } => cli::rewrite::execute(&cities, &out, routes.as_deref(), routes_out.as_deref(), sort),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
