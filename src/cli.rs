//! CLI command implementations for Concordia.

pub(crate) mod rewrite;
pub(crate) mod show;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use concordia::format::{read_cities_into, read_routes_into};
use concordia::{LoadConfig, LoadReport, Network, NetworkError};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<NetworkError> for CliError {
    fn from(e: NetworkError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON encoding failed: {e}"))
    }
}

/// A network loaded from files, with one report per file read.
#[derive(Debug)]
pub(crate) struct LoadedMap {
    pub(crate) network: Network,
    pub(crate) cities: LoadReport,
    pub(crate) routes: Option<LoadReport>,
}

/// Load a city file and, if given, a route file.
pub(crate) fn load_map(
    cities: &Path,
    routes: Option<&Path>,
    config: LoadConfig,
) -> Result<LoadedMap, CliError> {
    let mut network = Network::new();
    let city_report = read_cities_into(&mut network, cities, config)?;
    let route_report = match routes {
        Some(path) => Some(read_routes_into(&mut network, path, config)?),
        None => None,
    };

    Ok(LoadedMap {
        network,
        cities: city_report,
        routes: route_report,
    })
}
