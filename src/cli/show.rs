//! Show command implementation.

use super::output::JsonNetwork;
use super::{CliError, OutputFormat, load_map};
use concordia::format::render_summary;
use concordia::LoadConfig;
use std::path::Path;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if a file cannot be read or JSON encoding fails.
pub(crate) fn execute(
    cities: &Path,
    routes: Option<&Path>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let loaded = load_map(cities, routes, LoadConfig::lenient())?;

    match format {
        OutputFormat::Text => print!("{}", render_summary(&loaded.network)),
        OutputFormat::Json => {
            let json = JsonNetwork::from_network(&loaded.network);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
