//! Rewrite command implementation.

use super::{CliError, load_map};
use concordia::format::{write_cities, write_routes};
use concordia::{City, LoadConfig};
use std::path::Path;

/// Execute the rewrite command.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written.
pub(crate) fn execute(
    cities: &Path,
    out: &Path,
    routes: Option<&Path>,
    routes_out: Option<&Path>,
    sort: bool,
) -> Result<(), CliError> {
    let loaded = load_map(cities, routes, LoadConfig::lenient())?;

    let mut ordered: Vec<&City> = loaded.network.cities().collect();
    if sort {
        ordered.sort_by_key(|city| city.id());
    }
    write_cities(out, ordered)?;
    println!(
        "Wrote {} cities to {} ({} lines dropped)",
        loaded.network.len(),
        out.display(),
        loaded.cities.skipped.len()
    );

    if let Some(routes_out) = routes_out {
        write_routes(routes_out, loaded.network.paths())?;
        let dropped = loaded.routes.as_ref().map_or(0, |r| r.skipped.len());
        println!(
            "Wrote {} paths to {} ({dropped} lines dropped)",
            loaded.network.path_count(),
            routes_out.display()
        );
    }

    Ok(())
}
