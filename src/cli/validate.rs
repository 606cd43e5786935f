//! Map validation command implementation.

use super::output::format_skipped;
use super::{CliError, load_map};
use concordia::map::check_network;
use concordia::LoadConfig;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if a file cannot be read, a line is malformed, or the
/// loaded network breaks an invariant.
pub(crate) fn execute(cities: &Path, routes: Option<&Path>, strict: bool) -> Result<(), CliError> {
    let config = LoadConfig { strict };

    println!("Validating: {}", cities.display());
    if let Some(routes) = routes {
        println!("Routes:     {}", routes.display());
    }
    println!();

    let loaded = load_map(cities, routes, config)?;

    let cities_ok = loaded.cities.is_clean();
    print_check(
        &format!("City lines ({} loaded)", loaded.cities.loaded),
        cities_ok,
    );
    print!("{}", format_skipped(&cities.display().to_string(), &loaded.cities));

    let mut routes_ok = true;
    if let (Some(path), Some(report)) = (routes, &loaded.routes) {
        routes_ok = report.is_clean();
        print_check(&format!("Route lines ({} loaded)", report.loaded), routes_ok);
        print!("{}", format_skipped(&path.display().to_string(), report));
    }

    let violations = check_network(&loaded.network);
    print_check("Network invariants", violations.is_empty());
    for violation in &violations {
        println!("    {}", violation.message);
    }

    println!();
    println!("Summary:");
    println!("  Cities: {}", loaded.network.len());
    println!("  Paths:  {}", loaded.network.path_count());
    println!();

    let skipped = loaded.cities.skipped.len()
        + loaded.routes.as_ref().map_or(0, |r| r.skipped.len());
    if !cities_ok || !routes_ok {
        return Err(CliError::new(format!("{skipped} malformed line(s)")));
    }
    if !violations.is_empty() {
        return Err(CliError::new(format!(
            "{} invariant violation(s)",
            violations.len()
        )));
    }

    println!("Validation successful!");
    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
