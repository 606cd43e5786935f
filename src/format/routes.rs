//! Route files: `from::to::mode` per line.

use super::{
    LineError, LoadConfig, LoadReport, SEPARATOR, load_file, parse_id, split_fields, write_lines,
};
use crate::error::NetworkResult;
use crate::map::{Network, Path, Transport};

/// Parse one trimmed record line into a path.
///
/// # Errors
///
/// Returns the [`LineError`] describing the first problem found.
pub fn parse_route_line(line: &str) -> Result<Path, LineError> {
    let fields = split_fields(line, 3)?;
    let from = parse_id(fields[0])?;
    let to = parse_id(fields[1])?;
    let mode: Transport = fields[2].parse().map_err(LineError::InvalidMode)?;
    Ok(Path::new(from, to, mode))
}

/// Render a path as a record line, without the trailing newline.
#[must_use]
pub fn format_route_line(path: &Path) -> String {
    let (from, to) = path.endpoints();
    format!("{from}{SEPARATOR}{to}{SEPARATOR}{}", path.mode())
}

/// Load a route file into `network`.
///
/// Load the cities first: a route naming a city the network does not have
/// counts as a malformed line.
///
/// # Errors
///
/// - [`crate::NetworkError::Io`] if the file cannot be opened or read
/// - [`crate::NetworkError::MalformedLine`] for the first bad line in strict mode
pub fn read_routes_into(
    network: &mut Network,
    path: impl AsRef<std::path::Path>,
    config: LoadConfig,
) -> NetworkResult<LoadReport> {
    load_file(path.as_ref(), config, |line| {
        let route = parse_route_line(line)?;
        let (from, to) = route.endpoints();
        for end in [from, to] {
            if !network.contains_city(end) {
                return Err(LineError::UnknownCity(end));
            }
        }
        network
            .add_path(route)
            .map_err(|_| LineError::UnknownCity(from))
    })
}

/// Write one line per path, in the order given.
///
/// # Errors
///
/// Returns [`crate::NetworkError::Io`] if the file cannot be created or written.
pub fn write_routes<'a>(
    path: impl AsRef<std::path::Path>,
    routes: impl IntoIterator<Item = &'a Path>,
) -> NetworkResult<()> {
    write_lines(path.as_ref(), routes.into_iter().map(format_route_line)).map(|_| ())
}
