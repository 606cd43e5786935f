//! Line-oriented text formats for map files.
//!
//! City files hold one `name::id::letter::good` record per line, route files
//! one `from::to::mode` record per line. In both:
//! - lines are trimmed before parsing
//! - blank lines and lines starting with `#` are ignored
//! - a malformed line is skipped with a warning and the rest of the file
//!   still loads, unless [`LoadConfig::strict`] is set
//!
//! Nothing is escaped. [`write_cities`] refuses any city whose line would
//! not read back unchanged, such as a name containing `::`.

mod cities;
mod routes;
mod text;

pub use cities::{
    CityRecord, CityRecords, ParsedCities, check_writable, city_records, format_city_line,
    parse_cities, parse_city_line, read_cities_into, write_cities,
};
pub use routes::{format_route_line, parse_route_line, read_routes_into, write_routes};
pub use text::render_summary;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};

use tracing::{info, warn};

use crate::error::{NetworkError, NetworkResult};
use crate::map::CityId;

/// Field separator in every map file.
pub const SEPARATOR: &str = "::";

/// Good field written for a city that produces nothing.
pub const NO_GOOD: &str = "-";

/// How to treat malformed lines while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadConfig {
    /// Fail on the first malformed line instead of skipping it.
    pub strict: bool,
}

impl LoadConfig {
    /// Skip malformed lines with a warning.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { strict: false }
    }

    /// Fail on the first malformed line.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}

/// What was wrong with a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Wrong number of `::`-separated fields.
    FieldCount {
        /// Fields the record needs.
        expected: usize,
        /// Fields the line had.
        found: usize,
    },
    /// A city id was not a non-negative integer.
    InvalidId(String),
    /// The name field was empty.
    EmptyName,
    /// The letter field was empty.
    EmptyLetter,
    /// The letter would run into the field separator.
    InvalidLetter(char),
    /// The good field named no good.
    InvalidGood(String),
    /// The mode field was neither `LAND` nor `SEA`.
    InvalidMode(String),
    /// Another line already defined this city id.
    DuplicateCity(CityId),
    /// A route names a city that was not loaded.
    UnknownCity(CityId),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::InvalidId(raw) => write!(f, "invalid city id {raw:?}"),
            Self::EmptyName => write!(f, "empty city name"),
            Self::EmptyLetter => write!(f, "empty city letter"),
            Self::InvalidLetter(c) => write!(f, "invalid city letter {c:?}"),
            Self::InvalidGood(raw) => write!(f, "unknown good {raw:?}"),
            Self::InvalidMode(raw) => write!(f, "unknown transport mode {raw:?}"),
            Self::DuplicateCity(id) => write!(f, "city id {id} already defined"),
            Self::UnknownCity(id) => write!(f, "route to unknown city {id}"),
        }
    }
}

impl std::error::Error for LineError {}

/// A line that was skipped during a lenient load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line.
    pub text: String,
    /// Why it was skipped.
    pub reason: LineError,
}

/// Outcome of loading one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added to the network.
    pub loaded: usize,
    /// Lines that were skipped.
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    /// Whether every record line loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Whether a trimmed line carries a record.
fn is_record(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}

/// Split a trimmed line into exactly `expected` fields.
fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, LineError> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() == expected {
        Ok(fields)
    } else {
        Err(LineError::FieldCount {
            expected,
            found: fields.len(),
        })
    }
}

fn parse_id(raw: &str) -> Result<CityId, LineError> {
    raw.parse()
        .map_err(|_| LineError::InvalidId(raw.to_string()))
}

/// Feed every record line of `reader` to `accept`.
///
/// Records accepted before an I/O failure or a strict-mode rejection stay
/// wherever `accept` put them.
fn load_records<R: BufRead>(
    reader: R,
    source: &std::path::Path,
    config: LoadConfig,
    mut accept: impl FnMut(&str) -> Result<(), LineError>,
) -> NetworkResult<LoadReport> {
    let mut report = LoadReport::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| NetworkError::io(source, e))?;
        let trimmed = line.trim();
        if !is_record(trimmed) {
            continue;
        }

        match accept(trimmed) {
            Ok(()) => report.loaded += 1,
            Err(reason) if config.strict => {
                return Err(NetworkError::MalformedLine {
                    line: idx + 1,
                    reason,
                });
            }
            Err(reason) => {
                warn!(
                    file = %source.display(),
                    line = idx + 1,
                    %reason,
                    "skipping malformed line"
                );
                report.skipped.push(SkippedLine {
                    line: idx + 1,
                    text: trimmed.to_string(),
                    reason,
                });
            }
        }
    }

    info!(
        file = %source.display(),
        loaded = report.loaded,
        skipped = report.skipped.len(),
        "map file loaded"
    );
    Ok(report)
}

/// Open `path` and feed its records to `accept`.
fn load_file(
    path: &std::path::Path,
    config: LoadConfig,
    accept: impl FnMut(&str) -> Result<(), LineError>,
) -> NetworkResult<LoadReport> {
    let file = File::open(path).map_err(|e| NetworkError::io(path, e))?;
    load_records(std::io::BufReader::new(file), path, config, accept)
}

/// Create or truncate `path` and write one line per item.
fn write_lines(
    path: &std::path::Path,
    lines: impl IntoIterator<Item = String>,
) -> NetworkResult<usize> {
    let file = File::create(path).map_err(|e| NetworkError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0;
    for line in lines {
        writeln!(writer, "{line}").map_err(|e| NetworkError::io(path, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| NetworkError::io(path, e))?;

    info!(file = %path.display(), lines = count, "map file written");
    Ok(count)
}
