//! City files: `name::id::letter::good` per line.

use std::iter::Enumerate;
use std::str::Lines;

use tracing::warn;

use super::{
    LineError, LoadConfig, LoadReport, NO_GOOD, SEPARATOR, SkippedLine, is_record, load_file,
    parse_id, split_fields, write_lines,
};
use crate::error::{NetworkError, NetworkResult};
use crate::game::Good;
use crate::map::{City, Network};

/// Parse one trimmed record line into a city.
///
/// The first character of the letter field is the letter. A good of `-`
/// means the city produces nothing.
///
/// # Errors
///
/// Returns the [`LineError`] describing the first problem found.
pub fn parse_city_line(line: &str) -> Result<City, LineError> {
    let fields = split_fields(line, 4)?;
    let (name, id, letter, good) = (fields[0], fields[1], fields[2], fields[3]);

    if name.is_empty() {
        return Err(LineError::EmptyName);
    }
    let id = parse_id(id)?;
    let letter = letter.chars().next().ok_or(LineError::EmptyLetter)?;
    if letter == ':' {
        return Err(LineError::InvalidLetter(letter));
    }
    let good = if good == NO_GOOD {
        None
    } else {
        Some(Good::from_token(good).map_err(|_| LineError::InvalidGood(good.to_string()))?)
    };

    Ok(City::new(name, id, letter, good))
}

/// Check that a city's line reads back as the same city.
///
/// The name must be non-empty and must not start with whitespace or `#`,
/// end with `:`, or contain `::` or a line break. The letter must not be
/// `:` or a line break.
///
/// # Errors
///
/// Returns [`NetworkError::UnrepresentableCity`] naming the first problem.
pub fn check_writable(city: &City) -> NetworkResult<()> {
    let name = city.name();
    let letter = city.letter();
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.starts_with(char::is_whitespace) {
        Some("name starts with whitespace")
    } else if name.starts_with('#') {
        Some("name starts with '#'")
    } else if name.ends_with(':') {
        Some("name ends with ':'")
    } else if name.contains(SEPARATOR) {
        Some("name contains the separator")
    } else if name.contains('\n') || letter == '\n' {
        Some("line break in name or letter")
    } else if letter == ':' {
        Some("letter is ':'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(NetworkError::UnrepresentableCity {
            city: city.id(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Render a city as a record line, without the trailing newline.
///
/// Only cities that pass [`check_writable`] parse back unchanged.
#[must_use]
pub fn format_city_line(city: &City) -> String {
    let good = city.good().map_or(NO_GOOD, Good::token);
    format!(
        "{name}{SEPARATOR}{id}{SEPARATOR}{letter}{SEPARATOR}{good}",
        name = city.name(),
        id = city.id(),
        letter = city.letter(),
    )
}

/// One record line of a city file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRecord<'a> {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed line.
    pub text: &'a str,
    /// The parsed city, or what was wrong with the line.
    pub result: Result<City, LineError>,
}

/// Iterator over the city records of an in-memory file.
///
/// Yields a [`CityRecord`] for every record line; comments and blank lines
/// are passed over.
#[derive(Debug, Clone)]
pub struct CityRecords<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Iterator for CityRecords<'a> {
    type Item = CityRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in self.lines.by_ref() {
            let trimmed = line.trim();
            if is_record(trimmed) {
                return Some(CityRecord {
                    line: idx + 1,
                    text: trimmed,
                    result: parse_city_line(trimmed),
                });
            }
        }
        None
    }
}

/// Iterate over the city records in `text`.
#[must_use]
pub fn city_records(text: &str) -> CityRecords<'_> {
    CityRecords {
        lines: text.lines().enumerate(),
    }
}

/// Cities parsed from text, plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCities {
    /// Cities in file order.
    pub cities: Vec<City>,
    /// Lines that did not parse.
    pub skipped: Vec<SkippedLine>,
}

/// Parse every city in `text`.
///
/// Duplicate ids are not detected here; [`Network::add_city`] rejects them.
///
/// # Errors
///
/// Returns [`NetworkError::MalformedLine`] for the first bad line when
/// `config.strict` is set. A lenient parse never fails.
pub fn parse_cities(text: &str, config: LoadConfig) -> NetworkResult<ParsedCities> {
    let mut parsed = ParsedCities::default();

    for record in city_records(text) {
        match record.result {
            Ok(city) => parsed.cities.push(city),
            Err(reason) if config.strict => {
                return Err(NetworkError::MalformedLine {
                    line: record.line,
                    reason,
                });
            }
            Err(reason) => {
                warn!(line = record.line, %reason, "skipping malformed city line");
                parsed.skipped.push(SkippedLine {
                    line: record.line,
                    text: record.text.to_string(),
                    reason,
                });
            }
        }
    }

    Ok(parsed)
}

/// Load a city file into `network`, one line at a time.
///
/// Cities are added as they are read, so if reading fails part-way the
/// cities before the failure are already in the network. A line whose id
/// is already in the network counts as malformed.
///
/// # Errors
///
/// - [`NetworkError::Io`] if the file cannot be opened or read
/// - [`NetworkError::MalformedLine`] for the first bad line in strict mode
pub fn read_cities_into(
    network: &mut Network,
    path: impl AsRef<std::path::Path>,
    config: LoadConfig,
) -> NetworkResult<LoadReport> {
    load_file(path.as_ref(), config, |line| {
        let city = parse_city_line(line)?;
        let id = city.id();
        network
            .add_city(city)
            .map(|_| ())
            .map_err(|_| LineError::DuplicateCity(id))
    })
}

/// Write one line per city, in the order given.
///
/// Every city is checked with [`check_writable`] before the file is
/// touched. The file is created if it does not exist and truncated if it
/// does.
///
/// # Errors
///
/// - [`NetworkError::UnrepresentableCity`] if a city would not read back
/// - [`NetworkError::Io`] if the file cannot be created or written
pub fn write_cities<'a>(
    path: impl AsRef<std::path::Path>,
    cities: impl IntoIterator<Item = &'a City>,
) -> NetworkResult<()> {
    let cities: Vec<&City> = cities.into_iter().collect();
    for city in &cities {
        check_writable(city)?;
    }
    write_lines(path.as_ref(), cities.into_iter().map(format_city_line)).map(|_| ())
}
