//! Output formatting utilities for CLI.

use concordia::format::LoadReport;
use concordia::{CityId, ColonistId, Good, HouseId, Network, Transport};
use serde::Serialize;

/// JSON-serializable network.
#[derive(Debug, Serialize)]
pub(super) struct JsonNetwork {
    /// Cities in load order.
    pub(super) cities: Vec<JsonCity>,
    /// Paths in load order.
    pub(super) paths: Vec<JsonPath>,
}

/// JSON-serializable city.
#[derive(Debug, Serialize)]
pub(super) struct JsonCity {
    /// City id.
    pub(super) id: CityId,
    /// Display name.
    pub(super) name: String,
    /// Display letter.
    pub(super) letter: char,
    /// Produced good (null if none).
    pub(super) good: Option<Good>,
    /// Colonists on the city.
    pub(super) colonists: Vec<ColonistId>,
    /// Houses on the city.
    pub(super) houses: Vec<HouseId>,
}

/// JSON-serializable path.
#[derive(Debug, Serialize)]
pub(super) struct JsonPath {
    /// First endpoint.
    pub(super) from: CityId,
    /// Second endpoint.
    pub(super) to: CityId,
    /// LAND or SEA.
    pub(super) mode: Transport,
}

impl JsonNetwork {
    /// Create from a Network.
    pub(super) fn from_network(network: &Network) -> Self {
        Self {
            cities: network
                .cities()
                .map(|city| JsonCity {
                    id: city.id(),
                    name: city.name().to_string(),
                    letter: city.letter(),
                    good: city.good(),
                    colonists: city.colonists().to_vec(),
                    houses: city.houses().to_vec(),
                })
                .collect(),
            paths: network
                .paths()
                .iter()
                .map(|path| {
                    let (from, to) = path.endpoints();
                    JsonPath {
                        from,
                        to,
                        mode: path.mode(),
                    }
                })
                .collect(),
        }
    }
}

/// Format the skipped lines of a load report, one per line.
pub(super) fn format_skipped(file: &str, report: &LoadReport) -> String {
    report
        .skipped
        .iter()
        .map(|skip| format!("  {file}:{}: {} ({})\n", skip.line, skip.reason, skip.text))
        .collect()
}
