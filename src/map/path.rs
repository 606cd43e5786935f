//! Paths between cities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;
use crate::map::CityId;

/// Transport mode of a path, and the matching colonist type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Transport {
    /// Overland road.
    Land,
    /// Sea lane.
    Sea,
}

impl Transport {
    /// The token used in route files.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Transport::Land => "LAND",
            Transport::Sea => "SEA",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAND" => Ok(Transport::Land),
            "SEA" => Ok(Transport::Sea),
            other => Err(other.to_string()),
        }
    }
}

/// An undirected, typed edge between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path {
    a: CityId,
    b: CityId,
    mode: Transport,
}

impl Path {
    /// Create a path between `a` and `b`.
    #[must_use]
    pub const fn new(a: CityId, b: CityId, mode: Transport) -> Self {
        Self { a, b, mode }
    }

    /// Create a land path.
    #[must_use]
    pub const fn land(a: CityId, b: CityId) -> Self {
        Self::new(a, b, Transport::Land)
    }

    /// Create a sea path.
    #[must_use]
    pub const fn sea(a: CityId, b: CityId) -> Self {
        Self::new(a, b, Transport::Sea)
    }

    /// Both endpoints, in the order the path was created with.
    #[must_use]
    pub const fn endpoints(&self) -> (CityId, CityId) {
        (self.a, self.b)
    }

    /// The transport mode.
    #[must_use]
    pub const fn mode(&self) -> Transport {
        self.mode
    }

    /// Whether `city` is one of the endpoints.
    #[must_use]
    pub const fn connects(&self, city: CityId) -> bool {
        self.a == city || self.b == city
    }

    /// The endpoint opposite `city`.
    ///
    /// For a path that loops back to the same city, that city is returned.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotAnEndpoint`] if `city` is neither endpoint.
    pub fn other_endpoint(&self, city: CityId) -> Result<CityId, NetworkError> {
        if city == self.a {
            Ok(self.b)
        } else if city == self.b {
            Ok(self.a)
        } else {
            Err(NetworkError::NotAnEndpoint {
                city,
                endpoints: self.endpoints(),
            })
        }
    }

    /// Whether this path joins the same two cities with the same mode,
    /// in either direction.
    #[must_use]
    pub fn same_route(&self, other: &Path) -> bool {
        let same_ends = (self.a == other.a && self.b == other.b)
            || (self.a == other.b && self.b == other.a);
        same_ends && self.mode == other.mode
    }
}
