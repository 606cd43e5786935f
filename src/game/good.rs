//! Production goods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// A resource kind a city can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Good {
    /// Brick.
    Brick,
    /// Food.
    Food,
    /// Tools.
    Tools,
    /// Wine.
    Wine,
    /// Cloth.
    Cloth,
}

impl Good {
    /// Every good, in canonical order.
    pub const ALL: [Good; 5] = [Good::Brick, Good::Food, Good::Tools, Good::Wine, Good::Cloth];

    /// Parse a good from its canonical token.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidGoodToken`] if the token names no good.
    pub fn from_token(token: &str) -> Result<Self, NetworkError> {
        Self::ALL
            .into_iter()
            .find(|good| good.token() == token)
            .ok_or_else(|| NetworkError::InvalidGoodToken(token.to_string()))
    }

    /// The canonical token for this good.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Good::Brick => "BRICK",
            Good::Food => "FOOD",
            Good::Tools => "TOOLS",
            Good::Wine => "WINE",
            Good::Cloth => "CLOTH",
        }
    }
}

impl fmt::Display for Good {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Good {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}
