// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Concordia: the map network of a trade-route board game.
//!
//! This crate provides the substrate that card effects and turn logic
//! operate on:
//! - Cities that produce goods and host colonists and houses
//! - Land and sea paths between cities
//! - Movement rules: a colonist only travels paths of its own type
//! - Text formats for saving and loading maps
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Card effects / turn sequencer     │  (callers)
//! ├─────────────────────────────────────┤
//! │   Network: lookup, moves, houses    │
//! ├─────────────────────────────────────┤
//! │   City · Path · Colonist · House    │
//! ├─────────────────────────────────────┤
//! │   format: city and route files      │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use concordia::{City, Colonist, Good, Network, Path};
//!
//! let mut network = Network::from_parts(
//!     [
//!         City::new("Roma", 0, 'R', Some(Good::Wine)),
//!         City::new("Ostia", 1, 'O', Some(Good::Tools)),
//!     ],
//!     [Path::sea(0, 1)],
//! )?;
//!
//! let mut sailor = Colonist::sea(1, 1);
//! network.move_colonist(&mut sailor, &Path::sea(0, 1), Some(0))?;
//! assert_eq!(sailor.location(), Some(0));
//!
//! let mut walker = Colonist::land(2, 1);
//! assert!(network.move_colonist(&mut walker, &Path::sea(0, 1), Some(0)).is_err());
//! # Ok::<(), concordia::NetworkError>(())
//! ```

pub mod error;
pub mod format;
pub mod game;
pub mod map;

pub use error::{MoveRejection, NetworkError, NetworkResult};

// Re-export key types at crate root for convenience
pub use format::{LoadConfig, LoadReport};
pub use game::{Colonist, ColonistId, Good, House, HouseId, PlayerId};
pub use map::{City, CityId, Network, Path, SharedNetwork, Transport};
