//! The map network: cities, the paths between them, and the rules for
//! moving colonists and building houses.
//!
//! Cities are stored in an arena keyed by [`CityId`]. Colonists and houses
//! are owned by the caller and refer to cities by id; cities record the ids
//! of the pieces on them.

mod city;
mod invariants;
mod network;
mod path;
mod shared;

pub use city::{City, CityId};
pub use invariants::{InvariantViolation, check_network, check_residency};
pub use network::Network;
pub use path::{Path, Transport};
pub use shared::SharedNetwork;
