//! Game pieces that live on the map network.
//!
//! - Goods produced by cities
//! - Colonists that travel along land or sea paths
//! - Houses that players build on cities

mod colonist;
mod good;
mod house;

pub use colonist::{Colonist, ColonistId};
pub use good::Good;
pub use house::{House, HouseId};

/// Opaque identifier for a participant.
///
/// Only used as an ownership tag on colonists and houses.
pub type PlayerId = u8;
