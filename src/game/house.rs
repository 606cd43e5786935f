//! Houses.

use crate::game::PlayerId;
use crate::map::CityId;

/// Identifier for a house, assigned by whoever creates it.
pub type HouseId = u32;

/// A settlement marker a participant builds on a city.
///
/// A house is a passive record. Whether it may be built somewhere is
/// decided by [`crate::Network::place_house`] and the caller's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    id: HouseId,
    owner: PlayerId,
    city: Option<CityId>,
}

impl House {
    /// Create an unbuilt house.
    #[must_use]
    pub const fn new(id: HouseId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            city: None,
        }
    }

    /// This house's id.
    #[must_use]
    pub const fn id(&self) -> HouseId {
        self.id
    }

    /// The owning participant.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// The city this house is built on, if any.
    #[must_use]
    pub const fn city(&self) -> Option<CityId> {
        self.city
    }

    /// Set the city directly, without touching the network.
    pub fn set_city(&mut self, city: Option<CityId>) {
        self.city = city;
    }
}
