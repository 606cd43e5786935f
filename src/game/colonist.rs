//! Colonists and the movement legality rule.

use crate::error::MoveRejection;
use crate::game::PlayerId;
use crate::map::{CityId, Network, Path, Transport};

/// Identifier for a colonist, assigned by whoever creates it.
pub type ColonistId = u32;

/// A participant-owned piece that travels between cities.
///
/// The owner and transport type never change. The location is `None`
/// while the colonist sits in its owner's supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colonist {
    id: ColonistId,
    owner: PlayerId,
    kind: Transport,
    location: Option<CityId>,
}

impl Colonist {
    /// Create a colonist in supply.
    #[must_use]
    pub const fn new(id: ColonistId, owner: PlayerId, kind: Transport) -> Self {
        Self {
            id,
            owner,
            kind,
            location: None,
        }
    }

    /// Create a land colonist in supply.
    #[must_use]
    pub const fn land(id: ColonistId, owner: PlayerId) -> Self {
        Self::new(id, owner, Transport::Land)
    }

    /// Create a sea colonist in supply.
    #[must_use]
    pub const fn sea(id: ColonistId, owner: PlayerId) -> Self {
        Self::new(id, owner, Transport::Sea)
    }

    /// This colonist's id.
    #[must_use]
    pub const fn id(&self) -> ColonistId {
        self.id
    }

    /// The owning participant.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Which kind of path this colonist travels on.
    #[must_use]
    pub const fn kind(&self) -> Transport {
        self.kind
    }

    /// The city the colonist is on, or `None` if it is in supply.
    #[must_use]
    pub const fn location(&self) -> Option<CityId> {
        self.location
    }

    /// Whether this is a land colonist.
    #[must_use]
    pub const fn is_land(&self) -> bool {
        matches!(self.kind, Transport::Land)
    }

    /// Whether this is a sea colonist.
    #[must_use]
    pub const fn is_sea(&self) -> bool {
        matches!(self.kind, Transport::Sea)
    }

    /// Check whether this colonist may travel along `path` in `network`.
    ///
    /// A colonist may use a path when it is in supply or standing on one of
    /// the path's endpoints, the path's mode matches its type, and both
    /// endpoints are cities of `network`. Nothing is mutated.
    #[must_use]
    pub fn can_move_to(&self, network: &Network, path: &Path) -> bool {
        self.check_move(network, path).is_ok()
    }

    /// Like [`Colonist::can_move_to`], but says which rule failed.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveRejection`] that applies.
    pub fn check_move(&self, network: &Network, path: &Path) -> Result<(), MoveRejection> {
        if path.mode() != self.kind {
            return Err(MoveRejection::WrongMode);
        }
        if let Some(here) = self.location {
            if !path.connects(here) {
                return Err(MoveRejection::NotAdjacent);
            }
        }
        let (a, b) = path.endpoints();
        if !network.contains_city(a) || !network.contains_city(b) {
            return Err(MoveRejection::UnknownEndpoint);
        }
        Ok(())
    }

    /// Set the location directly, without any validation.
    ///
    /// [`Network::move_colonist`] calls this after the move has been checked.
    pub fn set_location(&mut self, location: Option<CityId>) {
        self.location = location;
    }
}
