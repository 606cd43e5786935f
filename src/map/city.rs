//! Cities.

use std::fmt;

use crate::game::{ColonistId, Good, HouseId};

/// Identifier for a city within a network.
///
/// Ids are assigned densely starting at 0.
pub type CityId = u32;

/// A city on the map: identity, production, and the pieces on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    name: String,
    id: CityId,
    letter: char,
    good: Option<Good>,
    /// Colonists currently here, in arrival order.
    colonists: Vec<ColonistId>,
    /// Houses built here, in build order.
    houses: Vec<HouseId>,
}

impl City {
    /// Create an empty city.
    #[must_use]
    pub fn new(name: impl Into<String>, id: CityId, letter: char, good: Option<Good>) -> Self {
        Self {
            name: name.into(),
            id,
            letter,
            good,
            colonists: Vec::new(),
            houses: Vec::new(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id within the network.
    #[must_use]
    pub const fn id(&self) -> CityId {
        self.id
    }

    /// Display letter. Not necessarily unique.
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// The good this city produces, if any.
    #[must_use]
    pub const fn good(&self) -> Option<Good> {
        self.good
    }

    /// Replace the produced good.
    pub fn set_good(&mut self, good: Option<Good>) {
        self.good = good;
    }

    /// Colonists on this city.
    #[must_use]
    pub fn colonists(&self) -> &[ColonistId] {
        &self.colonists
    }

    /// Houses on this city.
    #[must_use]
    pub fn houses(&self) -> &[HouseId] {
        &self.houses
    }

    /// Whether the colonist is on this city.
    #[must_use]
    pub fn has_colonist(&self, colonist: ColonistId) -> bool {
        self.colonists.contains(&colonist)
    }

    /// Whether the house is on this city.
    #[must_use]
    pub fn has_house(&self, house: HouseId) -> bool {
        self.houses.contains(&house)
    }

    /// Add a colonist. Adding one that is already here does nothing.
    ///
    /// Returns `true` if the colonist was not here before. Transport rules
    /// are not checked; that is the network's job.
    pub fn add_colonist(&mut self, colonist: ColonistId) -> bool {
        insert_unique(&mut self.colonists, colonist)
    }

    /// Remove a colonist. Returns `false` if it was not here.
    pub fn remove_colonist(&mut self, colonist: ColonistId) -> bool {
        remove_item(&mut self.colonists, colonist)
    }

    /// Add a house. Adding one that is already here does nothing.
    pub fn add_house(&mut self, house: HouseId) -> bool {
        insert_unique(&mut self.houses, house)
    }

    /// Remove a house. Returns `false` if it was not here.
    pub fn remove_house(&mut self, house: HouseId) -> bool {
        remove_item(&mut self.houses, house)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} id: {} letter: {}", self.name, self.id, self.letter)
    }
}

fn insert_unique(items: &mut Vec<u32>, item: u32) -> bool {
    if items.contains(&item) {
        false
    } else {
        items.push(item);
        true
    }
}

fn remove_item(items: &mut Vec<u32>, item: u32) -> bool {
    match items.iter().position(|&x| x == item) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_accessors() {
        let city = City::new("Roma", 0, 'R', Some(Good::Wine));
        assert_eq!(city.name(), "Roma");
        assert_eq!(city.id(), 0);
        assert_eq!(city.letter(), 'R');
        assert_eq!(city.good(), Some(Good::Wine));
        assert!(city.colonists().is_empty());
        assert!(city.houses().is_empty());
    }

    #[test]
    fn test_add_colonist_is_idempotent() {
        let mut city = City::new("Roma", 0, 'R', None);
        assert!(city.add_colonist(5));
        assert!(!city.add_colonist(5));
        assert_eq!(city.colonists(), &[5]);
    }

    #[test]
    fn test_remove_absent_colonist_is_noop() {
        let mut city = City::new("Roma", 0, 'R', None);
        city.add_colonist(1);
        assert!(!city.remove_colonist(2));
        assert_eq!(city.colonists(), &[1]);
        assert!(city.remove_colonist(1));
        assert!(city.colonists().is_empty());
    }

    #[test]
    fn test_houses_keep_build_order() {
        let mut city = City::new("Ostia", 1, 'O', Some(Good::Tools));
        city.add_house(3);
        city.add_house(1);
        city.add_house(3);
        assert_eq!(city.houses(), &[3, 1]);
        assert!(city.has_house(1));
        assert!(city.remove_house(3));
        assert_eq!(city.houses(), &[1]);
    }

    #[test]
    fn test_set_good() {
        let mut city = City::new("Ostia", 1, 'O', Some(Good::Tools));
        city.set_good(Some(Good::Brick));
        assert_eq!(city.good(), Some(Good::Brick));
        city.set_good(None);
        assert_eq!(city.good(), None);
    }

    #[test]
    fn test_display() {
        let city = City::new("Ostia", 1, 'O', None);
        assert_eq!(city.to_string(), "Ostia id: 1 letter: O");
    }
}
