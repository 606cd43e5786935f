//! Network invariants - sanity checks that detect bugs.
//!
//! The network's own operations never break these. They catch maps that
//! were assembled by hand, files with gaps in their ids, and callers that
//! used the low-level setters without keeping both sides in step.

use std::collections::HashMap;

use crate::game::{Colonist, ColonistId, House, HouseId};
use crate::map::{CityId, Network};

/// Invariant violation.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

fn violation(message: String) -> InvariantViolation {
    InvariantViolation { message }
}

/// Check the structure of the graph itself.
///
/// - City ids are exactly `0..len` with no gaps
/// - Every path endpoint is a city of the network
/// - No colonist or house is listed on two cities
#[must_use]
pub fn check_network(network: &Network) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let mut ids: Vec<CityId> = network.cities().map(|c| c.id()).collect();
    ids.sort_unstable();
    for (expected, &id) in (0..).zip(&ids) {
        if id != expected {
            violations.push(violation(format!(
                "City ids are not dense: expected {expected}, found {id}"
            )));
            break;
        }
    }

    for path in network.paths() {
        let (a, b) = path.endpoints();
        for end in [a, b] {
            if !network.contains_city(end) {
                violations.push(violation(format!(
                    "Path {a}-{b} ({}) ends at missing city {end}",
                    path.mode()
                )));
            }
        }
    }

    let mut colonist_homes: HashMap<ColonistId, CityId> = HashMap::new();
    let mut house_homes: HashMap<HouseId, CityId> = HashMap::new();
    for city in network.cities() {
        for &colonist in city.colonists() {
            if let Some(other) = colonist_homes.insert(colonist, city.id()) {
                violations.push(violation(format!(
                    "Colonist {colonist} is listed on cities {other} and {}",
                    city.id()
                )));
            }
        }
        for &house in city.houses() {
            if let Some(other) = house_homes.insert(house, city.id()) {
                violations.push(violation(format!(
                    "House {house} is listed on cities {other} and {}",
                    city.id()
                )));
            }
        }
    }

    violations
}

/// Check that pieces and cities agree on where each piece is.
///
/// Every placed colonist and house must be listed on its city, and every
/// city may only list pieces that say they are there.
#[must_use]
pub fn check_residency(
    network: &Network,
    colonists: &[Colonist],
    houses: &[House],
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for colonist in colonists {
        if let Some(here) = colonist.location() {
            match network.city_by_id(here) {
                Ok(city) if city.has_colonist(colonist.id()) => {}
                Ok(_) => violations.push(violation(format!(
                    "Colonist {} is at city {here} but not listed there",
                    colonist.id()
                ))),
                Err(_) => violations.push(violation(format!(
                    "Colonist {} is at missing city {here}",
                    colonist.id()
                ))),
            }
        }
    }

    for house in houses {
        if let Some(here) = house.city() {
            match network.city_by_id(here) {
                Ok(city) if city.has_house(house.id()) => {}
                Ok(_) => violations.push(violation(format!(
                    "House {} is on city {here} but not listed there",
                    house.id()
                ))),
                Err(_) => violations.push(violation(format!(
                    "House {} is on missing city {here}",
                    house.id()
                ))),
            }
        }
    }

    let colonist_at: HashMap<ColonistId, Option<CityId>> =
        colonists.iter().map(|c| (c.id(), c.location())).collect();
    let house_at: HashMap<HouseId, Option<CityId>> =
        houses.iter().map(|h| (h.id(), h.city())).collect();
    for city in network.cities() {
        for colonist in city.colonists() {
            if colonist_at.get(colonist).copied().flatten() != Some(city.id()) {
                violations.push(violation(format!(
                    "City {} lists colonist {colonist} which is elsewhere",
                    city.id()
                )));
            }
        }
        for house in city.houses() {
            if house_at.get(house).copied().flatten() != Some(city.id()) {
                violations.push(violation(format!(
                    "City {} lists house {house} which is elsewhere",
                    city.id()
                )));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{City, Path};

    fn create_test_network() -> Network {
        Network::from_parts(
            [
                City::new("Roma", 0, 'R', None),
                City::new("Ostia", 1, 'O', None),
            ],
            [Path::sea(0, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_clean_network_passes() {
        let network = create_test_network();
        assert!(check_network(&network).is_empty());
    }

    #[test]
    fn test_id_gap_detected() {
        let mut network = create_test_network();
        network.add_city(City::new("Capua", 5, 'C', None)).unwrap();
        let violations = check_network(&network);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not dense"));
    }

    #[test]
    fn test_double_listed_colonist_detected() {
        let mut network = create_test_network();
        network.city_by_id_mut(0).unwrap().add_colonist(3);
        network.city_by_id_mut(1).unwrap().add_colonist(3);
        assert_eq!(check_network(&network).len(), 1);
    }

    #[test]
    fn test_residency_after_moves_is_consistent() {
        let mut network = create_test_network();
        let mut sailor = Colonist::sea(1, 1);
        let mut house = House::new(1, 1);
        network
            .move_colonist(&mut sailor, &Path::sea(0, 1), Some(1))
            .unwrap();
        network.place_house(&mut house, 0).unwrap();

        assert!(check_residency(&network, &[sailor], &[house]).is_empty());
    }

    #[test]
    fn test_stale_location_detected() {
        let network = create_test_network();
        let mut sailor = Colonist::sea(1, 1);
        sailor.set_location(Some(0));

        let violations = check_residency(&network, &[sailor], &[]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not listed"));
    }

    #[test]
    fn test_stale_resident_detected() {
        let mut network = create_test_network();
        network.city_by_id_mut(1).unwrap().add_house(9);
        let house = House::new(9, 2);

        let violations = check_residency(&network, &[], &[house]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("elsewhere"));
    }
}
