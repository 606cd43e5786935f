//! The network graph and the operations that mutate it.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{MoveRejection, NetworkError, NetworkResult};
use crate::game::{Colonist, House};
use crate::map::{City, CityId, Path, Transport};

/// The full map: every city and every path between them.
///
/// Cities keep the order they were added in. Every path's endpoints are
/// cities of this network, and every city id appears exactly once.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Cities in insertion order.
    cities: Vec<City>,
    /// City id to position in `cities`.
    index: HashMap<CityId, usize>,
    /// Paths in insertion order.
    paths: Vec<Path>,
    /// City id to positions in `paths`, in insertion order.
    adjacency: HashMap<CityId, Vec<usize>>,
}

impl Network {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from cities and the paths between them.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateCity`] if two cities share an id, or
    /// [`NetworkError::UnknownCity`] if a path names a missing city.
    pub fn from_parts(
        cities: impl IntoIterator<Item = City>,
        paths: impl IntoIterator<Item = Path>,
    ) -> NetworkResult<Self> {
        let mut network = Self::new();
        for city in cities {
            network.add_city(city)?;
        }
        for path in paths {
            network.add_path(path)?;
        }
        Ok(network)
    }

    /// Add a city.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateCity`] if the id is already taken.
    pub fn add_city(&mut self, city: City) -> NetworkResult<CityId> {
        let id = city.id();
        if self.index.contains_key(&id) {
            return Err(NetworkError::DuplicateCity(id));
        }
        self.index.insert(id, self.cities.len());
        self.cities.push(city);
        Ok(id)
    }

    /// Add a path.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownCity`] if either endpoint is missing.
    pub fn add_path(&mut self, path: Path) -> NetworkResult<()> {
        let (a, b) = path.endpoints();
        for end in [a, b] {
            if !self.contains_city(end) {
                return Err(NetworkError::UnknownCity(end));
            }
        }

        let slot = self.paths.len();
        self.paths.push(path);
        self.adjacency.entry(a).or_default().push(slot);
        if b != a {
            self.adjacency.entry(b).or_default().push(slot);
        }
        Ok(())
    }

    /// Add a path between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Same as [`Network::add_path`].
    pub fn connect(&mut self, a: CityId, b: CityId, mode: Transport) -> NetworkResult<()> {
        self.add_path(Path::new(a, b, mode))
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether there are no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of paths.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Whether a city with this id exists.
    #[must_use]
    pub fn contains_city(&self, id: CityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Whether this network has a path joining the same cities with the
    /// same mode.
    #[must_use]
    pub fn contains_path(&self, path: &Path) -> bool {
        let (a, _) = path.endpoints();
        self.paths_from(a).any(|p| p.same_route(path))
    }

    /// Look up a city.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownCity`] if there is no such city.
    pub fn city_by_id(&self, id: CityId) -> NetworkResult<&City> {
        let slot = self.slot(id)?;
        Ok(&self.cities[slot])
    }

    /// Look up a city for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownCity`] if there is no such city.
    pub fn city_by_id_mut(&mut self, id: CityId) -> NetworkResult<&mut City> {
        let slot = self.slot(id)?;
        Ok(&mut self.cities[slot])
    }

    /// All cities, in the order they were added.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// All paths, in the order they were added.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Paths with `id` as an endpoint, in insertion order.
    ///
    /// Empty for an isolated or unknown city.
    pub fn paths_from(&self, id: CityId) -> impl Iterator<Item = &Path> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&slot| &self.paths[slot])
    }

    /// Cities one `mode` path away from `id`, without duplicates.
    #[must_use]
    pub fn neighbors(&self, id: CityId, mode: Transport) -> Vec<CityId> {
        let mut found = Vec::new();
        for path in self.paths_from(id).filter(|p| p.mode() == mode) {
            if let Ok(other) = path.other_endpoint(id) {
                if !found.contains(&other) {
                    found.push(other);
                }
            }
        }
        found
    }

    /// Every move the colonist could make right now, with its destination.
    ///
    /// A colonist in supply may enter at either end of any path of its type.
    #[must_use]
    pub fn legal_moves(&self, colonist: &Colonist) -> Vec<(Path, CityId)> {
        match colonist.location() {
            Some(here) => self
                .paths_from(here)
                .filter(|p| colonist.can_move_to(self, p))
                .filter_map(|p| p.other_endpoint(here).ok().map(|dest| (*p, dest)))
                .collect(),
            None => {
                let mut moves = Vec::new();
                for path in self.paths.iter().filter(|p| colonist.can_move_to(self, p)) {
                    let (a, b) = path.endpoints();
                    moves.push((*path, a));
                    if b != a {
                        moves.push((*path, b));
                    }
                }
                moves
            }
        }
    }

    /// Move a colonist along `path`.
    ///
    /// A colonist on a city travels to the far end of the path. A colonist
    /// in supply enters at `target`, which must name one of the endpoints.
    /// For a placed colonist `target` is optional; if given it must be the
    /// far end.
    ///
    /// Everything is checked before anything changes: on error the cities
    /// and the colonist are left exactly as they were.
    ///
    /// Returns the destination city.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::IllegalMove`] if the movement rules forbid the move
    /// - [`NetworkError::NotAnEndpoint`] if `target` is not on the path
    pub fn move_colonist(
        &mut self,
        colonist: &mut Colonist,
        path: &Path,
        target: Option<CityId>,
    ) -> NetworkResult<CityId> {
        colonist
            .check_move(self, path)
            .map_err(NetworkError::IllegalMove)?;
        if !self.contains_path(path) {
            return Err(NetworkError::IllegalMove(MoveRejection::ForeignPath));
        }

        if let Some(target) = target {
            if !path.connects(target) {
                return Err(NetworkError::NotAnEndpoint {
                    city: target,
                    endpoints: path.endpoints(),
                });
            }
        }

        let origin = colonist.location();
        let destination = match origin {
            Some(here) => {
                let far = path.other_endpoint(here)?;
                if target.is_some_and(|t| t != far) {
                    return Err(NetworkError::IllegalMove(MoveRejection::TargetMismatch));
                }
                far
            }
            None => target.ok_or(NetworkError::IllegalMove(MoveRejection::MissingTarget))?,
        };
        let dest_slot = self.slot(destination)?;

        if let Some(here) = origin {
            if let Some(&slot) = self.index.get(&here) {
                self.cities[slot].remove_colonist(colonist.id());
            }
        }
        self.cities[dest_slot].add_colonist(colonist.id());
        colonist.set_location(Some(destination));

        debug!(
            colonist = colonist.id(),
            owner = colonist.owner(),
            from = ?origin,
            to = destination,
            "colonist moved"
        );
        Ok(destination)
    }

    /// Build a house on a city.
    ///
    /// A house that already stands on another city is taken off it first.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::UnknownCity`] if the city does not exist.
    pub fn place_house(&mut self, house: &mut House, city: CityId) -> NetworkResult<()> {
        let slot = self.slot(city)?;

        if let Some(previous) = house.city() {
            if previous != city {
                if let Some(&old) = self.index.get(&previous) {
                    self.cities[old].remove_house(house.id());
                }
            }
        }
        self.cities[slot].add_house(house.id());
        house.set_city(Some(city));

        debug!(house = house.id(), owner = house.owner(), city, "house placed");
        Ok(())
    }

    fn slot(&self, id: CityId) -> NetworkResult<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(NetworkError::UnknownCity(id))
    }
}
