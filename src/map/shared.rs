//! A network shared between several callers.

use std::sync::{Arc, RwLock};

use crate::error::{NetworkError, NetworkResult};
use crate::game::{Colonist, House};
use crate::map::{CityId, Network, Path};

/// A cloneable handle to one [`Network`] behind a read-write lock.
///
/// Queries take the read lock. [`SharedNetwork::move_colonist`] and
/// [`SharedNetwork::place_house`] hold the write lock from validation to the
/// last mutation, so two moves never interleave on the same cities.
#[derive(Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<Network>>,
}

// Manual Debug implementation so printing never blocks on the lock
impl std::fmt::Debug for SharedNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedNetwork")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl SharedNetwork {
    /// Share `network`.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    /// Run a read-only query against the network.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Poisoned`] if a writer panicked.
    pub fn read<R>(&self, query: impl FnOnce(&Network) -> R) -> NetworkResult<R> {
        let network = self.inner.read().map_err(|_| NetworkError::Poisoned)?;
        Ok(query(&network))
    }

    /// Check a move without performing it.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Poisoned`] if a writer panicked.
    pub fn can_move(&self, colonist: &Colonist, path: &Path) -> NetworkResult<bool> {
        self.read(|network| colonist.can_move_to(network, path))
    }

    /// Move a colonist under the write lock. See [`Network::move_colonist`].
    ///
    /// # Errors
    ///
    /// Anything [`Network::move_colonist`] returns, or
    /// [`NetworkError::Poisoned`].
    pub fn move_colonist(
        &self,
        colonist: &mut Colonist,
        path: &Path,
        target: Option<CityId>,
    ) -> NetworkResult<CityId> {
        let mut network = self.inner.write().map_err(|_| NetworkError::Poisoned)?;
        network.move_colonist(colonist, path, target)
    }

    /// Build a house under the write lock. See [`Network::place_house`].
    ///
    /// # Errors
    ///
    /// Anything [`Network::place_house`] returns, or
    /// [`NetworkError::Poisoned`].
    pub fn place_house(&self, house: &mut House, city: CityId) -> NetworkResult<()> {
        let mut network = self.inner.write().map_err(|_| NetworkError::Poisoned)?;
        network.place_house(house, city)
    }

    /// Clone the current network.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Poisoned`] if a writer panicked.
    pub fn snapshot(&self) -> NetworkResult<Network> {
        self.read(Network::clone)
    }
}
