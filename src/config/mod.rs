//! Configured thematic vocabulary and its persistence.
//!
//! [`Configuration`] holds the roles, addressees and grids an editing session
//! works with. Every mutation moves it to a new [`ConfigVersion`]; derived
//! state (see [`RecommendationCache`](crate::services::RecommendationCache))
//! remembers the version it was computed at and is re-derived once it differs.

mod error;
pub mod persistence;
mod preferences;
mod xml;

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::structure::{Addressee, ThematicGrid, ThematicRole};

pub use error::PersistenceError;
pub use preferences::PreferenceStore;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// Identifies one state of a [`Configuration`].
///
/// Versions are unique process-wide, so a configuration that is reloaded or
/// replaced never reuses the version of an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigVersion(u64);

impl ConfigVersion {
    fn next() -> Self {
        Self(NEXT_VERSION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    thematic_roles: Vec<ThematicRole>,
    addressees: Vec<Addressee>,
    thematic_grids: Vec<ThematicGrid>,
    version: ConfigVersion,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self {
            thematic_roles: Vec::new(),
            addressees: Vec::new(),
            thematic_grids: Vec::new(),
            version: ConfigVersion::next(),
        }
    }

    pub fn version(&self) -> ConfigVersion {
        self.version
    }

    pub fn thematic_roles(&self) -> &[ThematicRole] {
        &self.thematic_roles
    }

    pub fn addressees(&self) -> &[Addressee] {
        &self.addressees
    }

    pub fn thematic_grids(&self) -> &[ThematicGrid] {
        &self.thematic_grids
    }

    fn changed(&mut self) {
        self.version = ConfigVersion::next();
    }

    pub fn set_thematic_roles(&mut self, roles: Vec<ThematicRole>) {
        self.thematic_roles = roles;
        self.changed();
    }

    pub fn set_addressees(&mut self, addressees: Vec<Addressee>) {
        self.addressees = addressees;
        self.changed();
    }

    pub fn set_thematic_grids(&mut self, grids: Vec<ThematicGrid>) {
        self.thematic_grids = grids;
        self.changed();
    }

    pub fn add_thematic_role(&mut self, role: ThematicRole) {
        self.thematic_roles.push(role);
        self.changed();
    }

    pub fn add_addressee(&mut self, addressee: Addressee) {
        self.addressees.push(addressee);
        self.changed();
    }

    pub fn add_thematic_grid(&mut self, grid: ThematicGrid) {
        self.thematic_grids.push(grid);
        self.changed();
    }

    /// Configured role with this name (ignoring case), or a new role of that name.
    pub fn find_thematic_role(&self, name: &str) -> ThematicRole {
        match self
            .thematic_roles
            .iter()
            .find(|role| role.name.eq_ignore_ascii_case(name))
        {
            Some(role) => role.clone(),
            None => {
                info!(name, "thematic role is not configured, using a new one");
                ThematicRole::new(name)
            }
        }
    }

    /// Configured addressee with this name (ignoring case), or a new addressee
    /// of that name.
    pub fn find_addressee(&self, name: &str) -> Addressee {
        match self
            .addressees
            .iter()
            .find(|addressee| addressee.name.eq_ignore_ascii_case(name))
        {
            Some(addressee) => addressee.clone(),
            None => {
                info!(name, "addressee is not configured, using a new one");
                Addressee::new(name)
            }
        }
    }

    /// Read all three lists from `store`.
    pub fn load(store: &PreferenceStore) -> Self {
        Self {
            thematic_roles: persistence::load_thematic_roles(store),
            addressees: persistence::load_addressees(store),
            thematic_grids: persistence::load_thematic_grids(store),
            version: ConfigVersion::next(),
        }
    }

    /// Write all three lists to `store`.
    pub fn persist(&self, store: &mut PreferenceStore) -> Result<(), PersistenceError> {
        persistence::persist_thematic_roles(store, &self.thematic_roles)?;
        persistence::persist_addressees(store, &self.addressees)?;
        persistence::persist_thematic_grids(store, &self.thematic_grids)
    }
}
