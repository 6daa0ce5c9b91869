//! Favorite and home club selection

use tracing::debug;

use super::store::SettingsStore;
use crate::Result;

/// Storage key for the user's favorite club selection.
pub const FAVORITE_CLUB_KEY: &str = "favoriteClubId";

/// Storage key for the user's home club selection.
pub const HOME_CLUB_KEY: &str = "homeClubId";

/// Club selection service over an injected [`SettingsStore`]
///
/// Two structurally identical adapters share one store under distinct keys:
/// the favorite club and the home club. The keys carry no cross invariant,
/// so one club may hold both selections at once.
///
/// Values are opaque club identifiers written exactly as given; selection
/// checks are exact case-sensitive string equality. An empty stored string
/// reads back as "no selection". Store failures propagate unchanged.
///
/// # Example
///
/// ```rust
/// use flightline::settings::{ClubSettings, MemoryStore};
///
/// let mut clubs = ClubSettings::new(MemoryStore::new());
/// clubs.set_favorite_club("club-A")?;
/// assert!(clubs.is_favorite_club("club-A")?);
/// assert_eq!(clubs.home_club()?, None);
/// # Ok::<(), flightline::EventError>(())
/// ```
#[derive(Debug)]
pub struct ClubSettings<S> {
    store: S,
}

impl<S: SettingsStore> ClubSettings<S> {
    /// Wrap a settings store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the service and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Select `club_id` as the favorite club, replacing any prior selection.
    pub fn set_favorite_club(&mut self, club_id: &str) -> Result<()> {
        debug!(club_id, "favorite club selected");
        self.store.set(FAVORITE_CLUB_KEY, club_id)
    }

    /// The selected favorite club, `None` when nothing is selected.
    pub fn favorite_club(&self) -> Result<Option<String>> {
        self.get(FAVORITE_CLUB_KEY)
    }

    /// Clear the favorite club selection. Idempotent.
    pub fn remove_favorite_club(&mut self) -> Result<()> {
        self.store.remove(FAVORITE_CLUB_KEY)
    }

    /// Whether `club_id` is the selected favorite club.
    pub fn is_favorite_club(&self, club_id: &str) -> Result<bool> {
        Ok(self.favorite_club()?.as_deref() == Some(club_id))
    }

    /// Select `club_id` as the home club, replacing any prior selection.
    pub fn set_home_club(&mut self, club_id: &str) -> Result<()> {
        debug!(club_id, "home club selected");
        self.store.set(HOME_CLUB_KEY, club_id)
    }

    /// The selected home club, `None` when nothing is selected.
    pub fn home_club(&self) -> Result<Option<String>> {
        self.get(HOME_CLUB_KEY)
    }

    /// Clear the home club selection. Idempotent.
    pub fn remove_home_club(&mut self) -> Result<()> {
        self.store.remove(HOME_CLUB_KEY)
    }

    /// Whether `club_id` is the selected home club.
    pub fn is_home_club(&self, club_id: &str) -> Result<bool> {
        Ok(self.home_club()?.as_deref() == Some(club_id))
    }

    // Empty string and absent key both mean "no selection".
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.store.get(key)?.filter(|v| !v.is_empty()))
    }
}
