//! Persisted application settings
//!
//! The only state this crate writes is the user's club selection. Storage is
//! abstracted behind [`SettingsStore`], a string key-value seam, so the club
//! adapters stay testable against [`MemoryStore`] while applications persist
//! with [`FileStore`] or their own backend.

mod club;
mod store;

pub use club::{ClubSettings, FAVORITE_CLUB_KEY, HOME_CLUB_KEY};
pub use store::{FileStore, MemoryStore, SettingsStore};
