//! Type-safe Rust library for drone racing event data.
//!
//! Flightline models the data a drone-racing timing backend serves about
//! clubs, events, rounds, races, pilots and results, plus the two small
//! pieces of behavior a viewer app needs on top of it.
//!
//! # Features
//!
//! - **Typed Schemas**: serde records matching the backend's JSON exactly
//! - **Club Selection**: favorite/home club persistence behind a store trait
//! - **Standings**: position ranking and fastest-lap podium derivation
//! - **Race Times**: two-decimal display formatting with safe fallbacks
//!
//! # Quick Start
//!
//! ```rust
//! use flightline::settings::{ClubSettings, MemoryStore};
//! use flightline::{EventDataParser, podium_by_pb_time};
//!
//! fn main() -> flightline::Result<()> {
//!     let mut clubs = ClubSettings::new(MemoryStore::new());
//!     clubs.set_favorite_club("club-A")?;
//!     assert!(clubs.is_favorite_club("club-A")?);
//!
//!     let race = EventDataParser::parse_race_detail(
//!         r#"{"ID": "race-1", "ResultSummaries": [
//!             {"ID": "rs-1", "PilotName": "VoltJockey", "PbLapTime": "14.95"}
//!         ]}"#,
//!     )?;
//!     let podium = podium_by_pb_time(&race.result_summaries);
//!     assert_eq!(podium[0].pilot_name, "VoltJockey");
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod schema;

// Behavior on top of the schemas
pub mod race_time;
pub mod settings;
pub mod standings;

// Core exports
pub use error::*;
pub use schema::{
    Channel, Club, Detection, Event, EventDataParser, Lap, Pilot, PilotChannel, PointsRecord,
    RaceDetail, RaceSummary, RawRaceData, ResultSummary, Round,
};

// Behavior exports
pub use race_time::format_race_time;
pub use settings::{ClubSettings, FileStore, MemoryStore, SettingsStore};
pub use standings::{PB_TIME_SENTINEL, podium_by_pb_time, sort_results_by_position};
