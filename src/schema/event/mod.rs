//! Typed records for drone-racing event data
//!
//! Each struct mirrors one JSON shape from the event backend. Field names on
//! the wire are PascalCase with `ID`/`URL` acronym casing, so every struct
//! uses `#[serde(rename_all = "PascalCase")]` plus explicit renames where
//! the acronym casing differs. `#[serde(default)]` keeps partial payloads
//! deserializable; genuinely nullable fields are `Option<_>`.

use serde::{Deserialize, Serialize};

// Submodules
mod channel;
mod club;
mod pilot;
mod race;
mod results;
mod round;
mod timing;

pub use channel::Channel;
pub use club::Club;
pub use pilot::{Pilot, PilotChannel};
pub use race::{RaceDetail, RawRaceData};
pub use results::{PointsRecord, RaceSummary, ResultSummary};
pub use round::Round;
pub use timing::{Detection, Lap};

/// A scheduled racing event hosted by a club
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Event {
    /// Stable opaque event identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Event start timestamp
    pub start: String,
    /// Event end timestamp
    pub end: String,
    /// Display name
    pub name: String,
    /// Number of registered pilots
    pub pilot_count: i32,
    /// Hosting club
    pub club: Club,
    /// Event banner image URL
    pub banner_url: String,
}
