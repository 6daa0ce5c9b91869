//! Race structures
//!
//! Two shapes describe a race occurrence. [`RaceDetail`] is the processed
//! view with per-pilot result summaries attached. [`RawRaceData`] is the
//! unprocessed form straight from the timing system, carrying raw laps and
//! detections instead of summaries.

use serde::{Deserialize, Serialize};

use super::pilot::PilotChannel;
use super::results::ResultSummary;
use super::timing::{Detection, Lap};

/// A race occurrence with processed result summaries
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RaceDetail {
    /// Stable opaque race identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Race start timestamp
    pub start: String,
    /// Race end timestamp
    pub end: String,
    /// Display name
    pub name: String,
    /// Parent event identifier
    pub event: String,
    /// Parent round identifier
    pub round: String,
    /// Race number within the round
    pub race_number: i32,
    /// Whether the race counts towards results
    pub valid: bool,
    /// Target lap count, string-encoded
    pub target_laps: String,
    /// Where the primary timing system sits on the track
    pub primary_timing_system_location: String,
    /// Bracket label for head-to-head rounds
    pub bracket: String,
    /// Pilot-to-channel assignments for this race
    pub pilot_channels: Vec<PilotChannel>,
    /// Per-pilot outcome summaries
    pub result_summaries: Vec<ResultSummary>,
}

/// A race occurrence in unprocessed timing-system form
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawRaceData {
    /// Stable opaque race identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Race number within the round
    pub race_number: i32,
    /// Parent round identifier
    pub round: String,
    /// Target lap count
    pub target_laps: i32,
    /// Where the primary timing system sits on the track
    pub primary_timing_system_location: String,
    /// Whether the race counts towards results
    pub valid: bool,
    /// Whether race numbers were auto-assigned
    pub auto_assign_numbers: bool,
    /// Parent event identifier
    pub event: String,
    /// Bracket label for head-to-head rounds
    pub bracket: String,
    /// Identifier in the timing system's own database
    #[serde(rename = "ExternalID")]
    pub external_id: i64,
    /// Race start timestamp
    pub start: String,
    /// Race end timestamp
    pub end: String,
    /// Accumulated pause duration, string-encoded
    pub total_paused_time: String,
    /// Pilot-to-channel assignments for this race
    pub pilot_channels: Vec<PilotChannel>,
    /// Raw gate-crossing detections
    pub detections: Vec<Detection>,
    /// Laps derived from the detections
    pub laps: Vec<Lap>,
}
