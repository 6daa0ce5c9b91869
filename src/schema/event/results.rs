//! Result structures
//!
//! Per-pilot race outcomes. The backend transmits most numeric fields as
//! strings; [`ResultSummary`] keeps them verbatim and exposes typed
//! accessors for the two values ranking actually needs.

use serde::{Deserialize, Serialize};

use super::channel::Channel;

/// A per-pilot outcome for one race
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct ResultSummary {
    /// Stable opaque result identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Pilot identifier
    pub pilot: String,
    /// Pilot display name
    pub pilot_name: String,
    /// Race identifier
    pub race: String,
    /// Holeshot time in seconds, string-encoded
    pub holeshot_time: String,
    /// Fastest single lap in seconds, string-encoded; absent when the pilot
    /// never completed a lap
    pub pb_lap_time: Option<String>,
    /// Lap on which the personal best was set, string-encoded
    pub pb_lap_count: String,
    /// Time to the target lap count, string-encoded
    pub target_lap_time: String,
    /// Target lap count, string-encoded
    pub target_lap_count: String,
    /// Total race time in seconds, string-encoded
    pub race_time: String,
    /// Completed lap count, string-encoded
    pub lap_count: String,
    /// Championship points earned, string-encoded
    pub points: String,
    /// Finishing position as a stringified positive integer, or `None` for
    /// unclassified/non-finishers
    pub position: Option<String>,
    /// Channel the pilot flew on, when known
    pub channel: Option<Channel>,
}

impl ResultSummary {
    /// Finishing position as a number.
    ///
    /// Returns `None` for unclassified results and for malformed position
    /// strings; ranking treats both as "after every classified result".
    pub fn position_rank(&self) -> Option<u32> {
        self.position.as_deref().and_then(|p| p.trim().parse().ok())
    }

    /// Personal-best lap time in seconds.
    ///
    /// Returns `None` when the value is absent, empty or unparseable.
    pub fn pb_lap_seconds(&self) -> Option<f64> {
        self.pb_lap_time
            .as_deref()
            .and_then(|t| t.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite())
    }
}

/// Championship points earned by a pilot in one round
///
/// Served with snake_case keys, unlike the PascalCase race payloads.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointsRecord {
    /// Pilot identifier
    pub pilot_id: String,
    /// Pilot display name
    pub pilot: String,
    /// Round identifier
    pub round: String,
    /// Round ordering key, string-encoded
    pub round_order: String,
    /// Bracket label
    pub bracket: String,
    /// Points earned, string-encoded
    pub points: String,
}

/// Aggregated per-pilot numbers for one round
///
/// The backend's reporting endpoint sends these with snake_case keys and
/// real numeric values instead of strings.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RaceSummary {
    /// Pilot identifier
    pub pilot_id: String,
    /// Holeshot time in seconds
    pub holeshot_time: f64,
    /// Lap on which the personal best was set
    pub pb_lap_count: i32,
    /// Fastest single lap in seconds
    pub pb_lap_time: f64,
    /// Target lap count
    pub target_lap_count: i32,
    /// Time to the target lap count in seconds
    pub target_lap_time: f64,
    /// Total race time in seconds
    pub race_time: f64,
    /// Round number
    pub round_number: i32,
    /// Round ordering key
    pub round_order: i32,
    /// Event type tag
    pub event_type: String,
}
