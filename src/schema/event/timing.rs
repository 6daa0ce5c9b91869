//! Raw timing structures
//!
//! This module contains the records produced by the gate timing hardware:
//! individual channel detections and the laps derived from them.

use serde::{Deserialize, Serialize};

/// A single lap derived from detections
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Lap {
    /// Detection that closed this lap
    pub detection: String,
    /// Lap duration in seconds
    pub length_seconds: f64,
    /// 1-based lap number; 0 denotes the holeshot
    pub lap_number: i32,
    /// Lap start timestamp
    pub start_time: String,
    /// Lap end timestamp
    pub end_time: String,
    /// Stable opaque lap identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Identifier in the timing system's own database
    #[serde(rename = "ExternalID")]
    pub external_id: i64,
}

/// A raw gate-crossing detection reported by the timing system
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Detection {
    /// Index of the reporting timing system
    pub timing_system_index: i32,
    /// Channel the crossing was detected on
    pub channel: String,
    /// Crossing timestamp
    pub time: String,
    /// Signal peak at the crossing
    pub peak: i32,
    /// Timing system type tag
    pub timing_system_type: String,
    /// Pilot the detection is attributed to
    pub pilot: String,
    /// Lap number the crossing belongs to
    pub lap_number: i32,
    /// Whether the detection counts
    pub valid: bool,
    /// Reason tag when the detection was invalidated
    pub validity_type: String,
    /// Whether this crossing ends a lap
    pub is_lap_end: bool,
    /// Track sector of the crossing
    pub race_sector: i32,
    /// Whether this is the first crossing after race start
    pub is_holeshot: bool,
    /// Stable opaque detection identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Identifier in the timing system's own database
    #[serde(rename = "ExternalID")]
    pub external_id: i64,
}
