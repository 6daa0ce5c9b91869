//! Video channel structures

use serde::{Deserialize, Serialize};

/// A video transmission channel a pilot flies on
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Channel {
    /// Stable opaque channel identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Channel number within the band (1-8)
    pub number: i32,
    /// Full band name
    pub band: String,
    /// Prefix used when announcing the channel
    pub channel_prefix: String,
    /// Carrier frequency in MHz
    pub frequency: i32,
    /// Optional display name shown instead of band + number
    pub display_name: Option<String>,
    /// Identifier in the timing system's own database
    #[serde(rename = "ExternalID")]
    pub external_id: i64,
    /// Short band label (e.g. "R" for Raceband)
    pub short_band: String,
    /// Color used for on-screen pilot identification (hex)
    pub color: String,
}
