//! Round structures

use serde::{Deserialize, Serialize};

/// A round within an event
///
/// `round_number` and `round_order` are numeric values the backend encodes
/// as strings; they are kept verbatim here and parsed only where ordering
/// is computed.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Round {
    /// Stable opaque round identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Round number, string-encoded
    pub round_number: String,
    /// Display name
    pub name: String,
    /// Parent event identifier
    pub event: String,
    /// Ordering key within the event, string-encoded
    pub round_order: String,
    /// Round type tag (e.g. qualifying, final)
    pub round_type: String,
    /// Event type tag
    pub event_type: String,
}
