//! Pilot structures
//!
//! This module contains the pilot profile record and the join record that
//! assigns a pilot to a video channel within one race.

use serde::{Deserialize, Serialize};

/// A pilot profile
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct Pilot {
    /// Stable opaque pilot identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name (usually the pilot's handle)
    pub name: String,
    /// Phonetic spelling used by voice announcements
    pub phonetic: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Profile photo URL
    #[serde(rename = "PhotoURL")]
    pub photo_url: String,
    /// Catch phrase announced on the pilot's first detection.
    /// Absent in older payload shapes.
    pub catch_phrase: Option<String>,
}

/// Assignment of a pilot to a channel within a specific race
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct PilotChannel {
    /// Stable opaque identifier for this assignment
    #[serde(rename = "ID")]
    pub id: String,
    /// Race this assignment belongs to
    pub race: String,
    /// Assigned channel identifier
    pub channel: String,
    /// Assigned pilot identifier
    pub pilot: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pilot_catch_phrase_is_optional() {
        let old_shape: Pilot = serde_json::from_str(
            r#"{"ID": "p-1", "Name": "VoltJockey", "PhotoURL": "https://example.com/p1.jpg"}"#,
        )
        .unwrap();
        assert_eq!(old_shape.catch_phrase, None);
        assert_eq!(old_shape.photo_url, "https://example.com/p1.jpg");

        let new_shape: Pilot =
            serde_json::from_str(r#"{"ID": "p-2", "CatchPhrase": "full send"}"#).unwrap();
        assert_eq!(new_shape.catch_phrase.as_deref(), Some("full send"));
    }
}
