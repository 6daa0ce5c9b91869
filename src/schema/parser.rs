//! JSON parsing entry points for event data
//!
//! The event backend serves JSON. These helpers are thin wrappers over
//! serde deserialization that attach a context string to failures so a
//! malformed payload names the shape that rejected it.

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::schema::event::{Event, RaceDetail, RawRaceData, ResultSummary};
use crate::{EventError, Result};

/// Typed parsers for the event backend's JSON payloads
pub struct EventDataParser;

impl EventDataParser {
    /// Parse the events listing for a club.
    pub fn parse_events(json: &str) -> Result<Vec<Event>> {
        Self::parse("Event list deserialization", json)
    }

    /// Parse a processed race with result summaries attached.
    pub fn parse_race_detail(json: &str) -> Result<RaceDetail> {
        Self::parse("RaceDetail deserialization", json)
    }

    /// Parse an unprocessed race with raw laps and detections.
    pub fn parse_raw_race(json: &str) -> Result<RawRaceData> {
        Self::parse("RawRaceData deserialization", json)
    }

    /// Parse a standalone list of result summaries.
    pub fn parse_result_summaries(json: &str) -> Result<Vec<ResultSummary>> {
        Self::parse("ResultSummary list deserialization", json)
    }

    fn parse<T: DeserializeOwned>(context: &str, json: &str) -> Result<T> {
        trace!(context, len = json.len(), "parsing event data payload");
        serde_json::from_str(json).map_err(|e| EventError::Parse {
            context: context.to_string(),
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_events_accepts_a_club_listing() {
        let json = r#"[
            {"ID": "event-1", "Name": "Summer Series R1", "PilotCount": 24,
             "Club": {"ID": "club-1", "Name": "Night Owls FPV"}},
            {"ID": "event-2", "Name": "Summer Series R2", "PilotCount": 18,
             "Club": {"ID": "club-1", "Name": "Night Owls FPV"}}
        ]"#;

        let events = EventDataParser::parse_events(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].club.id, "club-1");
        assert_eq!(events[1].pilot_count, 18);
    }

    #[test]
    fn parse_failures_name_the_shape() {
        let err = EventDataParser::parse_race_detail("{not json").unwrap_err();
        match err {
            EventError::Parse { context, details } => {
                assert_eq!(context, "RaceDetail deserialization");
                assert!(!details.is_empty());
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn parse_result_summaries_tolerates_partial_records() {
        let json = r#"[{"ID": "rs-1"}, {"ID": "rs-2", "Position": "2"}]"#;
        let results = EventDataParser::parse_result_summaries(json).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].position, None);
        assert_eq!(results[1].position.as_deref(), Some("2"));
    }
}
