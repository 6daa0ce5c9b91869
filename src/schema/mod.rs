//! Event Data Schema
//!
//! This module declares the wire shapes served by a drone-racing timing
//! backend (FPVTrackside-style): clubs, events, rounds, races, pilots,
//! channels, laps, detections and per-pilot result summaries.
//!
//! # Architecture
//!
//! The schema system has two layers:
//! - `event` holds the typed records, one file per concern, matching the
//!   backend's JSON field names exactly
//! - `parser` wraps serde deserialization with crate error mapping
//!
//! All records are read-only snapshots. This crate never originates or
//! mutates them; the only persisted state is the club selection handled by
//! [`crate::settings`].

pub mod event;
mod parser;

pub use event::{
    Channel, Club, Detection, Event, Lap, Pilot, PilotChannel, PointsRecord, RaceDetail,
    RaceSummary, RawRaceData, ResultSummary, Round,
};
pub use parser::EventDataParser;
