//! Result ranking utilities
//!
//! Two orderings over the result summaries of a single race:
//!
//! - [`sort_results_by_position`] orders the canonical standings by
//!   finishing position, unclassified pilots last
//! - [`podium_by_pb_time`] derives a fastest-lap podium without touching
//!   the canonical list
//!
//! Both are pure, synchronous, single-pass operations over the handful of
//! results a race produces. Malformed values never error; they rank as
//! unclassified or as the [`PB_TIME_SENTINEL`].

use std::cmp::Ordering;

use crate::schema::ResultSummary;

/// Sentinel lap time for results without a parseable personal best.
///
/// Worse than any realistic lap time, so pilots who never completed a lap
/// rank behind everyone who did.
pub const PB_TIME_SENTINEL: f64 = 999.0;

/// Sort race results by finishing position, in place.
///
/// Classified results ascend by numeric position; results with a missing or
/// malformed position sort after every classified result. The sort is
/// stable, so ties and the unclassified tail keep their input order.
pub fn sort_results_by_position(results: &mut [ResultSummary]) {
    results.sort_by(|a, b| match (a.position_rank(), b.position_rank()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Derive the fastest-lap podium for a race.
///
/// Returns up to three results ordered by ascending personal-best lap time,
/// with each returned record's `Position` rewritten to its 1-based
/// fastest-lap rank (`"1"`, `"2"`, `"3"`). Results without a parseable
/// personal best rank at the [`PB_TIME_SENTINEL`] and keep their input
/// order among themselves.
///
/// The input is not modified; the podium is built from clones so the
/// rewritten positions never leak into the canonical standings.
pub fn podium_by_pb_time(results: &[ResultSummary]) -> Vec<ResultSummary> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| {
        let a = a.pb_lap_seconds().unwrap_or(PB_TIME_SENTINEL);
        let b = b.pb_lap_seconds().unwrap_or(PB_TIME_SENTINEL);
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    });

    for (index, result) in ranked.iter_mut().enumerate() {
        result.position = Some((index + 1).to_string());
    }

    ranked.truncate(3);
    ranked
}
