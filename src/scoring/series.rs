use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::SeriesOptions;
use super::entry::RaceEntry;

/// A source of one race's scored results.
pub trait Race {
    type Entry: RaceEntry;

    fn results(&self) -> &[Self::Entry];
}

impl<R: RaceEntry> Race for Vec<R> {
    type Entry = R;

    fn results(&self) -> &[R] {
        self
    }
}

impl<R: RaceEntry> Race for &[R] {
    type Entry = R;

    fn results(&self) -> &[R] {
        self
    }
}

/// One boat's total across a series.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeriesStanding {
    pub boat_id: String,
    /// Fleet of the boat's first result in the series
    pub fleet_id: Option<String>,
    pub points: u32,
}

/// Sum each boat's race points into one standing per boat.
///
/// Standings come back in the order boats are first seen. Results that were
/// never scored contribute nothing.
pub fn aggregate<T: Race>(races: &[T], options: &SeriesOptions) -> Vec<SeriesStanding> {
    debug!(system = ?options.system, races = races.len(), "aggregating series");
    if options.throwouts > 0 {
        // TODO: drop each boat's worst `throwouts` races once the tie-break rules are settled
        warn!(
            throwouts = options.throwouts,
            "throwouts are not applied yet; every race counts"
        );
    }

    let mut standings: Vec<SeriesStanding> = Vec::new();
    let mut by_boat: HashMap<&str, usize> = HashMap::new();

    for entry in races.iter().flat_map(|race| race.results()) {
        let points = entry.points().unwrap_or_else(|| {
            debug!(boat = entry.boat_id(), "unscored result adds no points");
            0
        });

        match by_boat.get(entry.boat_id()) {
            Some(&index) => standings[index].points += points,
            None => {
                by_boat.insert(entry.boat_id(), standings.len());
                standings.push(SeriesStanding {
                    boat_id: entry.boat_id().to_string(),
                    fleet_id: entry.fleet_id().map(str::to_string),
                    points,
                });
            }
        }
    }

    for standing in &standings {
        debug!(boat = %standing.boat_id, points = standing.points, "series standing");
    }

    standings
}
