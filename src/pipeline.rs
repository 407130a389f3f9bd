use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::event::{EventConfig, EventScoring, RaceConfig};
use crate::scoring::{
    aggregate, correct, elapsed_only, rank, Race, RaceEntry, ResultRecord, SeriesStanding,
};

/// One race after correction and ranking.
///
/// Each fleet is ranked as its own result set; fleets are stored contiguously,
/// ordered by fleet id, each in finishing order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRace {
    pub name: String,
    pub results: Vec<ResultRecord>,
}

impl Race for ScoredRace {
    type Entry = ResultRecord;

    fn results(&self) -> &[ResultRecord] {
        &self.results
    }
}

/// Correct, rank and score one race.
///
/// Boats without a finish time skip correction and rank last in their fleet.
/// The first bad result aborts the race.
pub fn score_race(
    name: String,
    race: &RaceConfig,
    scoring: &EventScoring,
) -> crate::error::Result<ScoredRace> {
    let options = scoring.correction();
    let mut fleets: BTreeMap<Option<String>, Vec<ResultRecord>> = BTreeMap::new();

    for mut result in race.resolved_results() {
        if result.has_finished() {
            if scoring.one_design {
                elapsed_only(&mut result)?;
            } else {
                correct(&mut result, &options)?;
            }
        }
        fleets.entry(result.fleet_id.clone()).or_default().push(result);
    }

    let sort_key = scoring.sort_key();
    let mut results = Vec::with_capacity(race.results.len());
    for (fleet, mut fleet_results) in fleets {
        debug!(
            race = %name,
            fleet = fleet.as_deref().unwrap_or("-"),
            boats = fleet_results.len(),
            "ranking fleet"
        );
        rank(&mut fleet_results, sort_key);
        results.extend(fleet_results);
    }

    Ok(ScoredRace { name, results })
}

/// Score every race of an event. Any failing race aborts the whole event.
pub fn score_event(event: &EventConfig) -> Result<Vec<ScoredRace>> {
    let scored = event
        .races
        .iter()
        .enumerate()
        .map(|(i, race)| {
            let name = race
                .name
                .clone()
                .unwrap_or_else(|| format!("Race {}", i + 1));
            score_race(name.clone(), race, &event.scoring)
                .with_context(|| format!("Failed to score {}", name))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        event = event.name.as_deref().unwrap_or("(unnamed)"),
        races = scored.len(),
        "scored event"
    );

    Ok(scored)
}

/// Score every race, then total the series.
///
/// Standings are sorted by points ascending (low point wins), then by boat id.
pub fn score_series(event: &EventConfig) -> Result<(Vec<ScoredRace>, Vec<SeriesStanding>)> {
    let races = score_event(event)?;
    let mut standings = aggregate(&races, &event.series);

    standings.sort_by(|a, b| {
        a.points
            .cmp(&b.points)
            .then_with(|| a.boat_id.cmp(&b.boat_id))
    });

    Ok((races, standings))
}
