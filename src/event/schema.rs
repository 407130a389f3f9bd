use serde::{Deserialize, Serialize};

use crate::scoring::{CorrectionOptions, Formula, ResultRecord, SeriesOptions, SortKey};

/// A regatta: scoring options and the timing data for each race.
///
/// Example YAML:
/// ```yaml
/// name: Wednesday Night Series
/// scoring:
///   formula: time
///   b: 480
/// series:
///   throwouts: 0
/// races:
///   - name: Race 1
///     start_time: "18:30:00"
///     distance: 5.2
///     results:
///       - { boat_id: "USA 1234", fleet_id: spin, rating: 108, finish_time: "19:41:12" }
///       - { boat_id: "USA 77", fleet_id: spin, rating: 171, code: DNF }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scoring: EventScoring,

    #[serde(default)]
    pub series: SeriesOptions,

    pub races: Vec<RaceConfig>,
}

/// How each race of the event is corrected and ordered.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EventScoring {
    #[serde(default)]
    pub formula: Formula,

    /// Time-on-Time numerator (default: 650)
    #[serde(default)]
    pub a: Option<f64>,

    /// Time-on-Time denominator (default: 550)
    #[serde(default)]
    pub b: Option<f64>,

    /// Ranking time (default: corrected, or elapsed for one-design)
    #[serde(default)]
    pub sort: Option<SortKey>,

    /// Score on elapsed time only; ratings are ignored
    #[serde(default)]
    pub one_design: bool,
}

impl EventScoring {
    pub fn correction(&self) -> CorrectionOptions {
        CorrectionOptions {
            formula: self.formula,
            a: self.a,
            b: self.b,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        match self.sort {
            Some(key) => key,
            None if self.one_design => SortKey::Elapsed,
            None => SortKey::Corrected,
        }
    }
}

/// One race. Race-level `start_time` and `distance` fill in results that omit them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RaceConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub start_time: Option<String>,

    /// Course length in nautical miles
    #[serde(default)]
    pub distance: Option<f64>,

    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

impl RaceConfig {
    /// Results with the race-level start time and distance applied.
    pub fn resolved_results(&self) -> Vec<ResultRecord> {
        self.results
            .iter()
            .cloned()
            .map(|mut result| {
                if result.start_time.is_none() {
                    result.start_time = self.start_time.clone();
                }
                if result.distance.is_none() {
                    result.distance = self.distance;
                }
                result
            })
            .collect()
    }
}
