use serde::{Deserialize, Serialize};

/// The field set the scoring core reads and writes on one competitor's result.
///
/// Any record type can be scored by implementing this trait; [`ResultRecord`]
/// is the plain struct used by the event file and the CLI.
pub trait RaceEntry {
    fn boat_id(&self) -> &str;
    fn fleet_id(&self) -> Option<&str>;
    fn rating(&self) -> Option<f64>;
    fn start_time(&self) -> Option<&str>;
    fn finish_time(&self) -> Option<&str>;
    fn distance(&self) -> Option<f64>;
    fn code(&self) -> Option<&str>;
    fn elapsed_time(&self) -> Option<&str>;
    fn corrected_time(&self) -> Option<&str>;
    fn position(&self) -> Option<u32>;
    fn points(&self) -> Option<u32>;

    fn set_elapsed_time(&mut self, value: String);
    fn set_corrected_time(&mut self, value: String);
    fn set_position(&mut self, position: u32);
    fn set_points(&mut self, points: u32);

    /// Record average speed in knots. Types that don't track it can ignore the call.
    fn set_avg_speed(&mut self, _knots: f64) {}

    /// True when the boat crossed the finish line.
    fn has_finished(&self) -> bool {
        self.finish_time().is_some()
    }
}

/// One competitor's outcome in one race.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResultRecord {
    pub boat_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,
    /// Course length in nautical miles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Penalty or status code, e.g. "DNF", "ZFP"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    // Derived by scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

impl ResultRecord {
    pub fn new(boat_id: impl Into<String>) -> Self {
        Self {
            boat_id: boat_id.into(),
            ..Self::default()
        }
    }
}

impl RaceEntry for ResultRecord {
    fn boat_id(&self) -> &str {
        &self.boat_id
    }

    fn fleet_id(&self) -> Option<&str> {
        self.fleet_id.as_deref()
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    fn finish_time(&self) -> Option<&str> {
        self.finish_time.as_deref()
    }

    fn distance(&self) -> Option<f64> {
        self.distance
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn elapsed_time(&self) -> Option<&str> {
        self.elapsed_time.as_deref()
    }

    fn corrected_time(&self) -> Option<&str> {
        self.corrected_time.as_deref()
    }

    fn position(&self) -> Option<u32> {
        self.position
    }

    fn points(&self) -> Option<u32> {
        self.points
    }

    fn set_elapsed_time(&mut self, value: String) {
        self.elapsed_time = Some(value);
    }

    fn set_corrected_time(&mut self, value: String) {
        self.corrected_time = Some(value);
    }

    fn set_position(&mut self, position: u32) {
        self.position = Some(position);
    }

    fn set_points(&mut self, points: u32) {
        self.points = Some(points);
    }

    fn set_avg_speed(&mut self, knots: f64) {
        self.avg_speed = Some(knots);
    }
}
