use serde::{Deserialize, Serialize};

/// Default Time-on-Time numerator.
pub const DEFAULT_NUMERATOR: f64 = 650.0;

/// Default Time-on-Time denominator (average conditions).
pub const DEFAULT_DENOMINATOR: f64 = 550.0;

/// PHRF correction formula.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Time on Distance: subtract `distance * rating` seconds.
    #[default]
    #[serde(alias = "tod")]
    Distance,
    /// Time on Time: scale elapsed time by `a / (b + rating)`.
    #[serde(alias = "tot")]
    Time,
}

/// Options for [`correct`](super::correct).
///
/// Example YAML:
/// ```yaml
/// formula: time
/// b: 480   # heavy air
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorrectionOptions {
    #[serde(default)]
    pub formula: Formula,

    /// Time-on-Time numerator (default: 650). Does not affect finishing order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,

    /// Time-on-Time denominator (default: 550). Lower for heavy air, higher for light.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

impl CorrectionOptions {
    pub fn time_on_time() -> Self {
        Self {
            formula: Formula::Time,
            ..Self::default()
        }
    }

    pub fn numerator(&self) -> f64 {
        self.a.unwrap_or(DEFAULT_NUMERATOR)
    }

    pub fn denominator(&self) -> f64 {
        self.b.unwrap_or(DEFAULT_DENOMINATOR)
    }
}

/// Which derived time orders a race.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Corrected,
    Elapsed,
}

/// Series scoring system. Only low-point is supported.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ScoringSystem {
    #[default]
    #[serde(rename = "low-point", alias = "isaf_low_point")]
    LowPoint,
}

/// Options for [`aggregate`](super::aggregate).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SeriesOptions {
    #[serde(default)]
    pub system: ScoringSystem,

    /// Worst races to drop per boat. Accepted but not applied yet.
    #[serde(default)]
    pub throwouts: u32,
}
