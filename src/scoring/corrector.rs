use tracing::debug;

use super::config::{CorrectionOptions, Formula};
use super::entry::RaceEntry;
use crate::error::{Result, ScoringError};
use crate::timing::{format_seconds, parse_elapsed};

/// Correct a result with PHRF, setting `elapsed_time` and `corrected_time`.
///
/// Requires `rating`, `start_time` and `finish_time`; the distance formula
/// also requires `distance`. Nothing is written unless every input is present
/// and both times parse.
pub fn correct<'a, R: RaceEntry>(
    entry: &'a mut R,
    options: &CorrectionOptions,
) -> Result<&'a mut R> {
    let rating = entry
        .rating()
        .ok_or_else(|| ScoringError::missing(entry.boat_id(), "rating"))?;
    let (start, finish) = required_times(entry)?;
    let course = match options.formula {
        Formula::Distance => Some(
            entry
                .distance()
                .ok_or_else(|| ScoringError::missing(entry.boat_id(), "distance"))?,
        ),
        Formula::Time => None,
    };

    let elapsed = parse_elapsed(start, finish)?;
    let corrected = match course {
        Some(distance) => time_on_distance(elapsed, distance, rating),
        None => time_on_time(elapsed, rating, options.numerator(), options.denominator()),
    };
    let distance = entry.distance();

    debug!(
        boat = entry.boat_id(),
        elapsed,
        corrected,
        formula = ?options.formula,
        "corrected result"
    );

    entry.set_elapsed_time(format_seconds(elapsed));
    entry.set_corrected_time(format_seconds(corrected));
    record_speed(entry, distance, elapsed);
    Ok(entry)
}

/// Set only `elapsed_time`, for one-design racing where no handicap applies.
pub fn elapsed_only<R: RaceEntry>(entry: &mut R) -> Result<&mut R> {
    let (start, finish) = required_times(entry)?;
    let elapsed = parse_elapsed(start, finish)?;

    debug!(boat = entry.boat_id(), elapsed, "timed result");

    let distance = entry.distance();
    entry.set_elapsed_time(format_seconds(elapsed));
    record_speed(entry, distance, elapsed);
    Ok(entry)
}

/// PHRF Time on Distance: `elapsed - distance * rating`, rounded.
pub fn time_on_distance(elapsed: i64, distance: f64, rating: f64) -> i64 {
    (elapsed as f64 - distance * rating).round() as i64
}

/// PHRF Time on Time: `elapsed * a / (b + rating)`, rounded.
///
/// `a` scales every boat alike and never changes the order; `b` models the
/// conditions and does.
pub fn time_on_time(elapsed: i64, rating: f64, a: f64, b: f64) -> i64 {
    let time_correction_factor = a / (b + rating);
    (elapsed as f64 * time_correction_factor).round() as i64
}

fn required_times<R: RaceEntry>(entry: &R) -> Result<(&str, &str)> {
    let start = entry
        .start_time()
        .ok_or_else(|| ScoringError::missing(entry.boat_id(), "start_time"))?;
    let finish = entry
        .finish_time()
        .ok_or_else(|| ScoringError::missing(entry.boat_id(), "finish_time"))?;
    Ok((start, finish))
}

fn record_speed<R: RaceEntry>(entry: &mut R, distance: Option<f64>, elapsed: i64) {
    if let Some(d) = distance {
        if elapsed > 0 {
            entry.set_avg_speed(d / (elapsed as f64 / 3600.0));
        }
    }
}
