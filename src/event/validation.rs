use super::schema::EventConfig;
use crate::scoring::Formula;

/// Check that every result carries the fields its scoring needs.
/// Returns all validation errors at once (not just the first).
///
/// Only presence is checked; values are left to the scoring core.
pub fn validate_event(event: &EventConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if event.races.is_empty() {
        errors.push("races: at least one race is required".to_string());
    }

    let scoring = &event.scoring;
    for (i, race) in event.races.iter().enumerate() {
        for (j, result) in race.results.iter().enumerate() {
            let path = format!("races[{}].results[{}]", i, j);

            if result.boat_id.trim().is_empty() {
                errors.push(format!("{}.boat_id: must not be empty", path));
            }

            // Boats that did not finish are never corrected
            if result.finish_time.is_none() {
                continue;
            }

            if result.start_time.is_none() && race.start_time.is_none() {
                errors.push(format!(
                    "{}.start_time: required (set it on the result or the race)",
                    path
                ));
            }

            if scoring.one_design {
                continue;
            }

            if result.rating.is_none() {
                errors.push(format!("{}.rating: required for handicap scoring", path));
            }
            if scoring.formula == Formula::Distance
                && result.distance.is_none()
                && race.distance.is_none()
            {
                errors.push(format!(
                    "{}.distance: required for time on distance (set it on the result or the race)",
                    path
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
