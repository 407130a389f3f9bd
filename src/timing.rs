use chrono::{NaiveTime, Timelike};

use crate::error::{Result, ScoringError};

/// Parse a wall-clock time of day ("HH:MM:SS" or "HH:MM") into seconds since midnight.
pub fn parse_time_of_day(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map(|t| i64::from(t.num_seconds_from_midnight()))
        .map_err(|_| ScoringError::invalid_time(value))
}

/// Seconds between two times of day on the same clock face.
///
/// No day rollover: a finish before the start yields a negative count.
pub fn parse_elapsed(start: &str, finish: &str) -> Result<i64> {
    let start = parse_time_of_day(start)?;
    let finish = parse_time_of_day(finish)?;
    Ok(finish - start)
}

/// Render a duration as zero-padded "HH:MM:SS".
///
/// Hours do not wrap at 24; negative durations get a leading '-'.
pub fn format_seconds(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Inverse of [`format_seconds`].
pub fn parse_seconds(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 3 {
        return Err(ScoringError::invalid_time(value));
    }

    let mut fields = [0i64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(ScoringError::invalid_time(value));
        }
        *slot = part.parse().map_err(|_| ScoringError::invalid_time(value))?;
    }

    let [hours, minutes, seconds] = fields;
    if minutes >= 60 || seconds >= 60 {
        return Err(ScoringError::invalid_time(value));
    }

    let total = hours * 3600 + minutes * 60 + seconds;
    Ok(if negative { -total } else { total })
}
