use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::pipeline::ScoredRace;
use crate::scoring::{ResultRecord, SeriesStanding};

/// Placeholder for unset time, code and speed cells
const EMPTY_CELL: &str = "-";

/// Position "99." + elapsed + corrected + speed + code + points, with separators
const FIXED_RACE_WIDTH: usize = 3 + 10 + 10 + 7 + 5 + 5 + 6 * 2;

/// Position + points, with separators
const FIXED_STANDINGS_WIDTH: usize = 3 + 6 + 2 * 2;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a boat name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Width of the boat column: the longest name, squeezed to the terminal when there is one.
fn boat_column_width<'a>(names: impl Iterator<Item = &'a str>, fixed: usize) -> usize {
    let longest = names.map(|n| n.chars().count()).max().unwrap_or(0).max(4);
    match get_terminal_width() {
        Some(width) if width > fixed + 10 => longest.min(width - fixed),
        Some(_) => longest.min(20),
        None => longest,
    }
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or(EMPTY_CELL)
}

fn format_speed(knots: Option<f64>) -> String {
    match knots {
        Some(k) => format!("{:.2}", k),
        None => EMPTY_CELL.to_string(),
    }
}

fn format_number(value: Option<u32>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), |v| v.to_string())
}

/// Format a scored race as one block per fleet.
/// Columns: position, boat, elapsed, corrected, speed (kn), code, points
pub fn format_race_table(race: &ScoredRace, use_colors: bool) -> String {
    let title = if use_colors {
        race.name.bold().to_string()
    } else {
        race.name.clone()
    };

    if race.results.is_empty() {
        return format!("{}\n  No results.", title);
    }

    let boat_width = boat_column_width(
        race.results.iter().map(|r| r.boat_id.as_str()),
        FIXED_RACE_WIDTH,
    );

    let mut lines = vec![title];
    for fleet in race.results.chunk_by(|a, b| a.fleet_id == b.fleet_id) {
        if let Some(fleet_id) = fleet[0].fleet_id.as_deref() {
            let heading = format!("Fleet: {}", fleet_id);
            lines.push(if use_colors {
                heading.cyan().to_string()
            } else {
                heading
            });
        }
        lines.extend(fleet.iter().map(|r| format_race_row(r, boat_width, use_colors)));
    }

    lines.join("\n")
}

fn format_race_row(result: &ResultRecord, boat_width: usize, use_colors: bool) -> String {
    let position = format!("{:>2}.", format_number(result.position));
    let boat = format!(
        "{:<width$}",
        truncate_name(&result.boat_id, boat_width),
        width = boat_width
    );
    let elapsed = format!("{:>10}", cell(result.elapsed_time.as_deref()));
    let corrected = format!("{:>10}", cell(result.corrected_time.as_deref()));
    let speed = format!("{:>7}", format_speed(result.avg_speed));
    let code = format!("{:<5}", cell(result.code.as_deref()));
    let points = format!("{:>5}", format_number(result.points));

    if use_colors {
        let code = if result.code.is_some() {
            code.red().to_string()
        } else {
            code.dimmed().to_string()
        };
        format!(
            "{}  {}  {}  {}  {}  {}  {}",
            position.dimmed(),
            boat,
            elapsed,
            corrected.bold(),
            speed,
            code,
            points.bold()
        )
    } else {
        format!(
            "{}  {}  {}  {}  {}  {}  {}",
            position, boat, elapsed, corrected, speed, code, points
        )
    }
}

/// Format series standings, one line per boat, in the order given.
/// Columns: place, boat, fleet, points
pub fn format_standings_table(standings: &[SeriesStanding], use_colors: bool) -> String {
    if standings.is_empty() {
        return "No standings.".to_string();
    }

    let boat_width = boat_column_width(
        standings.iter().map(|s| s.boat_id.as_str()),
        FIXED_STANDINGS_WIDTH,
    );
    let fleet_width = standings
        .iter()
        .map(|s| cell(s.fleet_id.as_deref()).chars().count())
        .max()
        .unwrap_or(1);

    standings
        .iter()
        .enumerate()
        .map(|(idx, standing)| {
            let place = format!("{:>2}.", idx + 1);
            let boat = format!(
                "{:<width$}",
                truncate_name(&standing.boat_id, boat_width),
                width = boat_width
            );
            let fleet = format!(
                "{:<width$}",
                cell(standing.fleet_id.as_deref()),
                width = fleet_width
            );
            let points = format!("{:>6}", standing.points);

            if use_colors {
                format!(
                    "{}  {}  {}  {}",
                    place.dimmed(),
                    boat,
                    fleet.cyan(),
                    points.bold()
                )
            } else {
                format!("{}  {}  {}  {}", place, boat, fleet, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a scored race as tab-separated values for scripting
/// Columns: race, fleet, position, boat, elapsed, corrected, code, points (no headers)
pub fn format_race_tsv(race: &ScoredRace) -> String {
    race.results
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                race.name,
                r.fleet_id.as_deref().unwrap_or(""),
                format_number(r.position),
                r.boat_id,
                r.elapsed_time.as_deref().unwrap_or(""),
                r.corrected_time.as_deref().unwrap_or(""),
                r.code.as_deref().unwrap_or(""),
                format_number(r.points)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format series standings as tab-separated values
/// Columns: boat, fleet, points (no headers)
pub fn format_standings_tsv(standings: &[SeriesStanding]) -> String {
    standings
        .iter()
        .map(|s| {
            format!(
                "{}\t{}\t{}",
                s.boat_id,
                s.fleet_id.as_deref().unwrap_or(""),
                s.points
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
