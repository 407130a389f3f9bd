use tracing::debug;

use super::config::SortKey;
use super::entry::RaceEntry;
use super::points::assign_points;
use crate::timing::parse_seconds;

/// Order one race's results, then set `position` and `points` on each.
///
/// Finishers come first, ascending by the chosen time; ties keep input order.
/// Boats without a finish time follow in input order and all take
/// `position == results.len()`.
pub fn rank<R: RaceEntry>(results: &mut [R], sort_key: SortKey) {
    results.sort_by_cached_key(|entry| order_key(entry, sort_key));

    let total = u32::try_from(results.len()).unwrap_or(u32::MAX);
    for (index, entry) in results.iter_mut().enumerate() {
        let position = if entry.has_finished() {
            index as u32 + 1
        } else {
            total
        };
        entry.set_position(position);
        assign_points(entry, total);

        debug!(
            boat = entry.boat_id(),
            position,
            points = entry.points(),
            "ranked result"
        );
    }
}

/// Sort tiers: timed finishers, finishers whose time is unset or unreadable, non-finishers.
fn order_key<R: RaceEntry>(entry: &R, sort_key: SortKey) -> (u8, i64) {
    if !entry.has_finished() {
        return (2, 0);
    }

    let time = match sort_key {
        SortKey::Corrected => entry.corrected_time(),
        SortKey::Elapsed => entry.elapsed_time(),
    };

    match time.map(parse_seconds) {
        Some(Ok(seconds)) => (0, seconds),
        Some(Err(e)) => {
            debug!(boat = entry.boat_id(), error = %e, "unreadable time ranks after timed finishers");
            (1, 0)
        }
        None => (1, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ResultRecord;

    fn finisher(boat: &str, corrected: &str) -> ResultRecord {
        ResultRecord {
            finish_time: Some("12:00:00".to_string()),
            elapsed_time: Some("02:00:00".to_string()),
            corrected_time: Some(corrected.to_string()),
            ..ResultRecord::new(boat)
        }
    }

    fn non_finisher(boat: &str, code: Option<&str>) -> ResultRecord {
        ResultRecord {
            code: code.map(str::to_string),
            ..ResultRecord::new(boat)
        }
    }

    fn boats(results: &[ResultRecord]) -> Vec<&str> {
        results.iter().map(|r| r.boat_id.as_str()).collect()
    }

    #[test]
    fn test_orders_by_corrected_time() {
        let mut results = vec![
            finisher("C", "01:10:00"),
            finisher("A", "00:55:00"),
            finisher("B", "01:00:00"),
        ];
        rank(&mut results, SortKey::Corrected);

        assert_eq!(boats(&results), vec!["A", "B", "C"]);
        let positions: Vec<_> = results.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![Some(1), Some(2), Some(3)]);
        let points: Vec<_> = results.iter().map(|r| r.points).collect();
        assert_eq!(points, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_orders_by_elapsed_time() {
        let mut fast = finisher("fast", "01:30:00");
        fast.elapsed_time = Some("01:00:00".to_string());
        let mut slow = finisher("slow", "01:00:00");
        slow.elapsed_time = Some("01:20:00".to_string());

        let mut results = vec![slow, fast];
        rank(&mut results, SortKey::Elapsed);
        assert_eq!(boats(&results), vec!["fast", "slow"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut results = vec![
            finisher("first", "01:00:00"),
            finisher("second", "01:00:00"),
            finisher("leader", "00:59:59"),
        ];
        rank(&mut results, SortKey::Corrected);

        assert_eq!(boats(&results), vec!["leader", "first", "second"]);
        assert_eq!(results[1].position, Some(2));
        assert_eq!(results[2].position, Some(3));
    }

    #[test]
    fn test_non_finisher_ranks_last_in_race_of_ten() {
        let mut results: Vec<ResultRecord> = (1..=9)
            .map(|i| finisher(&format!("boat-{}", i), &format!("01:{:02}:00", 10 + i)))
            .collect();
        // Would win on corrected time if it had finished
        let mut dnf = non_finisher("dnf", Some("DNF"));
        dnf.corrected_time = Some("00:01:00".to_string());
        results.insert(0, dnf);

        rank(&mut results, SortKey::Corrected);

        let last = results.last().unwrap();
        assert_eq!(last.boat_id, "dnf");
        assert_eq!(last.position, Some(10));
        assert_eq!(last.points, Some(11));
        assert_eq!(results[0].position, Some(1));
        assert_eq!(results[8].position, Some(9));
    }

    #[test]
    fn test_non_finishers_share_terminal_position() {
        let mut results = vec![
            non_finisher("dns", Some("DNS")),
            finisher("A", "01:00:00"),
            non_finisher("gone", None),
            finisher("B", "01:05:00"),
        ];
        rank(&mut results, SortKey::Corrected);

        assert_eq!(boats(&results), vec!["A", "B", "dns", "gone"]);
        assert_eq!(results[2].position, Some(4));
        assert_eq!(results[3].position, Some(4));
        assert_eq!(results[2].points, Some(5));
        assert_eq!(results[3].points, Some(4));
    }

    #[test]
    fn test_every_non_finisher_follows_every_finisher() {
        let mut results = vec![
            non_finisher("x", Some("DNC")),
            finisher("A", "03:00:00"),
            non_finisher("y", None),
            finisher("B", "00:30:00"),
            non_finisher("z", Some("OCS")),
            finisher("C", "01:30:00"),
        ];
        rank(&mut results, SortKey::Corrected);

        let first_non_finisher = results.iter().position(|r| !r.has_finished()).unwrap();
        assert!(results[first_non_finisher..].iter().all(|r| !r.has_finished()));
        assert!(results[first_non_finisher..]
            .iter()
            .all(|r| r.position == Some(results.len() as u32)));
    }

    #[test]
    fn test_compares_numerically_past_ninety_nine_hours() {
        let mut results = vec![finisher("long", "100:00:00"), finisher("short", "99:00:00")];
        rank(&mut results, SortKey::Corrected);
        assert_eq!(boats(&results), vec!["short", "long"]);
    }

    #[test]
    fn test_negative_corrected_time_leads() {
        let mut results = vec![finisher("A", "00:05:00"), finisher("B", "-00:02:00")];
        rank(&mut results, SortKey::Corrected);
        assert_eq!(boats(&results), vec!["B", "A"]);
    }

    #[test]
    fn test_untimed_finisher_ranks_between_timed_and_non_finishers() {
        let mut untimed = finisher("untimed", "01:00:00");
        untimed.corrected_time = None;
        let mut results = vec![
            non_finisher("dnf", Some("DNF")),
            untimed,
            finisher("timed", "02:00:00"),
        ];
        rank(&mut results, SortKey::Corrected);

        assert_eq!(boats(&results), vec!["timed", "untimed", "dnf"]);
        assert_eq!(results[1].position, Some(2));
    }

    #[test]
    fn test_penalty_codes_on_finishers() {
        let mut zfp = finisher("zfp", "00:50:00");
        zfp.code = Some("zfp".to_string());
        let mut results: Vec<ResultRecord> = (1..=9)
            .map(|i| finisher(&format!("boat-{}", i), &format!("01:{:02}:00", i)))
            .collect();
        results.push(zfp);

        rank(&mut results, SortKey::Corrected);

        assert_eq!(results[0].boat_id, "zfp");
        assert_eq!(results[0].position, Some(1));
        assert_eq!(results[0].points, Some(3));
    }

    #[test]
    fn test_empty_race() {
        let mut results: Vec<ResultRecord> = Vec::new();
        rank(&mut results, SortKey::Corrected);
        assert!(results.is_empty());
    }
}
