use tracing::warn;

use super::entry::RaceEntry;

/// Codes scored as `total_results + 1`: did not finish, start or compete, or disqualified.
pub const NON_FINISH_CODES: &[&str] = &[
    "DSQ", "DNS", "DNC", "DNF", "OCS", "BFD", "DGM", "DNE", "RAF",
];

/// Codes that add 20% of the fleet size to the finishing position.
pub const PERCENTAGE_PENALTY_CODES: &[&str] = &["ZFP", "SCP"];

/// Share of the fleet size added by a percentage penalty.
const PERCENTAGE_PENALTY: f64 = 0.20;

/// How a penalty code changes a result's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    NonFinish,
    Percentage,
}

impl Penalty {
    /// Classify a code, ignoring case. Unrecognized codes carry no penalty.
    pub fn classify(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        if NON_FINISH_CODES.contains(&code.as_str()) {
            Some(Penalty::NonFinish)
        } else if PERCENTAGE_PENALTY_CODES.contains(&code.as_str()) {
            Some(Penalty::Percentage)
        } else {
            None
        }
    }
}

/// Low-point score for a finishing position, a penalty code, and the race size.
pub fn calculate_points(position: u32, code: Option<&str>, total_results: u32) -> u32 {
    let did_not_finish = total_results + 1;
    let Some(code) = code else {
        return position;
    };

    match Penalty::classify(code) {
        Some(Penalty::NonFinish) => did_not_finish,
        Some(Penalty::Percentage) => {
            let penalty = (f64::from(total_results) * PERCENTAGE_PENALTY).round() as u32;
            (position + penalty).min(did_not_finish)
        }
        None => {
            warn!(code, "unrecognized penalty code scored without penalty");
            position
        }
    }
}

/// Set `points` on a ranked result. An unranked result scores as last place.
pub fn assign_points<R: RaceEntry>(entry: &mut R, total_results: u32) -> &mut R {
    let position = entry.position().unwrap_or(total_results);
    let points = calculate_points(position, entry.code(), total_results);
    entry.set_points(points);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ResultRecord;

    #[test]
    fn test_no_code_scores_position() {
        assert_eq!(calculate_points(2, None, 10), 2);
        assert_eq!(calculate_points(1, None, 1), 1);
    }

    #[test]
    fn test_non_finish_codes() {
        for &code in NON_FINISH_CODES {
            assert_eq!(calculate_points(2, Some(code), 10), 11, "code {}", code);
        }
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        assert_eq!(calculate_points(2, Some("dnf"), 10), 11);
        assert_eq!(calculate_points(2, Some("Zfp"), 10), 4);
    }

    #[test]
    fn test_percentage_penalty() {
        assert_eq!(calculate_points(2, Some("ZFP"), 10), 4);
        assert_eq!(calculate_points(2, Some("SCP"), 10), 4);
    }

    #[test]
    fn test_percentage_penalty_capped_at_did_not_finish() {
        assert_eq!(calculate_points(10, Some("ZFP"), 10), 11);
        assert_eq!(calculate_points(9, Some("SCP"), 10), 11);
    }

    #[test]
    fn test_percentage_penalty_rounds() {
        // 20% of 7 = 1.4 -> 1, 20% of 13 = 2.6 -> 3
        assert_eq!(calculate_points(1, Some("ZFP"), 7), 2);
        assert_eq!(calculate_points(1, Some("ZFP"), 13), 4);
        // 20% of 2 = 0.4 -> 0
        assert_eq!(calculate_points(1, Some("ZFP"), 2), 1);
    }

    #[test]
    fn test_percentage_penalty_never_exceeds_cap() {
        for total in 1..=40 {
            for position in 1..=total {
                let points = calculate_points(position, Some("ZFP"), total);
                let expected = (position + (f64::from(total) * 0.2).round() as u32).min(total + 1);
                assert_eq!(points, expected);
                assert!(points <= total + 1);
                assert!(points >= 1);
            }
        }
    }

    #[test]
    fn test_unrecognized_code_scores_position() {
        assert_eq!(calculate_points(3, Some("RDG"), 10), 3);
        assert_eq!(calculate_points(3, Some(""), 10), 3);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Penalty::classify("dsq"), Some(Penalty::NonFinish));
        assert_eq!(Penalty::classify(" scp "), Some(Penalty::Percentage));
        assert_eq!(Penalty::classify("XYZ"), None);
    }

    #[test]
    fn test_assign_points_first_place() {
        let mut result = ResultRecord {
            corrected_time: Some("01:30:41".to_string()),
            position: Some(1),
            ..ResultRecord::new("A")
        };
        assign_points(&mut result, 10);
        assert_eq!(result.points, Some(1));
    }

    #[test]
    fn test_assign_points_dnf() {
        let mut result = ResultRecord {
            position: Some(10),
            code: Some("DNF".to_string()),
            ..ResultRecord::new("A")
        };
        assert_eq!(assign_points(&mut result, 10).points, Some(11));
    }

    #[test]
    fn test_assign_points_unranked_scores_last() {
        let mut result = ResultRecord::new("A");
        assign_points(&mut result, 6);
        assert_eq!(result.points, Some(6));
    }
}
