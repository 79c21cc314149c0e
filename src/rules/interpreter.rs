//! Parking-sign rule interpreter
//!
//! Takes the free-text description of a physical parking sign plus an
//! evaluation time and decides whether parking is currently allowed,
//! producing a human-readable reason. Sign text is untrusted open-data
//! content; anything unrecognized degrades to the optimistic default.
//!
//! Matching is case-insensitive over the whole text. Checks run in
//! precedence order: blanket "anytime" bans, then day-specific no-parking
//! windows, then metered duration clauses, then the default verdict.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::clock::{DAY_NAMES, EvaluationTime};

/// Time ranges on signs look like "8AM-6PM". Ranges written with colons,
/// spaces, or "to" are not recognized and fall through to the default.
static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})(AM|PM)-(\d{1,2})(AM|PM)").expect("time range pattern is valid")
});

/// Metered duration clauses look like "2 HR" or "2HR"
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+ ?HR").expect("duration pattern is valid"));

/// Verdict of a rule evaluation
///
/// `reason` is advisory display text only, never fed back into computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub allowed: bool,
    pub reason: String,
}

impl Decision {
    fn allowed(reason: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: reason.into(),
        }
    }

    fn forbidden(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
        }
    }
}

/// A sign's hour window, with the endpoint spellings as they were matched
struct TimeWindow {
    start: u32,
    end: u32,
    start_text: String,
    end_text: String,
}

impl TimeWindow {
    /// Whether `hour` falls inside the window, start inclusive, end exclusive.
    ///
    /// A window whose start is later than its end crosses midnight and is
    /// active on both sides of it. Equal endpoints never match.
    fn contains(&self, hour: f64) -> bool {
        let start = self.start as f64;
        let end = self.end as f64;
        if self.start < self.end {
            hour >= start && hour < end
        } else if self.start > self.end {
            hour >= start || hour < end
        } else {
            false
        }
    }
}

/// Evaluate a sign description at the given moment.
///
/// Total over its input domain: any text (or none) and any valid time yield
/// a [`Decision`]; malformed or absent text means "no restriction known".
pub fn evaluate(sign_text: Option<&str>, at: EvaluationTime) -> Decision {
    let Some(raw) = sign_text else {
        return Decision::allowed("No rule data");
    };
    if raw.trim().is_empty() {
        return Decision::allowed("No rule data");
    }

    let text = raw.to_uppercase();

    // Blanket bans win over everything else
    if text.contains("ANYTIME") && (text.contains("NO PARKING") || text.contains("NO STANDING")) {
        return Decision::forbidden("No parking anytime");
    }

    // Day-specific no-parking window
    let named_days: Vec<&str> = DAY_NAMES
        .iter()
        .copied()
        .filter(|d| text.contains(d))
        .collect();
    if !named_days.is_empty() && text.contains("NO PARKING") {
        if let Some(window) = parse_time_range(&text) {
            if named_days.contains(&at.day_name()) && window.contains(at.hour) {
                return Decision::forbidden(format!(
                    "No parking {} {}-{}",
                    at.day_name(),
                    window.start_text,
                    window.end_text
                ));
            }
        }
    }

    // Metered duration clause, e.g. "2 HR PARKING 8AM-6PM EXCEPT SUNDAY"
    if text.contains("PARKING") {
        if let (Some(duration), Some(window)) =
            (DURATION_RE.find(&text), parse_time_range(&text))
        {
            let excepted = text.contains(&format!("EXCEPT {}", at.day_name()));
            if !excepted && window.contains(at.hour) {
                return Decision::allowed(format!(
                    "Allowed max {} until {}",
                    duration.as_str(),
                    window.end_text
                ));
            }
        }
    }

    Decision::allowed("No restriction at this time")
}

/// Parse the first "H(AM|PM)-H(AM|PM)" range in the text.
///
/// Endpoints convert to 24-hour form as `hour % 12`, plus 12 for PM, so
/// "12AM" is 0 and "12PM" is 12.
fn parse_time_range(text: &str) -> Option<TimeWindow> {
    let caps = TIME_RANGE_RE.captures(text)?;

    let to_24h = |digits: &str, meridiem: &str| -> u32 {
        let hour: u32 = digits.parse().unwrap_or(0);
        hour % 12 + if meridiem == "PM" { 12 } else { 0 }
    };

    Some(TimeWindow {
        start: to_24h(&caps[1], &caps[2]),
        end: to_24h(&caps[3], &caps[4]),
        start_text: format!("{}{}", &caps[1], &caps[2]),
        end_text: format!("{}{}", &caps[3], &caps[4]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn at(day: Weekday, hour: f64) -> EvaluationTime {
        EvaluationTime::new(day, hour)
    }

    #[test]
    fn test_missing_text_is_allowed() {
        let d = evaluate(None, at(Weekday::Mon, 10.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No rule data");
    }

    #[test]
    fn test_empty_and_blank_text_is_allowed() {
        assert!(evaluate(Some(""), at(Weekday::Mon, 10.0)).allowed);
        let d = evaluate(Some("   "), at(Weekday::Mon, 10.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No rule data");
    }

    #[test]
    fn test_anytime_ban() {
        let d = evaluate(Some("NO PARKING ANYTIME"), at(Weekday::Sun, 3.0));
        assert!(!d.allowed);
        assert_eq!(d.reason, "No parking anytime");
    }

    #[test]
    fn test_no_standing_anytime_ban() {
        let d = evaluate(Some("NO STANDING ANYTIME"), at(Weekday::Fri, 15.0));
        assert!(!d.allowed);
        assert_eq!(d.reason, "No parking anytime");
    }

    #[test]
    fn test_anytime_ban_ignores_time() {
        // The blanket ban wins even when a window elsewhere in the text
        // would not cover the current hour
        let d = evaluate(
            Some("NO STANDING ANYTIME MONDAY 8AM-6PM"),
            at(Weekday::Tue, 23.0),
        );
        assert!(!d.allowed);
    }

    #[test]
    fn test_day_window_restricted() {
        let d = evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Tue, 10.0));
        assert!(!d.allowed);
        assert_eq!(d.reason, "No parking TUESDAY 8AM-6PM");
    }

    #[test]
    fn test_day_window_after_hours() {
        let d = evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Tue, 19.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No restriction at this time");
    }

    #[test]
    fn test_day_window_wrong_day() {
        let d = evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Mon, 10.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No restriction at this time");
    }

    #[test]
    fn test_window_boundaries() {
        // Start inclusive
        assert!(!evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Tue, 8.0)).allowed);
        // End exclusive
        assert!(evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Tue, 18.0)).allowed);
        // Just inside the end
        assert!(!evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Tue, 17.99)).allowed);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = evaluate(Some("no parking tuesday 8am-6pm"), at(Weekday::Tue, 10.0));
        let upper = evaluate(Some("NO PARKING TUESDAY 8AM-6PM"), at(Weekday::Tue, 10.0));
        assert_eq!(lower, upper);
        assert!(!lower.allowed);
    }

    #[test]
    fn test_idempotent() {
        let text = Some("NO PARKING WEDNESDAY 9AM-11AM");
        let t = at(Weekday::Wed, 9.5);
        assert_eq!(evaluate(text, t), evaluate(text, t));
    }

    #[test]
    fn test_twelve_oclock_conversions() {
        // 12AM is midnight, so 0.5 falls inside 12AM-6AM
        assert!(!evaluate(Some("NO PARKING MONDAY 12AM-6AM"), at(Weekday::Mon, 0.5)).allowed);
        // 12PM is noon
        assert!(!evaluate(Some("NO PARKING MONDAY 12PM-2PM"), at(Weekday::Mon, 12.5)).allowed);
        assert!(evaluate(Some("NO PARKING MONDAY 12PM-2PM"), at(Weekday::Mon, 11.5)).allowed);
    }

    #[test]
    fn test_multi_day_sign_matches_each_listed_day() {
        let text = Some("NO PARKING MONDAY TUESDAY 8AM-6PM");
        let mon = evaluate(text, at(Weekday::Mon, 10.0));
        assert!(!mon.allowed);
        assert_eq!(mon.reason, "No parking MONDAY 8AM-6PM");

        let tue = evaluate(text, at(Weekday::Tue, 10.0));
        assert!(!tue.allowed);
        assert_eq!(tue.reason, "No parking TUESDAY 8AM-6PM");

        // A day the sign does not name stays unrestricted
        assert!(evaluate(text, at(Weekday::Wed, 10.0)).allowed);
    }

    #[test]
    fn test_abbreviated_day_range_not_recognized() {
        // "MON-FRI" contains no full weekday name, so no restriction fires
        let d = evaluate(Some("NO PARKING MON-FRI 8AM-6PM"), at(Weekday::Tue, 10.0));
        assert!(d.allowed);
    }

    #[test]
    fn test_colon_and_word_ranges_not_recognized() {
        assert!(
            evaluate(
                Some("NO PARKING TUESDAY 8:00AM-6:00PM"),
                at(Weekday::Tue, 10.0)
            )
            .allowed
        );
        assert!(
            evaluate(
                Some("NO PARKING TUESDAY 8AM TO 6PM"),
                at(Weekday::Tue, 10.0)
            )
            .allowed
        );
    }

    #[test]
    fn test_day_restriction_without_window_is_allowed() {
        let d = evaluate(Some("NO PARKING TUESDAY"), at(Weekday::Tue, 10.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No restriction at this time");
    }

    #[test]
    fn test_midnight_crossing_window() {
        let text = Some("NO PARKING FRIDAY 10PM-6AM");
        // Late evening, inside
        assert!(!evaluate(text, at(Weekday::Fri, 23.0)).allowed);
        // Early morning, inside
        assert!(!evaluate(text, at(Weekday::Fri, 5.0)).allowed);
        // Midday, outside
        assert!(evaluate(text, at(Weekday::Fri, 12.0)).allowed);
        // Boundary: start inclusive, end exclusive
        assert!(!evaluate(text, at(Weekday::Fri, 22.0)).allowed);
        assert!(evaluate(text, at(Weekday::Fri, 6.0)).allowed);
    }

    #[test]
    fn test_duration_clause_inside_window() {
        let d = evaluate(Some("2 HR PARKING 8AM-6PM"), at(Weekday::Mon, 10.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "Allowed max 2 HR until 6PM");
    }

    #[test]
    fn test_duration_clause_outside_window() {
        let d = evaluate(Some("2 HR PARKING 8AM-6PM"), at(Weekday::Mon, 19.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No restriction at this time");
    }

    #[test]
    fn test_duration_clause_except_day() {
        let text = Some("2 HR PARKING 8AM-6PM EXCEPT SUNDAY");
        let sun = evaluate(text, at(Weekday::Sun, 10.0));
        assert!(sun.allowed);
        assert_eq!(sun.reason, "No restriction at this time");

        let mon = evaluate(text, at(Weekday::Mon, 10.0));
        assert_eq!(mon.reason, "Allowed max 2 HR until 6PM");
    }

    #[test]
    fn test_duration_without_space() {
        let d = evaluate(Some("1HR PARKING 9AM-7PM"), at(Weekday::Thu, 12.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "Allowed max 1HR until 7PM");
    }

    #[test]
    fn test_day_restriction_takes_precedence_over_duration() {
        // Both clauses present; the active no-parking window decides
        let text = Some("NO PARKING TUESDAY 8AM-6PM 2 HR PARKING");
        let d = evaluate(text, at(Weekday::Tue, 10.0));
        assert!(!d.allowed);
    }

    #[test]
    fn test_unrelated_text_is_allowed() {
        let d = evaluate(Some("BUS STOP"), at(Weekday::Mon, 10.0));
        assert!(d.allowed);
        assert_eq!(d.reason, "No restriction at this time");
    }
}
