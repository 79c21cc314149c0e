//! Rule evaluation request DTOs

use chrono::{DateTime, Utc, Weekday};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    rules::EvaluationTime,
};

/// Evaluate a sign description at a given moment
#[derive(Debug, Deserialize, Validate)]
pub struct EvaluateRuleRequest {
    /// Free-text sign description; absent means "no rule known"
    #[validate(length(max = 1000))]
    pub sign_text: Option<String>,

    /// Weekday name, e.g. "tuesday"; requires `hour`
    pub day: Option<String>,

    /// Decimal hour-of-day in [0, 24); requires `day`
    pub hour: Option<f64>,

    /// RFC 3339 instant, alternative to `day` + `hour`
    pub at: Option<DateTime<Utc>>,
}

impl EvaluateRuleRequest {
    /// Resolve the evaluation time from the request.
    ///
    /// Precedence: explicit day + hour, then `at`, then the current time.
    pub fn evaluation_time(&self) -> AppResult<EvaluationTime> {
        match (&self.day, self.hour) {
            (Some(day), Some(hour)) => {
                let day: Weekday = day.parse().map_err(|_| {
                    AppError::InvalidInput(format!("Unrecognized day name: {day}"))
                })?;
                if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
                    return Err(AppError::InvalidInput(
                        "Hour must be in the range [0, 24)".to_string(),
                    ));
                }
                Ok(EvaluationTime::new(day, hour))
            }
            (Some(_), None) | (None, Some(_)) => Err(AppError::InvalidInput(
                "day and hour must be supplied together".to_string(),
            )),
            (None, None) => Ok(EvaluationTime::from_datetime(
                &self.at.unwrap_or_else(Utc::now),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(
        day: Option<&str>,
        hour: Option<f64>,
        at: Option<DateTime<Utc>>,
    ) -> EvaluateRuleRequest {
        EvaluateRuleRequest {
            sign_text: None,
            day: day.map(str::to_string),
            hour,
            at,
        }
    }

    #[test]
    fn test_day_and_hour() {
        let at = request(Some("tuesday"), Some(10.5), None)
            .evaluation_time()
            .unwrap();
        assert_eq!(at.day, Weekday::Tue);
        assert!((at.hour - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_day_name_is_case_insensitive() {
        let at = request(Some("FRIDAY"), Some(0.0), None)
            .evaluation_time()
            .unwrap();
        assert_eq!(at.day, Weekday::Fri);
    }

    #[test]
    fn test_unknown_day_rejected() {
        assert!(request(Some("someday"), Some(10.0), None)
            .evaluation_time()
            .is_err());
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        assert!(request(Some("monday"), Some(24.0), None)
            .evaluation_time()
            .is_err());
        assert!(request(Some("monday"), Some(-1.0), None)
            .evaluation_time()
            .is_err());
    }

    #[test]
    fn test_day_without_hour_rejected() {
        assert!(request(Some("monday"), None, None).evaluation_time().is_err());
        assert!(request(None, Some(9.0), None).evaluation_time().is_err());
    }

    #[test]
    fn test_rfc3339_instant() {
        // 2024-01-17 is a Wednesday
        let instant = Utc.with_ymd_and_hms(2024, 1, 17, 14, 30, 0).unwrap();
        let at = request(None, None, Some(instant)).evaluation_time().unwrap();
        assert_eq!(at.day, Weekday::Wed);
        assert!((at.hour - 14.5).abs() < 1e-9);
    }

    #[test]
    fn test_defaults_to_now() {
        let at = request(None, None, None).evaluation_time().unwrap();
        assert!((0.0..24.0).contains(&at.hour));
    }
}
