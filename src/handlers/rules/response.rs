//! Rule evaluation response DTOs

use serde::Serialize;

use crate::rules::EvaluationTime;

/// Rule evaluation response
#[derive(Debug, Serialize)]
pub struct EvaluateRuleResponse {
    pub allowed: bool,
    pub reason: String,
    pub evaluated_at: EvaluatedAt,
}

/// Echo of the moment the rule was evaluated against
#[derive(Debug, Serialize)]
pub struct EvaluatedAt {
    /// Upper-case weekday name
    pub day: String,
    /// Decimal hour-of-day
    pub hour: f64,
}

impl From<EvaluationTime> for EvaluatedAt {
    fn from(at: EvaluationTime) -> Self {
        Self {
            day: at.day_name().to_string(),
            hour: at.hour,
        }
    }
}
