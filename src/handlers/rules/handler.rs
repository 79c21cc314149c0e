//! Rule evaluation handler implementations

use axum::Json;
use validator::Validate;

use crate::{error::AppResult, rules};

use super::{
    request::EvaluateRuleRequest,
    response::{EvaluateRuleResponse, EvaluatedAt},
};

/// Evaluate a sign description
pub async fn evaluate_rule(
    Json(payload): Json<EvaluateRuleRequest>,
) -> AppResult<Json<EvaluateRuleResponse>> {
    payload.validate()?;

    let at = payload.evaluation_time()?;
    let decision = rules::evaluate(payload.sign_text.as_deref(), at);

    Ok(Json(EvaluateRuleResponse {
        allowed: decision.allowed,
        reason: decision.reason,
        evaluated_at: EvaluatedAt::from(at),
    }))
}
