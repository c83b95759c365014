use axum::{extract::State, Json};
use serde::Deserialize;

use crate::agent::{composer, filter, intake};
use crate::errors::AppError;
use crate::models::{AnswerSet, TurnResponse};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AgentRequest {
    #[serde(rename = "userAnswers", default)]
    pub user_answers: AnswerSet,
}

/// POST /api/agent
///
/// One turn of the intake-or-recommend protocol. The caller resends the full
/// answer set every turn; no session state is kept server-side. While a
/// question remains unanswered the filter and composer are not invoked.
pub async fn handle_agent_turn(
    State(state): State<AppState>,
    Json(req): Json<AgentRequest>,
) -> Result<Json<TurnResponse>, AppError> {
    let answers = req.user_answers;

    if let Some(question) = intake::next_question(&answers) {
        return Ok(Json(TurnResponse {
            next_question: Some(question.prompt.to_string()),
            next_question_key: Some(question.key),
            recommendations: Vec::new(),
        }));
    }

    // All questions answered, generate recommendations
    let candidates = filter::filter_and_rank(&answers, &state.catalog);
    let recommendations = composer::compose(&answers, &candidates, state.llm.as_ref()).await;

    Ok(Json(TurnResponse {
        next_question: None,
        next_question_key: None,
        recommendations,
    }))
}
