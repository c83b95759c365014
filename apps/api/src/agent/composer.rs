//! Recommendation Composer — delegates card ranking and justification to
//! the LLM, with a deterministic fallback when that path fails.

use tracing::{debug, info, warn};

use crate::agent::prompts::RECOMMEND_PROMPT_TEMPLATE;
use crate::catalog::CardRecord;
use crate::llm_client::{strip_json_fences, LlmError, TextCompletion};
use crate::models::{AnswerSet, Reasons, Recommendation};

/// Fixed reason attached to every fallback recommendation.
pub const FALLBACK_REASON: &str = "Matches your income and preferences.";
/// Fixed reward text attached to every fallback recommendation.
pub const FALLBACK_REWARD_SIMULATION: &str = "Simulation not available.";

/// Produces recommendations for the candidate cards.
///
/// Never fails: any LLM-path error (missing credential, transport failure,
/// empty or unparseable response) degrades to one fallback entry per
/// candidate, in candidate order. The caller cannot distinguish the two
/// outcomes from the shape of the result.
pub async fn compose(
    answers: &AnswerSet,
    candidates: &[&CardRecord],
    llm: &dyn TextCompletion,
) -> Vec<Recommendation> {
    match compose_via_llm(answers, candidates, llm).await {
        Ok(recommendations) => {
            info!("LLM recommendations generated ({})", recommendations.len());
            recommendations
        }
        Err(e) => {
            warn!("LLM recommendation failed, using static fallback: {e}");
            fallback_recommendations(candidates)
        }
    }
}

async fn compose_via_llm(
    answers: &AnswerSet,
    candidates: &[&CardRecord],
    llm: &dyn TextCompletion,
) -> Result<Vec<Recommendation>, LlmError> {
    let prompt = build_prompt(answers, candidates)?;

    info!("Requesting recommendations from the LLM...");
    debug!("Recommendation prompt: {prompt}");

    let text = llm.complete(&prompt).await?;

    // Typed deserialization doubles as shape validation of the untrusted
    // output: wrong field names or types fail here and trigger the fallback.
    Ok(serde_json::from_str(strip_json_fences(&text))?)
}

fn build_prompt(answers: &AnswerSet, candidates: &[&CardRecord]) -> Result<String, LlmError> {
    Ok(RECOMMEND_PROMPT_TEMPLATE
        .replace("{profile_json}", &serde_json::to_string(answers)?)
        .replace("{cards_json}", &serde_json::to_string(candidates)?))
}

/// One fallback recommendation per candidate, mirroring name, order, and count.
pub fn fallback_recommendations(candidates: &[&CardRecord]) -> Vec<Recommendation> {
    candidates
        .iter()
        .map(|card| Recommendation {
            name: card.name.clone(),
            reasons: Reasons::Many(vec![FALLBACK_REASON.to_string()]),
            reward_simulation: FALLBACK_REWARD_SIMULATION.to_string(),
        })
        .collect()
}
