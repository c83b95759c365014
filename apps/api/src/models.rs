//! Wire and domain models for the intake-and-recommend protocol.

use serde::{Deserialize, Serialize};

/// Stable identifier for each intake question.
///
/// Travels on the wire next to the question text so clients can route an
/// answer to its key without matching substrings of the prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    Income,
    Spending,
    Benefits,
    ExistingCards,
    CreditScore,
}

/// The accumulated user answers, resent in full by the caller every turn.
///
/// All keys are optional until filled; a key counts as answered only when
/// its value is present and non-blank. Values are free text — income is
/// parsed permissively downstream, never validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_cards: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<String>,
}

impl AnswerSet {
    /// Returns the trimmed answer for `key`, or `None` when missing or blank.
    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        let value = match key {
            QuestionKey::Income => &self.income,
            QuestionKey::Spending => &self.spending,
            QuestionKey::Benefits => &self.benefits,
            QuestionKey::ExistingCards => &self.existing_cards,
            QuestionKey::CreditScore => &self.credit_score,
        };
        value
            .as_deref()
            .map(str::trim)
            .filter(|answer| !answer.is_empty())
    }

    pub fn is_answered(&self, key: QuestionKey) -> bool {
        self.get(key).is_some()
    }
}

/// Reason list for a recommendation.
///
/// The LLM may return either a single string or an array of strings; both
/// shapes are accepted. The fallback always produces the array shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reasons {
    Many(Vec<String>),
    One(String),
}

/// One recommended card with its justification and simulated rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub reasons: Reasons,
    pub reward_simulation: String,
}

/// One turn of the protocol: either the next intake question, or the
/// terminal recommendation list once all five answers are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub next_question: Option<String>,
    pub next_question_key: Option<QuestionKey>,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_deserializes_to_default() {
        let answers: AnswerSet = serde_json::from_str("{}").unwrap();
        assert!(answers.get(QuestionKey::Income).is_none());
        assert!(!answers.is_answered(QuestionKey::CreditScore));
    }

    #[test]
    fn test_blank_answer_counts_as_unanswered() {
        let answers = AnswerSet {
            income: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!answers.is_answered(QuestionKey::Income));
    }

    #[test]
    fn test_answer_is_trimmed() {
        let answers = AnswerSet {
            spending: Some("  fuel, travel  ".to_string()),
            ..Default::default()
        };
        assert_eq!(answers.get(QuestionKey::Spending), Some("fuel, travel"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"income": "50000", "favourite_color": "blue"}"#).unwrap();
        assert_eq!(answers.get(QuestionKey::Income), Some("50000"));
    }

    #[test]
    fn test_question_key_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuestionKey::ExistingCards).unwrap(),
            r#""existing_cards""#
        );
        assert_eq!(
            serde_json::to_string(&QuestionKey::CreditScore).unwrap(),
            r#""credit_score""#
        );
    }

    #[test]
    fn test_reasons_accepts_single_string() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"name": "Alpha Card", "reasons": "Good cashback", "reward_simulation": "₹4,000/year"}"#,
        )
        .unwrap();
        assert_eq!(rec.reasons, Reasons::One("Good cashback".to_string()));
    }

    #[test]
    fn test_reasons_accepts_string_array() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"name": "Alpha Card", "reasons": ["Cashback", "No fee"], "reward_simulation": "₹4,000/year"}"#,
        )
        .unwrap();
        assert_eq!(
            rec.reasons,
            Reasons::Many(vec!["Cashback".to_string(), "No fee".to_string()])
        );
    }

    #[test]
    fn test_recommendation_missing_fields_is_rejected() {
        // Shape validation for untrusted LLM output: wrong fields must fail
        // the parse so the composer falls back.
        let result = serde_json::from_str::<Recommendation>(r#"{"name": "Alpha Card"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_turn_response_uses_camel_case_wire_fields() {
        let turn = TurnResponse {
            next_question: Some("What is your monthly income (in INR)?".to_string()),
            next_question_key: Some(QuestionKey::Income),
            recommendations: vec![],
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["nextQuestion"], "What is your monthly income (in INR)?");
        assert_eq!(json["nextQuestionKey"], "income");
        assert!(json["recommendations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_terminal_turn_serializes_null_question() {
        let turn = TurnResponse {
            next_question: None,
            next_question_key: None,
            recommendations: vec![],
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert!(json["nextQuestion"].is_null());
        assert!(json["nextQuestionKey"].is_null());
    }
}
