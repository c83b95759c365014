//! Intake State Machine — the fixed five-question conversation flow.

use crate::models::{AnswerSet, QuestionKey};

/// A single intake question: stable key plus user-facing prompt text.
#[derive(Debug, Clone, Copy)]
pub struct IntakeQuestion {
    pub key: QuestionKey,
    pub prompt: &'static str,
}

/// The entire conversation structure. Questions are asked in this order,
/// with no branching on answer content.
pub const QUESTION_FLOW: [IntakeQuestion; 5] = [
    IntakeQuestion {
        key: QuestionKey::Income,
        prompt: "What is your monthly income (in INR)?",
    },
    IntakeQuestion {
        key: QuestionKey::Spending,
        prompt: "What are your top spending categories? (fuel, travel, groceries, dining, etc.)",
    },
    IntakeQuestion {
        key: QuestionKey::Benefits,
        prompt: "What benefits do you prefer? (cashback, travel points, lounge access, etc.)",
    },
    IntakeQuestion {
        key: QuestionKey::ExistingCards,
        prompt: "Do you have any existing credit cards? (optional)",
    },
    IntakeQuestion {
        key: QuestionKey::CreditScore,
        prompt: "What is your approximate credit score? (or type \"unknown\")",
    },
];

/// Returns the first unanswered question, or `None` once all five are
/// answered and the conversation is ready to recommend.
pub fn next_question(answers: &AnswerSet) -> Option<&'static IntakeQuestion> {
    QUESTION_FLOW.iter().find(|q| !answers.is_answered(q.key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_asks_income_first() {
        let question = next_question(&AnswerSet::default()).unwrap();
        assert_eq!(question.key, QuestionKey::Income);
        assert_eq!(question.prompt, "What is your monthly income (in INR)?");
    }

    #[test]
    fn test_first_missing_key_wins_regardless_of_later_answers() {
        // spending is missing even though every later key is answered
        let answers = AnswerSet {
            income: Some("50000".to_string()),
            spending: None,
            benefits: Some("cashback".to_string()),
            existing_cards: Some("none".to_string()),
            credit_score: Some("750".to_string()),
        };
        let question = next_question(&answers).unwrap();
        assert_eq!(question.key, QuestionKey::Spending);
    }

    #[test]
    fn test_blank_answer_is_treated_as_missing() {
        let answers = AnswerSet {
            income: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(next_question(&answers).unwrap().key, QuestionKey::Income);
    }

    #[test]
    fn test_fully_answered_set_is_terminal() {
        let answers = AnswerSet {
            income: Some("50000".to_string()),
            spending: Some("fuel, groceries".to_string()),
            benefits: Some("cashback".to_string()),
            existing_cards: Some("none".to_string()),
            credit_score: Some("unknown".to_string()),
        };
        assert!(next_question(&answers).is_none());
    }

    #[test]
    fn test_flow_order_is_fixed() {
        let keys: Vec<QuestionKey> = QUESTION_FLOW.iter().map(|q| q.key).collect();
        assert_eq!(
            keys,
            vec![
                QuestionKey::Income,
                QuestionKey::Spending,
                QuestionKey::Benefits,
                QuestionKey::ExistingCards,
                QuestionKey::CreditScore,
            ]
        );
    }
}
