// All LLM prompt constants for the agent module.

/// Recommendation prompt template.
/// Replace `{profile_json}` and `{cards_json}` before sending.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"You are a helpful assistant recommending Indian credit cards.

User profile: {profile_json}
Eligible cards: {cards_json}

From these, select the top 3 best matching cards for the user, based on their profile and preferences.
For each card, explain why it is a good fit and simulate annual rewards based on the user profile.

Respond with a valid JSON array only, where every element has this EXACT shape:
{
  "name": "Card name",
  "reasons": ["Why this card fits the user"],
  "reward_simulation": "Estimated annual rewards for this user"
}

Do NOT include any text outside the JSON array.
Do NOT use markdown code fences.
Do NOT include explanations or apologies."#;
