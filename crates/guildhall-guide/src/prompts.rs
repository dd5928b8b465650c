//! Fixed prompts and response shapes for the two advisory operations.

use guildhall_core::Stat;

/// Instruction behind the "Suggest Quests" button. Fixed text; the response
/// schema does the real constraining.
pub const SUGGEST_QUESTS_PROMPT: &str =
    "I am a user of the Guildhall gamification app. My recent focus has been on \
     improving my MIND and SPIRIT stats. Please suggest three new, creative quests \
     I could undertake today. They should be actionable, specific, and fun.";

/// Persona the reflection exchange is framed with.
pub const REFLECT_PERSONA: &str =
    "You are a wise and encouraging AI guide known as the Guildhall Guide.";

/// Wrap the user's verbatim text in the reflection instruction. The request
/// asks for 1-2 lines; nothing truncates the reply on this side.
#[must_use]
pub fn reflect_prompt(user_text: &str) -> String {
    format!(
        "A user has shared this reflection with you: \"{user_text}\". Respond with \
         1-2 lines of wisdom, empathy, or encouragement. Keep it concise, impactful, \
         and speak in the first person (e.g., \"I believe you can...\")."
    )
}

/// Response shape the service must constrain suggestion output to: an array
/// of objects with a title, a description, and a statTarget drawn from the
/// closed stat set. Uses the service's OpenAPI-style schema with uppercase
/// type names.
#[must_use]
pub fn suggestion_schema() -> serde_json::Value {
    let stat_tags: Vec<&str> = Stat::ALL.iter().map(Stat::as_str).collect();
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "The title of the quest."
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief description of the quest."
                },
                "statTarget": {
                    "type": "STRING",
                    "enum": stat_tags,
                    "description": "The primary stat this quest targets."
                }
            },
            "required": ["title", "description", "statTarget"]
        }
    })
}
