use serde_json::{json, Value};

use crate::content::QuestionBank;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::quiz::FinalizedAnswers;

/// Number of career paths the model is asked for.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Prompt template. Replace `{count}`, `{json_only}` and `{answers}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"A student from a Tier 2/3 city in India has answered a career interest quiz. Based on their answers below, act as an expert career counselor.
Provide exactly {count} diverse and actionable career path recommendations suitable for the Indian job market. For each career, provide a short, encouraging description and list 3-5 key skills to learn.
Return a JSON object with a "careers" array; each element has "title", "description" and "skills".
{json_only}

Student's Answers:
{answers}"#;

/// Renders every question with its recorded answer, in question order.
pub fn format_answers(bank: &QuestionBank, answers: &FinalizedAnswers) -> String {
    answers
        .iter()
        .filter_map(|(index, answer)| {
            bank.get(index)
                .map(|question| format!("Q: {}\nA: {}", question.text, answer))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_recommendation_prompt(bank: &QuestionBank, answers: &FinalizedAnswers) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{count}", &RECOMMENDATION_COUNT.to_string())
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{answers}", &format_answers(bank, answers))
}

/// Output schema enforced by the generation service, in its OpenAPI-style type dialect.
pub fn career_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "careers": {
                "type": "ARRAY",
                "description": "A list of 3 diverse and personalized career path recommendations.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "Career path title." },
                        "description": { "type": "STRING", "description": "Short description." },
                        "skills": {
                            "type": "ARRAY",
                            "description": "List of skills.",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["title", "description", "skills"]
                }
            }
        },
        "required": ["careers"]
    })
}
