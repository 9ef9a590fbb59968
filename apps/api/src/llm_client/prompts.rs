// Shared prompt fragments.
// Each feature that calls the model keeps its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Instruction that pins the output to the structured schema with nothing around it.
pub const JSON_ONLY_INSTRUCTION: &str = "\
The output MUST be a JSON object that strictly follows this schema. \
Do not add any extra text or markdown formatting.";
