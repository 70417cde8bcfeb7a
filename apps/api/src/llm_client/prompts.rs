// Shared prompt fragments. Each flow defines its own templates in
// flows/prompts.rs; this file holds the cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every prompt that handles candidate data.
pub const FAIRNESS_INSTRUCTION: &str = "\
    Judge only job-relevant qualifications. Ignore and never mention age, gender, \
    ethnicity, nationality, religion, disability, family status, or photos. \
    If information is missing, say so rather than guessing.";

/// Builds a flow's system prompt from its persona and the JSON-only rule.
pub fn system_prompt(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}
