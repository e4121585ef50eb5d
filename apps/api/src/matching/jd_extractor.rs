//! Job-description requirement extraction, with a line-split fallback.

use crate::llm_client::{LlmClient, LlmError};
use crate::matching::prompts::JD_REQUIREMENTS_PROMPT_TEMPLATE;

/// Lines at or below this length are treated as noise (headings, separators)
/// by the fallback splitter.
const FALLBACK_MIN_LINE_LEN: usize = 20;
/// Upper bound on fallback requirements so a long JD doesn't flood the matcher.
const FALLBACK_MAX_REQUIREMENTS: usize = 15;

/// Asks the LLM for the requirement sentences of a job description.
pub async fn extract_requirements(
    jd_text: &str,
    llm: &LlmClient,
) -> Result<Vec<String>, LlmError> {
    let prompt = JD_REQUIREMENTS_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    llm.call_json(&prompt).await
}

/// Naive fallback when extraction fails: every sufficiently long line of the
/// JD is treated as a requirement.
pub fn fallback_requirements(jd_text: &str) -> Vec<String> {
    jd_text
        .lines()
        .map(str::trim)
        .filter(|l| l.len() > FALLBACK_MIN_LINE_LEN)
        .take(FALLBACK_MAX_REQUIREMENTS)
        .map(String::from)
        .collect()
}
