// All LLM prompt constants for the matching module.

/// JD requirement extraction prompt. Replace `{jd_text}` before sending.
pub const JD_REQUIREMENTS_PROMPT_TEMPLATE: &str = r#"Extract only the requirement sentences (not keywords or n-grams) from the following job description.

Return them as a JSON array of strings. Only include requirement statements, not company info, benefits, or other details.

Respond with valid JSON only. Do NOT use markdown code fences. Do NOT include explanations or apologies.

Job Description:
"""
{jd_text}
"""

Result:"#;

/// Batch requirement match prompt. Replace `{requirements}` (a numbered
/// list) and `{resume_text}` before sending.
pub const BATCH_MATCH_PROMPT_TEMPLATE: &str = r#"You are a resume evaluator.

Compare the following RESUME with the list of JOB REQUIREMENTS.

Return a JSON array. For each requirement, return an object with this EXACT schema (no extra fields):
{
  "requirement": "the requirement text",
  "score": 0.8,
  "matched_snippet": "sentence or short excerpt from the resume"
}

`score` is a number between 0 and 1: the semantic similarity of the resume to the requirement. `matched_snippet` may be an empty string when nothing in the resume supports the requirement.

Only return valid JSON. No extra explanation or commentary. Do NOT use markdown code fences.

JOB REQUIREMENTS:
{requirements}

RESUME:
"""
{resume_text}
""""#;
