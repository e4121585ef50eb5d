// LLM prompt constants for the extraction module.

/// Skill/experience enrichment prompt. Replace `{resume_text}` before sending.
pub const SKILL_EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Extract two lists from the following resume text:
1. Skills (as a JSON array of strings)
2. Experience (as a JSON array of strings, each string describing a relevant experience or job role)

Return the result as a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["Python", "AWS"],
  "experience": ["Software Engineer at Acme (2020-2023)"]
}

Respond with valid JSON only. Do NOT use markdown code fences. Do NOT include explanations or apologies.

Resume Text:
"""
{resume_text}
""""#;
