// AI-assisted matching of a resume against a job description.
// All LLM calls go through llm_client, and every LLM step has a
// deterministic fallback: a match request never fails outright on
// collaborator errors.

pub mod handlers;
pub mod jd_extractor;
pub mod matcher;
pub mod prompts;
pub mod tips;
