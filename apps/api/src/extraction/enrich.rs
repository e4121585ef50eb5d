//! LLM-backed skill and experience enrichment for uploaded resumes.
//!
//! The rule-based extractors are the permanent fallback: if the LLM call
//! fails in any way, the heuristic values stand and the upload still
//! succeeds. Retry behavior lives in the LLM client, not here.

use serde::Deserialize;

use crate::extraction::prompts::SKILL_EXPERIENCE_PROMPT_TEMPLATE;
use crate::extraction::ExtractedResume;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Clone, Deserialize)]
pub struct SkillExperience {
    /// An absent key keeps the heuristic skills; a present (even empty)
    /// list overrides them.
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Vec<String>,
}

/// Asks the LLM for skill and experience lists extracted from the raw text.
pub async fn extract_skills_and_experience(
    resume_text: &str,
    llm: &LlmClient,
) -> Result<SkillExperience, LlmError> {
    let prompt = SKILL_EXPERIENCE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    llm.call_json(&prompt).await
}

/// Folds a successful enrichment into the heuristic record.
pub fn apply_enrichment(extracted: &mut ExtractedResume, enrichment: SkillExperience) {
    if let Some(skills) = enrichment.skills {
        extracted.skills = skills;
    }
    extracted.experience = enrichment.experience;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic_record() -> ExtractedResume {
        ExtractedResume {
            skills: vec!["python".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_enrichment_overrides_skills() {
        let mut record = heuristic_record();
        apply_enrichment(
            &mut record,
            SkillExperience {
                skills: Some(vec!["Rust".to_string(), "Kubernetes".to_string()]),
                experience: vec!["Backend Engineer at Acme".to_string()],
            },
        );
        assert_eq!(record.skills, vec!["Rust", "Kubernetes"]);
        assert_eq!(record.experience, vec!["Backend Engineer at Acme"]);
    }

    #[test]
    fn test_apply_enrichment_missing_skills_keeps_heuristics() {
        let mut record = heuristic_record();
        apply_enrichment(
            &mut record,
            SkillExperience {
                skills: None,
                experience: vec![],
            },
        );
        assert_eq!(record.skills, vec!["python"]);
        assert!(record.experience.is_empty());
    }

    #[test]
    fn test_skill_experience_deserializes_partial_object() {
        let parsed: SkillExperience = serde_json::from_str(r#"{"skills": ["Go"]}"#).unwrap();
        assert_eq!(parsed.skills.as_deref(), Some(["Go".to_string()].as_slice()));
        assert!(parsed.experience.is_empty());
    }
}
