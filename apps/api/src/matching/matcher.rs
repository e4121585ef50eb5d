//! Batch requirement matching — pluggable, trait-based, with the LLM backend
//! as the default.
//!
//! The collaborator contract per requirement: a semantic similarity score in
//! [0, 1] and an optional snippet of supporting resume text. On any backend
//! failure the pipeline substitutes zero-score placeholders instead of
//! failing the request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::jd_extractor::{extract_requirements, fallback_requirements};
use crate::matching::prompts::BATCH_MATCH_PROMPT_TEMPLATE;
use crate::matching::tips::generate_resume_tips;

/// Matches scoring below this are flagged as missing or weak in the report.
pub const WEAK_MATCH_THRESHOLD: f64 = 0.65;

/// One scored requirement from the batch matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub requirement: String,
    /// Semantic similarity in [0, 1].
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub matched_snippet: String,
}

/// Full match report returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub match_percent: u32,
    pub suggestions: Vec<String>,
    pub detailed_matches: Vec<RequirementMatch>,
    pub job_requirements: Vec<String>,
}

/// The requirement matcher trait. Implement this to swap backends without
/// touching the endpoint or pipeline code.
///
/// Carried in `AppState` as `Arc<dyn RequirementMatcher>`.
#[async_trait]
pub trait RequirementMatcher: Send + Sync {
    async fn match_requirements(
        &self,
        requirements: &[String],
        resume_text: &str,
    ) -> Result<Vec<RequirementMatch>, AppError>;
}

/// Default backend: scores every requirement in a single batch LLM round trip.
pub struct LlmRequirementMatcher(pub LlmClient);

#[async_trait]
impl RequirementMatcher for LlmRequirementMatcher {
    async fn match_requirements(
        &self,
        requirements: &[String],
        resume_text: &str,
    ) -> Result<Vec<RequirementMatch>, AppError> {
        let numbered = requirements
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {r}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = BATCH_MATCH_PROMPT_TEMPLATE
            .replace("{requirements}", &numbered)
            .replace("{resume_text}", resume_text);

        self.0
            .call_json(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Batch requirement match failed: {e}")))
    }
}

/// Full match pipeline: requirement extraction, batch scoring, aggregation,
/// suggestions. Collaborator failures degrade to deterministic fallbacks, so
/// the pipeline itself never fails.
pub async fn match_resume_with_job(
    resume_text: &str,
    job_text: &str,
    llm: &LlmClient,
    matcher: &dyn RequirementMatcher,
) -> MatchReport {
    let job_requirements = match extract_requirements(job_text, llm).await {
        Ok(requirements) => requirements,
        Err(e) => {
            warn!("JD requirement extraction failed, using line-split fallback: {e}");
            fallback_requirements(job_text)
        }
    };

    let detailed_matches = match matcher
        .match_requirements(&job_requirements, resume_text)
        .await
    {
        Ok(matches) => matches,
        Err(e) => {
            warn!("Batch requirement match failed, reporting zero scores: {e}");
            zero_score_matches(&job_requirements)
        }
    };

    let match_percent = aggregate_match_percent(&detailed_matches);
    let mut suggestions = weak_match_suggestions(&detailed_matches);
    suggestions.extend(generate_resume_tips(resume_text, job_text));

    MatchReport {
        match_percent,
        suggestions,
        detailed_matches,
        job_requirements,
    }
}

/// Mean requirement score scaled to a 0-100 percentage.
pub fn aggregate_match_percent(matches: &[RequirementMatch]) -> u32 {
    if matches.is_empty() {
        return 0;
    }
    let total: f64 = matches.iter().map(|m| m.score).sum();
    ((total / matches.len() as f64) * 100.0).round() as u32
}

/// One suggestion per requirement scoring below the weak-match threshold.
pub fn weak_match_suggestions(matches: &[RequirementMatch]) -> Vec<String> {
    matches
        .iter()
        .filter(|m| m.score < WEAK_MATCH_THRESHOLD)
        .map(|m| format!("Missing or weak match for: \"{}\"", m.requirement))
        .collect()
}

/// Placeholder matches when the matcher backend is unavailable.
pub fn zero_score_matches(requirements: &[String]) -> Vec<RequirementMatch> {
    requirements
        .iter()
        .map(|r| RequirementMatch {
            requirement: r.clone(),
            score: 0.0,
            matched_snippet: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(requirement: &str, score: f64) -> RequirementMatch {
        RequirementMatch {
            requirement: requirement.to_string(),
            score,
            matched_snippet: String::new(),
        }
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate_match_percent(&[]), 0);
    }

    #[test]
    fn test_aggregate_is_rounded_mean_percentage() {
        let matches = vec![scored("a", 0.5), scored("b", 1.0)];
        assert_eq!(aggregate_match_percent(&matches), 75);
    }

    #[test]
    fn test_aggregate_rounds_to_nearest() {
        assert_eq!(aggregate_match_percent(&[scored("a", 0.333)]), 33);
        assert_eq!(aggregate_match_percent(&[scored("a", 0.667)]), 67);
    }

    #[test]
    fn test_weak_suggestions_use_threshold_exclusively() {
        let matches = vec![
            scored("Rust experience", 0.64),
            scored("SQL experience", 0.65),
            scored("Cloud experience", 0.9),
        ];
        let suggestions = weak_match_suggestions(&matches);
        assert_eq!(
            suggestions,
            vec!["Missing or weak match for: \"Rust experience\""]
        );
    }

    #[test]
    fn test_zero_score_matches_cover_every_requirement() {
        let requirements = vec!["a".to_string(), "b".to_string()];
        let matches = zero_score_matches(&requirements);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.score == 0.0));
        assert!(matches.iter().all(|m| m.matched_snippet.is_empty()));
    }

    #[test]
    fn test_requirement_match_deserializes_with_defaults() {
        let m: RequirementMatch =
            serde_json::from_str(r#"{"requirement": "Rust experience"}"#).unwrap();
        assert_eq!(m.requirement, "Rust experience");
        assert_eq!(m.score, 0.0);
        assert!(m.matched_snippet.is_empty());
    }

    #[test]
    fn test_match_report_serializes_expected_fields() {
        let report = MatchReport {
            match_percent: 42,
            suggestions: vec![],
            detailed_matches: vec![],
            job_requirements: vec![],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["match_percent"], 42);
        assert!(value["detailed_matches"].as_array().unwrap().is_empty());
        assert!(value["job_requirements"].as_array().unwrap().is_empty());
    }
}
