//! Heuristic resume-writing tips, independent of the LLM.

use std::sync::LazyLock;

use regex::Regex;

static QUANTIFIED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+%|\$|projects?|clients?|growth|ROI|users?|savings)\b")
        .expect("quantified results regex")
});

static LEADERSHIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)led|managed|collaborated|mentored").expect("leadership regex"));

static CREDENTIALS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)certificat(e|ion)|award|licensed|credential").expect("credentials regex")
});

static SOFT_SKILLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)communication|teamwork|problem[- ]?solving").expect("soft skills regex")
});

const MIN_RESUME_WORDS: usize = 100;

/// Pattern checks over the raw texts; each miss produces one concrete tip.
pub fn generate_resume_tips(resume_text: &str, job_text: &str) -> Vec<String> {
    let mut tips = Vec::new();

    if !QUANTIFIED_RE.is_match(resume_text) {
        tips.push("Include quantified results (e.g., \"increased revenue by 20%\").".to_string());
    }
    if !LEADERSHIP_RE.is_match(resume_text) {
        tips.push("Highlight leadership or team contributions.".to_string());
    }
    if !CREDENTIALS_RE.is_match(resume_text) {
        tips.push("Mention certifications or recognitions.".to_string());
    }
    if resume_text.split_whitespace().count() < MIN_RESUME_WORDS {
        tips.push("Expand the resume with more detailed achievements.".to_string());
    }
    if SOFT_SKILLS_RE.is_match(job_text) && !SOFT_SKILLS_RE.is_match(resume_text) {
        tips.push("Include soft skills matching the job description.".to_string());
    }

    tips
}
