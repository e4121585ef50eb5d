// Rule-based resume extraction.
// Pure, synchronous, and total over any input text: malformed input degrades
// to empty or partial results rather than failing. The LLM layer in `enrich`
// overrides `skills` and fills `experience` when available.

pub mod enrich;
pub mod fields;
pub mod handlers;
pub mod highlight;
pub mod pdf;
pub mod prompts;
pub mod sections;

use serde::{Deserialize, Serialize};

pub use sections::{Section, SectionItem};

/// The structured record produced from one resume's extracted text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    /// Filled by LLM enrichment; the rule-based layer leaves it empty.
    pub experience: Vec<String>,
    pub sections: Vec<Section>,
}

/// Runs every field extractor and the section builder over the raw text.
pub fn extract_resume_info(text: &str) -> ExtractedResume {
    ExtractedResume {
        full_name: fields::extract_full_name(text),
        email: fields::extract_email(text),
        phone: fields::extract_phone(text),
        skills: fields::extract_skills(text),
        experience: Vec::new(),
        sections: sections::extract_sections(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
John A Doe
john.doe@example.com
+1 555-123-4567
Seasoned backend engineer with experience in python and aws.

EXPERIENCE
Software Engineer at Acme
Improved latency by 30%
Shipped weekly releases to production

EDUCATION
B.Tech Computer Science
XYZ University, 2020";

    #[test]
    fn test_extract_resume_info_full_document() {
        let record = extract_resume_info(SAMPLE_RESUME);

        assert_eq!(record.full_name, "John A Doe");
        assert_eq!(record.email, "john.doe@example.com");
        assert_eq!(record.phone, "+1 555-123-4567");
        assert_eq!(record.skills, vec!["python", "aws"]);
        assert!(record.experience.is_empty());

        assert_eq!(record.sections.len(), 2);
        assert_eq!(record.sections[0].title, "EXPERIENCE");
        assert_eq!(record.sections[0].items[0].name, "Software Engineer at Acme");
        assert_eq!(record.sections[0].items[0].bullets.len(), 2);
        assert_eq!(record.sections[1].title, "EDUCATION");
        assert_eq!(record.sections[1].items[0].name, "B.Tech Computer Science");
    }

    #[test]
    fn test_extract_resume_info_empty_input() {
        assert_eq!(extract_resume_info(""), ExtractedResume::default());
    }

    #[test]
    fn test_heading_word_inside_body_text_is_not_a_section() {
        // "experience" appears mid-line above; only the exact heading line
        // opens a section.
        let record = extract_resume_info(SAMPLE_RESUME);
        assert_eq!(record.sections.len(), 2);
    }
}
