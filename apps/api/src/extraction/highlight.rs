//! Display-time highlighting of action verbs in bullet text.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::sections::Section;

/// Action verbs emphasized in rendered bullets.
pub const ACTION_VERBS: &[&str] = &["managed", "developed", "led", "designed", "implemented", "built"];

/// Whole-word matches only: "redevelopment" must never light up for
/// "developed", nor "led".
static ACTION_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", ACTION_VERBS.join("|"))).expect("action verb regex")
});

/// Wraps every whole-word action verb in `<mark>` tags, preserving the
/// casing of the match. How the marker renders is the caller's concern.
pub fn highlight_action_verbs(text: &str) -> String {
    ACTION_VERB_RE
        .replace_all(text, "<mark>$1</mark>")
        .into_owned()
}

/// Applies the highlighter to every bullet of every item, for display.
pub fn highlight_sections(sections: &mut [Section]) {
    for section in sections {
        for item in &mut section.items {
            for bullet in &mut item.bullets {
                *bullet = highlight_action_verbs(bullet);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::sections::SectionItem;

    #[test]
    fn test_word_boundary_only() {
        assert_eq!(
            highlight_action_verbs("Led the redevelopment effort"),
            "<mark>Led</mark> the redevelopment effort"
        );
    }

    #[test]
    fn test_multiple_verbs_all_wrapped() {
        assert_eq!(
            highlight_action_verbs("Designed and built two APIs"),
            "<mark>Designed</mark> and <mark>built</mark> two APIs"
        );
    }

    #[test]
    fn test_case_insensitive_match_preserves_casing() {
        assert_eq!(
            highlight_action_verbs("MANAGED a team of five"),
            "<mark>MANAGED</mark> a team of five"
        );
    }

    #[test]
    fn test_no_verbs_unchanged() {
        let text = "Wrote documentation for the platform";
        assert_eq!(highlight_action_verbs(text), text);
    }

    #[test]
    fn test_partial_words_untouched() {
        let text = "rebuilt and mismanaged things";
        assert_eq!(highlight_action_verbs(text), text);
    }

    #[test]
    fn test_highlight_sections_maps_every_bullet() {
        let mut sections = vec![Section {
            title: "EXPERIENCE".to_string(),
            items: vec![SectionItem {
                name: "Engineer".to_string(),
                bullets: vec![
                    "Built the billing stack".to_string(),
                    "no verbs here".to_string(),
                ],
            }],
        }];
        highlight_sections(&mut sections);
        assert_eq!(
            sections[0].items[0].bullets,
            vec!["<mark>Built</mark> the billing stack", "no verbs here"]
        );
    }
}
