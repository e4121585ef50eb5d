//! Section structure parsing — a single pass over extracted resume text that
//! groups lines into {section → item → bullet}.
//!
//! No ML here: one stateful walk over the trimmed lines, a closed heading
//! vocabulary, and a shape heuristic for item titles. Total over any input;
//! malformed text degrades to an empty section list rather than failing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The closed vocabulary of recognized section headings. Matching is exact
/// after uppercasing — body text that merely contains one of these words is
/// never treated as a heading.
pub const SECTION_HEADINGS: &[&str] = &[
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "PROJECTS",
    "ACHIEVEMENTS",
    "PUBLICATIONS",
    "PAPERS",
    "EDUCATION",
    "CERTIFICATIONS",
    "AWARDS",
    "HONORS",
    "COURSES",
    "EXTRA CURRICULAR",
];

/// Shape filter for item titles: uppercase first letter, 3-50 characters
/// total, letters/digits/whitespace and a small punctuation set.
static ITEM_HEADER_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9\s\-:/&().]{2,49}$").expect("item header shape regex")
});

/// A top-level resume category (Experience, Education, ...) and its items,
/// in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<SectionItem>,
}

/// One entry within a section: a job role, a project, a degree. The name is
/// empty for items created implicitly from orphan bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionItem {
    pub name: String,
    pub bullets: Vec<String>,
}

/// How a single line participates in the section structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    SectionHeader,
    ItemHeader,
    Bullet,
}

pub fn is_section_header(line: &str) -> bool {
    let upper = line.to_uppercase();
    SECTION_HEADINGS.iter().any(|h| *h == upper)
}

/// Title-case short headings become item names ("Software Engineer at Acme",
/// "B.Tech Computer Science"). The heuristic trades recall for precision:
/// titles with punctuation outside the allowed set fall through to bullets,
/// and so do sentence-like lines that capitalize only their first word
/// ("Built scalable services"). Colon-terminated lines are introductory
/// labels, not titles.
pub fn is_item_header(line: &str) -> bool {
    if line.ends_with(':') {
        return false;
    }
    if !ITEM_HEADER_SHAPE.is_match(line) {
        return false;
    }
    let capitalized_words = line
        .split_whitespace()
        .filter(|w| w.starts_with(|c: char| c.is_ascii_uppercase()))
        .count();
    capitalized_words >= 2
}

/// The section check runs first: a line naming a known section is never an
/// item header, even when shape-compatible.
fn classify(line: &str) -> LineKind {
    if is_section_header(line) {
        LineKind::SectionHeader
    } else if is_item_header(line) {
        LineKind::ItemHeader
    } else {
        LineKind::Bullet
    }
}

/// Walks the trimmed, non-empty lines of `text` once, left to right, keeping
/// at most one open section and at most one open item.
///
/// Lines seen before the first recognized heading have no structural home
/// and are dropped. Once a section is open every line lands somewhere: a
/// bullet arriving with no open item creates an implicit item with an empty
/// name, which stays open for subsequent bullets until the next header.
pub fn extract_sections(text: &str) -> Vec<Section> {
    let mut output = Vec::new();
    let mut current_section: Option<Section> = None;
    let mut current_item: Option<SectionItem> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify(line) {
            LineKind::SectionHeader => {
                if let Some(mut section) = current_section.take() {
                    if let Some(item) = current_item.take() {
                        section.items.push(item);
                    }
                    output.push(section);
                }
                current_section = Some(Section {
                    title: line.to_uppercase(),
                    items: Vec::new(),
                });
            }
            LineKind::ItemHeader => {
                let Some(section) = current_section.as_mut() else {
                    continue;
                };
                if let Some(item) = current_item.take() {
                    section.items.push(item);
                }
                current_item = Some(SectionItem {
                    name: line.to_string(),
                    bullets: Vec::new(),
                });
            }
            LineKind::Bullet => {
                if current_section.is_none() {
                    continue;
                }
                match current_item.as_mut() {
                    Some(item) => item.bullets.push(line.to_string()),
                    None => {
                        current_item = Some(SectionItem {
                            name: String::new(),
                            bullets: vec![line.to_string()],
                        })
                    }
                }
            }
        }
    }

    if let Some(mut section) = current_section.take() {
        if let Some(item) = current_item.take() {
            section.items.push(item);
        }
        output.push(section);
    }

    output
}
