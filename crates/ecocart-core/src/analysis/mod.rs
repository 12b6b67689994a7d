//! Best-effort section extraction for free-form AI analysis text.
//!
//! The generative model is asked for five labeled sections, but nothing in
//! the provider's contract guarantees the reply carries them. Extraction
//! degrades through three tiers: labeled-header capture, keyword
//! classification of paragraphs, and finally the whole reply as a single
//! unlabeled block. It never fails; malformed input just yields fewer
//! sections.

pub mod model;

pub use model::{ProductAnalysis, Section, SectionKind};

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Shown in place of the analysis when the reply is empty after
/// normalization.
pub const EMPTY_ANALYSIS_PLACEHOLDER: &str =
    "No analysis content received. Please try again.";

static BOLD_MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*").unwrap());

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static COMPONENTS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)components?\s*&?\s*materials?[:\s]*").unwrap());

static ECO_FEATURES_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)eco-friendly\s*features?[:\s]*").unwrap());

static RECYCLING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recycling\s*instructions?[:\s]*").unwrap());

static IMPACT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)environmental\s*impact[:\s]*").unwrap());

static SCORE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sustainability\s*score[:\s]*").unwrap());

static COMPONENTS_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)eco-friendly|recycling|environmental|sustainability|\n\n\n").unwrap()
});

static ECO_FEATURES_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)recycling|environmental|sustainability|\n\n\n").unwrap());

static RECYCLING_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)environmental|sustainability|\n\n\n").unwrap());

static IMPACT_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sustainability|\n\n\n").unwrap());

const COMPONENTS_KEYWORDS: &[&str] = &["material", "component", "bamboo", "plastic", "metal"];
const ECO_FEATURES_KEYWORDS: &[&str] = &["eco", "sustainable", "renewable", "biodegradable"];
const RECYCLING_KEYWORDS: &[&str] = &["recycl", "disposal", "disassembl", "bin"];
const IMPACT_KEYWORDS: &[&str] = &["impact", "carbon", "environment", "footprint"];
const SCORE_KEYWORDS: &[&str] = &["score", "star", "rating"];

/// Split an AI analysis reply into display sections and derive the star
/// rating. Total over all inputs, including the empty string.
pub fn extract(raw: &str) -> ProductAnalysis {
    let text = normalize(raw);

    let mut bodies: [String; 5] = Default::default();
    for kind in SectionKind::ALL {
        if let Some(body) = labeled_body(&text, kind) {
            bodies[kind as usize] = body;
        }
    }

    // The model sometimes answers without any of the leading headers;
    // classify paragraphs by keyword instead.
    if bodies[SectionKind::Components as usize].is_empty()
        && bodies[SectionKind::EcoFeatures as usize].is_empty()
        && bodies[SectionKind::Recycling as usize].is_empty()
    {
        classify_paragraphs(&text, &mut bodies);
    }

    let score = derive_score(&bodies[SectionKind::Score as usize]);

    let mut sections = Vec::new();
    for kind in SectionKind::ALL {
        let body = std::mem::take(&mut bodies[kind as usize]);
        if !body.is_empty() {
            sections.push(Section {
                kind: Some(kind),
                content: body,
            });
        }
    }

    // Nothing was attributable at all: pass the reply through verbatim.
    if sections.is_empty() {
        let content = if text.is_empty() {
            EMPTY_ANALYSIS_PLACEHOLDER.to_string()
        } else {
            text
        };
        sections.push(Section {
            kind: None,
            content,
        });
    }

    debug!(sections = sections.len(), score = ?score, "extracted analysis sections");

    ProductAnalysis { sections, score }
}

/// Strip bold markers and surrounding whitespace.
fn normalize(raw: &str) -> String {
    BOLD_MARKERS.replace_all(raw, "").trim().to_string()
}

/// Capture the text between a section label and the next label in the
/// canonical order (or a hard paragraph break, or end of text).
///
/// Only labels that come later in the canonical order terminate a
/// section, so replies that reorder their headers mis-capture. Kept that
/// way on purpose; the keyword fallback picks up the pieces.
fn labeled_body(text: &str, kind: SectionKind) -> Option<String> {
    let found = label_pattern(kind).find(text)?;
    let rest = &text[found.end()..];
    let end = stop_pattern(kind)
        .and_then(|stop| stop.find(rest))
        .map(|stop| stop.start())
        .unwrap_or(rest.len());
    let body = rest[..end].trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Assign each blank-line-separated paragraph to the first kind whose
/// keyword set it mentions, appending to whatever the labeled pass
/// already captured for that kind. Unmatched paragraphs are dropped.
fn classify_paragraphs(text: &str, bodies: &mut [String; 5]) {
    for paragraph in PARAGRAPH_BREAK.split(text) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        let lower = paragraph.to_lowercase();
        let Some(kind) = SectionKind::ALL
            .into_iter()
            .find(|kind| keywords(*kind).iter().any(|keyword| lower.contains(keyword)))
        else {
            continue;
        };

        let body = &mut bodies[kind as usize];
        if !body.is_empty() {
            body.push_str("\n\n");
        }
        body.push_str(paragraph);
    }
}

/// First integer in the score body, clamped to the 1-5 star range. A
/// score body with no usable integer still rates 4 stars; no score body
/// means no rating at all.
fn derive_score(body: &str) -> Option<u8> {
    if body.is_empty() {
        return None;
    }
    let value = FIRST_INT
        .find(body)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(4);
    Some(value.clamp(1, 5) as u8)
}

fn label_pattern(kind: SectionKind) -> &'static Regex {
    match kind {
        SectionKind::Components => &COMPONENTS_LABEL,
        SectionKind::EcoFeatures => &ECO_FEATURES_LABEL,
        SectionKind::Recycling => &RECYCLING_LABEL,
        SectionKind::Impact => &IMPACT_LABEL,
        SectionKind::Score => &SCORE_LABEL,
    }
}

/// The Score section has no stop pattern; it runs to end of text.
fn stop_pattern(kind: SectionKind) -> Option<&'static Regex> {
    match kind {
        SectionKind::Components => Some(&COMPONENTS_STOP),
        SectionKind::EcoFeatures => Some(&ECO_FEATURES_STOP),
        SectionKind::Recycling => Some(&RECYCLING_STOP),
        SectionKind::Impact => Some(&IMPACT_STOP),
        SectionKind::Score => None,
    }
}

fn keywords(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Components => COMPONENTS_KEYWORDS,
        SectionKind::EcoFeatures => ECO_FEATURES_KEYWORDS,
        SectionKind::Recycling => RECYCLING_KEYWORDS,
        SectionKind::Impact => IMPACT_KEYWORDS,
        SectionKind::Score => SCORE_KEYWORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "Components & Materials:\n\
        Bamboo handle with nylon bristles.\n\n\
        Eco-Friendly Features:\n\
        Fully compostable handle.\n\n\
        Recycling Instructions:\n\
        Snap off the head before composting.\n\n\
        Environmental Impact:\n\
        Displaces single-use plastic brushes.\n\n\
        Sustainability Score:\n\
        Rated 5 stars for responsible sourcing.";

    fn kinds(analysis: &ProductAnalysis) -> Vec<Option<SectionKind>> {
        analysis.sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_labeled_reply_yields_all_five_sections() {
        let analysis = extract(FULL_REPLY);

        assert_eq!(
            kinds(&analysis),
            SectionKind::ALL.iter().map(|k| Some(*k)).collect::<Vec<_>>()
        );
        assert_eq!(analysis.sections[0].content, "Bamboo handle with nylon bristles.");
        assert_eq!(analysis.sections[1].content, "Fully compostable handle.");
        assert_eq!(analysis.sections[2].content, "Snap off the head before composting.");
        assert_eq!(analysis.sections[3].content, "Displaces single-use plastic brushes.");
        assert_eq!(analysis.sections[4].content, "Rated 5 stars for responsible sourcing.");
        assert_eq!(analysis.score, Some(5));
    }

    #[test]
    fn test_bold_markers_are_stripped_before_matching() {
        let analysis = extract("**Components & Materials:** Bamboo body.");

        assert_eq!(kinds(&analysis), vec![Some(SectionKind::Components)]);
        assert_eq!(analysis.sections[0].content, "Bamboo body.");
    }

    #[test]
    fn test_empty_input_yields_single_placeholder_section() {
        let analysis = extract("");

        assert_eq!(analysis.sections.len(), 1);
        assert_eq!(analysis.sections[0].kind, None);
        assert_eq!(analysis.sections[0].content, EMPTY_ANALYSIS_PLACEHOLDER);
        assert_eq!(analysis.score, None);
    }

    #[test]
    fn test_score_derived_from_first_integer() {
        let analysis = extract("Components: Bamboo\n\nSustainability Score: Rated 4 stars");

        assert_eq!(analysis.score, Some(4));
        // "Components" alone is not a full label; the paragraph lands in
        // the Components bucket through the keyword pass instead.
        assert_eq!(
            kinds(&analysis),
            vec![Some(SectionKind::Components), Some(SectionKind::Score)]
        );
    }

    #[test]
    fn test_score_defaults_to_four_without_integer() {
        let analysis = extract("Sustainability Score: excellent across the board");

        assert_eq!(analysis.score, Some(4));
    }

    #[test]
    fn test_score_is_clamped_to_star_range() {
        let analysis = extract("Sustainability Score: 10 out of 10");

        assert_eq!(analysis.score, Some(5));
    }

    #[test]
    fn test_keyword_fallback_classifies_paragraphs() {
        let analysis = extract(
            "This product is fully biodegradable and built to last.\n\n\
             It cuts your carbon footprint in half.",
        );

        assert_eq!(
            kinds(&analysis),
            vec![Some(SectionKind::EcoFeatures), Some(SectionKind::Impact)]
        );
        assert!(analysis.sections[0].content.contains("biodegradable"));
        assert!(analysis.sections[1].content.contains("carbon footprint"));
    }

    #[test]
    fn test_fallback_order_is_canonical_regardless_of_input_order() {
        let analysis = extract(
            "It cuts your carbon footprint in half.\n\n\
             This product is fully biodegradable and built to last.",
        );

        assert_eq!(
            kinds(&analysis),
            vec![Some(SectionKind::EcoFeatures), Some(SectionKind::Impact)]
        );
    }

    #[test]
    fn test_fallback_joins_paragraphs_with_blank_line() {
        let analysis = extract(
            "Made from reclaimed bamboo.\n\n\
             The metal clasp is removable.",
        );

        assert_eq!(kinds(&analysis), vec![Some(SectionKind::Components)]);
        assert_eq!(
            analysis.sections[0].content,
            "Made from reclaimed bamboo.\n\nThe metal clasp is removable."
        );
    }

    #[test]
    fn test_unclassifiable_text_passes_through_verbatim() {
        let analysis = extract("Thanks for asking!");

        assert_eq!(analysis.sections.len(), 1);
        assert_eq!(analysis.sections[0].kind, None);
        assert_eq!(analysis.sections[0].content, "Thanks for asking!");
        assert_eq!(analysis.score, None);
    }

    #[test]
    fn test_terminal_fallback_is_idempotent() {
        let first = extract("Thanks for asking!");
        let second = extract(&first.sections[0].content);

        assert_eq!(first.sections, second.sections);
        assert_eq!(second.score, None);
    }

    #[test]
    fn test_section_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SectionKind::EcoFeatures).unwrap();
        assert_eq!(json, "\"eco_features\"");
    }

    #[test]
    fn test_into_sections_preserves_order() {
        let analysis = extract(FULL_REPLY);
        let kinds: Vec<_> = analysis.into_sections().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            SectionKind::ALL.iter().map(|k| Some(*k)).collect::<Vec<_>>()
        );
    }
}
