use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

/// Keywords that mark a sentence as cultivation guidance
pub const CARE_KEYWORDS: [&str; 12] = [
    "water",
    "watering",
    "soil",
    "light",
    "sun",
    "temperature",
    "humidity",
    "shade",
    "moist",
    "drain",
    "grow",
    "fertilizer",
];

/// Maximum number of care sentences returned for one plant
pub const MAX_CARE_NOTES: usize = 6;

/// Returned when an article has no sentence mentioning a care keyword
pub const NO_CARE_INFO: &str = "No specific care info found.";

static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("citation pattern is valid"));

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("paragraph selector is valid"));

/// Outcome of looking up care information for a plant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareNotes {
    /// Between one and [`MAX_CARE_NOTES`] matching sentences, in document order
    Found(Vec<String>),
    /// The article was read but nothing matched
    NotFound,
    /// The article could not be fetched or read
    Degraded(String),
}

impl CareNotes {
    /// Flatten into the list of strings exposed as `care_tips`
    pub fn into_tips(self) -> Vec<String> {
        match self {
            CareNotes::Found(sentences) => sentences,
            CareNotes::NotFound => vec![NO_CARE_INFO.to_string()],
            CareNotes::Degraded(reason) => vec![format!("Error fetching care info: {reason}")],
        }
    }
}

/// Build the article address for a species name
///
/// Spaces become underscores. Nothing else is escaped.
pub fn article_url(base: &str, plant_name: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        plant_name.replace(' ', "_")
    )
}

/// Remove bracketed numeric citation markers such as `[12]`
pub fn strip_citations(text: &str) -> String {
    CITATION.replace_all(text, "").into_owned()
}

/// Text of every `<p>` element, citation-free, joined by single spaces
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH)
        .map(|p| strip_citations(&p.text().collect::<String>()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into sentence candidates on every literal period
///
/// Abbreviations and decimal numbers are split too.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.')
}

/// Whether a sentence mentions any care keyword, ignoring case
pub fn is_care_sentence(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    CARE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Select up to `limit` trimmed care sentences from plain text
pub fn select_care_sentences(text: &str, limit: usize) -> Vec<String> {
    split_sentences(text)
        .filter(|sentence| is_care_sentence(sentence))
        .map(|sentence| sentence.trim().to_string())
        .take(limit)
        .collect()
}

/// Extract care notes from an article's HTML
pub fn extract_care_notes(html: &str) -> CareNotes {
    let sentences = select_care_sentences(&paragraph_text(html), MAX_CARE_NOTES);

    if sentences.is_empty() {
        CareNotes::NotFound
    } else {
        CareNotes::Found(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(paragraphs: &[&str]) -> String {
        let body: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
        format!(
            "<html><head><title>Test</title></head><body><h1>Heading about water</h1>{body}</body></html>"
        )
    }

    #[test]
    fn test_article_url_replaces_spaces() {
        assert_eq!(
            article_url("https://en.wikipedia.org/wiki", "Monstera deliciosa"),
            "https://en.wikipedia.org/wiki/Monstera_deliciosa"
        );
    }

    #[test]
    fn test_article_url_trailing_slash_and_no_escaping() {
        assert_eq!(
            article_url("http://localhost:9000/wiki/", "Aloë vera 'x'"),
            "http://localhost:9000/wiki/Aloë_vera_'x'"
        );
    }

    #[test]
    fn test_strip_citations() {
        assert_eq!(
            strip_citations("Needs water[1] and light[23]. Not [a] or [ ]."),
            "Needs water and light. Not [a] or [ ]."
        );
    }

    #[test]
    fn test_paragraph_text_joins_paragraphs_only() {
        let html = article(&["First <b>bold</b> one[4]", "Second"]);
        assert_eq!(paragraph_text(&html), "First bold one Second");
    }

    #[test]
    fn test_paragraph_text_no_paragraphs() {
        assert_eq!(paragraph_text("<div>Water daily.</div>"), "");
    }

    #[test]
    fn test_split_sentences_is_naive() {
        let parts: Vec<&str> = split_sentences("Grows 1.5 m tall. E.g. here").collect();
        assert_eq!(parts, vec!["Grows 1", "5 m tall", " E", "g", " here"]);
    }

    #[test]
    fn test_is_care_sentence_case_insensitive() {
        assert!(is_care_sentence("Prefers bright LIGHT"));
        assert!(is_care_sentence("Keep the Soil moist"));
        assert!(is_care_sentence("Sunny windows work"));
        assert!(!is_care_sentence("It is native to Mexico"));
    }

    #[test]
    fn test_extract_care_notes_first_six_in_order() {
        let html = article(&[
            "It needs water weekly[1]. It is native to Panama. Use well-drained soil[2].",
            "  Bright light helps. Avoid direct sun[3]. Keep temperature above 10 C.",
            "The leaves are large. High humidity is preferred. Partial shade is tolerated[12]. Grow it from cuttings.",
        ]);

        let notes = extract_care_notes(&html);

        assert_eq!(
            notes,
            CareNotes::Found(vec![
                "It needs water weekly".to_string(),
                "Use well-drained soil".to_string(),
                "Bright light helps".to_string(),
                "Avoid direct sun".to_string(),
                "Keep temperature above 10 C".to_string(),
                "High humidity is preferred".to_string(),
            ])
        );
    }

    #[test]
    fn test_extract_care_notes_sentences_are_clean() {
        let html = article(&["   Water sparingly[7]   .Fertilizer[8] monthly ."]);

        let CareNotes::Found(sentences) = extract_care_notes(&html) else {
            panic!("expected care notes");
        };

        assert_eq!(sentences, vec!["Water sparingly", "Fertilizer monthly"]);
        for sentence in &sentences {
            assert_eq!(sentence, sentence.trim());
            assert!(!sentence.contains('['));
        }
    }

    #[test]
    fn test_extract_care_notes_none_match() {
        let html = article(&["It is native to Mexico. The flowers are white."]);

        let notes = extract_care_notes(&html);

        assert_eq!(notes, CareNotes::NotFound);
        assert_eq!(notes.into_tips(), vec!["No specific care info found."]);
    }

    #[test]
    fn test_extract_care_notes_ignores_non_paragraph_text() {
        let notes = extract_care_notes(&article(&[]));
        assert_eq!(notes, CareNotes::NotFound);
    }

    #[test]
    fn test_degraded_into_tips() {
        let tips = CareNotes::Degraded("connection refused".to_string()).into_tips();
        assert_eq!(tips, vec!["Error fetching care info: connection refused"]);
    }
}
