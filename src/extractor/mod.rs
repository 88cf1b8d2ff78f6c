//! Founder extraction from page content.

mod cue;
mod name;
mod text;

use std::collections::HashSet;

pub use cue::Cue;
pub use name::{is_plausible_person_name, normalize_name};
pub use text::html_to_text;

/// A validated name tied to the cue that attributed it and the page it was
/// found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FounderCandidate {
    pub raw_text: String,
    pub cue: Cue,
    pub source_page: String,
}

#[derive(Clone, Debug, Default)]
pub struct FounderExtractor;

impl FounderExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract founder candidates from an html page.
    pub fn extract_from_html(&self, html: &str, source_page: &str) -> Vec<FounderCandidate> {
        self.extract_from_text(&html_to_text(html), source_page)
    }

    /// Extract founder candidates from page text, in text order.
    ///
    /// Candidates failing name validation or the role-word exclusion are
    /// dropped. Duplicates are kept; see `FounderSet`.
    pub fn extract_from_text(&self, text: &str, source_page: &str) -> Vec<FounderCandidate> {
        let text = text::normalize_whitespace(text);
        cue::scan(&text)
            .into_iter()
            .filter(|m| {
                if m.is_excluded() {
                    log::debug!("excluded {:?} in {:?}", m.name, m.phrase);
                    return false;
                }
                is_plausible_person_name(&m.name)
            })
            .map(|m| FounderCandidate {
                raw_text: m.name,
                cue: m.cue,
                source_page: source_page.to_owned(),
            })
            .collect()
    }
}

/// Founder names deduplicated by normalized name, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct FounderSet {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl FounderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the name was new.
    pub fn insert(&mut self, name: &str) -> bool {
        let key = normalize_name(name);
        if key.is_empty() || !self.seen.insert(key) {
            return false;
        }
        self.names.push(name.split_whitespace().collect::<Vec<_>>().join(" "));
        true
    }

    pub fn extend<I: IntoIterator<Item = FounderCandidate>>(&mut self, candidates: I) {
        for candidate in candidates {
            self.insert(&candidate.raw_text);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn founders_from_html(html: &str) -> Vec<String> {
        let mut set = FounderSet::new();
        set.extend(FounderExtractor::new().extract_from_html(html, "/about"));
        set.into_names()
    }

    fn founders(text: &str) -> Vec<String> {
        let mut set = FounderSet::new();
        set.extend(FounderExtractor::new().extract_from_text(text, "/about"));
        set.into_names()
    }

    #[test]
    fn dropbox_about_page() {
        let html = "<html><body><p>Dropbox was founded by <a href=\"/drew\">Drew Houston</a> \
                    and Arash Ferdowsi in 2007.</p></body></html>";
        assert_eq!(
            founders_from_html(html),
            vec!["Drew Houston", "Arash Ferdowsi"]
        );
    }

    #[test]
    fn co_founder_label() {
        let candidates = FounderExtractor::new().extract_from_text("Co-Founder: John Doe", "/team");
        assert_eq!(
            candidates,
            vec![FounderCandidate {
                raw_text: "John Doe".to_owned(),
                cue: Cue::CoFounder,
                source_page: "/team".to_owned(),
            }]
        );
    }

    #[test]
    fn founding_engineer_is_not_a_founder() {
        assert!(founders("Jane Smith, founding engineer").is_empty());
        assert!(founders("Jane Smith, Founding Engineer").is_empty());
    }

    #[test]
    fn investor_and_board_phrases_are_excluded() {
        assert!(founders("The firm was founded by John Doe, an early investor.").is_empty());
        assert!(founders("It was founded by Mary Major, a board member").is_empty());
        assert_eq!(
            founders("Founded by Jane Smith and John Doe with backing from investors."),
            vec!["Jane Smith", "John Doe"]
        );
        assert_eq!(
            founders("Jane Smith, Co-Founder and Board Member"),
            vec!["Jane Smith"]
        );
    }

    #[test]
    fn single_words_and_companies_are_rejected() {
        assert!(founders("Founded by Drew in 2007").is_empty());
        assert!(founders("Dropbox Co-Founder Drew Houston").is_empty());
        assert!(founders("founded by our team").is_empty());
    }

    #[test]
    fn inline_markup_neither_merges_nor_hides_names() {
        let html = "<div><span>Jane Smith</span><span>Co-Founder</span></div>";
        assert_eq!(founders_from_html(html), vec!["Jane Smith"]);
        let html = "<p>Acme was founded by<a href=\"/jane\">Jane Smith</a> in 2010</p>";
        assert_eq!(founders_from_html(html), vec!["Jane Smith"]);
    }

    #[test]
    fn role_nouns_are_not_part_of_names() {
        assert_eq!(founders("Board Member Jane Smith, Co-Founder"), vec!["Jane Smith"]);
        assert_eq!(founders("Senior Fellow John Doe, Founder"), vec!["John Doe"]);
    }

    #[test]
    fn duplicates_collapse_to_first_spelling() {
        let text = "Founded by Drew Houston.\nDrew Houston, Co-Founder & CEO\nDREW HOUSTON, Founder";
        assert_eq!(founders(text), vec!["Drew Houston"]);
    }

    #[test]
    fn team_cards() {
        let html = r#"<section>
            <div class="card"><h3>Jane Smith</h3><p>Co-Founder &amp; CEO</p></div>
            <div class="card"><h3>John Doe</h3><p>Co-Founder &amp; CTO</p></div>
            <div class="card"><h3>Mary Major</h3><p>Advisor</p></div>
            <div class="card"><h3>Tom Ray</h3><p>Head of Growth</p></div>
        </section>"#;
        assert_eq!(
            founders_from_html(html),
            vec!["Jane Smith", "John Doe"]
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let html = "<p>Founders: Alice Wong, Bob Lee and Carol King</p><p>Bob Lee, Co-Founder</p>";
        let first = founders_from_html(html);
        let second = founders_from_html(html);
        assert_eq!(first, vec!["Alice Wong", "Bob Lee", "Carol King"]);
        assert_eq!(first, second);
    }

    #[test]
    fn founder_set_reports_new_names() {
        let mut set = FounderSet::new();
        assert!(set.insert("Drew  Houston"));
        assert!(!set.insert("drew houston"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.names(), &["Drew Houston".to_owned()]);
    }
}
