//! Personal name validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAME_TOKEN: Regex =
        Regex::new(r"^\p{Lu}\p{Ll}*(?:\p{Lu}\p{Ll}+)?(?:['’-]\p{Lu}?\p{Ll}+)*$").unwrap();
}

/// Capitalized words that show up next to founder cues but are not part of a
/// person's name.
const NON_NAME_TOKENS: &[&str] = &[
    "About", "Advisor", "Alumni", "And", "Associate", "Blog", "Board", "Careers",
    "CEO", "CFO", "Chair", "Chairman", "Chief", "Co-Founder", "Code", "Cofounder",
    "CoFounder", "Company", "Contact", "COO", "CTO", "Data", "Director", "Early",
    "Engineer", "Executive", "Fellow", "Former", "Founder", "Founders", "Founding",
    "Growth", "Head", "Home", "If", "In", "Investor", "Join", "Lead", "Manager",
    "Managing", "Marketing", "Meet", "Member", "Members", "Mission", "More", "News",
    "Officer", "Our", "Partner", "Partners", "President", "Press", "Principal",
    "Product", "Read", "Science", "Senior", "Staff", "Stage", "Story", "Team",
    "The", "Trustee", "Us", "Use", "Vice", "VP", "We", "With",
];

fn is_non_name(token: &str) -> bool {
    NON_NAME_TOKENS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(token))
}

fn is_name_token(token: &str) -> bool {
    token.chars().count() >= 2 && NAME_TOKEN.is_match(token) && !is_non_name(token)
}

/// Returns true if `text` looks like a personal name: two or three
/// capitalized words.
pub fn is_plausible_person_name(text: &str) -> bool {
    let parts: Vec<&str> = text.split_whitespace().collect();
    (2..=3).contains(&parts.len()) && parts.iter().all(|p| is_name_token(p))
}

/// Keep the leading name-like tokens of a capitalized run,
/// e.g. `Jane Smith Chief Executive` -> `Jane Smith`.
pub fn leading_name(run: &str) -> String {
    run.split_whitespace()
        .take_while(|t| is_name_token(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the trailing name-like tokens of a capitalized run,
/// e.g. `Meet Our Jane Smith` -> `Jane Smith`.
pub fn trailing_name(run: &str) -> String {
    let tokens: Vec<&str> = run.split_whitespace().collect();
    let start = tokens
        .iter()
        .rposition(|t| !is_name_token(t))
        .map_or(0, |idx| idx + 1);
    tokens[start..].join(" ")
}

/// Case-insensitive, whitespace-collapsed key used for deduplication.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_and_three_word_names() {
        assert!(is_plausible_person_name("Drew Houston"));
        assert!(is_plausible_person_name("Mary Ann Evans"));
        assert!(is_plausible_person_name("Conan O'Brien"));
        assert!(is_plausible_person_name("Jean-Luc Picard"));
        assert!(is_plausible_person_name("Ronald McDonald"));
        assert!(is_plausible_person_name("José Álvarez"));
    }

    #[test]
    fn rejects_non_names() {
        assert!(!is_plausible_person_name("Drew"));
        assert!(!is_plausible_person_name("drew houston"));
        assert!(!is_plausible_person_name("Drew Houston Jr Esq"));
        assert!(!is_plausible_person_name("Drew Houston."));
        assert!(!is_plausible_person_name("Chief Executive"));
        assert!(!is_plausible_person_name("Our Team"));
        assert!(!is_plausible_person_name("J Smith"));
        assert!(!is_plausible_person_name("ACME CORP"));
    }

    #[test]
    fn cleanup_cuts_at_non_name_tokens() {
        assert_eq!(leading_name("Jane Smith Chief Executive"), "Jane Smith");
        assert_eq!(trailing_name("Meet Our Jane Smith"), "Jane Smith");
        assert_eq!(trailing_name("Jane Smith"), "Jane Smith");
        assert_eq!(leading_name("About Us"), "");
    }

    #[test]
    fn normalized_names_ignore_case_and_spacing() {
        assert_eq!(normalize_name("  Drew   HOUSTON "), "drew houston");
    }
}
