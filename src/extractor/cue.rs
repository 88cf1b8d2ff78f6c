//! Cue rules.
//!
//! A cue is attached to a name when only whitespace and separator
//! punctuation stand between them. Names never span a line break.

use lazy_static::lazy_static;
use regex::{Match, Regex};

use super::name;

lazy_static! {
    static ref FOUNDED_BY: Regex = Regex::new(r"(?i)\bfounded\s+by\b").unwrap();
    static ref FOUNDER_LABEL: Regex =
        Regex::new(r"(?i)\b(co[ \t\-–]?)?founders?\b").unwrap();
    // `Founder: `, `Co-Founder & CEO - `
    static ref LEADING_SEPARATOR: Regex = Regex::new(
        r"^(?:[ \t]*(?:&|/|(?i:and))[ \t]*(?:CEO|CTO|COO|CFO|President|Chairman|Chief [A-Z][a-z]+ Officer))?[ \t]*[:|–—-][ \t:|–—-]*"
    )
    .unwrap();
    static ref NAME_RUN: Regex =
        Regex::new(r"^\p{Lu}[\p{L}'’-]*(?:[ \t]+\p{Lu}[\p{L}'’-]*)*").unwrap();
    static ref NAME_RUN_END: Regex =
        Regex::new(r"\p{Lu}[\p{L}'’-]*(?:[ \t]+\p{Lu}[\p{L}'’-]*)*$").unwrap();
    static ref LIST_SEPARATOR: Regex =
        Regex::new(r"^(?:\s*,\s*(?:(?i:and)\s+|&\s*)?|\s*&\s*|\s+(?i:and)\s+)").unwrap();
    static ref AND_WORD: Regex = Regex::new(r"(?i)[ \t]+and[ \t]+").unwrap();
    // `, an early investor`
    static ref APPOSITIVE: Regex = Regex::new(r"^[ \t]*,[^,.;!?|\n]*").unwrap();
    static ref CLAUSE_END: Regex = Regex::new(r"[.;!?|\n]").unwrap();
    static ref DISQUALIFIER: Regex = Regex::new(
        r"(?i)\b(?:founding\s+(?:engineers?|members?|team)|advis[oe]rs?|investors?|board)\b"
    )
    .unwrap();
}

/// Punctuation allowed between a name and a trailing label.
const TRAILING_GAP_CHARS: &str = ",(|–—-";

/// The kind of textual pattern that attributed a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// `Founded by NAME`
    FoundedBy,
    /// `NAME, Founder` or `Founder: NAME`
    Founder,
    /// `NAME, Co-Founder` or `Co-Founder: NAME`
    CoFounder,
}

impl Cue {
    fn from_label(label: &Match) -> Cue {
        if label.as_str().to_lowercase().starts_with("co") {
            Cue::CoFounder
        } else {
            Cue::Founder
        }
    }
}

/// A name attached to a cue, before validation.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct CueMatch {
    /// Byte offset of the name in the scanned text
    pub offset: usize,
    pub name: String,
    pub cue: Cue,
    /// The cue, the names and the rest of their clause
    pub phrase: String,
}

impl CueMatch {
    /// Role words such as "investor" or "board" disqualify a phrase unless
    /// it also carries an explicit Founder/Co-Founder label.
    pub fn is_excluded(&self) -> bool {
        DISQUALIFIER.is_match(&self.phrase) && !FOUNDER_LABEL.is_match(&self.phrase)
    }
}

/// Run every cue rule over `text`, returning matches in text order.
pub(super) fn scan(text: &str) -> Vec<CueMatch> {
    let mut matches = vec![];

    for cue in FOUNDED_BY.find_iter(text) {
        let start = skip_whitespace(text, cue.end());
        let (runs, end) = name_list(text, start);
        let phrase = &text[cue.start()..appositive_end(text, end)];
        for (offset, run) in runs {
            push(&mut matches, offset, name::leading_name(&run), Cue::FoundedBy, phrase);
        }
    }

    for label in FOUNDER_LABEL.find_iter(text) {
        let cue = Cue::from_label(&label);
        let separator = LEADING_SEPARATOR.find(&text[label.end()..]);
        // A dash may close a trailing label too, a colon never does.
        let colon = separator.map_or(false, |sep| sep.as_str().contains(':'));
        let before = if colon {
            None
        } else {
            name_before(text, label.start()).filter(|(_, n)| name::is_plausible_person_name(n))
        };

        match (before, separator) {
            (Some((offset, name)), _) => {
                // NAME, Founder
                let phrase = &text[offset..clause_end(text, label.end())];
                push(&mut matches, offset, name, cue, phrase);
            }
            (None, Some(sep)) => {
                // Founder: NAME[, NAME and NAME]
                let start = skip_whitespace(text, label.end() + sep.end());
                let (runs, end) = name_list(text, start);
                let phrase = &text[label.start()..clause_end(text, end)];
                for (offset, run) in runs {
                    push(&mut matches, offset, name::leading_name(&run), cue, phrase);
                }
            }
            (None, None) => {}
        }
    }

    matches.sort_by_key(|m| m.offset);
    matches
}

fn push(matches: &mut Vec<CueMatch>, offset: usize, name: String, cue: Cue, phrase: &str) {
    if name.is_empty() {
        return;
    }
    matches.push(CueMatch {
        offset,
        name,
        cue,
        phrase: phrase.to_owned(),
    });
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    let rest = &text[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

/// End of the clause containing `pos`.
fn clause_end(text: &str, pos: usize) -> usize {
    CLAUSE_END
        .find(&text[pos..])
        .map_or(text.len(), |m| pos + m.start())
}

/// End of the appositive directly after `pos`, or `pos` if there is none.
fn appositive_end(text: &str, pos: usize) -> usize {
    APPOSITIVE.find(&text[pos..]).map_or(pos, |m| pos + m.end())
}

/// Parse `A, B and C` starting at `start`.
///
/// Returns the (offset, run) of each capitalized run and the position right
/// after the last one.
fn name_list(text: &str, start: usize) -> (Vec<(usize, String)>, usize) {
    let mut names = vec![];
    let mut pos = start;
    let mut end = start;
    while let Some(run) = NAME_RUN.find(&text[pos..]) {
        // `Drew Houston And Arash Ferdowsi` is two names
        let mut last = 0;
        for sep in AND_WORD.find_iter(run.as_str()) {
            names.push((pos + last, run.as_str()[last..sep.start()].to_owned()));
            last = sep.end();
        }
        names.push((pos + last, run.as_str()[last..].to_owned()));
        end = pos + run.end();
        match LIST_SEPARATOR.find(&text[end..]) {
            Some(sep) => pos = end + sep.end(),
            None => break,
        }
    }
    (names, end)
}

/// The cleaned name directly before `label_start` and its offset.
fn name_before(text: &str, label_start: usize) -> Option<(usize, String)> {
    let before = text[..label_start]
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_GAP_CHARS.contains(c));
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let run = NAME_RUN_END.find(&before[line_start..])?;
    let cleaned = name::trailing_name(run.as_str());
    if cleaned.is_empty() {
        return None;
    }
    Some((line_start + run.end() - cleaned.len(), cleaned))
}
