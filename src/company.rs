//! Input file parsing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{FinderError, Result};

lazy_static! {
    static ref COMPANY_LINE: Regex =
        Regex::new(r"^(.*?)(?:\s*\((https?://[^)\s]+)\s*\))?$").unwrap();
}

/// A company to scan, parsed from one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub url: Option<String>,
}

impl Company {
    /// Parse a line like `Company Name (https://domain.com/)`.
    ///
    /// Returns `None` for blank lines or lines without a name. A line without
    /// a parenthesized http(s) url yields a company with no url.
    pub fn parse_line(line: &str) -> Option<Company> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (name, url) = match COMPANY_LINE.captures(line) {
            Some(caps) => (
                caps.get(1).map_or("", |m| m.as_str()).trim(),
                caps.get(2).map(|m| m.as_str().to_owned()),
            ),
            None => (line, None),
        };
        if name.is_empty() {
            return None;
        }
        Some(Company {
            name: name.to_owned(),
            url,
        })
    }
}

pub fn parse_companies(text: &str) -> Vec<Company> {
    text.lines().filter_map(Company::parse_line).collect()
}

/// Read companies from the input file. Failing to read the file (including
/// invalid UTF-8) is fatal.
pub fn read_companies(path: &str) -> Result<Vec<Company>> {
    let text = std::fs::read_to_string(path).map_err(|source| FinderError::Input {
        path: path.to_owned(),
        source,
    })?;
    let companies = parse_companies(&text);
    log::info!("Loaded {} company(ies) from {}", companies.len(), path);
    Ok(companies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_url() {
        let company = Company::parse_line("Dropbox (https://www.dropbox.com/)").unwrap();
        assert_eq!(company.name, "Dropbox");
        assert_eq!(company.url.as_deref(), Some("https://www.dropbox.com/"));
    }

    #[test]
    fn line_without_url_has_no_url() {
        let company = Company::parse_line("  Acme Corp  ").unwrap();
        assert_eq!(company.name, "Acme Corp");
        assert_eq!(company.url, None);
    }

    #[test]
    fn non_http_parenthesis_stays_in_name() {
        let company = Company::parse_line("Acme (Europe)").unwrap();
        assert_eq!(company.name, "Acme (Europe)");
        assert_eq!(company.url, None);
    }

    #[test]
    fn blank_and_nameless_lines_are_skipped() {
        assert_eq!(Company::parse_line("   "), None);
        assert_eq!(Company::parse_line("(https://example.com/)"), None);
    }

    #[test]
    fn parse_companies_keeps_order() {
        let text = "A (https://a.com/)\n\nB\nC (http://c.io)\n";
        let names: Vec<String> = parse_companies(text).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_input_file_is_fatal() {
        let res = read_companies("/definitely/not/here/companies.txt");
        assert!(matches!(res, Err(FinderError::Input { .. })));
    }
}
