//! Page selection: which pages of a company website are worth fetching.

use std::collections::HashSet;

use crate::config::MAX_PAGES;
use crate::util;

/// Candidate paths, most founder-dense first.
pub const DEFAULT_PATHS: &[&str] = &[
    "/about",
    "/team",
    "/leadership",
    "/founders",
    "/company",
    "/",
    "/about-us",
    "/our-story",
    "/story",
    "/management",
    "/people",
    "/press",
    "/news",
];

/// One page of a company website scanned for founder cues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidatePage {
    pub path: String,
    pub url: String,
    pub fetched: Option<String>,
}

#[derive(Clone, Debug)]
pub struct PageSelector {
    paths: Vec<String>,
    max_pages: usize,
}

impl PageSelector {
    /// `max_pages` is clamped to `MAX_PAGES`.
    pub fn new(paths: Vec<String>, max_pages: usize) -> Self {
        Self {
            paths,
            max_pages: max_pages.min(MAX_PAGES),
        }
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Returns the ordered candidate pages for `base_url`.
    ///
    /// Paths that resolve to an already selected url are dropped, and the
    /// result never holds more than `max_pages` entries.
    pub fn candidate_pages(&self, base_url: &str) -> Vec<CandidatePage> {
        let mut seen = HashSet::new();
        let mut pages = vec![];
        for path in &self.paths {
            if pages.len() >= self.max_pages {
                break;
            }
            let url = match util::join_url(base_url, path) {
                Some(url) => url,
                None => continue,
            };
            if seen.insert(url.clone()) {
                pages.push(CandidatePage {
                    path: path.clone(),
                    url,
                    fetched: None,
                });
            }
        }
        pages
    }
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(
            DEFAULT_PATHS.iter().map(|p| p.to_string()).collect(),
            MAX_PAGES,
        )
    }
}
