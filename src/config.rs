use crate::error::{FinderError, Result};
use crate::selector::DEFAULT_PATHS;

/// Hard upper bound on the number of candidate pages tried per company.
pub const MAX_PAGES: usize = 6;

#[derive(Clone, Debug)]
pub struct Config {
    /// Bot name, used as the robots.txt user agent token
    pub bot_name: String,
    /// Contact information appended to the HTTP user agent
    pub contact: String,
    /// The amount of time (in secs) that the downloader should wait before
    /// downloading consecutive pages.
    pub download_delay: f32,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// The maximum number of candidate pages tried per company. Cannot
    /// exceed `MAX_PAGES`.
    pub max_pages: usize,
    /// If enabled, robots.txt policies are respected.
    pub robotstxt_obey: bool,
    /// Candidate page paths in priority order.
    pub paths: Vec<String>,
    /// Input file with one `Company Name (https://domain.com/)` per line.
    pub input_path: String,
    /// Output JSON file.
    pub output_path: String,
}

impl Config {
    pub fn sanity_check(&self) -> Result<()> {
        if self.bot_name.trim().is_empty() {
            return Err(FinderError::Config("bot_name cannot be empty".to_owned()));
        }
        if self.max_pages == 0 || self.max_pages > MAX_PAGES {
            return Err(FinderError::Config(format!(
                "max_pages must be between 1 and {}",
                MAX_PAGES
            )));
        }
        if self.download_delay < 0.0 {
            return Err(FinderError::Config("download_delay must be positive".to_owned()));
        }
        if self.timeout_secs == 0 {
            return Err(FinderError::Config("timeout_secs cannot be zero".to_owned()));
        }
        if self.paths.is_empty() {
            return Err(FinderError::Config("paths cannot be empty".to_owned()));
        }
        Ok(())
    }

    /// Full HTTP user agent, e.g. `FounderFinderBot (+https://example.org)`
    pub fn user_agent(&self) -> String {
        if self.contact.is_empty() {
            self.bot_name.clone()
        } else {
            format!("{} (+{})", self.bot_name, self.contact)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_name: "FounderFinderBot".to_owned(),
            contact: "https://example.org; contact: tool-user".to_owned(),
            download_delay: 0.8,
            timeout_secs: 10,
            max_pages: MAX_PAGES,
            robotstxt_obey: true,
            paths: DEFAULT_PATHS.iter().map(|p| p.to_string()).collect(),
            input_path: "companies.txt".to_owned(),
            output_path: "founders.json".to_owned(),
        }
    }
}
