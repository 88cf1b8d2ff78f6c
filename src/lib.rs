mod config;
mod downloader;
mod engine;
mod error;
mod stats;

pub mod company;
pub mod extractor;
pub mod output;
pub mod selector;
pub mod util;

// (Re) Exports
pub use company::Company;
pub use config::{Config, MAX_PAGES};
pub use downloader::{Downloader, DownloaderError, FetchedPage, Fetcher};
pub use engine::{Engine, ScanBudget};
pub use error::{FinderError, Result};
pub use extractor::{Cue, FounderCandidate, FounderExtractor, FounderSet};
pub use output::FounderMap;
pub use selector::{CandidatePage, PageSelector};
pub use stats::Stats;

/// Build an engine that fetches over HTTP with the given config.
pub fn engine(config: Config) -> Result<Engine<Downloader>> {
    config.sanity_check()?;
    let downloader = Downloader::new(&config);
    Ok(Engine::new(config, downloader))
}
