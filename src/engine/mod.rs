use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

mod guard_robot;
mod scan_budget;

use crate::company::Company;
use crate::downloader::Fetcher;
use crate::error::Result;
use crate::extractor::{FounderExtractor, FounderSet};
use crate::output::FounderMap;
use crate::selector::PageSelector;
use crate::stats::Stats;
use crate::util;
use crate::Config;

use guard_robot::GuardRobot;
pub use scan_budget::ScanBudget;

/// Drives the scan: companies one at a time, pages one at a time in
/// selector order.
pub struct Engine<F>
where
    F: Fetcher,
{
    config: Config,
    fetcher: F,
    selector: PageSelector,
    extractor: FounderExtractor,
    stats: Stats,
    stopped: bool,
}

impl<F> Engine<F>
where
    F: Fetcher,
{
    pub fn new(config: Config, fetcher: F) -> Self {
        let selector = PageSelector::new(config.paths.clone(), config.max_pages);
        Self {
            config,
            fetcher,
            selector,
            extractor: FounderExtractor::new(),
            stats: Stats::new(),
            stopped: false,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Scan all companies, stopping early on Ctrl-C.
    pub async fn start(&mut self, companies: &[Company]) -> Result<FounderMap> {
        self.config.sanity_check()?;

        let (stop_tx, mut stop_rx) = broadcast::channel::<()>(32);
        ctrlc::set_handler(move || {
            let _ = stop_tx.send(());
        })?;

        Ok(self.run(companies, &mut stop_rx).await)
    }

    /// Scan all companies until done or until `stop_rx` receives.
    ///
    /// Every company gets a key in the result, companies skipped after a
    /// stop included.
    pub async fn run(
        &mut self,
        companies: &[Company],
        stop_rx: &mut broadcast::Receiver<()>,
    ) -> FounderMap {
        let mut results = FounderMap::new();
        for company in companies {
            let founders = if self.is_stopped(stop_rx) {
                log::debug!("stopped, skipping {}", company.name);
                vec![]
            } else {
                self.process_company(company, stop_rx).await
            };
            results.insert(&company.name, &founders);
        }
        self.stats.report();
        results
    }

    /// Founders of one company, deduplicated in first-seen order.
    pub async fn process_company(
        &mut self,
        company: &Company,
        stop_rx: &mut broadcast::Receiver<()>,
    ) -> Vec<String> {
        self.stats.companies += 1;

        let url = match &company.url {
            Some(url) => url,
            None => {
                log::info!("=== {}: no URL provided; skipping", company.name);
                return vec![];
            }
        };
        let base = match util::canonical_base(url) {
            Some(base) => base,
            None => {
                log::warn!("=== {}: invalid URL {}; skipping", company.name, url);
                return vec![];
            }
        };
        log::info!("=== Processing: {} ({})", company.name, base);

        let guard = self.load_robots(&base).await;
        let mut budget = ScanBudget::new(self.selector.max_pages());
        let mut founders = FounderSet::new();

        for mut page in self.selector.candidate_pages(&base) {
            if self.is_stopped(stop_rx) {
                break;
            }
            let attempt = match budget.try_consume() {
                Some(attempt) => attempt,
                None => break,
            };
            if !guard.is_allowed(&page.url) {
                log::info!("  - SKIP (robots): {}", page.url);
                self.stats.pages_skipped_robots += 1;
                continue;
            }

            log::info!("  - Fetching [{}/{}]: {}", attempt, budget.max_pages(), page.url);
            page.fetched = self.fetch_page(&page.url).await;
            if let Some(html) = &page.fetched {
                let candidates = self.extractor.extract_from_html(html, &page.path);
                if !candidates.is_empty() {
                    let names: Vec<&str> =
                        candidates.iter().map(|c| c.raw_text.as_str()).collect();
                    log::info!("    -> Found: {:?}", names);
                }
                founders.extend(candidates);
            }
        }

        if !founders.is_empty() {
            self.stats.companies_with_founders += 1;
        }
        log::info!(
            "=> Final founders for {} after {} page(s): {:?}",
            company.name,
            budget.tried(),
            founders.names()
        );
        founders.into_names()
    }

    fn is_stopped(&mut self, stop_rx: &mut broadcast::Receiver<()>) -> bool {
        if !self.stopped {
            match stop_rx.try_recv() {
                Ok(_) | Err(TryRecvError::Lagged(_)) => {
                    log::warn!("Stop requested, remaining pages are skipped");
                    self.stopped = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => {}
            }
        }
        self.stopped
    }

    async fn load_robots(&mut self, base: &str) -> GuardRobot {
        if !self.config.robotstxt_obey {
            return GuardRobot::allow_all();
        }
        let robot_url = match util::get_robot_url(base) {
            Some(robot_url) => robot_url,
            None => return GuardRobot::allow_all(),
        };
        match self.fetcher.get(&robot_url).await {
            Ok(response) => {
                self.stats.robots_fetched += 1;
                log::debug!("{} -> {}", robot_url, response.status);
                GuardRobot::from_response(&self.config.bot_name, response.status, &response.body)
            }
            Err(e) => {
                log::debug!("{}: {}", robot_url, e);
                GuardRobot::allow_all()
            }
        }
    }

    /// Html of `url`, or `None` when the page is unavailable.
    async fn fetch_page(&mut self, url: &str) -> Option<String> {
        match self.fetcher.get(url).await {
            Ok(response) if response.is_ok() && response.is_html() => {
                self.stats.pages_fetched += 1;
                Some(response.body)
            }
            Ok(response) => {
                log::warn!(
                    "    (no HTML or non-200: {} {})",
                    response.status,
                    response.content_type
                );
                self.stats.pages_unavailable += 1;
                None
            }
            Err(e) => {
                log::error!("    {}", e);
                self.stats.pages_unavailable += 1;
                None
            }
        }
    }
}
