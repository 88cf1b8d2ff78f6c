use chrono::{NaiveDateTime, Utc};

/// Counters for one run, reported when the run ends.
#[derive(Clone, Debug)]
pub struct Stats {
    pub companies: u64,
    pub companies_with_founders: u64,
    pub pages_fetched: u64,
    pub pages_unavailable: u64,
    pub pages_skipped_robots: u64,
    pub robots_fetched: u64,
    start_time: NaiveDateTime,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            companies: 0,
            companies_with_founders: 0,
            pages_fetched: 0,
            pages_unavailable: 0,
            pages_skipped_robots: 0,
            robots_fetched: 0,
            start_time: Utc::now().naive_utc(),
        }
    }

    /// Elapsed time for this run in seconds
    pub fn elapsed_time(&self) -> i64 {
        let now = Utc::now().naive_utc();
        let elapsed = now - self.start_time;
        elapsed.num_seconds()
    }

    pub fn report(&self) {
        log::info!(
            "{} companies ({} with founders), {} pages fetched, {} unavailable, {} skipped by robots.txt, {} robots.txt fetched in {}s",
            self.companies,
            self.companies_with_founders,
            self.pages_fetched,
            self.pages_unavailable,
            self.pages_skipped_robots,
            self.robots_fetched,
            self.elapsed_time(),
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
