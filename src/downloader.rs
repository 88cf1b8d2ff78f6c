use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::Config;

#[derive(Debug, Error)]
pub enum DownloaderError {
    #[error("request failed: {0}")]
    RequestError(#[from] Box<ureq::Error>),
    #[error("failed to read response body: {0}")]
    BodyError(#[from] std::io::Error),
    #[error("download task was killed: {0}")]
    Killed(#[from] tokio::task::JoinError),
}

/// A fetched http response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl FetchedPage {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Only static html (or plain text) is worth scanning.
    pub fn is_html(&self) -> bool {
        let content_type = self.content_type.to_ascii_lowercase();
        content_type.starts_with("text/html")
            || content_type.starts_with("application/xhtml+xml")
            || content_type.starts_with("text/plain")
    }
}

/// Http collaborator used by the engine.
#[async_trait]
pub trait Fetcher {
    /// Fetch `url`. Non-2xx statuses are returned as pages, transport and
    /// body failures as errors.
    async fn get(&self, url: &str) -> Result<FetchedPage, DownloaderError>;
}

/// Blocking `ureq` downloader that waits `download_delay` seconds between
/// consecutive requests.
#[derive(Clone)]
pub struct Downloader {
    agent: ureq::Agent,
    download_delay: f32,
    // Timestamp since epoch in millis
    last_fetch: Arc<Mutex<i64>>,
}

impl Downloader {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent())
            .build();
        Self {
            agent,
            download_delay: config.download_delay,
            last_fetch: Arc::new(Mutex::new(0)),
        }
    }

    async fn wait_turn(&self) {
        let download_delay_millis = (self.download_delay * 1000.0) as i64;
        let wait = {
            let last_fetch = self.last_fetch.lock().unwrap_or_else(|e| e.into_inner());
            let now = Utc::now().timestamp_millis();
            *last_fetch + download_delay_millis - now
        };
        if wait > 0 {
            tokio::time::sleep(Duration::from_millis(wait as u64)).await;
        }
        let mut last_fetch = self.last_fetch.lock().unwrap_or_else(|e| e.into_inner());
        *last_fetch = Utc::now().timestamp_millis();
    }
}

#[async_trait]
impl Fetcher for Downloader {
    async fn get(&self, url: &str) -> Result<FetchedPage, DownloaderError> {
        self.wait_turn().await;

        let agent = self.agent.clone();
        let url = url.to_owned();
        tokio::task::spawn_blocking(move || {
            let response = agent
                .get(&url)
                .set("Accept", "text/html,application/xhtml+xml")
                .call();
            let response = match response {
                Ok(response) => response,
                Err(ureq::Error::Status(_, response)) => response,
                Err(e) => return Err(DownloaderError::from(Box::new(e))),
            };
            let status = response.status();
            let content_type = response.content_type().to_owned();
            let final_url = response.get_url().to_owned();
            let body = response.into_string()?;
            Ok(FetchedPage {
                url: final_url,
                status,
                content_type,
                body,
            })
        })
        .await?
    }
}
