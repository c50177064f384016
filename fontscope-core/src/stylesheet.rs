//! Stylesheet loading raced against a timeout.
//!
//! A load either finishes (`Loaded`), errors (`Failed`) or runs out of time
//! (`TimedOut`). Preview flows treat a timeout as good enough to carry on,
//! since the fonts usually arrive shortly after. Every new submission aborts
//! whatever load was still in flight so a slow old response can never land
//! on top of a newer one.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::task::{AbortHandle, JoinHandle};

pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { status: u16, bytes: usize },
    TimedOut,
    Failed(String),
}

impl LoadOutcome {
    /// Whether the preview should go ahead as if the fonts were present.
    pub fn proceed(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. } | LoadOutcome::TimedOut)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded { .. } => "loaded",
            LoadOutcome::TimedOut => "timed-out",
            LoadOutcome::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StylesheetLoader {
    client: reqwest::Client,
    timeout: Duration,
}

impl StylesheetLoader {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fontscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch `url`, giving up after the configured timeout.
    pub async fn load(&self, url: &str) -> LoadOutcome {
        let outcome = match tokio::time::timeout(self.timeout, self.fetch(url)).await {
            Ok(Ok((status, bytes))) => LoadOutcome::Loaded { status, bytes },
            Ok(Err(err)) => LoadOutcome::Failed(format!("{err:#}")),
            Err(_) => LoadOutcome::TimedOut,
        };
        tracing::debug!(url, outcome = outcome.label(), "stylesheet load finished");
        outcome
    }

    async fn fetch(&self, url: &str) -> Result<(u16, usize)> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("GET {url} returned HTTP {}", status.as_u16());
        }
        let body = response.bytes().await.context("reading stylesheet body")?;
        Ok((status.as_u16(), body.len()))
    }
}

/// What a finished submission turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Current(LoadOutcome),
    /// A newer submission replaced this one; its outcome must be ignored.
    Superseded,
}

pub struct Submission {
    generation: u64,
    url: String,
    handle: JoinHandle<LoadOutcome>,
}

impl Submission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Hands out load tasks, one live at a time.
pub struct SubmissionTracker {
    loader: Arc<StylesheetLoader>,
    latest: u64,
    in_flight: Option<AbortHandle>,
}

impl SubmissionTracker {
    pub fn new(loader: StylesheetLoader) -> Self {
        Self {
            loader: Arc::new(loader),
            latest: 0,
            in_flight: None,
        }
    }

    /// Start loading `url`, aborting the previous load if it is still running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, url: &str) -> Submission {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                tracing::debug!(generation = self.latest, "aborting stale stylesheet load");
            }
            previous.abort();
        }

        self.latest += 1;
        let loader = Arc::clone(&self.loader);
        let target = url.to_string();
        let handle = tokio::spawn(async move { loader.load(&target).await });
        self.in_flight = Some(handle.abort_handle());

        Submission {
            generation: self.latest,
            url: url.to_string(),
            handle,
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    /// Wait for `submission` and classify its outcome against the latest one.
    pub async fn finish(&self, submission: Submission) -> Resolved {
        let Submission {
            generation,
            url,
            handle,
        } = submission;

        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => return Resolved::Superseded,
            Err(err) => LoadOutcome::Failed(format!("load task for {url} failed: {err}")),
        };

        if self.is_current(generation) {
            Resolved::Current(outcome)
        } else {
            tracing::debug!(generation, url = %url, "dropping superseded stylesheet outcome");
            Resolved::Superseded
        }
    }
}
