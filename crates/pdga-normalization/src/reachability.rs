//! Website reachability probing.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::normalization::options::ReachabilityOptions;

/// Result of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The URL answered 200, possibly after an allowed redirect.
    Reachable { final_url: String },
    Unreachable { reason: String },
}

/// Checks whether a website answers.
pub trait UrlChecker {
    fn check(&self, url: &str) -> CheckOutcome;
}

/// Blocking HTTP checker with a timeout and a redirect cap.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: Client,
}

impl HttpChecker {
    pub fn new(options: &ReachabilityOptions) -> reqwest::Result<Self> {
        let max_redirects = options.max_redirects;
        let client = Client::builder()
            .user_agent(concat!("pdga-ingest/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .redirect(Policy::custom(move |attempt| {
                // previous() holds every URL visited so far, the original included.
                if attempt.previous().len() > max_redirects {
                    attempt.error("too many redirects")
                } else {
                    attempt.follow()
                }
            }))
            .build()?;
        Ok(Self { client })
    }
}

impl UrlChecker for HttpChecker {
    fn check(&self, url: &str) -> CheckOutcome {
        match self.client.get(url).send() {
            Ok(response) if response.status() == StatusCode::OK => CheckOutcome::Reachable {
                final_url: response.url().to_string(),
            },
            Ok(response) => CheckOutcome::Unreachable {
                reason: format!("HTTP {}", response.status()),
            },
            Err(error) if error.is_redirect() => CheckOutcome::Unreachable {
                reason: "more than one redirect".to_string(),
            },
            Err(error) if error.is_timeout() => CheckOutcome::Unreachable {
                reason: "timed out".to_string(),
            },
            Err(error) => CheckOutcome::Unreachable {
                reason: error.to_string(),
            },
        }
    }
}

/// Enforces a minimum interval between consecutive checks.
pub(crate) struct Throttle {
    min_interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    pub(crate) fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                std::thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}
