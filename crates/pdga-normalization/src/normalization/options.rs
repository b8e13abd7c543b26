use std::time::Duration;

/// How missing cells in numeric fields are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValuePolicy {
    /// Fill missing numeric cells with `0.0`.
    #[default]
    ZeroFill,
    /// Leave missing numeric cells missing ("unknown").
    Unknown,
}

/// Settings for the optional website reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachabilityOptions {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Minimum delay between two consecutive requests.
    pub min_interval: Duration,
    /// Redirect hops allowed before a URL is rejected.
    pub max_redirects: usize,
}

impl Default for ReachabilityOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            min_interval: Duration::from_millis(250),
            max_redirects: 1,
        }
    }
}

impl ReachabilityOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }
}

/// Options for normalization.
#[derive(Debug, Clone, Default)]
pub struct NormalizationOptions {
    pub missing_values: MissingValuePolicy,

    /// Move social-media websites into the matching dedicated field.
    /// Default: false.
    pub route_social_links: bool,

    /// Check accepted websites over HTTP. `None` disables the check.
    pub reachability: Option<ReachabilityOptions>,
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    pub fn with_social_routing(mut self, enable: bool) -> Self {
        self.route_social_links = enable;
        self
    }

    pub fn with_reachability(mut self, reachability: ReachabilityOptions) -> Self {
        self.reachability = Some(reachability);
        self
    }
}
