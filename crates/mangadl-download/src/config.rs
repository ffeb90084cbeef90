//! Configuration for searching, polling and orchestration.

use std::time::Duration;

use mangadl_core::{MatchPolicy, SearchQuery};

/// Job polling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Time between status checks
    pub interval: Duration,
    /// Give up once this much time has passed since the first check
    pub max_wait: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_wait: Duration::from_secs(600),
        }
    }
}

impl PollConfig {
    /// Set the interval between status checks.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the overall wait budget.
    #[must_use]
    pub const fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }
}

/// Catalog search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Results requested per page
    pub page_size: u32,
    /// Maximum number of pages fetched per search
    pub max_pages: u32,
    /// Pause between page fetches
    pub page_delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: SearchQuery::DEFAULT_PAGE_SIZE,
            max_pages: 1,
            page_delay: Duration::from_millis(300),
        }
    }
}

impl SearchConfig {
    /// Set the page size (at least 1).
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the number of pages to fetch (at least 1).
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Set the pause between page fetches.
    #[must_use]
    pub const fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }
}

/// Download orchestrator configuration.
///
/// # Example
///
/// ```
/// use mangadl_core::MatchPolicy;
/// use mangadl_download::{OrchestratorConfig, PollConfig};
/// use std::time::Duration;
///
/// let config = OrchestratorConfig::new()
///     .with_match_policy(MatchPolicy::FuzzyWithFallback)
///     .with_poll(PollConfig::default().with_max_wait(Duration::from_secs(300)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// How far the manga title cascade may go
    pub match_policy: MatchPolicy,
    /// Poll each job to a terminal state instead of returning after submission
    pub wait_for_jobs: bool,
    /// Job polling parameters
    pub poll: PollConfig,
    /// Catalog search parameters
    pub search: SearchConfig,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::Fuzzy,
            wait_for_jobs: true,
            poll: PollConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl OrchestratorConfig {
    /// Create a configuration with defaults: fuzzy matching, wait for jobs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manga match policy.
    #[must_use]
    pub const fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Choose whether to poll jobs to completion.
    #[must_use]
    pub const fn with_wait_for_jobs(mut self, wait: bool) -> Self {
        self.wait_for_jobs = wait;
        self
    }

    /// Set the polling parameters.
    #[must_use]
    pub const fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Set the search parameters.
    #[must_use]
    pub const fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrchestratorConfig::new();
        assert_eq!(config.match_policy, MatchPolicy::Fuzzy);
        assert!(config.wait_for_jobs);
        assert_eq!(config.poll.interval, Duration::from_secs(2));
        assert_eq!(config.poll.max_wait, Duration::from_secs(600));
        assert_eq!(config.search.page_size, 100);
        assert_eq!(config.search.max_pages, 1);
        assert_eq!(config.search.page_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_search_bounds() {
        let search = SearchConfig::default().with_page_size(0).with_max_pages(0);
        assert_eq!(search.page_size, 1);
        assert_eq!(search.max_pages, 1);
    }
}
