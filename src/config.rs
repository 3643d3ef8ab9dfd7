use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps";
pub const DEFAULT_QUERY: &str = "Car Detailing";
pub const DEFAULT_OUTPUT: &str = "car_detailing_data_2.csv";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Everything a scrape run needs to know. `Default` reproduces the
/// behaviour of the single-query car detailing run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub maps_url: String,
    pub search_query: String,
    pub output_path: PathBuf,
    pub headless: bool,
    /// Upper bound for page loads and other tab operations.
    pub navigation_timeout: Duration,
    /// Upper bound for waiting on the search box and the results feed.
    pub element_timeout: Duration,
    /// Pause after submitting the search.
    pub search_settle: Duration,
    /// Pause after each scroll so lazy cards can render.
    pub scroll_delay: Duration,
    pub max_scrolls: usize,
    pub http_timeout: Duration,
    pub user_agent: String,
    pub accept_invalid_certs: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            maps_url: DEFAULT_MAPS_URL.to_string(),
            search_query: DEFAULT_QUERY.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            headless: false,
            navigation_timeout: Duration::from_secs(60),
            element_timeout: Duration::from_secs(10),
            search_settle: Duration::from_secs(3),
            scroll_delay: Duration::from_secs(2),
            max_scrolls: 500,
            http_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl ScrapeConfig {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_maps_url(mut self, url: impl Into<String>) -> Self {
        self.maps_url = url.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub fn with_max_scrolls(mut self, max_scrolls: usize) -> Self {
        self.max_scrolls = max_scrolls;
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Disables TLS certificate verification for website fetches.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_single_query_run() {
        let config = ScrapeConfig::default();
        assert_eq!(config.search_query, "Car Detailing");
        assert_eq!(config.output_path, PathBuf::from("car_detailing_data_2.csv"));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.navigation_timeout > config.element_timeout);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScrapeConfig::default()
            .with_query("Dentists")
            .with_output("out.csv")
            .with_max_scrolls(3)
            .accept_invalid_certs(true);
        assert_eq!(config.search_query, "Dentists");
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.max_scrolls, 3);
        assert!(config.accept_invalid_certs);
    }
}
