use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

pub const ANALYZE_PATH: &str = "/api/analyze-review";
pub const REVIEWS_PATH: &str = "/api/reviews";

/// Where the collaborator services live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// `None` leaves timing to the transport.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn analyze_url(&self) -> String {
        self.endpoint(ANALYZE_PATH)
    }

    pub fn reviews_url(&self) -> String {
        self.endpoint(REVIEWS_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}
