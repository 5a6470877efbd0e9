use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub mod error;
pub mod http;
#[cfg(any(test, feature = "stub"))]
pub mod stub;

pub use error::BackendError;
pub use http::HttpBackend;

/// How long a previously fetched response may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Always hit the backend and never remember the response.
    NoStore,
    /// Reuse a successful response younger than the window.
    Revalidate(Duration),
}

impl FetchPolicy {
    pub const HOURLY: FetchPolicy = FetchPolicy::Revalidate(Duration::from_secs(3600));
}

/// A backend resource: fixed path segments plus optional query pairs.
///
/// Segments are pushed onto the base url one by one, so a ticker such as
/// `BRK/B` stays a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(segments: &[&str]) -> Self {
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
        }
    }

    fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn videos(limit: u32) -> Self {
        Self::new(&["api", "videos"]).with_query("limit", limit)
    }

    pub fn contents() -> Self {
        Self::new(&["api", "contents"])
    }

    pub fn ticker_contents(ticker: &str) -> Self {
        Self::new(&["api", "contents", ticker])
    }

    pub fn daily_summary() -> Self {
        Self::new(&["api", "daily-summary"])
    }

    pub fn daily_summary_for(date: &str) -> Self {
        Self::new(&["api", "daily-summary", date])
    }

    pub fn daily_summary_list(limit: u32) -> Self {
        Self::new(&["api", "daily-summary-list"]).with_query("limit", limit)
    }

    pub fn stock_price(ticker: &str) -> Self {
        Self::new(&["api", "stock-price", ticker])
    }

    pub fn stock_name(ticker: &str) -> Self {
        Self::new(&["api", "stock-name", ticker])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// The external analysis service, seen as a JSON-over-HTTP collaborator.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    async fn get_json(&self, endpoint: &Endpoint, policy: FetchPolicy)
        -> Result<Value, BackendError>;
}
