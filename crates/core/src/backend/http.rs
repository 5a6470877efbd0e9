use crate::backend::{BackendApi, BackendError, Endpoint, FetchPolicy};
use crate::config::Settings;
use anyhow::{Context, Result};
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: Url,

    // Only responses fetched under `FetchPolicy::Revalidate` land here.
    cache: tokio::sync::Mutex<HashMap<Endpoint, CachedResponse>>,
}

#[derive(Debug, Clone)]
struct CachedResponse {
    body: Value,
    fetched_at: Instant,
}

impl HttpBackend {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.backend_base_url, settings.backend_timeout)
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("BACKEND_BASE_URL is not a valid url: {base_url}"))?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "BACKEND_BASE_URL cannot be used as a base: {base_url}"
        );

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build backend http client")?;

        Ok(Self {
            http,
            base_url,
            cache: tokio::sync::Mutex::new(HashMap::new()),
        })
    }

    fn url(&self, endpoint: &Endpoint) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                BackendError::Transport(format!("cannot join path onto {}", self.base_url))
            })?;
            path.pop_if_empty();
            for segment in endpoint.segments() {
                path.push(segment);
            }
        }
        if !endpoint.query().is_empty() {
            url.query_pairs_mut()
                .extend_pairs(endpoint.query().iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn fetch_once(&self, endpoint: &Endpoint) -> Result<Value, BackendError> {
        let url = self.url(endpoint)?;

        let res = self
            .http
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let text = res
            .text()
            .await
            .map_err(|e| BackendError::Transport(format!("failed to read body: {e}")))?;
        serde_json::from_str::<Value>(&text).map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// A fresh entry, if any. On a miss every entry older than `max_age` is
    /// dropped.
    async fn cached(&self, endpoint: &Endpoint, max_age: Duration) -> Option<Value> {
        let mut cache = self.cache.lock().await;
        if let Some(hit) = cache
            .get(endpoint)
            .filter(|hit| hit.fetched_at.elapsed() < max_age)
        {
            return Some(hit.body.clone());
        }
        cache.retain(|_, entry| entry.fetched_at.elapsed() < max_age);
        None
    }
}

#[async_trait::async_trait]
impl BackendApi for HttpBackend {
    async fn get_json(
        &self,
        endpoint: &Endpoint,
        policy: FetchPolicy,
    ) -> Result<Value, BackendError> {
        let FetchPolicy::Revalidate(max_age) = policy else {
            return self.fetch_once(endpoint).await;
        };

        if let Some(body) = self.cached(endpoint, max_age).await {
            tracing::debug!(%endpoint, "backend cache hit");
            return Ok(body);
        }

        let body = self.fetch_once(endpoint).await?;
        self.cache.lock().await.insert(
            endpoint.clone(),
            CachedResponse {
                body: body.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(body)
    }
}
