//! Page-level data fetches.
//!
//! Every function here swallows backend failures and hands back an "absence"
//! value (empty list, `None`, or the ticker as its own name). Pages only ever
//! see "no data", never an error.

use crate::backend::{BackendApi, BackendError, Endpoint, FetchPolicy};
use crate::domain::content::{ContentAnalysis, VideoAnalysis};
use crate::domain::price::StockName;
use crate::domain::summary::DailySummary;
use serde::de::DeserializeOwned;

pub const SITEMAP_REPORT_LIMIT: u32 = 100;

async fn fetch<T: DeserializeOwned>(
    backend: &dyn BackendApi,
    endpoint: &Endpoint,
    policy: FetchPolicy,
) -> Result<T, BackendError> {
    let body = backend.get_json(endpoint, policy).await?;
    if body.is_null() {
        return Err(BackendError::NotFound);
    }
    serde_json::from_value(body).map_err(|e| BackendError::Decode(e.to_string()))
}

fn or_fallback<T>(endpoint: &Endpoint, res: Result<T, BackendError>, fallback: T) -> T {
    match res {
        Ok(v) => v,
        Err(BackendError::NotFound) => {
            tracing::debug!(%endpoint, "backend has no data");
            fallback
        }
        Err(err) => {
            tracing::warn!(
                %endpoint,
                kind = err.kind(),
                error = %err,
                "backend fetch failed; rendering without data"
            );
            fallback
        }
    }
}

pub async fn latest_videos(backend: &dyn BackendApi, limit: u32) -> Vec<VideoAnalysis> {
    let endpoint = Endpoint::videos(limit);
    let res = fetch(backend, &endpoint, FetchPolicy::NoStore).await;
    or_fallback(&endpoint, res, Vec::new())
}

pub async fn contents(backend: &dyn BackendApi) -> Vec<ContentAnalysis> {
    let endpoint = Endpoint::contents();
    let res = fetch(backend, &endpoint, FetchPolicy::NoStore).await;
    or_fallback(&endpoint, res, Vec::new())
}

pub async fn ticker_contents(backend: &dyn BackendApi, ticker: &str) -> Vec<ContentAnalysis> {
    let endpoint = Endpoint::ticker_contents(ticker);
    let res = fetch(backend, &endpoint, FetchPolicy::NoStore).await;
    or_fallback(&endpoint, res, Vec::new())
}

pub async fn latest_summary(backend: &dyn BackendApi) -> Option<DailySummary> {
    let endpoint = Endpoint::daily_summary();
    let res = fetch(backend, &endpoint, FetchPolicy::NoStore).await.map(Some);
    or_fallback(&endpoint, res, None)
}

/// Published reports never change, so an hour-old copy is acceptable.
pub async fn report_by_date(backend: &dyn BackendApi, date: &str) -> Option<DailySummary> {
    let endpoint = Endpoint::daily_summary_for(date);
    let res = fetch(backend, &endpoint, FetchPolicy::HOURLY).await.map(Some);
    or_fallback(&endpoint, res, None)
}

pub async fn summary_list(
    backend: &dyn BackendApi,
    limit: u32,
    policy: FetchPolicy,
) -> Vec<DailySummary> {
    let endpoint = Endpoint::daily_summary_list(limit);
    let res = fetch(backend, &endpoint, policy).await;
    or_fallback(&endpoint, res, Vec::new())
}

/// Human-readable name for a ticker, or the ticker itself when unknown.
pub async fn stock_name(backend: &dyn BackendApi, ticker: &str) -> String {
    let endpoint = Endpoint::stock_name(ticker);
    let res = fetch::<StockName>(backend, &endpoint, FetchPolicy::NoStore)
        .await
        .and_then(|n| {
            n.name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or(BackendError::NotFound)
        });
    or_fallback(&endpoint, res, ticker.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::stub::StubBackend;
    use serde_json::json;

    fn content_json(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "external_id": format!("ext-{id}"),
            "source_name": "channel",
            "title": format!("title {id}"),
            "analysis_content": "## body",
            "sentiment_score": 65,
            "platform": "youtube",
            "created_at": "2026-01-27 09:00:00"
        })
    }

    #[tokio::test]
    async fn decodes_content_lists() {
        let backend = StubBackend::new()
            .with_json("/api/contents", json!([content_json(1), content_json(2)]));

        let items = contents(&backend).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 2);
        assert_eq!(backend.calls(), vec![("/api/contents".to_string(), FetchPolicy::NoStore)]);
    }

    #[tokio::test]
    async fn failures_collapse_to_empty_lists() {
        let backend = StubBackend::new()
            .with_error("/api/contents", BackendError::Transport("refused".into()))
            .with_error("/api/videos?limit=20", BackendError::Status(500))
            .with_json("/api/contents/NVDA", json!({ "unexpected": true }));

        assert!(contents(&backend).await.is_empty());
        assert!(latest_videos(&backend, 20).await.is_empty());
        assert!(ticker_contents(&backend, "NVDA").await.is_empty());
        assert!(summary_list(&backend, 7, FetchPolicy::NoStore).await.is_empty());
    }

    #[tokio::test]
    async fn null_summary_is_absent() {
        let backend = StubBackend::new().with_json("/api/daily-summary", json!(null));
        assert!(latest_summary(&backend).await.is_none());
    }

    #[tokio::test]
    async fn report_by_date_uses_hourly_window() {
        let backend = StubBackend::new().with_json(
            "/api/daily-summary/2026-01-27",
            json!({ "id": 1, "report_date": "2026-01-27", "buy_stock": "삼성전자" }),
        );

        let report = report_by_date(&backend, "2026-01-27").await.unwrap();
        assert_eq!(report.buy_display(), "삼성전자");
        assert_eq!(backend.calls()[0].1, FetchPolicy::HOURLY);

        assert!(report_by_date(&backend, "2020-01-01").await.is_none());
    }

    #[tokio::test]
    async fn stock_name_falls_back_to_ticker() {
        let backend = StubBackend::new()
            .with_json("/api/stock-name/NVDA", json!({ "name": "엔비디아" }))
            .with_json("/api/stock-name/AAPL", json!({}))
            .with_error("/api/stock-name/TSLA", BackendError::Transport("timeout".into()));

        assert_eq!(stock_name(&backend, "NVDA").await, "엔비디아");
        assert_eq!(stock_name(&backend, "AAPL").await, "AAPL");
        assert_eq!(stock_name(&backend, "TSLA").await, "TSLA");
        assert_eq!(stock_name(&backend, "MSFT").await, "MSFT");
    }
}
