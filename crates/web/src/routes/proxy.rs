//! Same-origin relay for live stock quotes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use stockagent_core::backend::{BackendApi, BackendError, Endpoint, FetchPolicy};

use crate::AppState;

const BACKEND_ERROR_MESSAGE: &str = "백엔드 응답 에러";
const FETCH_FAILED_MESSAGE: &str = "데이터를 가져오지 못했습니다.";

/// Outcome of one relayed quote request.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceRelay {
    Quote(Value),
    /// The backend answered with a non-success status, passed through as-is.
    BackendStatus(StatusCode),
    /// The backend could not be reached or sent something unreadable.
    Failed,
}

/// Fetches a quote with no caching. The ticker is forwarded verbatim.
pub async fn relay_stock_price(backend: &dyn BackendApi, ticker: &str) -> PriceRelay {
    let endpoint = Endpoint::stock_price(ticker);
    match backend.get_json(&endpoint, FetchPolicy::NoStore).await {
        Ok(body) => PriceRelay::Quote(body),
        Err(BackendError::Status(code)) => {
            tracing::warn!(%endpoint, status = code, "backend rejected stock price request");
            PriceRelay::BackendStatus(
                StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
            )
        }
        Err(err) => {
            tracing::warn!(%endpoint, kind = err.kind(), error = %err, "stock price relay failed");
            sentry_anyhow::capture_anyhow(&anyhow::Error::new(err));
            PriceRelay::Failed
        }
    }
}

pub async fn stock_price(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Response {
    match relay_stock_price(state.backend.as_ref(), &ticker).await {
        PriceRelay::Quote(body) => Json(body).into_response(),
        PriceRelay::BackendStatus(status) => (
            status,
            Json(json!({ "error": BACKEND_ERROR_MESSAGE, "status": status.as_u16() })),
        )
            .into_response(),
        PriceRelay::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": FETCH_FAILED_MESSAGE })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get, state_with};
    use stockagent_core::backend::stub::StubBackend;

    #[tokio::test]
    async fn relays_backend_body_unchanged() {
        let quote = json!({
            "ticker": "005930.KS",
            "price": 71000.0,
            "change": 1050.0,
            "change_percent": 1.5,
            "extra": "kept"
        });
        let backend = StubBackend::new().with_json("/api/stock-price/005930.KS", quote.clone());

        let (status, headers, body) = get(state_with(backend), "/api/stock-price/005930.KS").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers["content-type"].to_str().unwrap().starts_with("application/json"));
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), quote);
    }

    #[tokio::test]
    async fn mirrors_backend_status() {
        let backend = StubBackend::new()
            .with_error("/api/stock-price/NOPE", BackendError::Status(404));

        let (status, _, body) = get(state_with(backend), "/api/stock-price/NOPE").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "error": BACKEND_ERROR_MESSAGE, "status": 404 }));
    }

    #[tokio::test]
    async fn transport_failure_is_a_generic_500() {
        let backend = StubBackend::new()
            .with_error("/api/stock-price/NVDA", BackendError::Transport("refused".into()));

        let (status, _, body) = get(state_with(backend), "/api/stock-price/NVDA").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "error": FETCH_FAILED_MESSAGE }));
    }

    #[tokio::test]
    async fn never_caches_quotes() {
        let backend = StubBackend::new().with_json("/api/stock-price/NVDA", json!({}));
        relay_stock_price(&backend, "NVDA").await;
        relay_stock_price(&backend, "NVDA").await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, policy)| *policy == FetchPolicy::NoStore));
    }

    #[tokio::test]
    async fn decode_failure_is_not_mirrored() {
        let backend = StubBackend::new()
            .with_error("/api/stock-price/NVDA", BackendError::Decode("eof".into()));
        assert_eq!(relay_stock_price(&backend, "NVDA").await, PriceRelay::Failed);
    }
}
