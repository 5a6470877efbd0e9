pub mod components;
pub mod request_id;
pub mod routes;

use axum::{body::Body, http::Request, middleware, routing::get, Router};
use std::sync::Arc;
use stockagent_core::backend::BackendApi;
use stockagent_core::config::Settings;
use tower_http::trace::TraceLayer;

use components::RenderPhase;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(backend: Arc<dyn BackendApi>, settings: Settings) -> Self {
        Self {
            backend,
            settings: Arc::new(settings),
        }
    }

    pub fn phase(&self) -> RenderPhase {
        RenderPhase::from_settings(&self.settings)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::home))
        .route("/videos", get(routes::pages::videos))
        .route("/report/:date", get(routes::pages::report))
        .route("/stock/:ticker", get(routes::pages::stock))
        .route("/api/stock-price/:ticker", get(routes::proxy::stock_price))
        .route(
            "/fragments/price-badge/:ticker",
            get(routes::fragments::price_badge),
        )
        .route("/sitemap.xml", get(routes::seo::sitemap))
        .route("/robots.txt", get(routes::seo::robots))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http",
                    method = %req.method(),
                    uri = %req.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

async fn healthz() -> &'static str {
    "ok"
}


#[cfg(test)]
mod tests {
    use super::test_support::{get, state_with};
    use axum::http::StatusCode;
    use stockagent_core::backend::stub::StubBackend;

    #[tokio::test]
    async fn healthz_is_ok_and_tagged() {
        let (status, headers, body) = get(state_with(StubBackend::new()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
        assert!(headers.contains_key("x-request-id"));
    }
}
