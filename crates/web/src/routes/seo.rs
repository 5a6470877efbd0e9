use axum::{extract::State, http::header, response::IntoResponse};
use chrono::Utc;
use stockagent_core::backend::FetchPolicy;
use stockagent_core::fetch::{self, SITEMAP_REPORT_LIMIT};
use stockagent_core::seo;

use crate::AppState;

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let reports = fetch::summary_list(
        state.backend.as_ref(),
        SITEMAP_REPORT_LIMIT,
        FetchPolicy::HOURLY,
    )
    .await;
    let entries = seo::build_sitemap(state.settings.site_base(), &reports, Utc::now());
    tracing::debug!(entries = entries.len(), "sitemap built");

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        seo::sitemap_xml(&entries),
    )
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        seo::robots_txt(state.settings.site_base()),
    )
}
