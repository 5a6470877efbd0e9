//! Server-rendered pages.
//!
//! Each handler joins its backend fetches, then composes components into a
//! layout. Fetches never fail from a handler's point of view, so pages always
//! render: missing data becomes a placeholder.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use stockagent_core::backend::FetchPolicy;
use stockagent_core::domain::summary::DailySummary;
use stockagent_core::fetch;
use stockagent_core::sentiment::chart_series;
use stockagent_core::seo::{report_path, PageMetadata, SITE_NAME};

use crate::components::icons::Icon;
use crate::components::{
    chart, content_card, empty_state, escape, layout, price_badge, summary_card,
    video_card,
};
use crate::AppState;

const HOME_REPORT_LIMIT: u32 = 7;
const VIDEO_LIMIT: u32 = 20;

const GRID: &str = "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3";

fn header(title: &str, total: usize) -> String {
    format!(
        r#"<div class="flex items-center justify-between">
<h1 class="text-3xl font-bold tracking-tight text-slate-900 dark:text-slate-100">{title}</h1>
<span class="rounded-md border px-3 py-1 text-xs font-semibold">Total: {total}</span>
</div>"#
    )
}

fn recent_reports(reports: &[DailySummary]) -> String {
    if reports.is_empty() {
        return String::new();
    }
    let links: String = reports
        .iter()
        .map(|r| {
            format!(
                r#"<li><a href="{}" class="inline-flex items-center gap-1 rounded-full bg-white dark:bg-slate-900 border px-3 py-1 text-sm hover:bg-slate-100 dark:hover:bg-slate-800">{}{}</a></li>"#,
                escape(&report_path(&r.report_date)),
                Icon::Calendar.svg("w-3 h-3"),
                escape(&r.report_date),
            )
        })
        .collect();
    format!(
        r#"<nav aria-label="지난 리포트"><h2 class="text-sm font-semibold text-slate-500 mb-2">📚 지난 리포트</h2><ul class="flex flex-wrap gap-2">{links}</ul></nav>"#
    )
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let backend = state.backend.as_ref();
    let (items, latest, reports) = tokio::join!(
        fetch::contents(backend),
        fetch::latest_summary(backend),
        fetch::summary_list(backend, HOME_REPORT_LIMIT, FetchPolicy::NoStore),
    );
    tracing::debug!(items = items.len(), reports = reports.len(), "home fetched");

    let phase = state.phase();
    let grid = if items.is_empty() {
        empty_state("아직 AI가 수집한 분석 데이터가 없습니다.")
    } else {
        let cards: String = items
            .iter()
            .map(|item| content_card::render(item, phase))
            .collect();
        format!(r#"<div class="{GRID}">{cards}</div>"#)
    };

    let main = [
        header(&format!("📈 {SITE_NAME}"), items.len()),
        summary_card::render(latest.as_ref()),
        chart::render(&chart_series(&items)),
        recent_reports(&reports),
        grid,
    ]
    .concat();

    Html(layout::page(&PageMetadata::site_default(), &state.settings, &main))
}

pub async fn videos(State(state): State<AppState>) -> Html<String> {
    let videos = fetch::latest_videos(state.backend.as_ref(), VIDEO_LIMIT).await;

    let phase = state.phase();
    let grid = if videos.is_empty() {
        empty_state("아직 AI가 분석한 영상이 없습니다.")
    } else {
        let cards: String = videos
            .iter()
            .map(|v| video_card::render(v, phase))
            .collect();
        format!(r#"<div class="{GRID}">{cards}</div>"#)
    };

    let main = [
        header("🎬 유튜브 분석", videos.len()),
        chart::render(&chart_series(&videos)),
        grid,
    ]
    .concat();

    let meta = PageMetadata::titled(format!("유튜브 분석 | {SITE_NAME}"));
    Html(layout::page(&meta, &state.settings, &main))
}

fn back_link() -> String {
    format!(
        r#"<a href="/" class="inline-flex items-center text-sm text-slate-500 hover:text-slate-900 dark:hover:text-slate-100">{}메인으로 돌아가기</a>"#,
        Icon::ArrowLeft.svg("w-4 h-4 mr-1")
    )
}

pub async fn report(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> (StatusCode, Html<String>) {
    let report = fetch::report_by_date(state.backend.as_ref(), &date).await;
    let meta = PageMetadata::for_report(state.settings.site_base(), &date, report.as_ref());
    let date_html = escape(&date);

    let Some(report) = report else {
        let main = format!(
            r#"{back}<div class="flex items-center justify-center py-24"><h1 class="text-2xl font-bold">해당 날짜({date_html})의 리포트가 없습니다. 😢</h1></div>"#,
            back = back_link(),
        );
        return (
            StatusCode::NOT_FOUND,
            Html(layout::page(&meta, &state.settings, &main)),
        );
    };

    let main = format!(
        r#"<div class="mx-auto max-w-4xl space-y-6">
{back}
<h1 class="text-3xl font-bold tracking-tight mb-8">📅 {date_html} AI 투자 리포트</h1>
{card}
<div class="mt-8 p-6 bg-white dark:bg-slate-900 rounded-lg shadow-sm border border-slate-200 dark:border-slate-800">
<h2 class="text-xl font-semibold mb-4">💡 AI 코멘트</h2>
<p class="text-slate-600 dark:text-slate-300 leading-relaxed">오늘 수집된 다양한 유튜브 및 텔레그램 데이터를 종합한 결과입니다. 투자의 참고 자료로만 활용하시기 바랍니다.</p>
</div>
</div>"#,
        back = back_link(),
        card = summary_card::render(Some(&report)),
    );
    (StatusCode::OK, Html(layout::page(&meta, &state.settings, &main)))
}

/// `엔비디아(NVDA)` when the backend knows a distinct name, else `NVDA`.
fn display_title(name: &str, ticker: &str) -> String {
    if name == ticker {
        ticker.to_string()
    } else {
        format!("{name}({ticker})")
    }
}

pub async fn stock(State(state): State<AppState>, Path(ticker): Path<String>) -> Html<String> {
    let ticker = ticker.trim().to_uppercase();
    let backend = state.backend.as_ref();
    let (name, items) = tokio::join!(
        fetch::stock_name(backend, &ticker),
        fetch::ticker_contents(backend, &ticker),
    );

    let title = display_title(&name, &ticker);
    let phase = state.phase();

    let head = format!(
        r#"<div class="flex items-center gap-4 mb-6">
<a href="/" class="p-2 bg-white dark:bg-slate-900 rounded-full shadow hover:bg-slate-100 transition-colors" aria-label="메인으로">{back}</a>
<div>
<h1 class="text-3xl font-bold flex items-center text-slate-900 dark:text-slate-100">{title} 집중 분석{badge}</h1>
<p class="text-slate-500 mt-1">AI가 수집한 최근 관련 뉴스 및 유튜브 감성 분석</p>
</div>
</div>"#,
        back = Icon::ArrowLeft.svg("w-5 h-5 text-slate-600 dark:text-slate-300"),
        title = escape(&title),
        badge = price_badge::placeholder(&ticker, phase),
    );

    let body = if items.is_empty() {
        empty_state(&format!(
            "아직 <strong>{}</strong>에 대해 AI가 수집한 데이터가 없습니다. <br/>(다른 종목을 검색하거나, 데이터 수집을 기다려주세요!)",
            escape(&ticker)
        ))
    } else {
        let cards: String = items
            .iter()
            .map(|item| content_card::render(item, phase))
            .collect();
        format!(
            r#"{}<div class="{GRID}">{cards}</div>"#,
            chart::render(&chart_series(&items))
        )
    };

    let meta = PageMetadata::titled(format!("{title} 집중 분석 | {SITE_NAME}"));
    Html(layout::page(&meta, &state.settings, &format!("{head}{body}")))
}
