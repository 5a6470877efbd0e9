//! Sentiment timeline as an inline SVG line chart.
//!
//! Scores run 0 (fear) to 100 (greed) on a fixed y-axis with a dashed
//! reference line at the neutral score. Hovering a dot shows its tooltip
//! through the SVG `<title>` element.

use super::escape;
use stockagent_core::sentiment::{ChartPoint, ChartTone, NEUTRAL_SCORE};
use std::fmt::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 300.0;
const LEFT: f64 = 40.0;
const RIGHT: f64 = 30.0;
const TOP: f64 = 10.0;
const BOTTOM: f64 = 30.0;

const LINE_COLOR: &str = "#6366f1";
const REFERENCE_COLOR: &str = "#9ca3af";
const MAX_X_LABELS: usize = 8;

fn plot_width() -> f64 {
    WIDTH - LEFT - RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - TOP - BOTTOM
}

fn x_at(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return LEFT + plot_width() / 2.0;
    }
    LEFT + plot_width() * index as f64 / (len - 1) as f64
}

fn y_at(score: i32) -> f64 {
    let clamped = score.clamp(0, 100) as f64;
    TOP + plot_height() * (100.0 - clamped) / 100.0
}

fn tone_class(tone: ChartTone) -> &'static str {
    match tone {
        ChartTone::Hot => "text-red-500",
        ChartTone::Cold => "text-blue-500",
        ChartTone::Mild => "text-yellow-500",
    }
}

fn tone_stroke(tone: ChartTone) -> &'static str {
    match tone {
        ChartTone::Hot => "#ef4444",
        ChartTone::Cold => "#3b82f6",
        ChartTone::Mild => LINE_COLOR,
    }
}

/// The chart card; empty input renders nothing so callers can skip the section.
pub fn render(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="rounded-xl border bg-white dark:bg-slate-900 shadow-sm">
<div class="p-6">
<h2 class="text-lg font-semibold">📊 AI 시장 감정 분석 (Fear &amp; Greed)</h2>
<p class="text-sm text-slate-500">최근 분석된 콘텐츠들의 시장 긍정/부정 지수 흐름입니다. (0: 공포 ~ 100: 탐욕)</p>
</div>
<div class="pb-6 pr-2">{svg}</div>
</section>"#,
        svg = svg(points)
    )
}

fn svg(points: &[ChartPoint]) -> String {
    let len = points.len();
    let mut out = format!(
        r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" class="w-full h-[300px]" role="img" aria-label="sentiment timeline" font-size="12">"#
    );

    for tick in [0, 25, 50, 75, 100] {
        let y = y_at(tick);
        let _ = write!(
            out,
            r##"<line x1="{LEFT}" x2="{x2}" y1="{y:.1}" y2="{y:.1}" stroke="#e5e7eb" stroke-dasharray="3 3"/><text x="{tx}" y="{ty:.1}" text-anchor="end" fill="#6b7280">{tick}</text>"##,
            x2 = WIDTH - RIGHT,
            tx = LEFT - 6.0,
            ty = y + 4.0,
        );
    }

    let neutral_y = y_at(NEUTRAL_SCORE);
    let _ = write!(
        out,
        r#"<line class="reference" x1="{LEFT}" x2="{x2}" y1="{neutral_y:.1}" y2="{neutral_y:.1}" stroke="{REFERENCE_COLOR}" stroke-dasharray="3 3"/><text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" fill="{REFERENCE_COLOR}">중립</text>"#,
        x2 = WIDTH - RIGHT,
        lx = LEFT + plot_width() / 2.0,
        ly = neutral_y - 6.0,
    );

    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i, len), y_at(p.score)))
        .collect();
    let _ = write!(
        out,
        r#"<polyline points="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="3" stroke-linejoin="round"/>"#,
        coords.join(" ")
    );

    let step = len.div_ceil(MAX_X_LABELS).max(1);
    for (i, point) in points.iter().enumerate() {
        let x = x_at(i, len);
        let tone = point.tone();
        let _ = write!(
            out,
            r#"<circle cx="{x:.1}" cy="{cy:.1}" r="4" fill="{LINE_COLOR}" stroke="{stroke}" stroke-width="2" class="{class}"><title>{tooltip}</title></circle>"#,
            cy = y_at(point.score),
            stroke = tone_stroke(tone),
            class = tone_class(tone),
            tooltip = tooltip(point),
        );
        if i % step == 0 {
            let _ = write!(
                out,
                r##"<text x="{x:.1}" y="{y}" text-anchor="middle" fill="#6b7280">{}</text>"##,
                escape(&point.date_label),
                y = HEIGHT - 8.0,
            );
        }
    }

    out.push_str("</svg>");
    out
}

fn tooltip(point: &ChartPoint) -> String {
    format!(
        "{}\n{} · {}\n점수: {}점",
        escape(&point.title),
        escape(&point.source),
        escape(&point.date_label),
        point.score
    )
}
