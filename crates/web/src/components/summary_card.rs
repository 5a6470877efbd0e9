use super::icons::Icon;
use super::escape;
use stockagent_core::domain::summary::DailySummary;
use stockagent_core::seo::stock_path;

/// The day's buy and sell picks; renders nothing without a summary.
pub fn render(summary: Option<&DailySummary>) -> String {
    let Some(summary) = summary else {
        return String::new();
    };

    format!(
        r#"<section class="rounded-xl border-2 border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 shadow-sm">
<div class="p-6 pb-2"><div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2">
<h2 class="flex items-center gap-2 text-xl font-semibold">🤖 오늘의 AI 투자 전략</h2>
<div class="flex items-center text-sm text-slate-500 bg-slate-100 px-3 py-1 rounded-full dark:bg-slate-800 shrink-0 w-fit">{calendar}{date}</div>
</div></div>
<div class="p-6 pt-2"><div class="grid grid-cols-1 md:grid-cols-2 gap-4">
<div class="p-4 bg-green-50 dark:bg-green-900/20 rounded-lg border border-green-100 dark:border-green-900">
<div class="flex items-center gap-2 mb-2 text-green-700 dark:text-green-400 font-bold text-lg">{up}<span>강력 매수 (Buy)</span></div>
<div class="text-2xl font-black text-slate-900 dark:text-slate-100 mb-2">{buy}</div>
<p class="text-sm text-slate-600 dark:text-slate-300 leading-relaxed">{buy_reason}</p>
</div>
<div class="p-4 bg-red-50 dark:bg-red-900/20 rounded-lg border border-red-100 dark:border-red-900">
<div class="flex items-center gap-2 mb-2 text-red-700 dark:text-red-400 font-bold text-lg">{down}<span>매도/관망 (Sell)</span></div>
<div class="text-2xl font-black text-slate-900 dark:text-slate-100 mb-2">{sell}</div>
<p class="text-sm text-slate-600 dark:text-slate-300 leading-relaxed">{sell_reason}</p>
</div>
</div></div>
</section>"#,
        calendar = Icon::Calendar.svg("w-4 h-4 mr-1"),
        date = escape(&summary.report_date),
        up = Icon::TrendingUp.svg("w-6 h-6"),
        down = Icon::TrendingDown.svg("w-6 h-6"),
        buy = stock_link(summary.buy_display(), summary.buy_ticker.as_deref()),
        buy_reason = escape(summary.buy_reason_text()),
        sell = stock_link(summary.sell_display(), summary.sell_ticker.as_deref()),
        sell_reason = escape(summary.sell_reason_text()),
    )
}

/// Links a pick to its drill-down page when the backend supplied a ticker.
fn stock_link(name: &str, ticker: Option<&str>) -> String {
    match ticker.map(str::trim).filter(|t| !t.is_empty()) {
        Some(ticker) => format!(
            r#"<a href="{}" class="hover:underline">{}</a>"#,
            escape(&stock_path(ticker)),
            escape(name)
        ),
        None => escape(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_summary_renders_nothing() {
        assert!(render(None).is_empty());
    }

    #[test]
    fn picks_link_to_ticker_pages() {
        let summary = DailySummary {
            id: 1,
            report_date: "2026-01-27".into(),
            buy_stock: Some("삼성전자".into()),
            buy_ticker: Some("005930.KS".into()),
            buy_reason: Some("HBM 수주".into()),
            sell_stock: None,
            sell_ticker: None,
            sell_reason: None,
            created_at: None,
        };

        let html = render(Some(&summary));
        assert!(html.contains(r#"<a href="/stock/005930.KS" class="hover:underline">삼성전자</a>"#));
        assert!(html.contains("HBM 수주"));
        assert!(html.contains("종목 없음"));

        let odd = DailySummary {
            buy_ticker: Some("BRK/B".into()),
            ..summary
        };
        assert!(render(Some(&odd)).contains(r#"href="/stock/BRK%2FB""#));
        assert!(html.contains("2026-01-27"));
    }
}
