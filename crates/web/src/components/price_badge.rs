use super::escape;
use super::icons::Icon;
use super::RenderPhase;
use stockagent_core::domain::price::PriceData;
use stockagent_core::format::{format_change_percent, format_price, PriceDirection};

/// Slot the enhancement script swaps for the live badge.
///
/// Static pages and blank tickers get no slot at all.
pub fn placeholder(ticker: &str, phase: RenderPhase) -> String {
    let ticker = ticker.trim();
    if ticker.is_empty() || !phase.is_interactive() {
        return String::new();
    }
    format!(
        r#"<span data-price-badge="{}" class="ml-3 text-xs text-slate-400 animate-pulse">실시간 가격 조회 중...</span>"#,
        escape(ticker)
    )
}

/// Resolved badge; a failed or malformed quote hides the badge entirely.
pub fn resolved(quote: Option<&PriceData>) -> String {
    let Some(quote) = quote else {
        return String::new();
    };

    let (class, icon) = match PriceDirection::from_change_percent(quote.change_percent) {
        PriceDirection::Up => ("text-red-600 bg-red-50 dark:bg-red-900/20", Icon::TrendingUp),
        PriceDirection::Down => ("text-blue-600 bg-blue-50 dark:bg-blue-900/20", Icon::TrendingDown),
        PriceDirection::Flat => ("text-slate-600 bg-slate-50 dark:bg-slate-800", Icon::Minus),
    };

    format!(
        r#"<div class="flex items-center gap-2 ml-4 px-3 py-1 rounded-full text-sm font-bold {class}"><span>{price}</span><span class="flex items-center text-xs">{icon}{change}</span></div>"#,
        price = escape(&format_price(quote.price, &quote.ticker)),
        icon = icon.svg("w-3 h-3 mr-1"),
        change = format_change_percent(quote.change_percent),
    )
}
