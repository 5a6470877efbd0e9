//! Server-side HTML fragments.
//!
//! Components return plain `String`s; handlers wrap the finished page in
//! `axum::response::Html`. Every piece of backend text goes through
//! [`escape`] before it lands in markup.

pub mod chart;
pub mod content_card;
pub mod icons;
pub mod layout;
pub mod price_badge;
pub mod summary_card;
pub mod video_card;

use stockagent_core::config::Settings;
use stockagent_core::markdown::render_analysis;
use stockagent_core::sentiment::Sentiment;

pub use stockagent_core::markdown::escape_html as escape;

/// Whether the page may attach client-side behaviour.
///
/// Card markup is the same in both phases; only the trigger wrapper, the
/// detail dialogs and the live price slots depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Static,
    InteractiveReady,
}

impl RenderPhase {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.interactive {
            RenderPhase::InteractiveReady
        } else {
            RenderPhase::Static
        }
    }

    pub fn is_interactive(self) -> bool {
        self == RenderPhase::InteractiveReady
    }
}

/// Text colour and icon for a sentiment bucket.
pub(crate) fn sentiment_style(score: Option<i32>) -> (&'static str, icons::Icon) {
    match Sentiment::from_score(score) {
        Sentiment::Bullish => ("text-red-500", icons::Icon::TrendingUp),
        Sentiment::Bearish => ("text-blue-500", icons::Icon::TrendingDown),
        Sentiment::Neutral => ("text-amber-500", icons::Icon::Minus),
    }
}

/// Wraps a card so the enhancement script opens `dialog_id` on click or Enter.
pub(crate) fn dialog_trigger(dialog_id: &str, card: &str) -> String {
    format!(
        r#"<div class="h-full" role="button" tabindex="0" aria-haspopup="dialog" data-dialog-target="{dialog_id}">{card}</div>"#
    )
}

/// The boxed "AI report" section of a detail dialog.
pub(crate) fn analysis_panel(markdown: &str) -> String {
    format!(
        r#"<div class="mt-4 p-6 bg-slate-50 dark:bg-slate-900 rounded-lg border overflow-x-hidden">
<div class="flex items-center gap-2 mb-4 text-indigo-600 font-semibold border-b pb-2">{bot}AI 투자 분석 리포트</div>
<article class="prose prose-slate dark:prose-invert prose-sm w-full max-w-none break-words overflow-x-hidden">{body}</article>
</div>"#,
        bot = icons::Icon::Bot.svg("w-5 h-5"),
        body = render_analysis(markdown),
    )
}

/// Footer row of a detail dialog.
pub(crate) const DIALOG_CLOSE: &str = r#"<form method="dialog" class="mt-4 flex justify-end"><button class="px-4 py-2 text-sm rounded-md bg-slate-100 hover:bg-slate-200 dark:bg-slate-800">닫기</button></form>"#;

/// Placeholder shown when a page has nothing to list.
pub(crate) fn empty_state(message_html: &str) -> String {
    format!(
        r#"<div class="text-center py-20 text-slate-500 bg-white dark:bg-slate-900 rounded-lg border border-dashed border-slate-300 dark:border-slate-700">{message_html}</div>"#
    )
}
