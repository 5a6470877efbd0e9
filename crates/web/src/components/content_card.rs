use super::icons::Icon;
use super::{analysis_panel, dialog_trigger, escape, sentiment_style, RenderPhase, DIALOG_CLOSE};
use stockagent_core::domain::content::{ContentAnalysis, Platform};
use stockagent_core::format::preview_text;
use stockagent_core::sentiment::score_label;
use stockagent_core::time;

const TIP: &str = "💡 <strong>Tip:</strong> 이 분석은 AI가 생성했습니다. 투자 판단의 참고용으로만 활용하세요.";

pub fn dialog_id(item: &ContentAnalysis) -> String {
    format!("content-{}", item.id)
}

/// Summary card; in the interactive phase it also carries its detail dialog.
pub fn render(item: &ContentAnalysis, phase: RenderPhase) -> String {
    let card = card(item);
    if !phase.is_interactive() {
        return card;
    }
    let id = dialog_id(item);
    format!("{}{}", dialog_trigger(&id, &card), dialog(item, &id))
}

fn platform_badge(platform: Platform, with_icon: bool) -> String {
    let (class, icon) = match platform {
        Platform::Youtube => ("bg-red-100 text-red-600 dark:bg-red-900/30", Icon::Youtube),
        Platform::Telegram => ("bg-blue-100 text-blue-600 dark:bg-blue-900/30", Icon::MessageCircle),
        Platform::News | Platform::Other => {
            ("bg-emerald-100 text-emerald-700 dark:bg-emerald-900/30", Icon::Newspaper)
        }
    };
    let icon = if with_icon {
        icon.svg("w-3 h-3 mr-1")
    } else {
        String::new()
    };
    format!(
        r#"<span class="inline-flex items-center rounded-md px-2 py-0.5 text-xs font-semibold {class}">{icon}{}</span>"#,
        platform.label()
    )
}

fn card(item: &ContentAnalysis) -> String {
    let (tone, icon) = sentiment_style(item.sentiment_score);
    format!(
        r#"<div class="flex flex-col h-full overflow-hidden rounded-xl border bg-white dark:bg-slate-900 shadow-sm hover:shadow-lg transition-shadow border-slate-200 dark:border-slate-800 group">
<div class="p-4 pb-2"><div class="flex justify-between items-start">
<div class="flex items-center gap-2">{badge}<span class="text-xs text-slate-500 font-medium truncate max-w-[100px]">{source}</span></div>
<div class="flex items-center gap-1 text-xs font-bold {tone}">{icon}<span>{score}</span></div>
</div></div>
<div class="p-4 pt-2 flex-grow">
<h3 class="text-lg font-semibold leading-tight mb-2 line-clamp-2 text-left">{title}</h3>
<p class="line-clamp-4 text-sm text-slate-600 dark:text-slate-400 text-left">{preview}</p>
</div>
<div class="p-4 pt-0 text-xs text-slate-400 flex justify-between items-center">
<span>{date}</span>
<div class="flex items-center gap-1 hover:text-slate-600 dark:hover:text-slate-200 transition-colors">상세보기 {link}</div>
</div>
</div>"#,
        badge = platform_badge(item.platform, true),
        source = escape(&item.source_name),
        icon = icon.svg("w-4 h-4"),
        score = score_label(item.sentiment_score),
        title = escape(&item.title),
        preview = escape(&preview_text(&item.analysis_content)),
        date = escape(&time::card_date(&item.created_at)),
        link = Icon::ExternalLink.svg("w-3 h-3"),
    )
}

fn source_link(url: Option<&str>) -> String {
    let Some(url) = url.map(str::trim) else {
        return String::new();
    };
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return String::new();
    }
    format!(
        r#"<a href="{}" target="_blank" rel="noreferrer" class="text-blue-500 hover:underline flex items-center gap-1 text-sm font-medium">{}원본 보러가기</a>"#,
        escape(url),
        Icon::ExternalLink.svg("w-4 h-4"),
    )
}

fn dialog(item: &ContentAnalysis, id: &str) -> String {
    format!(
        r#"<dialog id="{id}" data-dismissable class="w-full sm:max-w-2xl max-h-[80vh] overflow-y-auto overflow-x-hidden rounded-lg p-6 backdrop:bg-black/50">
<div class="flex flex-col sm:flex-row sm:items-center gap-1 sm:gap-2 mb-2 items-start">
<div class="flex items-center gap-2">{badge}<span class="inline-flex rounded-md border px-2 py-0.5 text-xs">{source}</span></div>
<span class="text-sm text-slate-500">{timestamp}</span>
</div>
<h2 class="text-left text-xl font-semibold leading-relaxed break-words">{title}</h2>
<div class="flex items-center gap-2 pt-2">{link}</div>
{panel}
<div class="bg-yellow-50 dark:bg-yellow-900/20 p-4 rounded text-sm text-yellow-800 dark:text-yellow-200 mt-2">{TIP}</div>
{DIALOG_CLOSE}
</dialog>"#,
        badge = platform_badge(item.platform, false),
        source = escape(&item.source_name),
        timestamp = escape(&time::modal_timestamp(&item.created_at)),
        title = escape(&item.title),
        link = source_link(item.source_url.as_deref()),
        panel = analysis_panel(&item.analysis_content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ContentAnalysis {
        ContentAnalysis {
            id: 42,
            external_id: "abc".into(),
            source_name: "삼프로TV".into(),
            title: "반도체 <전망>".into(),
            analysis_content: "## 요약\\n**매수** 우위 - 단기".into(),
            sentiment_score: Some(72),
            platform: Platform::Youtube,
            source_url: Some("https://youtu.be/abc".into()),
            created_at: "2026-01-07 15:05:00".into(),
        }
    }

    #[test]
    fn card_markup_is_identical_in_both_phases() {
        let item = item();
        let static_html = render(&item, RenderPhase::Static);
        let interactive = render(&item, RenderPhase::InteractiveReady);

        assert!(interactive.contains(&static_html));
        assert!(!static_html.contains("<dialog"));
        assert!(interactive.contains(r#"<dialog id="content-42""#));
        assert!(interactive.contains(r#"data-dialog-target="content-42""#));
    }

    #[test]
    fn card_shows_preview_score_and_date() {
        let html = render(&item(), RenderPhase::Static);
        assert!(html.contains("72점"));
        assert!(html.contains("text-red-500"));
        assert!(html.contains("YouTube"));
        assert!(html.contains("반도체 &lt;전망&gt;"));
        assert!(html.contains("2026. 1. 7."));
        assert!(!html.contains("**"));
    }

    #[test]
    fn dialog_renders_markdown_and_source_link() {
        let html = render(&item(), RenderPhase::InteractiveReady);
        assert!(html.contains("<h2 class="));
        assert!(html.contains("<strong class="));
        assert!(html.contains(r#"href="https://youtu.be/abc""#));
        assert!(html.contains("2026. 01. 07. 오후 03:05"));
        assert!(html.contains("Tip:"));
    }

    #[test]
    fn missing_score_and_unsafe_source_are_handled() {
        let mut item = item();
        item.sentiment_score = None;
        item.source_url = Some("javascript:alert(1)".into());
        let html = render(&item, RenderPhase::InteractiveReady);
        assert!(html.contains("-점"));
        assert!(html.contains("text-amber-500"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("원본 보러가기"));
    }
}
