use super::icons::Icon;
use super::{analysis_panel, dialog_trigger, escape, RenderPhase, DIALOG_CLOSE};
use stockagent_core::domain::content::VideoAnalysis;
use stockagent_core::time;

pub fn render(item: &VideoAnalysis, phase: RenderPhase) -> String {
    let card = card(item);
    if !phase.is_interactive() {
        return card;
    }
    let id = format!("video-{}", item.id);
    format!("{}{}", dialog_trigger(&id, &card), dialog(item, &id))
}

fn card(item: &VideoAnalysis) -> String {
    format!(
        r#"<div class="flex flex-col h-full rounded-xl border bg-white dark:bg-slate-900 shadow-sm hover:border-slate-400 transition-all hover:shadow-md group">
<div class="p-6 pb-3">
<div class="flex items-center justify-between mb-2 gap-2">
<span class="inline-flex rounded-md border px-2 py-0.5 text-xs font-semibold group-hover:bg-slate-100 dark:group-hover:bg-slate-800 shrink-0">{channel}</span>
<span class="text-xs text-slate-400 flex items-center gap-1 shrink-0 whitespace-nowrap">{calendar}{date}</span>
</div>
<h3 class="text-left text-lg font-semibold leading-snug line-clamp-2 min-h-[3.5rem] group-hover:text-blue-600 transition-colors" title="{title}">{title}</h3>
</div>
<div class="px-6 flex-1 pb-4"><p class="text-sm text-slate-500 line-clamp-3 leading-relaxed">{content}</p></div>
<div class="px-6 pt-0 pb-4"><span class="flex items-center justify-center w-full h-8 text-xs rounded-md bg-slate-100 dark:bg-slate-800">상세 분석 보기</span></div>
</div>"#,
        channel = escape(&item.channel_name),
        calendar = Icon::Calendar.svg("w-3 h-3"),
        date = escape(&time::card_date(&item.created_at)),
        title = escape(&item.video_title),
        content = escape(&item.analysis_content),
    )
}

fn dialog(item: &VideoAnalysis, id: &str) -> String {
    format!(
        r#"<dialog id="{id}" data-dismissable class="w-full sm:max-w-2xl max-h-[80vh] overflow-y-auto overflow-x-hidden rounded-lg p-6 backdrop:bg-black/50">
<div class="flex items-center gap-2 mb-2">
<span class="inline-flex rounded-md bg-slate-900 text-white px-2 py-0.5 text-xs font-semibold">{channel}</span>
<span class="text-sm text-slate-500">{timestamp}</span>
</div>
<h2 class="text-left text-xl font-semibold leading-relaxed break-words">{title}</h2>
<div class="flex items-center gap-2 pt-2"><a href="{url}" target="_blank" rel="noreferrer" class="text-blue-500 hover:underline flex items-center gap-1 text-sm font-medium">{youtube} 유튜브 영상 보러가기 {external}</a></div>
{panel}
{DIALOG_CLOSE}
</dialog>"#,
        channel = escape(&item.channel_name),
        timestamp = escape(&time::modal_timestamp(&item.created_at)),
        title = escape(&item.video_title),
        url = escape(&item.watch_url()),
        youtube = Icon::Youtube.svg("w-4 h-4"),
        external = Icon::ExternalLink.svg("w-3 h-3"),
        panel = analysis_panel(&item.analysis_content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoAnalysis {
        VideoAnalysis {
            id: 9,
            video_id: "dQw4w9WgXcQ".into(),
            channel_name: "슈카월드".into(),
            video_title: "금리 인하 시나리오".into(),
            analysis_content: "### 핵심\\n- 채권 강세".into(),
            sentiment_score: Some(30),
            created_at: "2026-01-07T06:05:00Z".into(),
        }
    }

    #[test]
    fn static_phase_has_no_dialog() {
        let html = render(&video(), RenderPhase::Static);
        assert!(html.contains("슈카월드"));
        assert!(html.contains("상세 분석 보기"));
        assert!(!html.contains("<dialog"));
    }

    #[test]
    fn dialog_links_to_youtube() {
        let html = render(&video(), RenderPhase::InteractiveReady);
        assert!(html.contains(r#"href="https://youtu.be/dQw4w9WgXcQ""#));
        assert!(html.contains("<h3 class="));
        // 06:05 UTC is 15:05 KST.
        assert!(html.contains("2026. 01. 07. 오후 03:05"));
    }
}
