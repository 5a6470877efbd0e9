use super::escape;
use stockagent_core::config::Settings;
use stockagent_core::seo::{PageMetadata, SITE_NAME};

const ENHANCE_SCRIPT: &str = include_str!("../../assets/enhance.js");

/// Full HTML document around `main`.
pub fn page(meta: &PageMetadata, settings: &Settings, main: &str) -> String {
    let mut head = format!(
        r#"<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<meta name="description" content="{description}" />
"#,
        title = escape(&meta.title),
        description = escape(&meta.description),
    );

    if let Some(og) = &meta.open_graph {
        head.push_str(&format!(
            r#"<meta property="og:title" content="{}" />
<meta property="og:description" content="{}" />
<meta property="og:url" content="{}" />
<meta property="og:site_name" content="{}" />
<meta property="og:type" content="{}" />
"#,
            escape(&og.title),
            escape(&og.description),
            escape(&og.url),
            escape(og.site_name),
            og.kind,
        ));
    }

    if let Some(token) = &settings.google_site_verification {
        head.push_str(&format!(
            "<meta name=\"google-site-verification\" content=\"{}\" />\n",
            escape(token)
        ));
    }
    if let Some(token) = &settings.naver_site_verification {
        head.push_str(&format!(
            "<meta name=\"naver-site-verification\" content=\"{}\" />\n",
            escape(token)
        ));
    }

    head.push_str("<script src=\"https://cdn.tailwindcss.com?plugins=typography\"></script>\n");
    if settings.interactive {
        head.push_str(&format!("<script>\n{ENHANCE_SCRIPT}</script>\n"));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
{head}</head>
<body class="antialiased">
<main class="min-h-screen bg-slate-50 dark:bg-slate-950 p-4 sm:p-8">
<div class="max-w-7xl mx-auto space-y-8">
{main}
</div>
</main>
<footer class="py-6 text-center text-xs text-slate-400">{site}</footer>
</body>
</html>
"#,
        site = escape(SITE_NAME),
    )
}
