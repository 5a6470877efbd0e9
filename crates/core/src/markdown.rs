//! Full-view rendering of AI analysis markdown.
//!
//! Soft line breaks become `<br />`, each block kind gets its own classes,
//! raw HTML in the source is shown as text and unsafe link targets are
//! neutralised.

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

const H1: &str = "text-2xl font-bold mt-8 mb-4 text-slate-900 dark:text-slate-100 break-words";
const H2: &str = "text-xl font-bold mt-8 mb-4 text-slate-900 dark:text-slate-100 border-b border-slate-200 dark:border-slate-700 pb-2 break-words";
const H3: &str = "text-lg font-semibold mt-6 mb-3 text-slate-800 dark:text-slate-200 break-words";
const P: &str = "mb-4 leading-7 text-slate-700 dark:text-slate-300 break-words";
const UL: &str = "list-disc list-inside mb-4 space-y-2 text-slate-700 dark:text-slate-300 break-words";
const OL: &str = "list-decimal list-inside mb-4 space-y-2 text-slate-700 dark:text-slate-300 break-words";
const LI: &str = "mb-2 leading-7 ml-4 break-words";
const STRONG: &str = "font-bold text-slate-900 dark:text-slate-100";
const EM: &str = "italic text-slate-800 dark:text-slate-200";
const BLOCKQUOTE: &str = "border-l-4 border-blue-500 pl-4 py-2 my-4 bg-blue-50 dark:bg-blue-900/20 italic text-slate-700 dark:text-slate-300 break-words";
const INLINE_CODE: &str = "bg-slate-100 dark:bg-slate-800 px-1.5 py-0.5 rounded text-sm font-mono text-slate-800 dark:text-slate-200 break-all";
const PRE: &str = "bg-slate-100 dark:bg-slate-800 p-4 rounded-lg overflow-x-auto mb-4 max-w-full";
const BLOCK_CODE: &str = "block text-sm font-mono text-slate-800 dark:text-slate-200";

const SAFE_SCHEMES: [&str; 3] = ["http:", "https:", "mailto:"];

/// The backend stores some analyses with literal `\n` escapes.
pub fn normalize_newlines(markdown: &str) -> String {
    markdown.replace("\\n", "\n")
}

pub fn render_analysis(markdown: &str) -> String {
    let text = normalize_newlines(markdown);
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let events = Parser::new_ext(&text, options).map(style_event);

    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, events);
    out
}

fn style_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Code(code) => Event::InlineHtml(
            format!(r#"<code class="{INLINE_CODE}">{}</code>"#, escape_html(&code)).into(),
        ),
        Event::Start(tag) => open_tag(tag),
        Event::End(tag) => close_tag(tag),
        other => other,
    }
}

fn open_tag(tag: Tag<'_>) -> Event<'_> {
    let html = match &tag {
        Tag::Heading { level, .. } => match heading_style(*level) {
            Some((name, class)) => format!(r#"<{name} class="{class}">"#),
            None => return Event::Start(tag),
        },
        Tag::Paragraph => format!(r#"<p class="{P}">"#),
        Tag::List(Some(1)) => format!(r#"<ol class="{OL}">"#),
        Tag::List(Some(start)) => format!(r#"<ol class="{OL}" start="{start}">"#),
        Tag::List(None) => format!(r#"<ul class="{UL}">"#),
        Tag::Item => format!(r#"<li class="{LI}">"#),
        Tag::Strong => format!(r#"<strong class="{STRONG}">"#),
        Tag::Emphasis => format!(r#"<em class="{EM}">"#),
        Tag::BlockQuote { .. } => format!(r#"<blockquote class="{BLOCKQUOTE}">"#),
        Tag::CodeBlock { .. } => format!(r#"<pre class="{PRE}"><code class="{BLOCK_CODE}">"#),
        Tag::Link { .. } | Tag::Image { .. } => return Event::Start(sanitize_link(tag)),
        _ => return Event::Start(tag),
    };
    Event::Html(html.into())
}

fn close_tag(tag: TagEnd) -> Event<'static> {
    let html: &'static str = match tag {
        TagEnd::Heading(level) => match level {
            HeadingLevel::H1 => "</h1>\n",
            HeadingLevel::H2 => "</h2>\n",
            HeadingLevel::H3 => "</h3>\n",
            _ => return Event::End(tag),
        },
        TagEnd::Paragraph => "</p>\n",
        TagEnd::List(true) => "</ol>\n",
        TagEnd::List(false) => "</ul>\n",
        TagEnd::Item => "</li>\n",
        TagEnd::Strong => "</strong>",
        TagEnd::Emphasis => "</em>",
        TagEnd::BlockQuote { .. } => "</blockquote>\n",
        TagEnd::CodeBlock { .. } => "</code></pre>\n",
        _ => return Event::End(tag),
    };
    Event::Html(CowStr::Borrowed(html))
}

fn heading_style(level: HeadingLevel) -> Option<(&'static str, &'static str)> {
    match level {
        HeadingLevel::H1 => Some(("h1", H1)),
        HeadingLevel::H2 => Some(("h2", H2)),
        HeadingLevel::H3 => Some(("h3", H3)),
        _ => None,
    }
}

fn sanitize_link(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        } => Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        },
        Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        } => Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        },
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim().to_ascii_lowercase();
    let has_scheme = lower
        .split_once(':')
        .is_some_and(|(scheme, _)| !scheme.contains('/') && !scheme.contains('?') && !scheme.contains('#'));
    if !has_scheme || SAFE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
