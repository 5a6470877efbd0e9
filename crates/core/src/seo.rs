use crate::domain::summary::DailySummary;
use crate::markdown::escape_html;
use crate::time;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

pub const SITE_NAME: &str = "주식 AI 에이전트";
pub const SITE_DESCRIPTION: &str = "AI가 분석해주는 매일의 주식 시장 요약";

const MAIN_PRIORITY: f32 = 1.0;
const REPORT_PRIORITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    /// The dashboard changes with every backend ingest.
    Always,
    /// Published reports are immutable.
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Site-relative link to a report page.
pub fn report_path(date: &str) -> String {
    format!("/report/{}", urlencoding::encode(date))
}

/// Site-relative link to a ticker's drill-down page.
pub fn stock_path(ticker: &str) -> String {
    format!("/stock/{}", urlencoding::encode(ticker))
}

/// One entry for the dashboard plus one per published report.
pub fn build_sitemap(
    site_base: &str,
    reports: &[DailySummary],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(reports.len() + 1);
    entries.push(SitemapEntry {
        url: site_base.to_string(),
        last_modified: now,
        change_frequency: ChangeFrequency::Always,
        priority: MAIN_PRIORITY,
    });

    for report in reports {
        let last_modified = report
            .created_at
            .as_deref()
            .and_then(time::parse_timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(now);

        entries.push(SitemapEntry {
            url: format!("{site_base}{}", report_path(&report.report_date)),
            last_modified,
            change_frequency: ChangeFrequency::Never,
            priority: REPORT_PRIORITY,
        });
    }

    entries
}

pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_html(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    out.push_str("</urlset>\n");
    out
}

pub fn robots_txt(site_base: &str) -> String {
    format!("User-Agent: *\nAllow: /\n\nSitemap: {site_base}/sitemap.xml\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: Option<OpenGraph>,
}

impl PageMetadata {
    pub fn site_default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            open_graph: None,
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::site_default()
        }
    }

    pub fn for_report(site_base: &str, date: &str, report: Option<&DailySummary>) -> Self {
        let Some(report) = report else {
            return Self::titled("리포트를 찾을 수 없습니다");
        };

        let title = format!(
            "[{date}] AI가 분석한 오늘의 추천 종목: {}",
            report.buy_display()
        );
        let description = format!(
            "매수 추천: {} ({}) / 매도 추천: {}. AI 주식 에이전트의 일일 브리핑을 확인하세요.",
            report.buy_display(),
            report.buy_reason_text(),
            report.sell_display()
        );

        Self {
            open_graph: Some(OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: format!("{site_base}{}", report_path(date)),
                site_name: SITE_NAME,
                kind: "article",
            }),
            title,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn summary(date: &str, created_at: Option<&str>) -> DailySummary {
        DailySummary {
            id: 1,
            report_date: date.to_string(),
            buy_stock: Some("엔비디아".to_string()),
            buy_ticker: Some("NVDA".to_string()),
            buy_reason: Some("AI 수요".to_string()),
            sell_stock: Some("테슬라".to_string()),
            sell_ticker: None,
            sell_reason: None,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn sitemap_has_one_static_entry_plus_reports() {
        let now = Utc.with_ymd_and_hms(2026, 1, 28, 0, 0, 0).unwrap();
        let reports = vec![
            summary("2026-01-27", None),
            summary("2026-01-26", Some("2026-01-26 18:00:00")),
            summary("2026-01-25", None),
        ];

        let entries = build_sitemap("https://example.com", &reports, now);
        assert_eq!(entries.len(), 4);

        let main = &entries[0];
        assert_eq!(main.url, "https://example.com");
        assert_eq!(main.change_frequency, ChangeFrequency::Always);

        for entry in &entries[1..] {
            assert!(entry.priority < main.priority);
            assert_eq!(entry.change_frequency, ChangeFrequency::Never);
        }
        assert_eq!(entries[1].url, "https://example.com/report/2026-01-27");
        assert_eq!(entries[1].last_modified, now);
        // 18:00 KST is 09:00 UTC.
        assert_eq!(
            entries[2].last_modified,
            Utc.with_ymd_and_hms(2026, 1, 26, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn page_links_escape_path_segments() {
        assert_eq!(report_path("2026-01-27"), "/report/2026-01-27");
        assert_eq!(stock_path("005930.KS"), "/stock/005930.KS");
        assert_eq!(stock_path("BRK/B"), "/stock/BRK%2FB");
        assert_eq!(stock_path("a b"), "/stock/a%20b");
    }

    #[test]
    fn sitemap_escapes_odd_report_dates() {
        let entries = build_sitemap("https://example.com", &[summary("2026/01 27", None)], Utc::now());
        assert_eq!(entries[1].url, "https://example.com/report/2026%2F01%2027");
    }

    #[test]
    fn sitemap_without_reports_keeps_main_page() {
        let entries = build_sitemap("https://example.com", &[], Utc::now());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn renders_sitemap_xml() {
        let now = Utc.with_ymd_and_hms(2026, 1, 28, 0, 0, 0).unwrap();
        let entries = build_sitemap("https://example.com", &[summary("2026-01-27", None)], now);
        let xml = sitemap_xml(&entries);

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/report/2026-01-27</loc>"));
        assert!(xml.contains("<changefreq>never</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<lastmod>2026-01-28T00:00:00Z</lastmod>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = robots_txt("https://example.com");
        assert!(robots.contains("User-Agent: *"));
        assert!(robots.contains("Allow: /"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn report_metadata_embeds_recommendations() {
        let report = summary("2026-01-27", None);
        let meta = PageMetadata::for_report("https://example.com", "2026-01-27", Some(&report));

        assert_eq!(meta.title, "[2026-01-27] AI가 분석한 오늘의 추천 종목: 엔비디아");
        assert_eq!(
            meta.description,
            "매수 추천: 엔비디아 (AI 수요) / 매도 추천: 테슬라. AI 주식 에이전트의 일일 브리핑을 확인하세요."
        );
        let og = meta.open_graph.unwrap();
        assert_eq!(og.url, "https://example.com/report/2026-01-27");
        assert_eq!(og.kind, "article");
    }

    #[test]
    fn missing_report_gets_not_found_title() {
        let meta = PageMetadata::for_report("https://example.com", "2020-01-01", None);
        assert_eq!(meta.title, "리포트를 찾을 수 없습니다");
        assert!(meta.open_graph.is_none());
    }
}
