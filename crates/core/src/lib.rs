pub mod backend;
pub mod domain;
pub mod fetch;
pub mod format;
pub mod markdown;
pub mod seo;
pub mod sentiment;
pub mod time;

pub mod config {
    use anyhow::Context;
    use std::time::Duration;

    const DEFAULT_BACKEND_BASE_URL: &str = "http://127.0.0.1:8000";
    const DEFAULT_SITE_URL: &str = "http://localhost:3000";
    const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub backend_base_url: String,
        pub backend_timeout: Duration,
        pub site_url: String,
        pub interactive: bool,
        pub google_site_verification: Option<String>,
        pub naver_site_verification: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
                backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
                site_url: DEFAULT_SITE_URL.to_string(),
                interactive: true,
                google_site_verification: None,
                naver_site_verification: None,
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let defaults = Self::default();

            let backend_timeout = match non_empty_var("BACKEND_TIMEOUT_SECS") {
                Some(s) => Duration::from_secs(
                    s.parse::<u64>()
                        .with_context(|| format!("BACKEND_TIMEOUT_SECS is not a number: {s}"))?,
                ),
                None => defaults.backend_timeout,
            };

            let interactive = match non_empty_var("DASHBOARD_INTERACTIVE") {
                Some(s) => parse_bool(&s)
                    .with_context(|| format!("DASHBOARD_INTERACTIVE must be true/false: {s}"))?,
                None => defaults.interactive,
            };

            Ok(Self {
                backend_base_url: non_empty_var("BACKEND_BASE_URL")
                    .unwrap_or(defaults.backend_base_url),
                backend_timeout,
                site_url: non_empty_var("SITE_URL").unwrap_or(defaults.site_url),
                interactive,
                google_site_verification: non_empty_var("GOOGLE_SITE_VERIFICATION"),
                naver_site_verification: non_empty_var("NAVER_SITE_VERIFICATION"),
                sentry_dsn: non_empty_var("SENTRY_DSN"),
            })
        }

        /// Site base without a trailing slash, for building absolute urls.
        pub fn site_base(&self) -> &str {
            self.site_url.trim_end_matches('/')
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn parse_bool(s: &str) -> Option<bool> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parses_boolean_flags() {
            assert_eq!(parse_bool("TRUE"), Some(true));
            assert_eq!(parse_bool("off"), Some(false));
            assert_eq!(parse_bool("maybe"), None);
        }

        #[test]
        fn site_base_drops_trailing_slash() {
            let settings = Settings {
                site_url: "https://example.com/".to_string(),
                ..Settings::default()
            };
            assert_eq!(settings.site_base(), "https://example.com");
        }
    }
}
