use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Telegram,
    News,
    #[serde(other)]
    Other,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Telegram => "Telegram",
            Platform::News | Platform::Other => "News",
        }
    }
}

/// One analysed piece of content (video, channel post, article).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub id: i64,
    pub external_id: String,
    pub source_name: String,
    pub title: String,
    pub analysis_content: String,
    #[serde(default)]
    pub sentiment_score: Option<i32>,
    pub platform: Platform,
    #[serde(default)]
    pub source_url: Option<String>,
    pub created_at: String,
}

/// Legacy YouTube-only shape served by `/api/videos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    pub id: i64,
    pub video_id: String,
    pub channel_name: String,
    pub video_title: String,
    pub analysis_content: String,
    #[serde(default)]
    pub sentiment_score: Option<i32>,
    pub created_at: String,
}

impl VideoAnalysis {
    pub fn watch_url(&self) -> String {
        format!("https://youtu.be/{}", self.video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_content_with_missing_optionals() {
        let v = json!({
            "id": 7,
            "external_id": "abc",
            "source_name": "channel",
            "title": "t",
            "analysis_content": "## body",
            "platform": "telegram",
            "created_at": "2026-01-27 09:00:00"
        });

        let item: ContentAnalysis = serde_json::from_value(v).unwrap();
        assert_eq!(item.platform, Platform::Telegram);
        assert_eq!(item.sentiment_score, None);
        assert_eq!(item.source_url, None);
    }

    #[test]
    fn unknown_platform_does_not_fail_the_list() {
        let v = json!([{
            "id": 1,
            "external_id": "x",
            "source_name": "s",
            "title": "t",
            "analysis_content": "c",
            "sentiment_score": 72,
            "platform": "reddit",
            "created_at": "2026-01-27 09:00:00"
        }]);

        let items: Vec<ContentAnalysis> = serde_json::from_value(v).unwrap();
        assert_eq!(items[0].platform, Platform::Other);
        assert_eq!(items[0].sentiment_score, Some(72));
    }
}
