use crate::domain::content::{ContentAnalysis, VideoAnalysis};
use crate::time;

/// Score assumed when the backend did not rate an item.
pub const NEUTRAL_SCORE: i32 = 50;

const BULLISH_FROM: i32 = 60;
const BEARISH_UP_TO: i32 = 40;

/// Three-way bucket of a fear(0)/greed(100) score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Neutral,
    Bearish,
}

impl Sentiment {
    pub fn from_score(score: Option<i32>) -> Self {
        match score {
            Some(s) if s >= BULLISH_FROM => Sentiment::Bullish,
            Some(s) if s <= BEARISH_UP_TO => Sentiment::Bearish,
            _ => Sentiment::Neutral,
        }
    }
}

pub fn score_label(score: Option<i32>) -> String {
    match score {
        Some(s) => format!("{s}점"),
        None => "-점".to_string(),
    }
}

/// Tooltip tone on the chart; only the extremes stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTone {
    Hot,
    Mild,
    Cold,
}

impl ChartTone {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            ChartTone::Hot
        } else if score <= 20 {
            ChartTone::Cold
        } else {
            ChartTone::Mild
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub source: String,
    pub title: String,
    pub date_label: String,
    pub score: i32,
}

impl ChartPoint {
    pub fn tone(&self) -> ChartTone {
        ChartTone::from_score(self.score)
    }
}

/// Anything that can be plotted on the sentiment timeline.
pub trait Scored {
    fn source(&self) -> &str;
    fn title(&self) -> &str;
    fn created_at(&self) -> &str;
    fn sentiment_score(&self) -> Option<i32>;
}

impl Scored for ContentAnalysis {
    fn source(&self) -> &str {
        &self.source_name
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn sentiment_score(&self) -> Option<i32> {
        self.sentiment_score
    }
}

impl Scored for VideoAnalysis {
    fn source(&self) -> &str {
        &self.channel_name
    }
    fn title(&self) -> &str {
        &self.video_title
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn sentiment_score(&self) -> Option<i32> {
        self.sentiment_score
    }
}

/// Turns a most-recent-first list into left-to-right chronological points.
pub fn chart_series<T: Scored>(items: &[T]) -> Vec<ChartPoint> {
    items
        .iter()
        .rev()
        .map(|item| ChartPoint {
            source: item.source().to_string(),
            title: item.title().to_string(),
            date_label: time::chart_label(item.created_at()),
            score: item.sentiment_score().unwrap_or(NEUTRAL_SCORE),
        })
        .collect()
}
