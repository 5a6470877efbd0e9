use serde::{Deserialize, Serialize};

const NO_STOCK: &str = "종목 없음";

/// AI buy/sell pick for one report date. `report_date` is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub id: i64,
    pub report_date: String,
    #[serde(default)]
    pub buy_stock: Option<String>,
    #[serde(default)]
    pub buy_ticker: Option<String>,
    #[serde(default)]
    pub buy_reason: Option<String>,
    #[serde(default)]
    pub sell_stock: Option<String>,
    #[serde(default)]
    pub sell_ticker: Option<String>,
    #[serde(default)]
    pub sell_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl DailySummary {
    pub fn buy_display(&self) -> &str {
        display_name(self.buy_stock.as_deref())
    }

    pub fn sell_display(&self) -> &str {
        display_name(self.sell_stock.as_deref())
    }

    pub fn buy_reason_text(&self) -> &str {
        self.buy_reason.as_deref().unwrap_or_default()
    }

    pub fn sell_reason_text(&self) -> &str {
        self.sell_reason.as_deref().unwrap_or_default()
    }
}

fn display_name(name: Option<&str>) -> &str {
    match name.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => NO_STOCK,
    }
}
