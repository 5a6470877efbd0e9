use serde::{Deserialize, Serialize};

/// Live quote relayed from the backend; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    pub ticker: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockName {
    #[serde(default)]
    pub name: Option<String>,
}
