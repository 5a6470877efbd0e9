use axum::{
    extract::{Path, State},
    response::Html,
};
use stockagent_core::domain::price::PriceData;

use super::proxy::{relay_stock_price, PriceRelay};
use crate::components::price_badge;
use crate::AppState;

/// Live price badge, fetched by the enhancement script after page load.
///
/// Goes through the same relay as `/api/stock-price`; anything other than a
/// readable quote yields an empty fragment, which removes the slot.
pub async fn price_badge(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Html<String> {
    let quote = match relay_stock_price(state.backend.as_ref(), &ticker).await {
        PriceRelay::Quote(body) => serde_json::from_value::<PriceData>(body).ok(),
        PriceRelay::BackendStatus(_) | PriceRelay::Failed => None,
    };
    Html(price_badge::resolved(quote.as_ref()))
}
