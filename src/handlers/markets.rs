// src/handlers/markets.rs
use warp::reply::Json;
use warp::Rejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::config::CalculatorConfig;
use crate::models::{MarketResult, SubmarketRent, SubmarketRevenue};
use crate::services::format::format_multiple;
use crate::services::markets::match_markets_with_threshold;
use log::info;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub str_data: Vec<SubmarketRevenue>,
    #[serde(default)]
    pub rent_data: Vec<SubmarketRent>,
}

#[derive(Serialize)]
struct MarketView {
    #[serde(flatten)]
    market: MarketResult,
    multiple_display: String,
}

pub async fn match_submarkets(body: MatchRequest, config: Arc<CalculatorConfig>) -> Result<Json, Rejection> {
    info!(
        "Handling request to match {} revenue records against {} rent records",
        body.str_data.len(),
        body.rent_data.len()
    );

    let results: Vec<MarketView> = match_markets_with_threshold(&body.str_data, &body.rent_data, config.multiple_threshold)
        .into_iter()
        .map(|market| MarketView {
            multiple_display: format_multiple(market.multiple),
            market,
        })
        .collect();

    info!("Returning {} matched markets", results.len());
    Ok(warp::reply::json(&results))
}
