// src/handlers/calculators.rs
use warp::reply::Json;
use warp::Rejection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::config::CalculatorConfig;
use crate::models::{BuildOutBreakdown, BuildOutFields, ExpenseBreakdown, ExpenseFields, ProfitabilitySummary, RawAmount};
use crate::services::analysis::SummaryDisplay;
use crate::services::calculations::evaluate_profitability;
use crate::services::coerce::amount;
use crate::services::format::format_currency;
use super::error::ApiError;
use super::ModeQuery;
use log::{error, info};

#[derive(Debug, Deserialize)]
pub struct ExpensesRequest {
    #[serde(flatten)]
    pub fields: ExpenseFields,
    pub revenue: Option<RawAmount>,
}

#[derive(Serialize)]
struct ExpensesResponse {
    #[serde(flatten)]
    breakdown: ExpenseBreakdown,
    display: String,
}

#[derive(Serialize)]
struct CashToLaunchResponse {
    #[serde(flatten)]
    breakdown: BuildOutBreakdown,
    display: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfitabilityRequest {
    pub monthly_revenue: Option<RawAmount>,
    pub monthly_expenses: Option<RawAmount>,
    pub cash_to_launch: Option<RawAmount>,
}

#[derive(Serialize)]
struct ProfitabilityResponse {
    #[serde(flatten)]
    summary: ProfitabilitySummary,
    display: SummaryDisplay,
}

fn reject(e: impl Into<ApiError>) -> Rejection {
    let e = e.into();
    error!("Rejecting request: {}", e);
    warp::reject::custom(e)
}

pub async fn monthly_expenses(
    query: ModeQuery,
    body: ExpensesRequest,
    config: Arc<CalculatorConfig>,
) -> Result<Json, Rejection> {
    info!("Handling request to compute monthly expenses");
    let mode = query.mode();

    let revenue = amount(mode, "revenue", body.revenue.as_ref()).map_err(reject)?;
    let breakdown = body
        .fields
        .breakdown(revenue, config.service_fee_rate, mode)
        .map_err(reject)?;

    Ok(warp::reply::json(&ExpensesResponse {
        display: format_currency(breakdown.monthly_expenses),
        breakdown,
    }))
}

pub async fn cash_to_launch(
    query: ModeQuery,
    body: BuildOutFields,
    config: Arc<CalculatorConfig>,
) -> Result<Json, Rejection> {
    info!("Handling request to compute cash to launch");

    let breakdown = body
        .breakdown(config.furnishings_price_per_sqft, query.mode())
        .map_err(reject)?;

    Ok(warp::reply::json(&CashToLaunchResponse {
        display: format_currency(breakdown.cash_to_launch),
        breakdown,
    }))
}

pub async fn profitability(query: ModeQuery, body: ProfitabilityRequest) -> Result<Json, Rejection> {
    info!("Handling request to evaluate profitability");
    let mode = query.mode();

    let monthly_revenue = amount(mode, "monthly_revenue", body.monthly_revenue.as_ref()).map_err(reject)?;
    let monthly_expenses = amount(mode, "monthly_expenses", body.monthly_expenses.as_ref()).map_err(reject)?;
    let cash_to_launch = amount(mode, "cash_to_launch", body.cash_to_launch.as_ref()).map_err(reject)?;

    let summary = evaluate_profitability(monthly_revenue, monthly_expenses, cash_to_launch);
    Ok(warp::reply::json(&ProfitabilityResponse {
        display: SummaryDisplay::from(&summary),
        summary,
    }))
}
