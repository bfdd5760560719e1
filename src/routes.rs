// src/routes.rs
use std::sync::Arc;
use warp::reject::Rejection;
use warp::http::StatusCode;
use crate::config::CalculatorConfig;
use crate::handlers::{analysis::analyze_property, calculators::cash_to_launch, calculators::monthly_expenses,
                     calculators::profitability, markets::match_submarkets, ModeQuery};
use log::info;

use std::convert::Infallible;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(body_error) = err.find::<warp::filters::body::BodyDeserializeError>() {
        code = StatusCode::BAD_REQUEST;
        message = body_error.to_string();
    } else if let Some(query_error) = err.find::<warp::reject::InvalidQuery>() {
        code = StatusCode::BAD_REQUEST;
        message = query_error.to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(config: Arc<CalculatorConfig>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let config_filter = warp::any().map(move || config.clone());
    let mode = warp::query::<ModeQuery>();

    let health_route = warp::path!("api" / "v1" / "health")
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({ "status": "ok" })));

    let markets_route = warp::path!("api" / "v1" / "markets" / "match")
        .and(warp::post())
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(match_submarkets);

    let expenses_route = warp::path!("api" / "v1" / "expenses")
        .and(warp::post())
        .and(mode)
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(monthly_expenses);

    let cash_to_launch_route = warp::path!("api" / "v1" / "cash-to-launch")
        .and(warp::post())
        .and(mode)
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(cash_to_launch);

    let profitability_route = warp::path!("api" / "v1" / "profitability")
        .and(warp::post())
        .and(mode)
        .and(warp::body::json())
        .and_then(profitability);

    let analysis_route = warp::path!("api" / "v1" / "analysis")
        .and(warp::post())
        .and(mode)
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(analyze_property);

    info!("All routes configured successfully.");

    health_route
        .or(markets_route)
        .or(expenses_route)
        .or(cash_to_launch_route)
        .or(profitability_route)
        .or(analysis_route)
        .recover(handle_rejection)
}
