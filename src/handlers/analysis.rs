// src/handlers/analysis.rs
use warp::reply::Json;
use warp::Rejection;
use std::sync::Arc;
use crate::config::CalculatorConfig;
use crate::services::analysis::{analyze, AnalysisRequest};
use super::error::ApiError;
use super::ModeQuery;
use log::{error, info};

pub async fn analyze_property(
    query: ModeQuery,
    body: AnalysisRequest,
    config: Arc<CalculatorConfig>,
) -> Result<Json, Rejection> {
    info!("Handling request to analyze a property");

    match analyze(&body, &config, query.mode()) {
        Ok(report) => Ok(warp::reply::json(&report)),
        Err(e) => {
            error!("Analysis rejected: {}", e);
            Err(warp::reject::custom(ApiError::from(e)))
        }
    }
}
