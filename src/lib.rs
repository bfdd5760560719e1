// src/lib.rs

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::build_out::compute_cash_to_launch;
pub use services::calculations::evaluate_profitability;
pub use services::expenses::compute_monthly_expenses;
pub use services::markets::match_markets;
