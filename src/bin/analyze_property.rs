// src/bin/analyze_property.rs
use anyhow::Context;
use arbitrage_dashboard::config::CalculatorConfig;
use arbitrage_dashboard::services::analysis::{analyze, AnalysisRequest};
use arbitrage_dashboard::services::coerce::CoercionMode;
use arbitrage_dashboard::services::format::format_currency;
use dotenv::dotenv;
use std::env;
use std::fs;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let path = env::args().nth(1).context("usage: analyze_property <input.json> [--strict]")?;
    let mode = if env::args().any(|a| a == "--strict") {
        CoercionMode::Strict
    } else {
        CoercionMode::Lenient
    };

    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let request: AnalysisRequest = serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path))?;
    let report = analyze(&request, &CalculatorConfig::from_env(), mode)?;

    println!("Monthly revenue:     {}", report.display.monthly_revenue);
    println!("Monthly expenses:    {}", format_currency(report.expenses.monthly_expenses));
    println!("  incl. service fee: {}", format_currency(report.expenses.service_fee));
    println!("Cash to launch:      {}", format_currency(report.build_out.cash_to_launch));
    println!("Net profit / month:  {}", report.display.net_profit_monthly);
    println!("Payback:             {}", report.display.payback);
    println!("Cash-on-cash return: {}", report.display.cash_on_cash_return);
    Ok(())
}
