// src/bin/rank_markets.rs
use arbitrage_dashboard::config::CalculatorConfig;
use arbitrage_dashboard::services::format::{format_currency, format_multiple};
use arbitrage_dashboard::services::market_data::{load_rent_csv, load_revenue_csv};
use arbitrage_dashboard::services::markets::match_markets_with_threshold;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        anyhow::bail!("usage: {} <revenue.csv> <rent.csv>", args[0]);
    }

    let str_data = load_revenue_csv(&PathBuf::from(&args[1]))?;
    let rent_data = load_rent_csv(&PathBuf::from(&args[2]))?;
    let config = CalculatorConfig::from_env();

    let results = match_markets_with_threshold(&str_data, &rent_data, config.multiple_threshold);
    if results.is_empty() {
        println!("No submarket clears {}", format_multiple(config.multiple_threshold));
        return Ok(());
    }

    println!("{:<28} {:>12} {:>12} {:>9}", "Submarket", "STR Revenue", "Median Rent", "Multiple");
    for r in &results {
        println!(
            "{:<28} {:>12} {:>12} {:>9}",
            r.submarket,
            format_currency(r.str_revenue),
            format_currency(r.median_rent),
            format_multiple(r.multiple)
        );
    }
    Ok(())
}
