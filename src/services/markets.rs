// src/services/markets.rs
use crate::config::DEFAULT_MULTIPLE_THRESHOLD;
use crate::models::{MarketResult, SubmarketRent, SubmarketRevenue};
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Case-folded, trimmed submarket name used as the join key.
pub fn normalize_submarket(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Builds the rent lookup keyed by normalized submarket. A later record for
/// the same submarket replaces an earlier one.
pub fn rent_lookup(rent_data: &[SubmarketRent]) -> HashMap<String, f64> {
    let mut lookup = HashMap::with_capacity(rent_data.len());
    for record in rent_data {
        if let Some(previous) = lookup.insert(normalize_submarket(&record.submarket), record.rent) {
            debug!("Duplicate rent for {:?}: {} replaced by {}", record.submarket, previous, record.rent);
        }
    }
    lookup
}

/// Joins revenue and rent by submarket and keeps the markets whose revenue
/// multiple clears the default threshold, best first.
pub fn match_markets(str_data: &[SubmarketRevenue], rent_data: &[SubmarketRent]) -> Vec<MarketResult> {
    match_markets_with_threshold(str_data, rent_data, DEFAULT_MULTIPLE_THRESHOLD)
}

pub fn match_markets_with_threshold(
    str_data: &[SubmarketRevenue],
    rent_data: &[SubmarketRent],
    threshold: f64,
) -> Vec<MarketResult> {
    if str_data.is_empty() || rent_data.is_empty() {
        warn!(
            "Nothing to match: {} revenue records, {} rent records",
            str_data.len(),
            rent_data.len()
        );
        return Vec::new();
    }

    let lookup = rent_lookup(rent_data);
    let mut results: Vec<MarketResult> = str_data
        .iter()
        .filter_map(|record| {
            let rent = *lookup.get(&normalize_submarket(&record.submarket))?;
            if rent <= 0.0 {
                return None;
            }
            let multiple = record.revenue / rent;
            if multiple >= threshold {
                Some(MarketResult {
                    submarket: record.submarket.clone(),
                    str_revenue: record.revenue,
                    median_rent: rent,
                    multiple,
                })
            } else {
                None
            }
        })
        .collect();

    // Stable, so equal multiples keep input order.
    results.sort_by(|a, b| b.multiple.partial_cmp(&a.multiple).unwrap_or(Ordering::Equal));

    debug!(
        "Matched {} of {} submarkets at threshold {}",
        results.len(),
        str_data.len(),
        threshold
    );
    results
}
