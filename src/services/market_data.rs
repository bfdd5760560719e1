// src/services/market_data.rs
use crate::models::{SubmarketRent, SubmarketRevenue};
use crate::services::coerce::parse_float_prefix;
use anyhow::{anyhow, Context, Result};
use csv::Reader;
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads `(submarket, value)` pairs from a CSV with a `submarket` column and
/// a column named `value_column`. Blank submarkets are skipped, bad values
/// read as zero.
fn read_pairs<R: Read>(reader: R, value_column: &str) -> Result<Vec<(String, f64)>> {
    let mut rdr = Reader::from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV headers")?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("No '{}' column in CSV", name))
    };
    let idx_submarket = find("submarket")?;
    let idx_value = find(value_column)?;

    let mut pairs = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let row = record.with_context(|| format!("Malformed CSV row {}", line + 2))?;
        let submarket = row.get(idx_submarket).unwrap_or("").trim();
        if submarket.is_empty() {
            warn!("Skipping CSV row {} with no submarket", line + 2);
            continue;
        }
        let value = row
            .get(idx_value)
            .and_then(parse_float_prefix)
            .unwrap_or(0.0);
        pairs.push((submarket.to_string(), value));
    }
    Ok(pairs)
}

pub fn read_revenue<R: Read>(reader: R) -> Result<Vec<SubmarketRevenue>> {
    Ok(read_pairs(reader, "revenue")?
        .into_iter()
        .map(|(submarket, revenue)| SubmarketRevenue { submarket, revenue })
        .collect())
}

pub fn read_rent<R: Read>(reader: R) -> Result<Vec<SubmarketRent>> {
    Ok(read_pairs(reader, "rent")?
        .into_iter()
        .map(|(submarket, rent)| SubmarketRent { submarket, rent })
        .collect())
}

pub fn load_revenue_csv(path: &Path) -> Result<Vec<SubmarketRevenue>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records = read_revenue(file).with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded {} revenue records from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_rent_csv(path: &Path) -> Result<Vec<SubmarketRent>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records = read_rent(file).with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded {} rent records from {}", records.len(), path.display());
    Ok(records)
}
