// src/services/calculations.rs
use crate::models::{MarketResult, ProfitabilitySummary, RevenueSource};
use crate::services::coerce::{amount, AmountError, CoercionMode};
use crate::services::markets::normalize_submarket;
use log::warn;

fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Net profit, payback and cash-on-cash return for one unit.
pub fn evaluate_profitability(monthly_revenue: f64, monthly_expenses: f64, cash_to_launch: f64) -> ProfitabilitySummary {
    let net_profit_monthly = monthly_revenue - monthly_expenses;

    let payback_months = if net_profit_monthly > 0.0 {
        Some(cash_to_launch / net_profit_monthly)
    } else {
        None
    };

    let cash_on_cash_return = if cash_to_launch != 0.0 {
        Some((net_profit_monthly * 12.0 / cash_to_launch * 100.0).round())
    } else {
        warn!("Cash to launch is zero, cash-on-cash return is undefined");
        None
    };

    ProfitabilitySummary {
        monthly_revenue,
        net_profit_monthly,
        payback_months: payback_months.filter(|m| m.is_finite()),
        cash_on_cash_return: cash_on_cash_return.filter(|r| r.is_finite()),
    }
}

/// Picks the monthly revenue to evaluate. Comparable averages ignore empty
/// and non-positive entries; an unknown submarket yields zero.
pub fn select_monthly_revenue(
    source: &RevenueSource,
    markets: &[MarketResult],
    mode: CoercionMode,
) -> Result<f64, AmountError> {
    match source {
        RevenueSource::Comparables { values } => {
            let mut comps = Vec::with_capacity(values.len());
            for (i, raw) in values.iter().enumerate() {
                let value = amount(mode, &format!("comparables[{}]", i), Some(raw))?;
                if value > 0.0 {
                    comps.push(value);
                }
            }
            if comps.is_empty() {
                warn!("No usable comparable revenues among {} entries", values.len());
            }
            Ok(calculate_average(&comps))
        }
        RevenueSource::Submarket { name } => {
            let key = normalize_submarket(name);
            match markets.iter().find(|m| normalize_submarket(&m.submarket) == key) {
                Some(market) => Ok(market.str_revenue),
                None => {
                    warn!("Submarket {:?} not among {} matched markets", name, markets.len());
                    Ok(0.0)
                }
            }
        }
        RevenueSource::Fixed { value } => amount(mode, "monthly_revenue", Some(value)),
    }
}
