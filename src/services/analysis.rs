// src/services/analysis.rs
use crate::config::CalculatorConfig;
use crate::models::{
    BuildOutBreakdown, BuildOutFields, ExpenseBreakdown, ExpenseFields, FurnishingsPlan, MarketResult,
    ProfitabilitySummary, RevenueSource, SubmarketRent, SubmarketRevenue,
};
use crate::services::build_out::{furnishings_purchase_cost, price_per_sqft_or};
use crate::services::calculations::{evaluate_profitability, select_monthly_revenue};
use crate::services::coerce::{lenient_amount, AmountError, CoercionMode};
use crate::services::format::{format_currency, format_payback, format_percent};
use crate::services::markets::match_markets_with_threshold;
use log::info;
use serde::{Deserialize, Serialize};

/// Everything needed to evaluate one unit.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisRequest {
    pub expenses: ExpenseFields,
    pub build_out: BuildOutFields,
    pub revenue_source: Option<RevenueSource>,
    pub str_data: Vec<SubmarketRevenue>,
    pub rent_data: Vec<SubmarketRent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDisplay {
    pub monthly_revenue: String,
    pub net_profit_monthly: String,
    pub payback: String,
    pub cash_on_cash_return: String,
}

impl From<&ProfitabilitySummary> for SummaryDisplay {
    fn from(s: &ProfitabilitySummary) -> Self {
        SummaryDisplay {
            monthly_revenue: format_currency(s.monthly_revenue),
            net_profit_monthly: format_currency(s.net_profit_monthly),
            payback: format_payback(s.payback_months),
            cash_on_cash_return: format_percent(s.cash_on_cash_return),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub markets: Vec<MarketResult>,
    pub expenses: ExpenseBreakdown,
    pub build_out: BuildOutBreakdown,
    /// Purchase cost at the entered square footage, shown even when renting.
    pub furnishings_purchase_estimate: f64,
    pub summary: ProfitabilitySummary,
    pub display: SummaryDisplay,
}

/// Runs every calculator in order: markets, revenue, expenses, build-out,
/// then profitability.
pub fn analyze(
    request: &AnalysisRequest,
    config: &CalculatorConfig,
    mode: CoercionMode,
) -> Result<AnalysisReport, AmountError> {
    let markets = match_markets_with_threshold(&request.str_data, &request.rent_data, config.multiple_threshold);

    let monthly_revenue = match &request.revenue_source {
        Some(source) => select_monthly_revenue(source, &markets, mode)?,
        None => markets.first().map(|m| m.str_revenue).unwrap_or(0.0),
    };

    let expenses = request
        .expenses
        .breakdown(monthly_revenue, config.service_fee_rate, mode)?;
    let build_out = request
        .build_out
        .breakdown(config.furnishings_price_per_sqft, mode)?;

    let furnishings_purchase_estimate = match build_out.furnishings_plan {
        FurnishingsPlan::Purchase => build_out.furnishings_cost,
        FurnishingsPlan::Rental => furnishings_purchase_cost(
            lenient_amount(request.build_out.square_footage.as_ref()),
            price_per_sqft_or(
                lenient_amount(request.build_out.furnishings_price_per_sqft.as_ref()),
                config.furnishings_price_per_sqft,
            ),
        ),
    };

    let summary = evaluate_profitability(monthly_revenue, expenses.monthly_expenses, build_out.cash_to_launch);
    info!(
        "Analysis: revenue {} expenses {} launch {} net {}",
        monthly_revenue, expenses.monthly_expenses, build_out.cash_to_launch, summary.net_profit_monthly
    );

    Ok(AnalysisReport {
        markets,
        display: SummaryDisplay::from(&summary),
        expenses,
        build_out,
        furnishings_purchase_estimate,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            expenses: ExpenseFields {
                rent: Some(2000.0.into()),
                power: Some(190.0.into()),
                internet: Some(70.0.into()),
                ..ExpenseFields::default()
            },
            build_out: BuildOutFields {
                first_month_rent: Some(2000.0.into()),
                security_deposit: Some(2000.0.into()),
                square_footage: Some(850.0.into()),
                ..BuildOutFields::default()
            },
            revenue_source: Some(RevenueSource::Comparables {
                values: vec![6500.0.into(), 7500.0.into()],
            }),
            str_data: vec![],
            rent_data: vec![],
        }
    }

    #[test]
    fn test_full_analysis() {
        let report = analyze(&request(), &CalculatorConfig::default(), CoercionMode::Lenient).unwrap();
        assert!(report.markets.is_empty());
        assert_eq!(report.expenses.service_fee, 203.0);
        assert_eq!(report.expenses.monthly_expenses, 2463.0);
        assert_eq!(report.build_out.furnishings_cost, 6800.0);
        assert_eq!(report.build_out.cash_to_launch, 10800.0);
        assert_eq!(report.summary.monthly_revenue, 7000.0);
        assert_eq!(report.summary.net_profit_monthly, 4537.0);
        assert_eq!(report.summary.cash_on_cash_return, Some(504.0));
        assert_eq!(report.display.monthly_revenue, "$7,000");
        assert_eq!(report.display.payback, "2.4 months");
    }

    #[test]
    fn test_best_market_is_default_revenue() {
        let req = AnalysisRequest {
            revenue_source: None,
            str_data: vec![
                SubmarketRevenue { submarket: "Hillcrest".into(), revenue: 5000.0 },
                SubmarketRevenue { submarket: "North Park".into(), revenue: 6000.0 },
            ],
            rent_data: vec![
                SubmarketRent { submarket: "hillcrest".into(), rent: 2000.0 },
                SubmarketRent { submarket: "north park".into(), rent: 2000.0 },
            ],
            ..request()
        };
        let report = analyze(&req, &CalculatorConfig::default(), CoercionMode::Lenient).unwrap();
        assert_eq!(report.markets.len(), 2);
        assert_eq!(report.summary.monthly_revenue, 6000.0);
    }

    #[test]
    fn test_rental_plan_still_reports_purchase_estimate() {
        let mut req = request();
        req.build_out.furnishings_plan = FurnishingsPlan::Rental;
        req.build_out.furnishings_rental = Some(400.0.into());
        let report = analyze(&req, &CalculatorConfig::default(), CoercionMode::Lenient).unwrap();
        assert_eq!(report.build_out.furnishings_cost, 400.0);
        assert_eq!(report.build_out.cash_to_launch, 4400.0);
        assert_eq!(report.furnishings_purchase_estimate, 6800.0);
    }

    #[test]
    fn test_strict_mode_propagates() {
        let mut req = request();
        req.expenses.power = Some("lots".into());
        let err = analyze(&req, &CalculatorConfig::default(), CoercionMode::Strict).unwrap_err();
        assert_eq!(err.field, "power");
    }
}
