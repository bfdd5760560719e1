// src/models.rs
use serde::{Serialize, Deserialize};

/// Short-term-rental revenue estimate for one submarket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmarketRevenue {
    pub submarket: String,
    pub revenue: f64,
}

/// Long-term median rent for one submarket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmarketRent {
    pub submarket: String,
    pub rent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketResult {
    pub submarket: String,
    pub str_revenue: f64,
    pub median_rent: f64,
    pub multiple: f64,
}

/// A user-entered amount before coercion. Form fields arrive as either JSON
/// numbers or strings; anything else is kept so strict mode can report it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

/// Monthly operating line items as entered. The service fee is derived from
/// revenue and is not part of the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseFields {
    pub rent: Option<RawAmount>,
    pub maintenance: Option<RawAmount>,
    pub power: Option<RawAmount>,
    pub water_sewer: Option<RawAmount>,
    pub internet: Option<RawAmount>,
    pub tax_license: Option<RawAmount>,
    pub insurance: Option<RawAmount>,
    pub software: Option<RawAmount>,
    pub furnishings_rental: Option<RawAmount>,
}

/// Monthly line items after coercion, with the derived service fee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub rent: f64,
    pub service_fee: f64,
    pub maintenance: f64,
    pub power: f64,
    pub water_sewer: f64,
    pub internet: f64,
    pub tax_license: f64,
    pub insurance: f64,
    pub software: f64,
    pub furnishings_rental: f64,
    pub monthly_expenses: f64,
}

/// Furnishings are either bought outright (priced per square foot) or rented;
/// only one of the two figures enters cash-to-launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnishingsPlan {
    #[default]
    Purchase,
    Rental,
}

/// One-time setup costs as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOutFields {
    pub first_month_rent: Option<RawAmount>,
    pub security_deposit: Option<RawAmount>,
    pub miscellaneous: Option<RawAmount>,
    pub furnishings_rental: Option<RawAmount>,
    pub square_footage: Option<RawAmount>,
    pub furnishings_price_per_sqft: Option<RawAmount>,
    pub furnishings_plan: FurnishingsPlan,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildOutBreakdown {
    pub first_month_rent: f64,
    pub security_deposit: f64,
    pub miscellaneous: f64,
    pub furnishings_plan: FurnishingsPlan,
    pub furnishings_cost: f64,
    pub cash_to_launch: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilitySummary {
    pub monthly_revenue: f64,
    pub net_profit_monthly: f64,
    /// `None` when the unit never pays back (net profit at or below zero).
    pub payback_months: Option<f64>,
    /// Percent, `None` when there is no cash to launch to divide by.
    pub cash_on_cash_return: Option<f64>,
}

/// Where the monthly revenue used for profitability comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevenueSource {
    /// Average of comparable-property monthly revenues.
    Comparables { values: Vec<RawAmount> },
    /// Revenue of a submarket from the matched market results.
    Submarket { name: String },
    /// A figure entered directly.
    Fixed { value: RawAmount },
}
