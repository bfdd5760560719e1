// src/services/expenses.rs
use crate::config::DEFAULT_SERVICE_FEE_RATE;
use crate::models::{ExpenseBreakdown, ExpenseFields};
use crate::services::coerce::{amount, AmountError, CoercionMode};
use log::debug;

/// Platform fee on gross revenue, in whole dollars.
pub fn service_fee(revenue: f64, rate: f64) -> f64 {
    let fee = (revenue * rate).round();
    if fee.is_finite() {
        fee
    } else {
        0.0
    }
}

impl ExpenseFields {
    /// Coerces every line item and adds the derived service fee.
    pub fn breakdown(
        &self,
        revenue: f64,
        service_fee_rate: f64,
        mode: CoercionMode,
    ) -> Result<ExpenseBreakdown, AmountError> {
        let mut b = ExpenseBreakdown {
            rent: amount(mode, "rent", self.rent.as_ref())?,
            service_fee: service_fee(revenue, service_fee_rate),
            maintenance: amount(mode, "maintenance", self.maintenance.as_ref())?,
            power: amount(mode, "power", self.power.as_ref())?,
            water_sewer: amount(mode, "water_sewer", self.water_sewer.as_ref())?,
            internet: amount(mode, "internet", self.internet.as_ref())?,
            tax_license: amount(mode, "tax_license", self.tax_license.as_ref())?,
            insurance: amount(mode, "insurance", self.insurance.as_ref())?,
            software: amount(mode, "software", self.software.as_ref())?,
            furnishings_rental: amount(mode, "furnishings_rental", self.furnishings_rental.as_ref())?,
            monthly_expenses: 0.0,
        };
        b.monthly_expenses = (b.rent
            + b.service_fee
            + b.maintenance
            + b.power
            + b.water_sewer
            + b.internet
            + b.tax_license
            + b.insurance
            + b.software
            + b.furnishings_rental)
            .round();
        debug!("Monthly expenses {} on revenue {}", b.monthly_expenses, revenue);
        Ok(b)
    }
}

/// Total monthly operating cost with the default service-fee rate. Invalid
/// entries count as zero.
pub fn compute_monthly_expenses(fields: &ExpenseFields, revenue: f64) -> f64 {
    compute_monthly_expenses_with_rate(fields, revenue, DEFAULT_SERVICE_FEE_RATE)
}

pub fn compute_monthly_expenses_with_rate(fields: &ExpenseFields, revenue: f64, rate: f64) -> f64 {
    fields
        .breakdown(revenue, rate, CoercionMode::Lenient)
        .map(|b| b.monthly_expenses)
        .unwrap_or(0.0)
}
