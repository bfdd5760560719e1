// src/services/build_out.rs
use crate::config::DEFAULT_FURNISHINGS_PRICE_PER_SQFT;
use crate::models::{BuildOutBreakdown, BuildOutFields, FurnishingsPlan};
use crate::services::coerce::{amount, lenient_amount, AmountError, CoercionMode};
use log::debug;

/// Cost of buying furniture for the whole unit, in whole dollars.
pub fn furnishings_purchase_cost(square_footage: f64, price_per_sqft: f64) -> f64 {
    let cost = (square_footage * price_per_sqft).round();
    if cost.is_finite() {
        cost
    } else {
        0.0
    }
}

/// Resolves the entered price per square foot. Blank, unparsable and zero
/// entries use `default`.
pub fn price_per_sqft_or(raw: f64, default: f64) -> f64 {
    if raw > 0.0 {
        raw
    } else {
        default
    }
}

impl BuildOutFields {
    pub fn breakdown(
        &self,
        default_price_per_sqft: f64,
        mode: CoercionMode,
    ) -> Result<BuildOutBreakdown, AmountError> {
        let square_footage = amount(mode, "square_footage", self.square_footage.as_ref())?;
        let price = price_per_sqft_or(
            amount(mode, "furnishings_price_per_sqft", self.furnishings_price_per_sqft.as_ref())?,
            default_price_per_sqft,
        );
        let rental = amount(mode, "furnishings_rental", self.furnishings_rental.as_ref())?;

        let mut b = BuildOutBreakdown {
            first_month_rent: amount(mode, "first_month_rent", self.first_month_rent.as_ref())?,
            security_deposit: amount(mode, "security_deposit", self.security_deposit.as_ref())?,
            miscellaneous: amount(mode, "miscellaneous", self.miscellaneous.as_ref())?,
            furnishings_plan: self.furnishings_plan,
            furnishings_cost: match self.furnishings_plan {
                FurnishingsPlan::Purchase => furnishings_purchase_cost(square_footage, price),
                FurnishingsPlan::Rental => rental,
            },
            cash_to_launch: 0.0,
        };
        b.cash_to_launch = (b.first_month_rent + b.security_deposit + b.miscellaneous + b.furnishings_cost).round();
        debug!("Cash to launch {} ({:?} furnishings {})", b.cash_to_launch, b.furnishings_plan, b.furnishings_cost);
        Ok(b)
    }
}

/// Total one-time capital needed to open the unit. `square_footage` and
/// `price_per_sqft` override whatever the fields carry for those two entries.
pub fn compute_cash_to_launch(fields: &BuildOutFields, square_footage: f64, price_per_sqft: f64) -> f64 {
    let first_month_rent = lenient_amount(fields.first_month_rent.as_ref());
    let security_deposit = lenient_amount(fields.security_deposit.as_ref());
    let miscellaneous = lenient_amount(fields.miscellaneous.as_ref());
    let furnishings = match fields.furnishings_plan {
        FurnishingsPlan::Purchase => furnishings_purchase_cost(
            if square_footage.is_finite() { square_footage } else { 0.0 },
            price_per_sqft_or(price_per_sqft, DEFAULT_FURNISHINGS_PRICE_PER_SQFT),
        ),
        FurnishingsPlan::Rental => lenient_amount(fields.furnishings_rental.as_ref()),
    };
    (first_month_rent + security_deposit + miscellaneous + furnishings).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> BuildOutFields {
        BuildOutFields {
            first_month_rent: Some(2000.0.into()),
            security_deposit: Some("2000".into()),
            miscellaneous: Some(500.0.into()),
            furnishings_rental: Some(450.0.into()),
            square_footage: Some(850.0.into()),
            furnishings_price_per_sqft: None,
            furnishings_plan: FurnishingsPlan::Purchase,
        }
    }

    #[test]
    fn test_furnishings_cost_from_square_footage() {
        assert_eq!(furnishings_purchase_cost(850.0, 8.0), 6800.0);
        assert_eq!(furnishings_purchase_cost(0.0, 8.0), 0.0);
        assert_eq!(furnishings_purchase_cost(333.0, 7.5), 2498.0); // 2497.5
    }

    #[test]
    fn test_cash_to_launch_with_purchase() {
        assert_eq!(compute_cash_to_launch(&sample_fields(), 850.0, 8.0), 2000.0 + 2000.0 + 500.0 + 6800.0);
    }

    #[test]
    fn test_unset_price_uses_default() {
        assert_eq!(compute_cash_to_launch(&sample_fields(), 850.0, 0.0), 11300.0);
        assert_eq!(compute_cash_to_launch(&sample_fields(), 850.0, f64::NAN), 11300.0);
        let b = sample_fields()
            .breakdown(DEFAULT_FURNISHINGS_PRICE_PER_SQFT, CoercionMode::Lenient)
            .unwrap();
        assert_eq!(b.furnishings_cost, 6800.0);
    }

    #[test]
    fn test_rental_replaces_purchase() {
        let fields = BuildOutFields {
            furnishings_plan: FurnishingsPlan::Rental,
            ..sample_fields()
        };
        assert_eq!(compute_cash_to_launch(&fields, 850.0, 8.0), 2000.0 + 2000.0 + 500.0 + 450.0);

        let b = fields.breakdown(8.0, CoercionMode::Lenient).unwrap();
        assert_eq!(b.furnishings_cost, 450.0);
        assert_eq!(b.cash_to_launch, 4950.0);
    }

    #[test]
    fn test_breakdown_uses_entered_price() {
        let fields = BuildOutFields {
            furnishings_price_per_sqft: Some("10".into()),
            ..sample_fields()
        };
        let b = fields.breakdown(8.0, CoercionMode::Lenient).unwrap();
        assert_eq!(b.furnishings_cost, 8500.0);
        assert_eq!(b.cash_to_launch, 13000.0);
    }

    #[test]
    fn test_garbage_counts_as_zero() {
        let fields = BuildOutFields {
            security_deposit: Some("TBD".into()),
            square_footage: Some("big".into()),
            ..sample_fields()
        };
        let b = fields.breakdown(8.0, CoercionMode::Lenient).unwrap();
        assert_eq!(b.cash_to_launch, 2500.0);

        let err = fields.breakdown(8.0, CoercionMode::Strict).unwrap_err();
        assert_eq!(err.field, "square_footage");
    }
}
