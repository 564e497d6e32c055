//! Statutory constants and slab tables for FY 2024-25

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fiscal year the slab tables below apply to
pub const FISCAL_YEAR: &str = "FY 2024-25";

/// Standard deduction on salary income, applied under both regimes
pub const STANDARD_DEDUCTION: Decimal = dec!(50000);

/// Section 80C allowance, available under the old regime only
pub const DEDUCTION_80C: Decimal = dec!(150000);

/// Section 87A rebate: taxable income at or below this qualifies (new regime)
pub const REBATE_THRESHOLD: Decimal = dec!(700000);

/// Section 87A rebate cap
pub const REBATE_CAP: Decimal = dec!(25000);

/// Tax regime selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// New regime: lower slab rates, no 80C deduction, 87A rebate
    #[default]
    New,
    /// Old regime: 80C deduction, steeper slabs, no rebate
    Old,
}

/// One slab of a progressive rate table
#[derive(Debug, Clone, Copy)]
pub struct Slab {
    /// Lower bound (exclusive); the rate applies to the excess above it
    pub floor: Decimal,
    /// Upper bound (inclusive); `None` for the top slab
    pub ceiling: Option<Decimal>,
    /// Marginal rate within this slab
    pub rate: Decimal,
    /// Tax accumulated over all slabs below the floor
    pub accumulated: Decimal,
}

const NEW_REGIME_SLABS: &[Slab] = &[
    Slab {
        floor: dec!(0),
        ceiling: Some(dec!(300000)),
        rate: dec!(0),
        accumulated: dec!(0),
    },
    Slab {
        floor: dec!(300000),
        ceiling: Some(dec!(600000)),
        rate: dec!(0.05),
        accumulated: dec!(0),
    },
    Slab {
        floor: dec!(600000),
        ceiling: Some(dec!(900000)),
        rate: dec!(0.10),
        accumulated: dec!(15000),
    },
    Slab {
        floor: dec!(900000),
        ceiling: Some(dec!(1200000)),
        rate: dec!(0.15),
        accumulated: dec!(45000),
    },
    Slab {
        floor: dec!(1200000),
        ceiling: Some(dec!(1500000)),
        rate: dec!(0.20),
        accumulated: dec!(90000),
    },
    Slab {
        floor: dec!(1500000),
        ceiling: None,
        rate: dec!(0.30),
        accumulated: dec!(150000),
    },
];

const OLD_REGIME_SLABS: &[Slab] = &[
    Slab {
        floor: dec!(0),
        ceiling: Some(dec!(250000)),
        rate: dec!(0),
        accumulated: dec!(0),
    },
    Slab {
        floor: dec!(250000),
        ceiling: Some(dec!(500000)),
        rate: dec!(0.05),
        accumulated: dec!(0),
    },
    Slab {
        floor: dec!(500000),
        ceiling: Some(dec!(1000000)),
        rate: dec!(0.20),
        accumulated: dec!(12500),
    },
    Slab {
        floor: dec!(1000000),
        ceiling: None,
        rate: dec!(0.30),
        accumulated: dec!(112500),
    },
];

impl Regime {
    /// Slab table for this regime
    pub fn slabs(&self) -> &'static [Slab] {
        match self {
            Regime::New => NEW_REGIME_SLABS,
            Regime::Old => OLD_REGIME_SLABS,
        }
    }

    /// Taxable base after regime-specific allowances.
    ///
    /// The old regime subtracts the 80C allowance, floored at zero.
    /// The new regime taxes the taxable income directly.
    pub fn adjusted_taxable(&self, taxable_income: Decimal) -> Decimal {
        match self {
            Regime::New => taxable_income,
            Regime::Old => (taxable_income - DEDUCTION_80C).max(Decimal::ZERO),
        }
    }

    /// Tax before rebate on the given taxable income
    pub fn tax(&self, taxable_income: Decimal) -> Decimal {
        slab_tax(self.adjusted_taxable(taxable_income), self.slabs())
    }

    /// Section 87A rebate: new regime only, capped against the tax itself
    pub fn rebate(&self, taxable_income: Decimal, tax: Decimal) -> Decimal {
        match self {
            Regime::New if taxable_income <= REBATE_THRESHOLD => REBATE_CAP.min(tax),
            _ => Decimal::ZERO,
        }
    }
}

/// Evaluate a progressive slab table.
///
/// Upper bounds are inclusive: a value exactly at a ceiling falls in the
/// lower slab. The excess above the floor is clamped at zero, so values
/// below the first ceiling (including negative values) yield zero tax.
pub fn slab_tax(value: Decimal, slabs: &[Slab]) -> Decimal {
    for slab in slabs {
        let within = slab.ceiling.map_or(true, |c| value <= c);
        if within {
            let excess = (value - slab.floor).max(Decimal::ZERO);
            let tax = slab.accumulated + slab.rate * excess;
            log::debug!(
                "slab floor {} ceiling {:?} rate {}: excess {}, tax {}",
                slab.floor,
                slab.ceiling,
                slab.rate,
                excess,
                tax
            );
            return tax;
        }
    }
    Decimal::ZERO
}
