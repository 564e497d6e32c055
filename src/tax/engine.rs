use crate::tax::slabs::{Regime, STANDARD_DEDUCTION};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single freelance engagement with tax deducted at source by the client
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FreelanceProject {
    /// Gross amount invoiced for the project
    #[schemars(with = "f64")]
    pub amount: Decimal,
    /// Tax deducted at source by the payer
    #[serde(default)]
    #[schemars(with = "f64")]
    pub tds: Decimal,
}

/// Income document root: everything the engine needs for one calculation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IncomeInputs {
    /// Monthly salary in rupees
    #[schemars(with = "f64")]
    pub monthly_salary: Decimal,
    /// Freelance projects; order is irrelevant to the result
    #[serde(default)]
    pub freelance_projects: Vec<FreelanceProject>,
    /// GST collected on freelance invoices; passed through, never taxed here
    #[serde(default)]
    #[schemars(with = "f64")]
    pub gst_collected: Decimal,
    /// Tax regime to compute under
    #[serde(default)]
    pub regime: Regime,
}

/// Fully itemized result of one tax calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxResult {
    pub annual_salary: Decimal,
    pub freelance_income: Decimal,
    pub total_income: Decimal,
    pub taxable_income: Decimal,
    pub tax_before_rebate: Decimal,
    pub rebate: Decimal,
    pub final_tax: Decimal,
    /// Informational pass-through, not netted against the liability
    pub tds_deducted: Decimal,
    /// Informational pass-through
    pub gst_collected: Decimal,
}

/// Compute the tax liability for one set of inputs.
///
/// Pure and total: no I/O, no state, no failure modes. Negative inputs
/// propagate arithmetically and bottom out at zero tax in the slab walk.
pub fn compute(inputs: &IncomeInputs) -> TaxResult {
    let freelance_income: Decimal = inputs.freelance_projects.iter().map(|p| p.amount).sum();
    let tds_deducted: Decimal = inputs.freelance_projects.iter().map(|p| p.tds).sum();

    let annual_salary = inputs.monthly_salary * dec!(12);
    let total_income = annual_salary + freelance_income;
    let taxable_income = total_income - STANDARD_DEDUCTION;

    let tax_before_rebate = inputs.regime.tax(taxable_income);
    let rebate = inputs.regime.rebate(taxable_income, tax_before_rebate);
    let final_tax = tax_before_rebate - rebate;

    TaxResult {
        annual_salary,
        freelance_income,
        total_income,
        taxable_income,
        tax_before_rebate,
        rebate,
        final_tax,
        tds_deducted,
        gst_collected: inputs.gst_collected,
    }
}
