pub mod engine;
pub mod slabs;

// Flat public surface for domain types and functions.
pub use engine::{compute, FreelanceProject, IncomeInputs, TaxResult};
pub use slabs::{
    slab_tax, Regime, Slab, DEDUCTION_80C, FISCAL_YEAR, REBATE_CAP, REBATE_THRESHOLD,
    STANDARD_DEDUCTION,
};
