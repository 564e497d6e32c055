//! Export command - spreadsheet-layout CSV of the tax report

use crate::cmd::read_inputs;
use crate::tax::{compute, Regime, TaxResult, FISCAL_YEAR};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportCommand {
    /// JSON income document ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Tax regime to compute under (overrides the document)
    #[arg(short, long, value_enum)]
    regime: Option<RegimeArg>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RegimeArg {
    #[default]
    New,
    Old,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::New => Regime::New,
            RegimeArg::Old => Regime::Old,
        }
    }
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut inputs = read_inputs(&self.input)?;
        if let Some(regime) = self.regime {
            inputs.regime = regime.into();
        }
        let result = compute(&inputs);

        match &self.output {
            Some(path) => {
                write_report_csv(&result, File::create(path)?)?;
                log::info!("Wrote tax report to {}", path.display());
                Ok(())
            }
            None => write_report_csv(&result, io::stdout()),
        }
    }
}

/// Write the report in the fixed spreadsheet row layout.
///
/// The layout is what downstream spreadsheet consumers expect: title row,
/// blank separators, one label/value row per figure, with the final tax
/// and the informational pass-through fields set off by blank rows.
pub fn write_report_csv<W: Write>(result: &TaxResult, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record([format!("Tax Report for {}", FISCAL_YEAR).as_str()])?;
    wtr.write_record(["", ""])?;
    wtr.write_record(["Annual Salary", plain(result.annual_salary).as_str()])?;
    wtr.write_record(["Freelance Income", plain(result.freelance_income).as_str()])?;
    wtr.write_record(["Total Income", plain(result.total_income).as_str()])?;
    wtr.write_record(["Taxable Income", plain(result.taxable_income).as_str()])?;
    wtr.write_record(["Tax Before Rebate", plain(result.tax_before_rebate).as_str()])?;
    wtr.write_record(["87A Rebate", plain(result.rebate).as_str()])?;
    wtr.write_record(["", ""])?;
    wtr.write_record(["Final Tax Payable", plain(result.final_tax).as_str()])?;
    wtr.write_record(["", ""])?;
    wtr.write_record(["TDS Deducted", plain(result.tds_deducted).as_str()])?;
    wtr.write_record(["GST Collected", plain(result.gst_collected).as_str()])?;
    wtr.flush()?;
    Ok(())
}

// Trailing zeros stripped so spreadsheets parse the cells as numbers
fn plain(amount: Decimal) -> String {
    amount.normalize().to_string()
}
