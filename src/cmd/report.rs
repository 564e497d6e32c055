//! Report command - compute and display the itemized tax report

use crate::cmd::read_inputs;
use crate::tax::{compute, IncomeInputs, Regime, TaxResult, FISCAL_YEAR};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// JSON income document ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Tax regime to compute under (overrides the document)
    #[arg(short, long, value_enum)]
    regime: Option<RegimeArg>,

    /// Also list freelance projects in a table
    #[arg(long)]
    projects: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
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

/// Report data for JSON output
#[derive(Debug, Serialize)]
struct ReportData {
    fiscal_year: String,
    regime: String,
    annual_salary: String,
    freelance_income: String,
    total_income: String,
    taxable_income: String,
    tax_before_rebate: String,
    rebate: String,
    final_tax: String,
    tds_deducted: String,
    gst_collected: String,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut inputs = read_inputs(&self.input)?;
        if let Some(regime) = self.regime {
            inputs.regime = regime.into();
        }
        let result = compute(&inputs);

        if self.json {
            self.print_json(&result, inputs.regime)
        } else {
            if self.projects {
                print_projects(&inputs);
            }
            print_report(&result, inputs.regime);
            Ok(())
        }
    }

    fn print_json(&self, result: &TaxResult, regime: Regime) -> anyhow::Result<()> {
        let data = ReportData {
            fiscal_year: FISCAL_YEAR.to_string(),
            regime: regime_str(regime).to_string(),
            annual_salary: format!("{:.2}", result.annual_salary),
            freelance_income: format!("{:.2}", result.freelance_income),
            total_income: format!("{:.2}", result.total_income),
            taxable_income: format!("{:.2}", result.taxable_income),
            tax_before_rebate: format!("{:.2}", result.tax_before_rebate),
            rebate: format!("{:.2}", result.rebate),
            final_tax: format!("{:.2}", result.final_tax),
            tds_deducted: format!("{:.2}", result.tds_deducted),
            gst_collected: format!("{:.2}", result.gst_collected),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

/// Row for the freelance project table output
#[derive(Debug, Clone, Tabled)]
struct ProjectRow {
    #[tabled(rename = "#")]
    row_num: String,

    #[tabled(rename = "Amount")]
    amount: String,

    #[tabled(rename = "TDS")]
    tds: String,
}

fn print_projects(inputs: &IncomeInputs) {
    if inputs.freelance_projects.is_empty() {
        println!("No freelance projects");
        println!();
        return;
    }

    let rows: Vec<ProjectRow> = inputs
        .freelance_projects
        .iter()
        .enumerate()
        .map(|(i, p)| ProjectRow {
            row_num: (i + 1).to_string(),
            amount: format_inr(p.amount),
            tds: format_inr(p.tds),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
    println!();
}

fn print_report(result: &TaxResult, regime: Regime) {
    let regime_label = match regime {
        Regime::New => "New Regime",
        Regime::Old => "Old Regime",
    };

    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║{:^78}║", format!("INCOME TAX REPORT ({})", FISCAL_YEAR));
    println!("║{:^78}║", format!("Regime: {}", regime_label));
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!("║  INCOME                                                                      ║");
    println!("╟──────────────────────────────────────────────────────────────────────────────╢");
    print_row("Annual Salary:", &format_inr(result.annual_salary));
    print_row("Freelance Income:", &format_inr(result.freelance_income));
    print_row("Total Income:", &format_inr(result.total_income));
    print_row("Taxable Income:", &format_inr_signed(result.taxable_income));
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!("║  TAX                                                                         ║");
    println!("╟──────────────────────────────────────────────────────────────────────────────╢");
    print_row("Tax Before Rebate:", &format_inr(result.tax_before_rebate));
    print_row("87A Rebate:", &format_inr(result.rebate));
    print_row("FINAL TAX PAYABLE:", &format_inr(result.final_tax));
    println!("╠══════════════════════════════════════════════════════════════════════════════╣");
    println!("║  WITHHELD / COLLECTED (informational)                                        ║");
    println!("╟──────────────────────────────────────────────────────────────────────────────╢");
    print_row("TDS Deducted:", &format_inr(result.tds_deducted));
    print_row("GST Collected:", &format_inr(result.gst_collected));
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");
}

fn print_row(label: &str, value: &str) {
    println!("║  {:<26}{:>16}{:34}║", label, value, "");
}

fn regime_str(regime: Regime) -> &'static str {
    match regime {
        Regime::New => "new",
        Regime::Old => "old",
    }
}

fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

fn format_inr_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-₹{:.2}", amount.abs())
    } else {
        format!("₹{:.2}", amount)
    }
}
