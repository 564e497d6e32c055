use clap::{Parser, Subcommand};

mod cmd;
mod tax;

use cmd::{export::ExportCommand, report::ReportCommand, schema::SchemaCommand};

#[derive(Parser, Debug)]
#[command(
    name = "taxin",
    version,
    about = "Indian income tax calculator for salaried and freelance income"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate and display the tax report
    Report(ReportCommand),
    /// Export the tax report as a spreadsheet-layout CSV
    Export(ExportCommand),
    /// Print the JSON Schema for the income document
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Report(cmd) => cmd.exec(),
        Command::Export(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
