pub mod export;
pub mod report;
pub mod schema;

use crate::tax::IncomeInputs;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read an income document (JSON) from a file, or stdin with "-"
pub fn read_inputs(path: &Path) -> anyhow::Result<IncomeInputs> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<IncomeInputs> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let inputs = serde_json::from_reader(reader)
        .with_context(|| format!("invalid income document: {}", path.display()))?;
    log::info!("Read income document from {}", path.display());
    Ok(inputs)
}

fn read_from_stdin() -> anyhow::Result<IncomeInputs> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let inputs = serde_json::from_slice(&buffer).context("invalid income document")?;
    Ok(inputs)
}
