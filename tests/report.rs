//! E2E tests for the report, export and schema commands

use std::process::Command;

/// Test the formatted report for the sample salaried freelancer
#[test]
fn report_new_regime() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-i",
            "tests/data/salaried_freelancer.json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("INCOME TAX REPORT (FY 2024-25)"));
    assert!(stdout.contains("New Regime"));
    assert!(stdout.contains("₹590000.00"));
    // full 87A rebate wipes out the liability
    assert!(stdout.contains("₹14500.00"));
    assert!(stdout.contains("FINAL TAX PAYABLE:"));
    assert!(stdout.contains("₹0.00"));
}

/// Test the --regime flag overrides the document
#[test]
fn report_old_regime() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-i",
            "tests/data/salaried_freelancer.json",
            "--regime",
            "old",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // taxable 590000, adjusted 440000 -> 5% of 190000, no rebate
    assert!(stdout.contains("Old Regime"));
    assert!(stdout.contains("₹9500.00"));
}

/// Test JSON output structure
#[test]
fn report_json_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-i",
            "tests/data/salaried_freelancer.json",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"taxable_income\": \"590000.00\""));
    assert!(stdout.contains("\"tax_before_rebate\": \"14500.00\""));
    assert!(stdout.contains("\"rebate\": \"14500.00\""));
    assert!(stdout.contains("\"final_tax\": \"0.00\""));
    assert!(stdout.contains("\"tds_deducted\": \"4000.00\""));
    assert!(stdout.contains("\"regime\": \"new\""));
}

/// Test the freelance project table
#[test]
fn report_project_table() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-i",
            "tests/data/salaried_freelancer.json",
            "--projects",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Amount"));
    assert!(stdout.contains("TDS"));
    assert!(stdout.contains("₹40000.00"));
    assert!(stdout.contains("₹4000.00"));
}

/// Test the spreadsheet-layout CSV export
#[test]
fn export_csv_layout() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "export",
            "-i",
            "tests/data/salaried_freelancer.json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Tax Report for FY 2024-25");
    assert_eq!(lines[1], ",");
    assert_eq!(lines[2], "Annual Salary,600000");
    assert!(stdout.contains("Final Tax Payable,0"));
    assert!(stdout.contains("TDS Deducted,4000"));
    assert!(stdout.contains("GST Collected,0"));
}

/// Test stdin input with "-"
#[test]
fn report_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new("cargo")
        .args(["run", "--", "report", "-i", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .as_mut()
        .expect("no stdin")
        .write_all(br#"{ "monthly_salary": 100000 }"#)
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // taxable 1150000 -> 45000 + 15% of 250000
    assert!(stdout.contains("\"taxable_income\": \"1150000.00\""));
    assert!(stdout.contains("\"tax_before_rebate\": \"82500.00\""));
    assert!(stdout.contains("\"rebate\": \"0.00\""));
}

/// Test the schema command output
#[test]
fn schema_output() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"monthly_salary\""));
    assert!(stdout.contains("\"freelance_projects\""));
    assert!(stdout.contains("\"gst_collected\""));
    assert!(stdout.contains("\"regime\""));
}
