use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order,amount,status,transaction"))
        .stdout(predicate::str::is_match(r"order123,100,completed,txn_\d+")?)
        .stdout(predicate::str::is_match(r"order456,25.5,completed,txn_\d+")?)
        .stdout(predicate::str::is_match(r"freebie,0,completed,txn_\d+")?);

    Ok(())
}

#[test]
fn test_cli_text_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv").args(["--format", "text"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"Order order123 completed with transaction txn_\d+",
        )?);

    Ok(())
}

#[test]
fn test_cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv").args(["--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(
            r#"\{"transactionId":"txn_\d+","status":"completed"\}"#,
        )?);

    Ok(())
}

#[test]
fn test_cli_non_privileged_role_is_denied() {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv").args(["--role", "customer"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing order: Access denied for role 'customer'",
        ))
        .stdout(predicate::str::contains("order123,100,pending,"))
        .stdout(predicate::str::contains("txn_").not());
}

#[test]
fn test_cli_discount_and_delivery() {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv")
        .args(["--discount", "10", "--deliver"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order123,90,delivered,txn_"))
        .stdout(predicate::str::contains("order456,22.95,delivered,txn_"));
}

#[test]
fn test_cli_legacy_gateway_declines_over_limit() {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv")
        .args(["--gateway", "legacy", "--legacy-limit", "50"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order123,100,pending,legacy_"))
        .stdout(predicate::str::contains("order456,25.5,completed,legacy_"));
}

#[test]
fn test_cli_digital_workflow_rejects_free_order() {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv")
        .args(["--workflow", "digital"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "digital order freebie must have a non-zero amount",
        ))
        .stdout(predicate::str::contains("freebie,0,pending,"))
        .stdout(predicate::str::contains("order123,100,completed,txn_"));
}

#[test]
fn test_cli_unknown_role_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv").args(["--role", "root"]);

    cmd.assert().failure();
}

#[test]
fn test_cli_discount_is_undone_when_payment_does_not_complete() {
    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv")
        .args(["--discount", "10", "--role", "customer"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order123,100,pending,"))
        .stdout(predicate::str::contains("order456,25.5,pending,"));

    let mut cmd = Command::new(cargo_bin!("orderflow"));
    cmd.arg("tests/fixtures/orders.csv").args([
        "--discount",
        "10",
        "--gateway",
        "legacy",
        "--legacy-limit",
        "50",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order123,100,pending,legacy_"))
        .stdout(predicate::str::contains("order456,22.95,completed,legacy_"));
}
