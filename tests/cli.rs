use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(data_dir: &TempDir, args: &[&str]) {
    fintrack(data_dir).args(args).assert().success();
}

#[test]
fn init_creates_ledger() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));
    assert!(dir.path().join("data").join("ledger.json").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn expense_reduces_remaining_balance() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "50000", "--source", "Salary"]);

    fintrack(&dir)
        .args(["expense", "add", "10000", "Groceries", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("Remaining balance: ₹40000.00"));

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("₹50000.00").and(contains("₹40000.00")).and(contains("Food")));
}

#[test]
fn expense_rejected_without_income() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["expense", "add", "100", "Coffee"])
        .assert()
        .failure()
        .stderr(contains("Insufficient balance"));

    fintrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("Coffee").not());
}

#[test]
fn expense_larger_than_balance_is_rejected() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "500"]);
    fintrack(&dir)
        .args(["expense", "add", "500.01", "Dinner"])
        .assert()
        .failure()
        .stderr(contains("Insufficient balance"));
}

#[test]
fn loan_payment_books_expense() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "50000"]);
    run(
        &dir,
        &[
            "loan", "add", "Car", "--total", "12000", "--monthly", "2000", "--due-day", "5",
        ],
    );

    fintrack(&dir)
        .args(["loan", "pay", "Car"])
        .assert()
        .success()
        .stdout(contains("Paid ₹2000.00 towards 'Car'").and(contains("₹10000.00")));

    fintrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("Loans").and(contains("(auto)")));

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("₹48000.00"));
}

#[test]
fn loan_payment_rejected_when_balance_too_low() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "1000"]);
    run(
        &dir,
        &["loan", "add", "Bike", "--total", "6000", "--monthly", "1500", "--due-day", "10"],
    );

    fintrack(&dir)
        .args(["loan", "pay", "Bike"])
        .assert()
        .failure()
        .stderr(contains("Insufficient balance"));

    fintrack(&dir)
        .args(["loan", "show", "Bike"])
        .assert()
        .success()
        .stdout(contains("₹6000.00"));
}

#[test]
fn goal_contribution_completes_goal() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "10000"]);
    run(
        &dir,
        &["goal", "add", "Trip", "--target", "5000", "--current", "4500"],
    );

    fintrack(&dir)
        .args(["goal", "contribute", "Trip", "600"])
        .assert()
        .success()
        .stdout(contains("₹5100.00").and(contains("Goal reached")));

    fintrack(&dir)
        .args(["goal", "contribute", "Trip", "100"])
        .assert()
        .failure();
}

#[test]
fn budget_plan_round_trip() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args([
            "budget", "set", "--allocate", "Food=12000", "--allocate", "Housing=20000",
        ])
        .assert()
        .success()
        .stdout(contains("Saved budget plan with 2 categories"));

    fintrack(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("Housing")).and(contains("₹32000.00")));
}

#[test]
fn summary_reminder_can_be_dismissed() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["prefs", "dismiss", "budget-reminder"]);

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("no budget plan yet").not());

    run(&dir, &["prefs", "restore", "budget-reminder"]);

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("no budget plan yet"));
}

#[test]
fn summary_reminder_waits_for_next_period() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["prefs", "reminder", "weekly"]);

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("no budget plan yet"));

    fintrack(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("no budget plan yet").not());

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Reminder last shown"));
}

#[test]
fn export_json_contains_ledgers() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "2500", "--source", "Freelance"]);
    run(&dir, &["expense", "add", "300", "Taxi", "--category", "Transportation"]);

    fintrack(&dir)
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(
            contains("\"schema_version\"")
                .and(contains("Freelance"))
                .and(contains("Taxi")),
        );
}

#[test]
fn export_csv_writes_file() {
    let dir = TempDir::new().unwrap();
    run(&dir, &["income", "add", "2500"]);
    run(&dir, &["expense", "add", "300", "Taxi"]);
    let out = dir.path().join("expenses.csv");

    fintrack(&dir)
        .args(["export", "csv", "expenses", "-o"])
        .arg(&out)
        .assert()
        .success();

    let contents = std::fs::read_to_string(out).unwrap();
    assert!(contents.contains("Taxi"));
}

#[test]
fn unknown_loan_reports_not_found() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["loan", "show", "Mortgage"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
