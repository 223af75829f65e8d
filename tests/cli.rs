use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use std::path::Path;
use tempfile::TempDir;

const BIN_NAME: &str = "ledger";

const SNAPSHOT: &str = r#"{
    "transactions": [
        {"date": "2024-01-05", "type": "income", "category": "Salary", "amount": 1000},
        {"date": "2024-01-20", "type": "expense", "category": "Rent", "amount": 300},
        {"date": "2024-02-03T09:30:00Z", "type": "expense", "category": "Food", "amount": 100},
        {"date": "2024-02-10", "type": "expense", "category": "Rent", "amount": 300}
    ],
    "futureTransactions": [
        {"type": "income", "description": "Salary", "amount": 5000,
         "frequency": "monthly", "startDate": "2024-01-01"},
        {"type": "expense", "description": "Rent", "amount": 800,
         "frequency": "monthly", "startDate": "2024-01-01"},
        {"type": "expense", "description": "Mystery", "amount": 999,
         "frequency": "fortnightly", "startDate": "2024-01-01"}
    ],
    "loans": [
        {"id": 1700000000000, "type": "given", "person": "Sam", "date": "2023-11-01", "amount": 200,
         "dueDate": "2024-01-31", "status": "completed"},
        {"id": "1700000000001", "type": "taken", "person": "Alex", "date": "2023-12-01", "amount": 50,
         "payments": [{"date": "2024-01-15T18:00:00.000Z", "amount": 50}]}
    ]
}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("snapshot.json"), SNAPSHOT).expect("write snapshot");
        Self { dir }
    }

    fn snapshot(&self) -> &Path {
        self.dir.path()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("ROLLOVER_LEDGER_DIR", self.dir.path().join("config"));
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn with_file(&self, args: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.args(args)
            .arg("--file")
            .arg(self.snapshot().join("snapshot.json"))
            .args(["--today", "2024-02-15"]);
        cmd
    }
}

#[test]
fn build_json_carries_balances_forward() {
    let fixture = Fixture::new();
    let output = fixture
        .with_file(&["build", "--format", "json"])
        .output()
        .expect("run ledger");
    assert!(output.status.success());

    let export: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let months = &export["monthlyBudgets"];

    assert_eq!(months["2024-01"]["startingBalance"], 0);
    assert_eq!(months["2024-01"]["endingBalance"], 700);
    assert_eq!(months["2024-02"]["startingBalance"], 700);
    assert_eq!(months["2024-02"]["expenses"], 400);
    assert_eq!(months["2024-02"]["endingBalance"], 300);
    assert_eq!(export["schemaVersion"], "1.0.0");
}

#[test]
fn build_table_lists_months() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["build"])
        .assert()
        .success()
        .stdout(contains("2024-01").and(contains("2024-02")).and(contains("$700.00")));
}

#[test]
fn build_csv_has_header() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["build", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("month,starting_balance,income,expenses,ending_balance"))
        .stdout(contains("2024-02,700.00,0.00,400.00,300.00"));
}

#[test]
fn project_extends_from_last_recorded_month() {
    let fixture = Fixture::new();
    // 300.00 + 4200.00 planned net for March
    fixture
        .with_file(&["project", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("$4500.00").and(contains("projected")))
        .stdout(contains("Mystery").not());
}

#[test]
fn project_range_marks_recorded_months() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["project", "--month", "2024-02", "--to", "2024-04"])
        .assert()
        .success()
        .stdout(contains("actual").and(contains("$8700.00")));
}

#[test]
fn project_rejects_reversed_range() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["project", "--month", "2024-05", "--to", "2024-04"])
        .assert()
        .failure()
        .stderr(contains("before start"));
}

#[test]
fn loans_ignore_stored_status() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["loans"])
        .assert()
        .success()
        .stdout(contains("Sam").and(contains("overdue")).and(contains("1 overdue loan(s)")))
        .stdout(contains("Alex").and(contains("completed")));
}

#[test]
fn loans_open_filter_hides_completed() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["loans", "--open"])
        .assert()
        .success()
        .stdout(contains("Sam").and(contains("Alex").not()));
}

#[test]
fn loans_json_reports_derived_status() {
    let fixture = Fixture::new();
    let output = fixture
        .with_file(&["loans", "--json"])
        .output()
        .expect("run ledger");
    assert!(output.status.success());

    let loans: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(loans[0]["id"], "1700000000000");
    assert_eq!(loans[0]["status"], "overdue");
    assert_eq!(loans[0]["amount"], 200);
    assert_eq!(loans[0]["remaining"], 200);
    assert_eq!(loans[1]["id"], "1700000000001");
    assert_eq!(loans[1]["status"], "completed");
    assert_eq!(loans[1]["payments"][0]["date"], "2024-01-15");
}

#[test]
fn loans_due_dates_follow_configured_format() {
    let fixture = Fixture::new();
    let config_dir = fixture.dir.path().join("config");
    std::fs::create_dir_all(&config_dir).expect("config dir");
    std::fs::write(config_dir.join("config.json"), r#"{"date_format": "%d.%m.%Y"}"#)
        .expect("write settings");

    fixture
        .with_file(&["loans"])
        .assert()
        .success()
        .stdout(contains("31.01.2024").and(contains("2024-01-31").not()));
}

#[test]
fn breakdown_groups_expenses_by_category() {
    let fixture = Fixture::new();
    fixture
        .with_file(&["breakdown", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("Food")).and(contains("75%")));
}

#[test]
fn invalid_today_is_reported() {
    let fixture = Fixture::new();
    let mut cmd = fixture.command();
    cmd.args(["build", "--today", "15/02/2024", "--file"])
        .arg(fixture.snapshot().join("snapshot.json"))
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn missing_snapshot_fails() {
    let fixture = Fixture::new();
    let mut cmd = fixture.command();
    cmd.args(["build", "--today", "2024-02-15", "--file"])
        .arg(fixture.snapshot().join("missing.json"))
        .assert()
        .failure()
        .stderr(contains("Failed to read"));
}

#[test]
fn config_shows_paths_without_writing() {
    let fixture = Fixture::new();
    fixture
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Auto rollover:").and(contains("true")));
    assert!(!fixture.dir.path().join("config").join("config.json").exists());
}

#[test]
fn init_writes_settings() {
    let fixture = Fixture::new();
    fixture.command().arg("init").assert().success();
    assert!(fixture.dir.path().join("config").join("config.json").exists());
}
