use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kakeibo(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kakeibo").unwrap();
    cmd.env("KAKEIBO_DATA_DIR", dir.path()).env_remove("KAKEIBO_LOG");
    cmd
}

const SNAPSHOT: &str = r##"{
  "categories": [
    {"id": "11111111-1111-4111-8111-111111111111", "name": "家賃", "type": "fixed",
     "target_amount": 90000, "target_percentage": null, "color": "#ef4444"},
    {"id": "22222222-2222-4222-8222-222222222222", "name": "食費", "type": "variable",
     "target_amount": 40000, "target_percentage": null, "color": "#10b981"}
  ],
  "transactions": [
    {"id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa", "category_id": null,
     "amount": 300000, "date": "2025-01-25", "description": "給与", "type": "income"},
    {"id": "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb", "category_id": "11111111-1111-4111-8111-111111111111",
     "amount": 90000, "date": "2025-01-27", "description": "", "type": "expense"},
    {"id": "cccccccc-cccc-4ccc-8ccc-cccccccccccc", "category_id": "22222222-2222-4222-8222-222222222222",
     "amount": 30000, "date": "2025-01-10", "description": "", "type": "expense"},
    {"id": "dddddddd-dddd-4ddd-8ddd-dddddddddddd", "category_id": "22222222-2222-4222-8222-222222222222",
     "amount": 12000, "date": "2025-02-03", "description": "", "type": "expense"}
  ]
}"##;

#[test]
fn plan_uses_configured_income_by_default() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("￥300,000"))
        .stdout(predicate::str::contains("￥150,000"))
        .stdout(predicate::str::contains("￥60,000"));
}

#[test]
fn plan_exports_csv() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["plan", "300000", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "category,classification,percentage,amount\n家賃,fixed,30,90000\n",
        ))
        .stdout(predicate::str::contains("貯蓄,savings,20,60000"));
}

#[test]
fn plan_exports_json() {
    let dir = TempDir::new().unwrap();
    let output = kakeibo(&dir)
        .args(["plan", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["plan"]["fixed_total"], 0);
    assert_eq!(value["plan"]["variable_total"], 0);
    assert_eq!(value["plan"]["savings_target"], 0);
    assert_eq!(value["plan"]["recommendations"].as_array().unwrap().len(), 10);
}

#[test]
fn plan_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["plan", "300000", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn recommend_known_and_unknown_category() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["recommend", "食費", "300,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("食費 (variable, 15%): ￥45,000"));

    kakeibo(&dir)
        .args(["recommend", "ペット", "300000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Allocation not found: ペット"));
}

#[test]
fn progress_reports_band() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["progress", "70", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("70% (warning)"));

    kakeibo(&dir)
        .args(["progress", "150", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150% (danger)"));

    kakeibo(&dir)
        .args(["progress", "500", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0% (safe)"));
}

#[test]
fn format_handles_zero_and_negative() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["format", "0"])
        .assert()
        .success()
        .stdout("￥0\n");

    kakeibo(&dir)
        .args(["format", "-500"])
        .assert()
        .success()
        .stdout("-￥500\n");
}

#[test]
fn misconfigured_allocations_warn_but_still_plan() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"allocations": [
            {"category_name": "家賃", "classification": "fixed", "percentage": 40},
            {"category_name": "貯蓄", "classification": "savings", "percentage": 20}
        ]}"#,
    )
    .unwrap();

    kakeibo(&dir)
        .args(["plan", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unallocated"))
        .stderr(predicate::str::contains("sum to 60%"));

    kakeibo(&dir)
        .arg("allocations")
        .assert()
        .success()
        .stdout(predicate::str::contains("(total 60%)"));
}

#[test]
fn summary_table_and_json() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.json");
    std::fs::write(&ledger, SNAPSHOT).unwrap();

    kakeibo(&dir)
        .arg("summary")
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings rate"))
        .stdout(predicate::str::contains("2025-02"))
        .stdout(predicate::str::contains("Over budget: 家賃"))
        .stdout(predicate::str::contains("Excellent"));

    let output = kakeibo(&dir)
        .arg("summary")
        .arg(&ledger)
        .args(["--month", "2025-01", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["fixed_costs"], 90000);
    assert_eq!(value["summary"]["variable_spent"], 30000);
    assert_eq!(value["savings_rate"], 60);
    assert_eq!(value["categories"][0]["status"], "danger");
    assert_eq!(value["categories"][1]["progress"], 75);
    assert_eq!(value["advice"]["kind"], "excellent");
}

#[test]
fn summary_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["summary", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn savings_estimate() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args([
            "savings", "--current", "250000", "--target", "1000000", "--income", "300000",
            "--expense", "240000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("25%"))
        .stdout(predicate::str::contains("Saving ￥60,000 per month"))
        .stdout(predicate::str::contains("About 13 more month(s)"));
}

#[test]
fn init_writes_settings_once() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));
    assert!(dir.path().join("config.json").exists());

    kakeibo(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));

    kakeibo(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target income: ￥300,000"))
        .stdout(predicate::str::contains("built-in 50/30/20"));
}

#[test]
fn negative_amounts_are_accepted_as_arguments() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["plan", "-1000", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("家賃,fixed,30,-300"))
        .stdout(predicate::str::contains("貯蓄,savings,20,-200"));

    kakeibo(&dir)
        .args(["plan", "-1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-￥1,000"));

    kakeibo(&dir)
        .args(["recommend", "家賃", "-1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-￥300"));

    kakeibo(&dir)
        .args(["progress", "50", "-100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0% (safe)"));

    kakeibo(&dir)
        .args(["progress", "-50", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-50% (safe)"));
}

#[test]
fn recommend_without_category_lists_spending_targets() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["recommend"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("家賃: ￥90,000\n"))
        .stdout(predicate::str::contains("食費: ￥45,000"))
        .stdout(predicate::str::contains("貯蓄").not());
}

#[test]
fn summary_can_apply_plan_targets() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.json");
    std::fs::write(&ledger, SNAPSHOT).unwrap();

    let output = kakeibo(&dir)
        .arg("summary")
        .arg(&ledger)
        .args(["--month", "2025-01", "--format", "json", "--apply-plan"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // 食費 target becomes 15% of 300000
    assert_eq!(value["categories"][1]["target"], 45000);
    assert_eq!(value["categories"][1]["progress"], 67);
    assert_eq!(value["categories"][1]["status"], "safe");
}
