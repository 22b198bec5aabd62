use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn supplyflow(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("supplyflow"));
    cmd.env_remove("SUPPLYFLOW_ROOT")
        .arg("--root")
        .arg(root)
        .arg("--no-color");
    cmd
}

fn parse_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("valid json report")
}

fn read_csv_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn generate_writes_both_tables() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Sankey Flow Validation ==="))
        .stdout(predicate::str::contains("Files generated successfully"))
        .stdout(predicate::str::contains("- data/supply_chain_flow.csv"))
        .stdout(predicate::str::contains("- data/sales_by_channel.csv"));

    let flows = read_csv_lines(&temp.path().join("data/supply_chain_flow.csv"));
    assert_eq!(flows[0], "source,target,value,period");
    assert_eq!(flows.len(), 16);

    let summary = read_csv_lines(&temp.path().join("data/sales_by_channel.csv"));
    assert_eq!(summary[0], "Channel,Category,Total Sales,Period");
    assert_eq!(summary.len(), 7);
    assert!(summary[1].starts_with("Online,Electronics,"));
    assert!(summary[6].starts_with("Retail Store,Food,"));
}

#[test]
fn generate_is_deterministic_per_seed() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let other = tempdir().unwrap();

    for root in [first.path(), second.path()] {
        supplyflow(root).arg("generate").assert().success();
    }
    supplyflow(other.path())
        .args(["generate", "--seed", "43"])
        .assert()
        .success();

    let table = |root: &Path| fs::read_to_string(root.join("data/supply_chain_flow.csv")).unwrap();
    assert_eq!(table(first.path()), table(second.path()));
    assert_ne!(table(first.path()), table(other.path()));
}

#[test]
fn generate_json_report_lists_every_category() {
    let temp = tempdir().unwrap();

    let assert = supplyflow(temp.path())
        .args(["--format", "json", "generate"])
        .assert()
        .success();
    let report = parse_json(&assert.get_output().stdout);

    let categories: Vec<&str> = report["validation"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Electronics", "Clothing", "Food"]);
    assert_eq!(report["files"].as_array().unwrap().len(), 2);
}

#[test]
fn generate_uses_period_tag() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .args(["generate", "--period", "Q3-2024"])
        .assert()
        .success();

    let flows = read_csv_lines(&temp.path().join("data/supply_chain_flow.csv"));
    assert!(flows[1..].iter().all(|l| l.ends_with(",Q3-2024")));
}

#[test]
fn generate_rejects_bad_period() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .args(["generate", "--period", "spring"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid period"));
}

#[test]
fn validate_reports_rounding_loss_without_failing() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("supply_chain_flow.csv"),
        "source,target,value,period\n\
Supplier A,Electronics,251,Q1-2025\n\
Electronics,Online,175,Q1-2025\n\
Electronics,Retail Store,75,Q1-2025\n",
    )
    .unwrap();

    supplyflow(temp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flow inconsistency detected"))
        .stdout(predicate::str::contains("Electronics: 251 in, 250 out"));
}

#[test]
fn validate_without_table_fails() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load flow table"));
}

#[test]
fn render_requires_generated_tables() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn run_writes_tables_and_dashboard() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("- outputs/golden_image.html"));

    let html = fs::read_to_string(temp.path().join("outputs/golden_image.html")).unwrap();
    assert!(html.contains("Supply Chain Dashboard – Q1 2025"));
    assert!(html.contains("Supplier A → Electronics:"));
    assert_eq!(html.matches("<path ").count(), 15);
    assert!(html.contains("<tr class=\"max\">"));
}

#[test]
fn render_to_custom_output() {
    let temp = tempdir().unwrap();
    supplyflow(temp.path()).arg("generate").assert().success();

    supplyflow(temp.path())
        .args(["--format", "md", "render", "--output", "board.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- `outputs/board.html`"));

    assert!(temp.path().join("outputs/board.html").is_file());
}

#[test]
fn unknown_format_is_rejected() {
    let temp = tempdir().unwrap();

    supplyflow(temp.path())
        .args(["--format", "jsonl", "generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));

    assert!(!temp.path().join("data").exists());
}
