//! Integration tests for the CLI interface
//!
//! Runs the binary against order logs in a scratch directory

mod common;

use common::{Workspace, ONE_BASKET, TWO_ORDERS};
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    let ws = Workspace::new();
    ws.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--total"))
        .stdout(predicate::str::contains("--validate-grouping"));
}

#[test]
fn test_cli_version_flag() {
    let ws = Workspace::new();
    ws.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skupair"));
}

#[test]
fn test_writes_top_pair() {
    let ws = Workspace::new();
    ws.write_orders("orders.csv", TWO_ORDERS, ',');

    ws.command()
        .args(["orders.csv", "1", "-o", "out.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 of 1 pairs"));

    assert_eq!(ws.read("out.csv"), "S1,S2,2\n");
}

#[test]
fn test_total_larger_than_available_fails_without_output() {
    let ws = Workspace::new();
    ws.write_orders("orders.csv", TWO_ORDERS, ',');

    ws.command()
        .args(["orders.csv", "2", "-o", "out.csv"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Asked for the top 2 pairs"));

    assert!(!ws.join("out.csv").exists());
}

#[test]
fn test_default_total_writes_every_pair() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');

    ws.command()
        .args(["basket.csv", "-o", "out.csv"])
        .assert()
        .success();

    assert_eq!(ws.read("out.csv"), "A,B,2\nA,C,2\nB,C,2\n");
}

#[test]
fn test_invalid_total_falls_back_to_default() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');

    ws.command()
        .args(["basket.csv", "lots", "-o", "out.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("please input a valid number"));

    assert_eq!(ws.read("out.csv").lines().count(), 3);
}

#[test]
fn test_zero_total_falls_back_to_default() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');

    ws.command()
        .args(["basket.csv", "0", "-o", "out.csv"])
        .assert()
        .success();

    assert_eq!(ws.read("out.csv").lines().count(), 3);
}

#[test]
fn test_missing_input_is_read_error() {
    let ws = Workspace::new();

    ws.command()
        .args(["missing.csv", "-o", "out.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing.csv"));

    assert!(!ws.join("out.csv").exists());
}

#[test]
fn test_default_input_and_timestamped_output() {
    let ws = Workspace::new();
    ws.write_orders("order.csv", TWO_ORDERS, ',');

    ws.command()
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sku-"));

    let outputs = ws.files_starting_with("Sku-");
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].ends_with(".csv"));
    assert_eq!(ws.read(&outputs[0]), "S1,S2,2\n");
}

#[test]
fn test_single_order_only_writes_empty_file() {
    let ws = Workspace::new();
    ws.write_orders("orders.csv", &[("S1", "O1"), ("S2", "O2")], ',');

    ws.command()
        .args(["orders.csv", "-o", "out.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 0 of 0 pairs"));

    assert_eq!(ws.read("out.csv"), "");
}

#[test]
fn test_json_output() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');

    ws.command()
        .args(["basket.csv", "2", "--format", "json", "-o", "out.json"])
        .assert()
        .success();

    let pairs: serde_json::Value = serde_json::from_str(&ws.read("out.json")).unwrap();
    let pairs = pairs.as_array().unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0]["sku1"], "A");
    assert_eq!(pairs[0]["sku2"], "B");
    assert_eq!(pairs[0]["count"], 2);
}

#[test]
fn test_tsv_input_and_output() {
    let ws = Workspace::new();
    ws.write_orders("orders.tsv", TWO_ORDERS, '\t');

    ws.command()
        .args(["orders.tsv", "-o", "out.tsv"])
        .assert()
        .success();

    assert_eq!(ws.read("out.tsv"), "S1\tS2\t2\n");
}

#[test]
fn test_header_row_is_skipped() {
    let ws = Workspace::new();
    ws.write_file("orders.csv", "sku,order\nS1,O1\nS2,O1\n");

    ws.command()
        .args(["orders.csv", "--has-headers", "-o", "out.csv"])
        .assert()
        .success();

    assert_eq!(ws.read("out.csv"), "S1,S2,2\n");
}

#[test]
fn test_config_file_is_picked_up() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');
    ws.write_file(
        "skupair.toml",
        "input = \"basket.csv\"\noutput = \"top.csv\"\ntotal = 2\n",
    );

    ws.command().assert().success();

    assert_eq!(ws.read("top.csv"), "A,B,2\nA,C,2\n");
}

#[test]
fn test_flags_override_config_file() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');
    ws.write_file(
        "skupair.toml",
        "input = \"basket.csv\"\noutput = \"top.csv\"\ntotal = 2\n",
    );

    ws.command().args(["-n", "1"]).assert().success();

    assert_eq!(ws.read("top.csv"), "A,B,2\n");
}

#[test]
fn test_env_total_is_used() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');

    ws.command()
        .env("SKUPAIR_TOTAL", "1")
        .args(["basket.csv", "-o", "out.csv"])
        .assert()
        .success();

    assert_eq!(ws.read("out.csv"), "A,B,2\n");
}

#[test]
fn test_unknown_config_key_is_config_error() {
    let ws = Workspace::new();
    ws.write_orders("basket.csv", ONE_BASKET, ',');
    let config = ws.write_file("custom.toml", "totl = 3\n");

    ws.command()
        .arg("-c")
        .arg(&config)
        .args(["basket.csv", "-o", "out.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let ws = Workspace::new();

    ws.command()
        .args(["-c", "nowhere.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nowhere.toml"));
}

#[test]
fn test_split_order_fails_grouping_check() {
    let ws = Workspace::new();
    ws.write_orders("orders.csv", &[("A", "O1"), ("B", "O2"), ("C", "O1")], ',');

    ws.command()
        .args(["orders.csv", "--validate-grouping", "-o", "out.csv"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("'O1'"));

    assert!(!ws.join("out.csv").exists());
}

#[test]
fn test_malformed_row_is_read_error() {
    let ws = Workspace::new();
    ws.write_file("orders.csv", "S1,O1\nS2\n");

    ws.command()
        .args(["orders.csv", "-o", "out.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Row 2"));
}

#[test]
fn test_verbose_shows_context_chain() {
    let ws = Workspace::new();

    ws.command()
        .args(["-v", "missing.csv", "-o", "out.csv"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Context Chain:"));
}
