// Copyright (c) 2016-2021 Fabian Schuiki

//! Runs the `svgraph` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DESIGN: &str = "
module leaf (input clk); endmodule
module top (input clk);
    leaf u_leaf (.clk(clk));
endmodule
";

fn svgraph(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("svgraph").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn generates_graph() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("top.sv"), DESIGN).unwrap();
    svgraph(&dir)
        .args(&["top.sv", "-o", "hier"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated DOT graph: hier.dot"));
    let text = fs::read_to_string(dir.path().join("hier.dot")).unwrap();
    assert!(text.contains("\"top\""));
    assert!(text.contains("\"leaf\""));
    assert!(text.contains("->"));
}

#[test]
fn default_output_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("top.sv"), DESIGN).unwrap();
    svgraph(&dir).arg("top.sv").assert().success();
    assert!(dir.path().join("sv_graph.dot").exists());
}

#[test]
fn missing_input_stops_without_exit_status() {
    let dir = TempDir::new().unwrap();
    svgraph(&dir)
        .arg("nowhere.sv")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input file `nowhere.sv` not found"));
    assert!(!dir.path().join("sv_graph.dot").exists());
}

#[test]
fn unreadable_input_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    svgraph(&dir)
        .arg("sub")
        .assert()
        .success()
        .stderr(predicate::str::contains("unable to read `sub`"));
    assert!(!dir.path().join("sv_graph.dot").exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("top.sv"), DESIGN).unwrap();
    svgraph(&dir)
        .args(&["top.sv", "--output", "missing/graph"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unable to write `missing/graph.dot`"));
}

#[test]
fn empty_hierarchy_is_not_rendered() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pkg.sv"), "package p; endpackage\n").unwrap();
    svgraph(&dir)
        .arg("pkg.sv")
        .assert()
        .success()
        .stderr(predicate::str::contains("no module hierarchy found"));
    assert!(!dir.path().join("sv_graph.dot").exists());
}

#[test]
fn input_is_required() {
    let dir = TempDir::new().unwrap();
    svgraph(&dir).assert().failure();
}
