mod common;

use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn run_writes_scores_and_report() {
    let tmp = TempDir::new().unwrap();
    let inputs = common::write_inputs(tmp.path());
    let out_dir = tmp.path().join("out");

    let out = Command::cargo_bin("kira-pathscore")
        .unwrap()
        .arg("run")
        .arg("--reference")
        .arg(&inputs.reference)
        .arg("--sample")
        .arg(&inputs.sample)
        .arg("--control")
        .arg(&inputs.control)
        .arg("--genesets")
        .arg(&inputs.genesets)
        .arg("--out")
        .arg(&out_dir)
        .args(["--json", "--tsv", "--plots"])
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Input: 3 samples, 2 genes, 3 controls"));
    assert!(stdout.contains("Gene sets: 2 scored, 1 undefined"));
    assert!(stdout.contains("Undefined: ghost"));

    let tsv = fs::read_to_string(out_dir.join("scores.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "sample\timmune\tmixed\tghost",
            "S1\t8.000000\t5.500000\tNA",
            "S2\t3.000000\t3.500000\tNA",
            "S3\t5.000000\t5.000000\tNA",
        ]
    );

    for s in ["S1", "S2", "S3"] {
        let svg = fs::read_to_string(out_dir.join("plots").join(format!("{s}.svg"))).unwrap();
        assert!(svg.contains("<svg"));
    }

    let json: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("pathscore.json")).unwrap())
            .unwrap();
    assert_eq!(json["tool"], "kira-pathscore");
    assert_eq!(json["input_meta"]["reference_rows"], 11);
    assert_eq!(json["input_meta"]["control"]["samples"], 3);
    assert_eq!(json["scores"]["tsv_path"], "scores.tsv");
    assert_eq!(json["scores"]["plots_dir"], "plots");

    let coverage = json["geneset_coverage"].as_array().unwrap();
    assert_eq!(coverage.len(), 3);
    assert_eq!(coverage[0]["geneset"], "immune");
    assert_eq!(coverage[0]["found"], 1);
    assert_eq!(coverage[2]["missing"][0], "NOTAGENE");

    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert!(
        diagnostics
            .iter()
            .any(|d| d["kind"] == "gene_not_found" && d["subject"] == "NOTAGENE")
    );
    assert!(
        diagnostics
            .iter()
            .any(|d| d["kind"] == "empty_gene_set" && d["subject"] == "ghost")
    );
    assert!(
        diagnostics
            .iter()
            .any(|d| d["kind"] == "missing_expression_data" && d["subject"] == "ENSG00000012048")
    );
}

#[test]
fn run_fails_on_missing_reference_column() {
    let tmp = TempDir::new().unwrap();
    let inputs = common::write_inputs(tmp.path());
    fs::write(&inputs.reference, "HGNC ID\tApproved symbol\nHGNC:5\tA1BG\n").unwrap();

    let out = Command::cargo_bin("kira-pathscore")
        .unwrap()
        .arg("run")
        .arg("--reference")
        .arg(&inputs.reference)
        .arg("--sample")
        .arg(&inputs.sample)
        .arg("--control")
        .arg(&inputs.control)
        .arg("--genesets")
        .arg(&inputs.genesets)
        .arg("--out")
        .arg(tmp.path().join("out"))
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing column"));
}
