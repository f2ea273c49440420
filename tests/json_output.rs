use std::path::PathBuf;

use kira_pathscore::config::Config;
use kira_pathscore::ctx::Ctx;
use kira_pathscore::error::{Diagnostic, ErrorKind};
use kira_pathscore::io::json_writer::build_report;
use kira_pathscore::scores::{PathwayScore, PathwayScoreMatrix, ScoreStatus};
use serde_json::Value;

fn ctx() -> Ctx {
    let mut cfg = Config::new(
        PathBuf::from("hgnc.tsv"),
        PathBuf::from("counts.csv"),
        PathBuf::from("control.gct"),
        PathBuf::from("genesets.tsv"),
        PathBuf::from("out"),
    );
    cfg.write_tsv = true;
    Ctx::new(cfg, "0.0.0-test")
}

#[test]
fn json_report_populated() {
    let mut ctx = ctx();
    ctx.scores = Some(PathwayScoreMatrix {
        samples: vec!["S1".into()],
        columns: vec![
            PathwayScore {
                gene_set: "immune".into(),
                genes_used: vec!["ENSG00000141510".into()],
                status: ScoreStatus::Scored,
                per_sample: vec![8.0],
            },
            PathwayScore {
                gene_set: "broken".into(),
                genes_used: Vec::new(),
                status: ScoreStatus::MissingControl(vec!["ENSG00000999999".into()]),
                per_sample: vec![f64::NAN],
            },
        ],
        diagnostics: Vec::new(),
    });
    ctx.diagnostics.push(Diagnostic::new(
        ErrorKind::GeneNotFound,
        "NOTAGENE",
        "cannot be converted from HGNC_symbol to Ensembl",
    ));

    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "kira-pathscore");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["reference"], "hgnc.tsv");
    assert_eq!(json["input_meta"]["control"]["layout"], "gct");
    assert_eq!(json["scores"]["offset"], 3.0);
    assert_eq!(json["scores"]["tsv_path"], "scores.tsv");
    assert_eq!(json["scores"]["plots_dir"], Value::Null);
    assert_eq!(json["scores"]["columns"][1]["status"], "missing_control");
    assert_eq!(
        json["scores"]["columns"][1]["missing_control"][0],
        "ENSG00000999999"
    );
    assert_eq!(json["scores"]["per_sample"][0]["scores"][0], 8.0);
    assert_eq!(json["scores"]["per_sample"][0]["scores"][1], Value::Null);
    assert_eq!(json["diagnostics"][0]["kind"], "gene_not_found");
}

#[test]
fn json_report_without_scores() {
    let report = build_report(&ctx()).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert!(json["scores"].is_null());
    assert!(json["geneset_coverage"].as_array().unwrap().is_empty());
}
