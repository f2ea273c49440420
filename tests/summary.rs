use std::path::PathBuf;

use kira_pathscore::config::Config;
use kira_pathscore::ctx::Ctx;
use kira_pathscore::error::{Diagnostic, ErrorKind};
use kira_pathscore::io::summary::format_summary;
use kira_pathscore::scores::{PathwayScore, PathwayScoreMatrix, ScoreStatus};

#[test]
fn summary_format() {
    let cfg = Config::new(
        PathBuf::from("hgnc.tsv"),
        PathBuf::from("counts.csv"),
        PathBuf::from("control.gct"),
        PathBuf::from("genesets.tsv"),
        PathBuf::from("out"),
    );
    let mut ctx = Ctx::new(cfg, "0.0.0-test");
    ctx.scores = Some(PathwayScoreMatrix {
        samples: vec!["S1".into(), "S2".into()],
        columns: vec![
            PathwayScore {
                gene_set: "immune".into(),
                genes_used: vec!["ENSG00000141510".into()],
                status: ScoreStatus::Scored,
                per_sample: vec![8.0, 3.0],
            },
            PathwayScore {
                gene_set: "ghost".into(),
                genes_used: Vec::new(),
                status: ScoreStatus::EmptyGeneSet,
                per_sample: vec![f64::NAN, f64::NAN],
            },
        ],
        diagnostics: Vec::new(),
    });
    ctx.diagnostics = vec![
        Diagnostic::new(ErrorKind::GeneNotFound, "NOTAGENE", "x"),
        Diagnostic::new(ErrorKind::EmptyGeneSet, "ghost", "y"),
        Diagnostic::new(ErrorKind::GeneNotFound, "OTHER", "z"),
    ];

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("kira-pathscore v"));
    assert!(s.contains("Input: 2 samples, 0 genes, 0 controls"));
    assert!(s.contains("Gene sets: 1 scored, 1 undefined"));
    assert!(s.contains("Undefined: ghost"));
    assert!(s.contains("Diagnostics: gene_not_found=2, empty_gene_set=1"));
}
