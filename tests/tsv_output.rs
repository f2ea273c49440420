use std::fs;
use std::path::PathBuf;

use kira_pathscore::io::tsv_writer::write_tsv;
use kira_pathscore::scores::{PathwayScore, PathwayScoreMatrix, ScoreStatus};
use tempfile::TempDir;

pub fn matrix() -> PathwayScoreMatrix {
    PathwayScoreMatrix {
        samples: vec!["S1".into(), "S2".into()],
        columns: vec![
            PathwayScore {
                gene_set: "immune".into(),
                genes_used: vec!["ENSG00000141510".into()],
                status: ScoreStatus::Scored,
                per_sample: vec![8.0, 3.25],
            },
            PathwayScore {
                gene_set: "ghost".into(),
                genes_used: Vec::new(),
                status: ScoreStatus::EmptyGeneSet,
                per_sample: vec![f64::NAN, f64::NAN],
            },
        ],
        diagnostics: Vec::new(),
    }
}

#[test]
fn tsv_matrix_format() {
    let tmp = TempDir::new().unwrap();
    let path: PathBuf = tmp.path().join("scores.tsv");

    write_tsv(&path, &matrix()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "sample\timmune\tghost");
    assert_eq!(lines[1], "S1\t8.000000\tNA");
    assert_eq!(lines[2], "S2\t3.250000\tNA");
}

#[test]
fn tsv_rejects_ragged_columns() {
    let tmp = TempDir::new().unwrap();
    let mut m = matrix();
    m.columns[0].per_sample.pop();
    assert!(write_tsv(&tmp.path().join("x.tsv"), &m).is_err());
}
