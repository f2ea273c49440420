use std::fs;

use kira_pathscore::io::charts::{chart_paths, write_sample_charts};
use kira_pathscore::scores::{PathwayScore, PathwayScoreMatrix, ScoreStatus};
use tempfile::TempDir;

#[test]
fn one_svg_per_sample() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("plots");
    let matrix = PathwayScoreMatrix {
        samples: vec!["S1".into(), "patient 2/b".into()],
        columns: vec![
            PathwayScore {
                gene_set: "immune".into(),
                genes_used: vec!["ENSG00000141510".into()],
                status: ScoreStatus::Scored,
                per_sample: vec![8.0, -1.5],
            },
            PathwayScore {
                gene_set: "ghost".into(),
                genes_used: Vec::new(),
                status: ScoreStatus::EmptyGeneSet,
                per_sample: vec![f64::NAN, f64::NAN],
            },
        ],
        diagnostics: Vec::new(),
    };

    let written = write_sample_charts(&dir, &matrix).unwrap();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0], dir.join("S1.svg"));
    assert_eq!(written[1], dir.join("patient_2_b.svg"));
    for path in &written {
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"));
    }
    assert!(written[1].starts_with(&dir));
}

#[test]
fn colliding_sample_names_get_distinct_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("plots");
    let samples: Vec<String> = ["S/1", "S_1", "S 1", "S_1-2"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let paths = chart_paths(&dir, &samples);
    assert_eq!(
        paths,
        vec![
            dir.join("S_1.svg"),
            dir.join("S_1-2.svg"),
            dir.join("S_1-3.svg"),
            dir.join("S_1-2-2.svg"),
        ]
    );

    let matrix = PathwayScoreMatrix {
        samples: samples[..2].to_vec(),
        columns: vec![PathwayScore {
            gene_set: "immune".into(),
            genes_used: vec!["ENSG00000141510".into()],
            status: ScoreStatus::Scored,
            per_sample: vec![4.0, 2.0],
        }],
        diagnostics: Vec::new(),
    };
    let written = write_sample_charts(&dir, &matrix).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));
    assert_ne!(written[0], written[1]);
}
