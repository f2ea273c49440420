use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixMeta {
    pub path: String,
    pub layout: String,
    pub genes: Option<u64>,
    pub samples: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub reference: String,
    pub reference_rows: Option<u64>,
    pub genesets: String,
    pub sample: MatrixMeta,
    pub control: MatrixMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesetCoverage {
    pub geneset: String,
    pub found: u64,
    pub total: u64,
    pub fraction: f64,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayColumn {
    pub geneset: String,
    pub status: String,
    pub genes_used: u64,
    pub missing_control: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerSampleScore {
    pub id: String,
    /// Same order as `Scores::columns`; `null` where the column is undefined.
    pub scores: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scores {
    pub offset: f64,
    pub display_range: [f64; 2],
    pub columns: Vec<PathwayColumn>,
    pub per_sample: Vec<PerSampleScore>,
    pub tsv_path: Option<String>,
    pub plots_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathscoreV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub input_meta: InputMeta,
    pub geneset_coverage: Vec<GenesetCoverage>,
    pub scores: Option<Scores>,
    pub diagnostics: Vec<Diagnostic>,
    pub warnings: Vec<String>,
}

impl PathscoreV1 {
    pub fn empty(tool_version: &str) -> Self {
        let matrix = |layout: &str| MatrixMeta {
            path: String::new(),
            layout: layout.to_string(),
            genes: None,
            samples: None,
        };
        Self {
            tool: "kira-pathscore".to_string(),
            version: tool_version.to_string(),
            schema_version: "v1".to_string(),
            input_meta: InputMeta {
                reference: String::new(),
                reference_rows: None,
                genesets: String::new(),
                sample: matrix("csv"),
                control: matrix("gct"),
            },
            geneset_coverage: Vec::new(),
            scores: None,
            diagnostics: Vec::new(),
            warnings: Vec::new(),
        }
    }
}
