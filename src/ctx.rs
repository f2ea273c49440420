use std::path::PathBuf;

use crate::config::Config;
use crate::error::Diagnostic;
use crate::expr::ExpressionMatrix;
use crate::geneid::ReferenceTable;
use crate::geneset::GenesetCollection;
use crate::schema::v1::PathscoreV1;
use crate::scores::PathwayScoreMatrix;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub plots_dir: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub config: Config,
    pub reference: Option<ReferenceTable>,
    pub sample: Option<ExpressionMatrix>,
    pub control: Option<ExpressionMatrix>,
    pub genesets: Option<GenesetCollection>,
    pub scores: Option<PathwayScoreMatrix>,
    pub diagnostics: Vec<Diagnostic>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: PathscoreV1,
}

impl Ctx {
    pub fn new(config: Config, tool_version: &str) -> Self {
        let out_dir = config.out_dir.clone();
        let output = OutputPaths {
            json_path: out_dir.join("pathscore.json"),
            tsv_path: out_dir.join("scores.tsv"),
            plots_dir: out_dir.join("plots"),
            out_dir,
        };
        Self {
            config,
            reference: None,
            sample: None,
            control: None,
            genesets: None,
            scores: None,
            diagnostics: Vec::new(),
            warnings: Vec::new(),
            output,
            report: PathscoreV1::empty(tool_version),
        }
    }
}
