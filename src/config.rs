use std::path::PathBuf;

use crate::expr::MatrixLayout;

/// Everything a run needs, built once from the command line and handed to
/// [`crate::ctx::Ctx::new`].
#[derive(Debug, Clone)]
pub struct Config {
    /// HGNC reference table (tab-delimited, optionally gzipped).
    pub reference: PathBuf,
    pub sample: PathBuf,
    pub sample_layout: MatrixLayout,
    pub control: PathBuf,
    pub control_layout: MatrixLayout,
    pub genesets: PathBuf,
    pub out_dir: PathBuf,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_plots: bool,
}

impl Config {
    pub fn new(
        reference: PathBuf,
        sample: PathBuf,
        control: PathBuf,
        genesets: PathBuf,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            reference,
            sample,
            sample_layout: MatrixLayout::SampleCsv,
            control,
            control_layout: MatrixLayout::Gct,
            genesets,
            out_dir,
            write_json: false,
            write_tsv: false,
            write_plots: false,
        }
    }
}
