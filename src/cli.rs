use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::expr::MatrixLayout;

#[derive(Debug, Parser)]
#[command(
    name = "kira-pathscore",
    version,
    about = "Gene identifier conversion and per-sample pathway scoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Convert(ConvertArgs),
    Geneset(GenesetArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "HGNC reference table (TSV, optionally .gz)")]
    pub reference: PathBuf,

    #[arg(long, help = "Study cohort expression matrix")]
    pub sample: PathBuf,

    #[arg(long, value_enum, default_value_t = LayoutArg::Csv)]
    pub sample_layout: LayoutArg,

    #[arg(long, help = "Control cohort expression matrix")]
    pub control: PathBuf,

    #[arg(long, value_enum, default_value_t = LayoutArg::Gct)]
    pub control_layout: LayoutArg,

    #[arg(long, help = "Gene set table: one column per set, HGNC symbols")]
    pub genesets: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false, help = "Write one SVG bar chart per sample")]
    pub plots: bool,
}

impl RunArgs {
    pub fn into_config(self) -> Config {
        let mut cfg = Config::new(
            self.reference,
            self.sample,
            self.control,
            self.genesets,
            self.out,
        );
        cfg.sample_layout = self.sample_layout.into();
        cfg.control_layout = self.control_layout.into();
        cfg.write_json = self.json;
        cfg.write_tsv = self.tsv;
        cfg.write_plots = self.plots;
        cfg
    }
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[arg(long, help = "HGNC reference table (TSV, optionally .gz)")]
    pub reference: PathBuf,

    #[arg(long, help = "Input format: HGNC_symbol|HGNC_id|RefSeq|NCBI|Ensembl")]
    pub from: String,

    #[arg(long, help = "Output format: HGNC_symbol|HGNC_id|RefSeq|NCBI|Ensembl")]
    pub to: String,

    #[arg(long, help = "File with one identifier per line")]
    pub input: Option<PathBuf>,

    #[arg(help = "Identifiers to convert")]
    pub genes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GenesetArgs {
    #[command(subcommand)]
    pub command: GenesetCommand,
}

#[derive(Debug, Subcommand)]
pub enum GenesetCommand {
    Show(GenesetShowArgs),
}

#[derive(Debug, Args)]
pub struct GenesetShowArgs {
    #[arg(long, help = "Gene set table to list")]
    pub genesets: PathBuf,

    #[arg(long, help = "Optional reference table to resolve coverage")]
    pub reference: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Csv,
    Gct,
}

impl From<LayoutArg> for MatrixLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Csv => MatrixLayout::SampleCsv,
            LayoutArg::Gct => MatrixLayout::Gct,
        }
    }
}
