use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{charts, json_writer, tsv_writer};
use crate::pipeline::Stage;

pub struct Stage5Output;

impl Stage5Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Output {
    fn name(&self) -> &'static str {
        "stage5_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let scores = ctx.scores.as_ref().context("pathway scores missing")?;

        if ctx.config.write_tsv {
            tsv_writer::write_tsv(&ctx.output.tsv_path, scores)?;
            info!(path = %ctx.output.tsv_path.display(), "tsv_written");
        }
        if ctx.config.write_plots {
            let charts = charts::write_sample_charts(&ctx.output.plots_dir, scores)?;
            info!(
                dir = %ctx.output.plots_dir.display(),
                charts = charts.len(),
                "charts_written"
            );
        }

        let report = json_writer::build_report(ctx)?;
        if ctx.config.write_json {
            json_writer::write_json(&ctx.output.json_path, &report)?;
            info!(path = %ctx.output.json_path.display(), "json_written");
        }
        ctx.report = report;

        info!("stage5_output_ready");
        Ok(())
    }
}
