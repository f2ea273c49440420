use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::{Stage, record_diagnostics};
use crate::scores::score_pathways;

pub struct Stage4Scores;

impl Stage4Scores {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Scores {
    fn name(&self) -> &'static str {
        "stage4_scores"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let sample = ctx.sample.as_ref().context("sample matrix not loaded")?;
        let control = ctx.control.as_ref().context("control matrix not loaded")?;
        let genesets = ctx
            .genesets
            .as_ref()
            .context("gene sets not resolved before scoring")?;

        let mut matrix = score_pathways(sample, control, &genesets.resolved);
        let diagnostics = std::mem::take(&mut matrix.diagnostics);

        let scored = matrix.columns.iter().filter(|c| c.is_scored()).count();
        info!(
            samples = matrix.samples.len(),
            genesets = matrix.columns.len(),
            scored,
            "pathway_scores_ready"
        );

        record_diagnostics(ctx, self.name(), diagnostics);
        ctx.scores = Some(matrix);
        Ok(())
    }
}
