use anyhow::{Context, Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::expr::read_matrix;
use crate::pipeline::Stage;

pub struct Stage2Expression;

impl Stage2Expression {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Expression {
    fn name(&self) -> &'static str {
        "stage2_expression"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let cfg = &ctx.config;
        let sample = read_matrix(&cfg.sample, cfg.sample_layout)
            .with_context(|| format!("failed to read sample matrix {}", cfg.sample.display()))?;
        let control = read_matrix(&cfg.control, cfg.control_layout)
            .with_context(|| format!("failed to read control matrix {}", cfg.control.display()))?;

        if sample.n_samples() == 0 {
            bail!("sample matrix has no sample columns");
        }
        if control.n_samples() < 2 {
            ctx.warnings.push(format!(
                "control cohort has {} sample(s); standard deviation needs at least 2",
                control.n_samples()
            ));
        }

        info!(
            samples = sample.n_samples(),
            sample_genes = sample.n_genes(),
            controls = control.n_samples(),
            control_genes = control.n_genes(),
            "expression_loaded"
        );

        ctx.warnings.extend(sample.warnings().iter().cloned());
        ctx.warnings.extend(control.warnings().iter().cloned());

        ctx.sample = Some(sample);
        ctx.control = Some(control);
        Ok(())
    }
}
