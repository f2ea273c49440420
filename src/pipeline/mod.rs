use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_reference;
pub mod stage2_expression;
pub mod stage3_geneset;
pub mod stage4_scores;
pub mod stage5_output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage of a scoring run, in order.
    pub fn full() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_reference::Stage1Reference::new()),
            Box::new(stage2_expression::Stage2Expression::new()),
            Box::new(stage3_geneset::Stage3Geneset::new()),
            Box::new(stage4_scores::Stage4Scores::new()),
            Box::new(stage5_output::Stage5Output::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}

/// Logs diagnostics and moves them into the context.
pub(crate) fn record_diagnostics(
    ctx: &mut Ctx,
    stage: &'static str,
    diagnostics: Vec<crate::error::Diagnostic>,
) {
    for d in &diagnostics {
        warn!(
            stage,
            kind = %d.kind,
            subject = %d.subject,
            "{}",
            d.message
        );
    }
    ctx.diagnostics.extend(diagnostics);
}
