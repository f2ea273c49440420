use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::geneset::{GenesetCollection, resolve_collection};
use crate::pipeline::{Stage, record_diagnostics};

pub struct Stage3Geneset;

impl Stage3Geneset {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Geneset {
    fn name(&self) -> &'static str {
        "stage3_geneset"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx
            .reference
            .as_ref()
            .context("reference table not loaded before gene sets")?;
        let collection = GenesetCollection::load(&ctx.config.genesets).with_context(|| {
            format!(
                "failed to load gene sets {}",
                ctx.config.genesets.display()
            )
        })?;

        let mut resolved = resolve_collection(collection, table);
        let diagnostics = std::mem::take(&mut resolved.diagnostics);

        for gs in resolved.resolved.iter().filter(|gs| gs.genes.is_empty()) {
            ctx.warnings
                .push(format!("gene set '{}' resolved to 0 genes", gs.id));
        }

        info!(
            genesets = resolved.resolved.len(),
            diagnostics = diagnostics.len(),
            "geneset_resolved"
        );

        record_diagnostics(ctx, self.name(), diagnostics);
        ctx.genesets = Some(resolved);
        Ok(())
    }
}
