use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::geneid::ReferenceTable;
use crate::pipeline::Stage;

pub struct Stage1Reference;

impl Stage1Reference {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Reference {
    fn name(&self) -> &'static str {
        "stage1_reference"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let path = &ctx.config.reference;
        let table = ReferenceTable::load(path)
            .with_context(|| format!("failed to load reference table {}", path.display()))?;
        if table.is_empty() {
            ctx.warnings
                .push(format!("reference table {} has no rows", path.display()));
        }
        info!(reference = %path.display(), rows = table.len(), "reference_loaded");

        ctx.reference = Some(table);
        Ok(())
    }
}
