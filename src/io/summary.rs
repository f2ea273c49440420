use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let scores = ctx.scores.as_ref().context("pathway scores missing")?;
    let genes = ctx.sample.as_ref().map_or(0, |m| m.n_genes());
    let controls = ctx.control.as_ref().map_or(0, |m| m.n_samples());

    let scored = scores.columns.iter().filter(|c| c.is_scored()).count();
    let undefined: Vec<&str> = scores
        .columns
        .iter()
        .filter(|c| !c.is_scored())
        .map(|c| c.gene_set.as_str())
        .collect();

    let mut out = String::new();
    out.push_str(&format!("kira-pathscore v{}\n", version));
    out.push_str(&format!(
        "Input: {} samples, {} genes, {} controls\n",
        scores.samples.len(),
        genes,
        controls
    ));
    out.push_str(&format!(
        "Gene sets: {} scored, {} undefined\n",
        scored,
        undefined.len()
    ));
    if !undefined.is_empty() {
        out.push_str(&format!("Undefined: {}\n", undefined.join(", ")));
    }

    let mut by_kind: BTreeMap<_, usize> = BTreeMap::new();
    for d in &ctx.diagnostics {
        *by_kind.entry(d.kind).or_default() += 1;
    }
    if by_kind.is_empty() {
        out.push_str("Diagnostics: none\n");
    } else {
        let parts: Vec<String> = by_kind
            .iter()
            .map(|(kind, n)| format!("{}={}", kind, n))
            .collect();
        out.push_str(&format!("Diagnostics: {}\n", parts.join(", ")));
    }

    Ok(out)
}
