use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::expr::ExpressionMatrix;
use crate::schema::v1::{
    GenesetCoverage, InputMeta, MatrixMeta, PathscoreV1, PathwayColumn, PerSampleScore, Scores,
};
use crate::scores::{DISPLAY_MAX, DISPLAY_MIN, SCORE_OFFSET, ScoreStatus};

pub fn build_report(ctx: &Ctx) -> Result<PathscoreV1> {
    let cfg = &ctx.config;
    let matrix_meta = |path: &Path, layout: &str, m: Option<&ExpressionMatrix>| MatrixMeta {
        path: path.display().to_string(),
        layout: layout.to_string(),
        genes: m.map(|m| m.n_genes() as u64),
        samples: m.map(|m| m.n_samples() as u64),
    };

    let input_meta = InputMeta {
        reference: cfg.reference.display().to_string(),
        reference_rows: ctx.reference.as_ref().map(|t| t.len() as u64),
        genesets: cfg.genesets.display().to_string(),
        sample: matrix_meta(&cfg.sample, cfg.sample_layout.name(), ctx.sample.as_ref()),
        control: matrix_meta(&cfg.control, cfg.control_layout.name(), ctx.control.as_ref()),
    };

    let geneset_coverage = ctx
        .genesets
        .as_ref()
        .map(|gs| {
            gs.resolved
                .iter()
                .map(|g| GenesetCoverage {
                    geneset: g.id.clone(),
                    found: g.genes.len() as u64,
                    total: g.total as u64,
                    fraction: g.coverage(),
                    missing: g.missing.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    let scores = ctx.scores.as_ref().map(|m| {
        let columns = m
            .columns
            .iter()
            .map(|c| PathwayColumn {
                geneset: c.gene_set.clone(),
                status: c.status.as_str().to_string(),
                genes_used: c.genes_used.len() as u64,
                missing_control: match &c.status {
                    ScoreStatus::MissingControl(genes) => genes.clone(),
                    _ => Vec::new(),
                },
            })
            .collect();
        let per_sample = m
            .samples
            .iter()
            .enumerate()
            .map(|(i, id)| PerSampleScore {
                id: id.clone(),
                scores: m.row(i),
            })
            .collect();
        Scores {
            offset: SCORE_OFFSET,
            display_range: [DISPLAY_MIN, DISPLAY_MAX],
            columns,
            per_sample,
            tsv_path: file_name(cfg.write_tsv, &ctx.output.tsv_path),
            plots_dir: file_name(cfg.write_plots, &ctx.output.plots_dir),
        }
    });

    Ok(PathscoreV1 {
        tool: "kira-pathscore".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        input_meta,
        geneset_coverage,
        scores,
        diagnostics: ctx.diagnostics.clone(),
        warnings: ctx.warnings.clone(),
    })
}

fn file_name(enabled: bool, path: &Path) -> Option<String> {
    if !enabled {
        return None;
    }
    path.file_name().map(|n| n.to_string_lossy().to_string())
}

pub fn write_json(path: &Path, report: &PathscoreV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
