//! Per-sample pathway scores: mean control-normalised z-score of the genes in
//! a set, shifted by [`SCORE_OFFSET`].

use std::collections::HashSet;

use crate::error::{Diagnostic, ErrorKind};
use crate::expr::ExpressionMatrix;
use crate::geneset::GeneSet;
use crate::math::stats::{mean, sample_std, z_score};

/// Added to the mean z-score so typical scores land in `[DISPLAY_MIN, DISPLAY_MAX]`.
pub const SCORE_OFFSET: f64 = 3.0;
pub const DISPLAY_MIN: f64 = 0.0;
pub const DISPLAY_MAX: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreStatus {
    Scored,
    EmptyGeneSet,
    /// Genes of the set present in the samples but absent from the control cohort.
    MissingControl(Vec<String>),
}

impl ScoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::EmptyGeneSet => "empty_gene_set",
            Self::MissingControl(_) => "missing_control",
        }
    }
}

/// One gene-set column of the score matrix.
#[derive(Debug, Clone)]
pub struct PathwayScore {
    pub gene_set: String,
    pub genes_used: Vec<String>,
    pub status: ScoreStatus,
    /// One value per sample; NaN unless `status` is `Scored`.
    pub per_sample: Vec<f64>,
}

impl PathwayScore {
    pub fn is_scored(&self) -> bool {
        self.status == ScoreStatus::Scored
    }
}

#[derive(Debug, Clone)]
pub struct PathwayScoreMatrix {
    pub samples: Vec<String>,
    pub columns: Vec<PathwayScore>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PathwayScoreMatrix {
    pub fn gene_sets(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.gene_set.as_str())
    }

    pub fn column(&self, gene_set: &str) -> Option<&PathwayScore> {
        self.columns.iter().find(|c| c.gene_set == gene_set)
    }

    /// `None` when the sample or set is unknown, or the column is undefined.
    pub fn get(&self, sample: &str, gene_set: &str) -> Option<f64> {
        let row = self.samples.iter().position(|s| s == sample)?;
        let col = self.column(gene_set)?;
        col.is_scored().then(|| col.per_sample[row])
    }

    /// Scores of one sample across all gene sets, in column order.
    pub fn row(&self, row: usize) -> Vec<Option<f64>> {
        self.columns
            .iter()
            .map(|c| c.is_scored().then(|| c.per_sample[row]))
            .collect()
    }
}

pub fn score_pathways(
    sample: &ExpressionMatrix,
    control: &ExpressionMatrix,
    gene_sets: &[GeneSet],
) -> PathwayScoreMatrix {
    let mut diagnostics = Vec::new();
    let columns = gene_sets
        .iter()
        .map(|gs| score_gene_set(sample, control, gs, &mut diagnostics))
        .collect();

    PathwayScoreMatrix {
        samples: sample.samples().to_vec(),
        columns,
        diagnostics,
    }
}

fn score_gene_set(
    sample: &ExpressionMatrix,
    control: &ExpressionMatrix,
    gene_set: &GeneSet,
    diagnostics: &mut Vec<Diagnostic>,
) -> PathwayScore {
    let n_samples = sample.n_samples();
    let mut z_sum = vec![0.0f64; n_samples];
    let mut genes_used = Vec::new();
    let mut missing_control = Vec::new();
    let mut seen = HashSet::new();

    for gene in &gene_set.genes {
        if !seen.insert(gene.as_str()) {
            continue;
        }
        let Some(sample_row) = sample.gene_counts(gene) else {
            diagnostics.push(Diagnostic::new(
                ErrorKind::MissingExpressionData,
                gene,
                format!("no sample record; skipped in '{}'", gene_set.id),
            ));
            continue;
        };
        let Some(control_row) = control.gene_counts(gene) else {
            diagnostics.push(Diagnostic::new(
                ErrorKind::MissingExpressionData,
                gene,
                format!("no control record; '{}' left undefined", gene_set.id),
            ));
            missing_control.push(gene.clone());
            continue;
        };
        for (cohort, row) in [("sample", &sample_row), ("control", &control_row)] {
            if row.matches > 1 {
                diagnostics.push(Diagnostic::new(
                    ErrorKind::AmbiguousMatch,
                    gene,
                    format!(
                        "{} {} rows match; using '{}'",
                        row.matches, cohort, row.gene_id
                    ),
                ));
            }
        }

        let stats = mean(control_row.counts)
            .and_then(|m| sample_std(control_row.counts, m).map(|s| (m, s)))
            .filter(|(_, s)| s.is_finite() && *s > 0.0);
        let Some((m, s)) = stats else {
            diagnostics.push(Diagnostic::new(
                ErrorKind::DegenerateControl,
                gene,
                format!(
                    "control standard deviation is zero or undefined; skipped in '{}'",
                    gene_set.id
                ),
            ));
            continue;
        };

        for (acc, &x) in z_sum.iter_mut().zip(sample_row.counts) {
            *acc += z_score(x, m, s);
        }
        genes_used.push(gene.clone());
    }

    let status = if !missing_control.is_empty() {
        ScoreStatus::MissingControl(missing_control)
    } else if genes_used.is_empty() {
        diagnostics.push(Diagnostic::new(
            ErrorKind::EmptyGeneSet,
            &gene_set.id,
            "no gene of the set could be scored; score undefined",
        ));
        ScoreStatus::EmptyGeneSet
    } else {
        ScoreStatus::Scored
    };

    let per_sample = if status == ScoreStatus::Scored {
        let n = genes_used.len() as f64;
        z_sum.iter().map(|z| z / n + SCORE_OFFSET).collect()
    } else {
        vec![f64::NAN; n_samples]
    };

    PathwayScore {
        gene_set: gene_set.id.clone(),
        genes_used,
        status,
        per_sample,
    }
}
