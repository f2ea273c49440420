//! In-memory expression matrices and per-gene count lookup.

pub mod layout;
pub mod reader;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::Bound;

use crate::error::{PathscoreError, Result};
use crate::geneid::is_null_gene;

pub use layout::MatrixLayout;
pub use reader::{read_matrix, read_matrix_from};

/// Gene rows by sample columns of raw counts.
#[derive(Debug, Clone)]
pub struct ExpressionMatrix {
    samples: Vec<String>,
    gene_ids: Vec<String>,
    counts: Vec<Vec<f64>>,
    // Row id -> first row carrying it.
    index: BTreeMap<String, usize>,
    warnings: Vec<String>,
}

/// Counts of one gene row, plus how many rows matched the query.
#[derive(Debug, Clone, Copy)]
pub struct GeneCounts<'a> {
    pub gene_id: &'a str,
    pub counts: &'a [f64],
    pub matches: usize,
}

impl ExpressionMatrix {
    /// Builds a matrix from `(gene id, counts)` rows in file order. `source`
    /// names the input in errors. Every row needs one finite count per sample.
    pub fn new(
        source: &str,
        samples: Vec<String>,
        rows: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        let mut gene_ids = Vec::with_capacity(rows.len());
        let mut counts = Vec::with_capacity(rows.len());
        let mut index = BTreeMap::new();
        let mut warnings = Vec::new();

        for (gene, values) in rows {
            if values.len() != samples.len() {
                return Err(PathscoreError::malformed(
                    source,
                    format!(
                        "gene '{}' has {} values for {} samples",
                        gene,
                        values.len(),
                        samples.len()
                    ),
                ));
            }
            if let Some((sample, v)) = samples
                .iter()
                .zip(&values)
                .find(|(_, v)| !v.is_finite())
            {
                return Err(PathscoreError::malformed(
                    source,
                    format!(
                        "gene '{}': non-finite count {} for sample '{}'",
                        gene, v, sample
                    ),
                ));
            }
            let row = gene_ids.len();
            match index.entry(gene.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
                Entry::Occupied(first) => {
                    // First row wins for duplicated ids.
                    warnings.push(format!(
                        "duplicate gene id '{}' at row {} (kept first at row {})",
                        gene,
                        row + 1,
                        first.get() + 1
                    ));
                    continue;
                }
            }
            gene_ids.push(gene);
            counts.push(values);
        }

        Ok(Self {
            samples,
            gene_ids,
            counts,
            index,
            warnings,
        })
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn gene_ids(&self) -> &[String] {
        &self.gene_ids
    }

    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_genes(&self) -> usize {
        self.gene_ids.len()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Looks up every row whose id starts with `query`, so an unversioned
    /// Ensembl id matches `ENSG...` rows carrying a `.N` suffix. The earliest
    /// row in file order is returned.
    pub fn gene_counts(&self, query: &str) -> Option<GeneCounts<'_>> {
        let query = query.trim();
        if is_null_gene(query) {
            return None;
        }
        let mut matches = 0usize;
        let mut first: Option<usize> = None;
        for (_, &row) in self
            .index
            .range::<str, _>((Bound::Included(query), Bound::Unbounded))
            .take_while(|(id, _)| id.starts_with(query))
        {
            matches += 1;
            first = Some(first.map_or(row, |f| f.min(row)));
        }
        first.map(|row| GeneCounts {
            gene_id: &self.gene_ids[row],
            counts: &self.counts[row],
            matches,
        })
    }
}
