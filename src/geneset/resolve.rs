use std::collections::{HashMap, HashSet};

use crate::geneid::{Conversion, GeneResolver, IdFormat, ReferenceTable};
use crate::geneset::{GenesetCollection, GenesetDef};

/// A gene set converted to Ensembl ids.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneSet {
    pub id: String,
    pub genes: Vec<String>,
    pub missing: Vec<String>,
    pub total: usize,
}

impl GeneSet {
    pub fn new(id: impl Into<String>, genes: Vec<String>) -> Self {
        let total = genes.len();
        Self {
            id: id.into(),
            genes,
            missing: Vec::new(),
            total,
        }
    }

    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.genes.len() as f64 / self.total as f64
        }
    }
}

/// Converts every set's HGNC symbols to Ensembl ids through one resolver
/// built over the union of all symbols. Unconvertible symbols are dropped
/// and listed in `missing`.
pub fn resolve_collection(
    mut collection: GenesetCollection,
    table: &ReferenceTable,
) -> GenesetCollection {
    let mut symbols: Vec<&str> = Vec::new();
    let mut seen = HashSet::new();
    for def in &collection.defs {
        for gene in &def.genes {
            if seen.insert(gene.as_str()) {
                symbols.push(gene.as_str());
            }
        }
    }

    let resolver = GeneResolver::new(table, &symbols, IdFormat::HgncSymbol);
    let converted = resolver.id_conversion(&symbols, IdFormat::HgncSymbol, IdFormat::Ensembl);
    let to_ensembl: HashMap<&str, &Conversion> =
        symbols.iter().copied().zip(converted.value.iter()).collect();

    let resolved = collection
        .defs
        .iter()
        .map(|def| resolve_def(def, &to_ensembl))
        .collect();

    let mut diagnostics = resolver.diagnostics().to_vec();
    diagnostics.extend(converted.diagnostics);

    collection.resolved = resolved;
    collection.diagnostics = diagnostics;
    collection
}

fn resolve_def(def: &GenesetDef, to_ensembl: &HashMap<&str, &Conversion>) -> GeneSet {
    let mut genes = Vec::new();
    let mut missing = Vec::new();
    let mut seen = HashSet::new();

    for symbol in &def.genes {
        match to_ensembl.get(symbol.as_str()).and_then(|c| c.value()) {
            Some(ensembl) => {
                if seen.insert(ensembl) {
                    genes.push(ensembl.to_string());
                }
            }
            None => missing.push(symbol.clone()),
        }
    }

    GeneSet {
        id: def.id.clone(),
        genes,
        missing,
        total: def.genes.len(),
    }
}
