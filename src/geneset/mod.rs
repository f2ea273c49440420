mod loader;
mod resolve;

use std::path::Path;

use crate::error::{Diagnostic, Result};

pub use loader::{load_geneset_table, parse_geneset_table};
pub use resolve::{GeneSet, resolve_collection};

/// One column of the gene-set table: a set name and its HGNC symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct GenesetDef {
    pub id: String,
    pub genes: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GenesetCollection {
    pub source: String,
    pub defs: Vec<GenesetDef>,
    pub resolved: Vec<GeneSet>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenesetCollection {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            source: path.display().to_string(),
            defs: load_geneset_table(path)?,
            resolved: Vec::new(),
            diagnostics: Vec::new(),
        })
    }
}
