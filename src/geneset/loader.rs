use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{PathscoreError, Result};
use crate::geneid::is_null_gene;
use crate::geneset::GenesetDef;
use crate::io::open_maybe_gz;

/// Reads a wide gene-set table: one column per set, set names in the header,
/// HGNC symbols below. Columns may have different lengths.
pub fn load_geneset_table(path: &Path) -> Result<Vec<GenesetDef>> {
    let reader = open_maybe_gz(path)?;
    parse_geneset_table(reader, delimiter_for(path), &path.display().to_string())
}

fn delimiter_for(path: &Path) -> u8 {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .trim_end_matches(".gz");
    if name.ends_with(".csv") { b',' } else { b'\t' }
}

pub fn parse_geneset_table<R: Read>(
    reader: R,
    delimiter: u8,
    source: &str,
) -> Result<Vec<GenesetDef>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut defs = Vec::with_capacity(headers.len());
    let mut seen = HashSet::new();
    for (col, name) in headers.iter().enumerate() {
        let name = name.trim();
        if name.is_empty() {
            return Err(PathscoreError::malformed(
                source,
                format!("column {} has no gene set name", col + 1),
            ));
        }
        if !seen.insert(name.to_string()) {
            return Err(PathscoreError::malformed(
                source,
                format!("duplicate gene set '{}'", name),
            ));
        }
        defs.push(GenesetDef {
            id: name.to_string(),
            genes: Vec::new(),
        });
    }
    if defs.is_empty() {
        return Err(PathscoreError::malformed(source, "no gene set columns"));
    }

    for record in rdr.records() {
        let record = record?;
        // Ragged columns: shorter sets are padded with blanks or NA.
        for (def, cell) in defs.iter_mut().zip(record.iter()) {
            let gene = cell.trim();
            if !is_null_gene(gene) {
                def.genes.push(gene.to_string());
            }
        }
    }

    Ok(defs)
}
