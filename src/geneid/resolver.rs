use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::{Diagnostic, ErrorKind};
use crate::geneid::{IdFormat, IdentifierRecord, ReferenceTable, is_null_gene};

pub const NA: &str = "NA";
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Result of converting one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Converted(String),
    /// Null input, or the matched record has no value in the target column.
    Na,
    NotFound,
}

impl Conversion {
    fn from_field(value: Option<&str>) -> Self {
        match value {
            Some(v) => Self::Converted(v.to_string()),
            None => Self::Na,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Converted(v) => Some(v),
            Self::Na | Self::NotFound => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Converted(v) => v,
            Self::Na => NA,
            Self::NotFound => NOT_FOUND,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conversion result together with the per-item diagnostics it produced.
#[derive(Debug, Clone)]
pub struct Converted<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lookup structure for a fixed list of genes.
///
/// Built once from a borrowed [`ReferenceTable`]; read-only afterwards.
/// Whenever several rows qualify, the tie-break is deterministic: an
/// `Approved` row first (construction only), otherwise the earliest row in
/// table order.
#[derive(Debug)]
pub struct GeneResolver<'t> {
    table: &'t ReferenceTable,
    input_format: IdFormat,
    // Row indices, ascending.
    gene_log: Vec<usize>,
    unknown: Vec<String>,
    alias_index: HashMap<String, usize>,
    previous_index: HashMap<String, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> GeneResolver<'t> {
    pub fn new<S: AsRef<str>>(
        table: &'t ReferenceTable,
        genes: &[S],
        input_format: IdFormat,
    ) -> Self {
        let mut searched: HashSet<&str> = HashSet::new();
        let mut unknown = Vec::new();
        let mut log_rows = Vec::new();
        let mut diagnostics = Vec::new();

        for gene in genes {
            let gene = gene.as_ref().trim();
            if is_null_gene(gene) || !searched.insert(gene) {
                continue;
            }
            let hits = table.find(input_format, gene);
            match hits.as_slice() {
                [] => unknown.push(gene.to_string()),
                [row] => log_rows.push(*row),
                _ => {
                    let chosen = preferred_row(table, &hits);
                    diagnostics.push(Diagnostic::new(
                        ErrorKind::AmbiguousMatch,
                        gene,
                        format!(
                            "{} rows match {} '{}'; using row {}",
                            hits.len(),
                            input_format,
                            gene,
                            chosen + 1
                        ),
                    ));
                    log_rows.push(chosen);
                }
            }
        }

        log_rows.sort_unstable();
        log_rows.dedup();

        let (alias_index, previous_index) =
            build_fallback_indices(table, &unknown, &mut diagnostics);

        debug!(
            logged = log_rows.len(),
            unknown = unknown.len(),
            aliases = alias_index.len(),
            previous = previous_index.len(),
            "gene resolver built"
        );

        Self {
            table,
            input_format,
            gene_log: log_rows,
            unknown,
            alias_index,
            previous_index,
            diagnostics,
        }
    }

    pub fn input_format(&self) -> IdFormat {
        self.input_format
    }

    pub fn gene_log(&self) -> impl Iterator<Item = &IdentifierRecord> + '_ {
        self.gene_log.iter().map(|&row| &self.table.records()[row])
    }

    /// Genes that had no direct match in the input format's column.
    pub fn unknown_genes(&self) -> &[String] {
        &self.unknown
    }

    pub fn alias_match(&self, symbol: &str) -> Option<&IdentifierRecord> {
        self.alias_index.get(symbol).and_then(|&r| self.table.get(r))
    }

    pub fn previous_match(&self, symbol: &str) -> Option<&IdentifierRecord> {
        self.previous_index.get(symbol).and_then(|&r| self.table.get(r))
    }

    /// Diagnostics produced while building the resolver.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn id_conversion<S: AsRef<str>>(
        &self,
        genes: &[S],
        from: IdFormat,
        to: IdFormat,
    ) -> Converted<Vec<Conversion>> {
        let mut diagnostics = Vec::new();
        let value = genes
            .iter()
            .map(|g| self.convert(g.as_ref(), from, to, &mut diagnostics))
            .collect();
        Converted { value, diagnostics }
    }

    pub fn single_conversion(&self, gene: &str, from: IdFormat, to: IdFormat) -> Converted<Conversion> {
        let mut diagnostics = Vec::new();
        let value = self.convert(gene, from, to, &mut diagnostics);
        Converted { value, diagnostics }
    }

    fn convert(
        &self,
        gene: &str,
        from: IdFormat,
        to: IdFormat,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Conversion {
        if is_null_gene(gene) {
            return Conversion::Na;
        }
        let gene = gene.trim();
        let records = self.table.records();

        let hits: Vec<usize> = self
            .gene_log
            .iter()
            .copied()
            .filter(|&row| records[row].matches(from, gene))
            .collect();

        let row = match hits.as_slice() {
            [] => match self.fallback_row(gene) {
                Some(row) => row,
                None => {
                    diagnostics.push(Diagnostic::new(
                        ErrorKind::GeneNotFound,
                        gene,
                        format!("cannot be converted from {} to {}", from, to),
                    ));
                    return Conversion::NotFound;
                }
            },
            [row] => *row,
            [first, ..] => {
                diagnostics.push(Diagnostic::new(
                    ErrorKind::AmbiguousMatch,
                    gene,
                    format!(
                        "{} {} values available for {} '{}'; using row {}",
                        hits.len(),
                        to,
                        from,
                        gene,
                        first + 1
                    ),
                ));
                *first
            }
        };

        Conversion::from_field(records[row].field(to))
    }

    // Alias symbols take priority over previous symbols.
    fn fallback_row(&self, gene: &str) -> Option<usize> {
        self.alias_index
            .get(gene)
            .or_else(|| self.previous_index.get(gene))
            .copied()
    }
}

fn preferred_row(table: &ReferenceTable, hits: &[usize]) -> usize {
    hits.iter()
        .copied()
        .find(|&row| table.records()[row].is_approved())
        .unwrap_or(hits[0])
}

/// Single pass over the table that stops as soon as every unknown gene has an
/// alias match. A previous-symbol match leaves the gene pending, since an
/// alias found later still wins. Symbols claimed by a second record while the
/// scan is running are reported as ambiguous; the first record is kept.
fn build_fallback_indices(
    table: &ReferenceTable,
    unknown: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> (HashMap<String, usize>, HashMap<String, usize>) {
    let mut pending: HashSet<&str> = unknown.iter().map(String::as_str).collect();
    let mut alias_index: HashMap<String, usize> = HashMap::new();
    let mut previous_index: HashMap<String, usize> = HashMap::new();

    for (row, record) in table.records().iter().enumerate() {
        if pending.is_empty() {
            break;
        }
        for alias in record.aliases() {
            match alias_index.get(alias) {
                Some(&first) if first != row => diagnostics.push(Diagnostic::new(
                    ErrorKind::AmbiguousMatch,
                    alias,
                    format!(
                        "alias of rows {} and {}; keeping row {}",
                        first + 1,
                        row + 1,
                        first + 1
                    ),
                )),
                Some(_) => {}
                None => {
                    if pending.remove(alias) {
                        alias_index.insert(alias.to_string(), row);
                    }
                }
            }
        }
        for prev in record.previous() {
            if !pending.contains(prev) {
                continue;
            }
            match previous_index.get(prev) {
                Some(&first) if first != row => diagnostics.push(Diagnostic::new(
                    ErrorKind::AmbiguousMatch,
                    prev,
                    format!(
                        "previous symbol of rows {} and {}; keeping row {}",
                        first + 1,
                        row + 1,
                        first + 1
                    ),
                )),
                Some(_) => {}
                None => {
                    previous_index.insert(prev.to_string(), row);
                }
            }
        }
    }

    (alias_index, previous_index)
}
