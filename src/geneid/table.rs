use std::io::Read;
use std::path::Path;

use crate::error::{PathscoreError, Result};
use crate::geneid::IdFormat;
use crate::io::open_maybe_gz;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Approved symbol",
    "HGNC ID",
    "RefSeq IDs",
    "NCBI Gene ID",
    "Ensembl gene ID",
    "Status",
    "Alias symbols",
    "Previous symbols",
];

const LIST_SEPARATOR: &str = ", ";

/// One row of the HGNC export. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentifierRecord {
    pub approved_symbol: Option<String>,
    pub hgnc_id: Option<String>,
    pub refseq_ids: Option<String>,
    pub ncbi_gene_id: Option<String>,
    pub ensembl_gene_id: Option<String>,
    pub status: Option<String>,
    pub alias_symbols: Option<String>,
    pub previous_symbols: Option<String>,
}

impl IdentifierRecord {
    pub fn field(&self, format: IdFormat) -> Option<&str> {
        match format {
            IdFormat::HgncSymbol => self.approved_symbol.as_deref(),
            IdFormat::HgncId => self.hgnc_id.as_deref(),
            IdFormat::RefSeq => self.refseq_ids.as_deref(),
            IdFormat::Ncbi => self.ncbi_gene_id.as_deref(),
            IdFormat::Ensembl => self.ensembl_gene_id.as_deref(),
        }
    }

    pub fn matches(&self, format: IdFormat, gene: &str) -> bool {
        self.field(format)
            .is_some_and(|v| format.lookup_key(v) == format.lookup_key(gene))
    }

    pub fn is_approved(&self) -> bool {
        self.status.as_deref() == Some("Approved")
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        split_list(self.alias_symbols.as_deref())
    }

    pub fn previous(&self) -> impl Iterator<Item = &str> {
        split_list(self.previous_symbols.as_deref())
    }
}

fn split_list(cell: Option<&str>) -> impl Iterator<Item = &str> {
    cell.into_iter()
        .flat_map(|c| c.split(LIST_SEPARATOR))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Immutable in-memory snapshot of the reference table, in file order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    records: Vec<IdentifierRecord>,
}

impl ReferenceTable {
    pub fn new(records: Vec<IdentifierRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = open_maybe_gz(path)?;
        Self::from_reader(reader, &path.display().to_string())
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut cols = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in cols.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    PathscoreError::malformed(source, format!("missing column '{}'", name))
                })?;
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let cell = |i: usize| {
                row.get(cols[i])
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            records.push(IdentifierRecord {
                approved_symbol: cell(0),
                hgnc_id: cell(1),
                refseq_ids: cell(2),
                ncbi_gene_id: cell(3),
                ensembl_gene_id: cell(4),
                status: cell(5),
                alias_symbols: cell(6),
                previous_symbols: cell(7),
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[IdentifierRecord] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&IdentifierRecord> {
        self.records.get(row)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row indices whose `format` column matches `gene`, in table order.
    pub fn find(&self, format: IdFormat, gene: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(format, gene))
            .map(|(i, _)| i)
            .collect()
    }
}
