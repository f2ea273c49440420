//! Gene identifier resolution against the HGNC reference table.

mod resolver;
mod table;

use std::fmt;
use std::str::FromStr;

use crate::error::PathscoreError;

pub use resolver::{Conversion, Converted, GeneResolver, NA, NOT_FOUND};
pub use table::{IdentifierRecord, REQUIRED_COLUMNS, ReferenceTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdFormat {
    HgncSymbol,
    HgncId,
    RefSeq,
    Ncbi,
    Ensembl,
}

impl IdFormat {
    pub const ALL: [IdFormat; 5] = [
        IdFormat::HgncSymbol,
        IdFormat::HgncId,
        IdFormat::RefSeq,
        IdFormat::Ncbi,
        IdFormat::Ensembl,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::HgncSymbol => "HGNC_symbol",
            Self::HgncId => "HGNC_id",
            Self::RefSeq => "RefSeq",
            Self::Ncbi => "NCBI",
            Self::Ensembl => "Ensembl",
        }
    }

    /// Reference table column holding identifiers of this format.
    pub fn column(&self) -> &'static str {
        match self {
            Self::HgncSymbol => "Approved symbol",
            Self::HgncId => "HGNC ID",
            Self::RefSeq => "RefSeq IDs",
            Self::Ncbi => "NCBI Gene ID",
            Self::Ensembl => "Ensembl gene ID",
        }
    }

    /// Key used when comparing a query against this format's column.
    /// Ensembl ids are compared without their `.N` version suffix.
    pub fn lookup_key<'a>(&self, id: &'a str) -> &'a str {
        match self {
            Self::Ensembl => strip_version(id),
            _ => id,
        }
    }
}

impl fmt::Display for IdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for IdFormat {
    type Err = PathscoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdFormat::ALL
            .into_iter()
            .find(|f| f.tag() == s)
            .ok_or_else(|| PathscoreError::UnknownIdentifierFormat(s.to_string()))
    }
}

/// Cells and inputs that stand for "no gene".
pub fn is_null_gene(gene: &str) -> bool {
    let g = gene.trim();
    g.is_empty() || g == "NA" || g == "None" || g.eq_ignore_ascii_case("nan")
}

pub fn strip_version(id: &str) -> &str {
    match id.rsplit_once('.') {
        Some((base, version))
            if !version.is_empty() && version.chars().all(|c| c.is_ascii_digit()) =>
        {
            base
        }
        _ => id,
    }
}
