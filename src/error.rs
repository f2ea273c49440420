use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownIdentifierFormat,
    GeneNotFound,
    AmbiguousMatch,
    MissingExpressionData,
    EmptyGeneSet,
    DegenerateControl,
    MalformedTable,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownIdentifierFormat => "unknown_identifier_format",
            Self::GeneNotFound => "gene_not_found",
            Self::AmbiguousMatch => "ambiguous_match",
            Self::MissingExpressionData => "missing_expression_data",
            Self::EmptyGeneSet => "empty_gene_set",
            Self::DegenerateControl => "degenerate_control",
            Self::MalformedTable => "malformed_table",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal errors. Everything per-item is reported as a [`Diagnostic`] instead.
#[derive(Debug, Error)]
pub enum PathscoreError {
    #[error(
        "unknown identifier format '{0}' (expected HGNC_symbol, HGNC_id, RefSeq, NCBI or Ensembl)"
    )]
    UnknownIdentifierFormat(String),

    #[error("malformed table {source_name}: {reason}")]
    MalformedTable { source_name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PathscoreError {
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownIdentifierFormat(_) => ErrorKind::UnknownIdentifierFormat,
            Self::MalformedTable { .. } | Self::Io(_) | Self::Csv(_) => ErrorKind::MalformedTable,
        }
    }
}

pub type Result<T> = std::result::Result<T, PathscoreError>;

/// A non-fatal condition attached to one item (gene, gene set, symbol).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
    }
}
