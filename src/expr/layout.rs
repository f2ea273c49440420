use std::fmt;

/// On-disk layouts of the supported expression matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixLayout {
    /// Comma-delimited, header on the first line, gene id in the first column.
    SampleCsv,
    /// GTEx GCT: two preamble lines, tab-delimited header on line 3,
    /// columns `id`, `Name`, `Description`, then one column per sample.
    Gct,
}

pub const GCT_PREAMBLE_LINES: usize = 2;
pub const GCT_ID_COLUMN: usize = 1;
pub const GCT_FIRST_SAMPLE_COLUMN: usize = 3;

impl MatrixLayout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SampleCsv => "csv",
            Self::Gct => "gct",
        }
    }

    pub fn delimiter(&self) -> u8 {
        match self {
            Self::SampleCsv => b',',
            Self::Gct => b'\t',
        }
    }

    pub fn preamble_lines(&self) -> usize {
        match self {
            Self::SampleCsv => 0,
            Self::Gct => GCT_PREAMBLE_LINES,
        }
    }

    pub fn id_column(&self) -> usize {
        match self {
            Self::SampleCsv => 0,
            Self::Gct => GCT_ID_COLUMN,
        }
    }

    pub fn first_sample_column(&self) -> usize {
        match self {
            Self::SampleCsv => 1,
            Self::Gct => GCT_FIRST_SAMPLE_COLUMN,
        }
    }
}

impl fmt::Display for MatrixLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
