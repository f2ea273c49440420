use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PathscoreError, Result};
use crate::expr::{ExpressionMatrix, MatrixLayout};
use crate::io::open_maybe_gz;

pub fn read_matrix(path: &Path, layout: MatrixLayout) -> Result<ExpressionMatrix> {
    let reader = BufReader::new(open_maybe_gz(path)?);
    read_matrix_from(reader, layout, &path.display().to_string())
}

pub fn read_matrix_from<R: BufRead>(
    mut reader: R,
    layout: MatrixLayout,
    source: &str,
) -> Result<ExpressionMatrix> {
    let mut skipped = String::new();
    for _ in 0..layout.preamble_lines() {
        skipped.clear();
        if reader.read_line(&mut skipped)? == 0 {
            return Err(PathscoreError::malformed(
                source,
                "unexpected end of file before header",
            ));
        }
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(layout.delimiter())
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let first_sample = layout.first_sample_column();
    let headers = rdr.headers()?.clone();
    if headers.len() <= first_sample {
        return Err(PathscoreError::malformed(
            source,
            format!("{} layout header has no sample columns", layout),
        ));
    }
    let samples: Vec<String> = headers
        .iter()
        .skip(first_sample)
        .map(|h| h.trim().to_string())
        .collect();

    let header_line = layout.preamble_lines() + 1;
    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let line_no = header_line + i + 1;
        let gene = record
            .get(layout.id_column())
            .map(str::trim)
            .unwrap_or_default();
        if gene.is_empty() {
            return Err(PathscoreError::malformed(
                source,
                format!("line {}: empty gene id", line_no),
            ));
        }
        let counts = record
            .iter()
            .skip(first_sample)
            .zip(&samples)
            .map(|(cell, sample)| {
                // `parse` accepts NaN and infinities; neither is a count.
                cell.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        PathscoreError::malformed(
                            source,
                            format!(
                                "line {}: non-numeric count '{}' for sample '{}'",
                                line_no, cell, sample
                            ),
                        )
                    })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push((gene.to_string(), counts));
    }

    ExpressionMatrix::new(source, samples, rows)
}
