use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::scores::PathwayScoreMatrix;

pub fn write_tsv(path: &Path, scores: &PathwayScoreMatrix) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_scores(&mut w, scores)?;
    w.flush()?;
    Ok(())
}

pub fn write_scores<W: Write>(w: &mut W, scores: &PathwayScoreMatrix) -> Result<()> {
    let n = scores.samples.len();
    for col in &scores.columns {
        if col.per_sample.len() != n {
            bail!(
                "{} length mismatch: {} != {}",
                col.gene_set,
                col.per_sample.len(),
                n
            );
        }
    }

    write!(w, "sample")?;
    for name in scores.gene_sets() {
        write!(w, "\t{}", name)?;
    }
    writeln!(w)?;

    for (i, sample) in scores.samples.iter().enumerate() {
        write!(w, "{}", sample)?;
        for value in scores.row(i) {
            match value {
                Some(v) => write!(w, "\t{:.6}", v)?,
                None => write!(w, "\tNA")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}
