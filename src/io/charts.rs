//! Per-sample bar charts of pathway scores, written as SVG.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::warn;

use crate::io::sample_file_stem;
use crate::scores::{DISPLAY_MAX, DISPLAY_MIN, PathwayScoreMatrix};

const CHART_HEIGHT: u32 = 480;
const BAR_WIDTH: u32 = 60;
const MIN_WIDTH: u32 = 480;

/// One chart path per sample, in order. Samples whose sanitised names
/// collide get `-2`, `-3`, ... appended to the later stems.
pub fn chart_paths(dir: &Path, samples: &[String]) -> Vec<PathBuf> {
    let mut used = HashSet::new();
    samples
        .iter()
        .map(|sample| {
            let stem = sample_file_stem(sample);
            let mut unique = stem.clone();
            let mut n = 2;
            while !used.insert(unique.clone()) {
                unique = format!("{}-{}", stem, n);
                n += 1;
            }
            if unique != stem {
                warn!(sample = %sample, file = %unique, "chart file name collision");
            }
            dir.join(format!("{}.svg", unique))
        })
        .collect()
}

pub fn write_sample_charts(dir: &Path, scores: &PathwayScoreMatrix) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let names: Vec<String> = scores.gene_sets().map(str::to_string).collect();
    let paths = chart_paths(dir, &scores.samples);

    let mut written = Vec::with_capacity(scores.samples.len());
    for (i, (sample, path)) in scores.samples.iter().zip(paths).enumerate() {
        draw_sample_chart(&path, sample, &names, &scores.row(i))
            .with_context(|| format!("failed to draw chart for sample '{}'", sample))?;
        written.push(path);
    }
    Ok(written)
}

fn draw_sample_chart(
    path: &Path,
    sample: &str,
    names: &[String],
    values: &[Option<f64>],
) -> Result<()> {
    let n = names.len().max(1) as u32;
    let width = (n * BAR_WIDTH + 120).max(MIN_WIDTH);
    let root = SVGBackend::new(path, (width, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(sample, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(40)
        .build_cartesian_2d((0u32..n).into_segmented(), DISPLAY_MIN..DISPLAY_MAX)?;

    let label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => names.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len())
        .x_label_formatter(&label)
        .y_desc("score")
        .draw()?;

    // Undefined columns get no bar; values outside the display range are clipped.
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.filled())
            .margin(8)
            .data(values.iter().enumerate().filter_map(|(i, v)| {
                v.filter(|x| x.is_finite())
                    .map(|x| (i as u32, x.clamp(DISPLAY_MIN, DISPLAY_MAX)))
            })),
    )?;

    root.present()?;
    Ok(())
}
