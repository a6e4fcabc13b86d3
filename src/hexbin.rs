//! Spatial binning and nearest-point color aggregation.
//!
//! Hexbin-style plots get annotated with one dot per occupied cell, colored by
//! the median value of the scattered samples near that cell center. The search
//! radius is derived once from the grid geometry and shared by every cell.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::colorize::{ColorError, ColorScale, Rgba};
use crate::colormap::Colormap;

/// Padding divisor in the search-radius heuristic. Empirical: the radius is
/// `min_dist / 2 + min_dist / pad`, so larger values shrink the padding term.
pub const DEFAULT_PAD_FACTOR: f64 = 4.0;

/// A 2D coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A spatial bucket: its center and how many samples landed in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexbinCell {
    pub center: Point,
    pub count: usize,
}

/// A cell whose neighborhood search came up empty. Sibling cells in the same
/// batch are unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("no samples within radius {radius} of cell ({x}, {y})")]
pub struct NoSamplesInRadius {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Shared search radius for a set of cell centers: half the minimum pairwise
/// center distance plus a padding term. With fewer than two centers the
/// minimum distance is infinite, and so is the radius.
pub fn search_radius(centers: &[Point], pad_factor: f64) -> f64 {
    let mut min_dist = f64::INFINITY;
    for (i, a) in centers.iter().enumerate() {
        for b in &centers[i + 1..] {
            min_dist = min_dist.min(a.distance(b));
        }
    }
    min_dist / 2.0 + min_dist / pad_factor
}

/// Color each cell center by the median value of the samples within the shared
/// search radius, mapped through `cmap` normalized over all `values`.
///
/// Cells with an empty neighborhood yield [`NoSamplesInRadius`] without
/// aborting the rest of the batch. Whole-batch problems (empty or non-finite
/// values, mismatched lengths) fail the call before any cell is computed.
pub fn aggregate_colors(
    centers: &[Point],
    samples: &[Point],
    values: &[f64],
    cmap: Colormap,
) -> Result<Vec<Result<Rgba, NoSamplesInRadius>>, ColorError> {
    aggregate_colors_with(centers, samples, values, cmap, DEFAULT_PAD_FACTOR)
}

/// [`aggregate_colors`] with an explicit padding divisor for the radius
/// heuristic.
pub fn aggregate_colors_with(
    centers: &[Point],
    samples: &[Point],
    values: &[f64],
    cmap: Colormap,
    pad_factor: f64,
) -> Result<Vec<Result<Rgba, NoSamplesInRadius>>, ColorError> {
    if samples.len() != values.len() {
        return Err(ColorError::MismatchedLengths {
            points: samples.len(),
            values: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(ColorError::NonFiniteValue { index });
    }
    let scale = ColorScale::fit(values, cmap, None, None)?;

    let radius = search_radius(centers, pad_factor);
    log::debug!("hexbin aggregation radius r = {radius}");

    Ok(centers
        .iter()
        .map(|center| {
            let nearby: Vec<f64> = samples
                .iter()
                .zip(values)
                .filter(|(p, _)| center.distance(p) < radius)
                .map(|(_, &v)| v)
                .collect();

            if nearby.is_empty() {
                Err(NoSamplesInRadius {
                    x: center.x,
                    y: center.y,
                    radius,
                })
            } else {
                let med = median(nearby);
                Ok(scale.cmap().sample(scale.normalize(med)))
            }
        })
        .collect())
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Bin samples into a hexagonal grid: `gridsize` hexagons across the x extent,
/// two offset rectangular lattices, each sample assigned to the nearer
/// candidate center. Only occupied cells are returned.
pub fn hexbin(samples: &[Point], gridsize: usize) -> Vec<HexbinCell> {
    if samples.is_empty() {
        return Vec::new();
    }

    let nx = gridsize.max(1);
    let ny = ((nx as f64) / 3f64.sqrt()).round().max(1.0) as usize;

    let mut xmin = f64::INFINITY;
    let mut xmax = f64::NEG_INFINITY;
    let mut ymin = f64::INFINITY;
    let mut ymax = f64::NEG_INFINITY;
    for p in samples {
        xmin = xmin.min(p.x);
        xmax = xmax.max(p.x);
        ymin = ymin.min(p.y);
        ymax = ymax.max(p.y);
    }

    // A degenerate extent collapses every sample into one column or row.
    let sx = if xmax > xmin { (xmax - xmin) / nx as f64 } else { 1.0 };
    let sy = if ymax > ymin { (ymax - ymin) / ny as f64 } else { 1.0 };

    // Key: (lattice, column, row). BTreeMap keeps the output deterministic.
    let mut counts: BTreeMap<(u8, i64, i64), usize> = BTreeMap::new();
    for p in samples {
        let ix = (p.x - xmin) / sx;
        let iy = (p.y - ymin) / sy;

        let i1 = ix.round();
        let j1 = iy.round();
        let i2 = ix.floor();
        let j2 = iy.floor();

        // Hexagon aspect ratio weights the vertical distance by 3.
        let d1 = (ix - i1).powi(2) + 3.0 * (iy - j1).powi(2);
        let d2 = (ix - i2 - 0.5).powi(2) + 3.0 * (iy - j2 - 0.5).powi(2);

        let key = if d1 <= d2 {
            (0, i1 as i64, j1 as i64)
        } else {
            (1, i2 as i64, j2 as i64)
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((lattice, i, j), count)| {
            let offset = if lattice == 0 { 0.0 } else { 0.5 };
            HexbinCell {
                center: Point::new(
                    xmin + (i as f64 + offset) * sx,
                    ymin + (j as f64 + offset) * sy,
                ),
                count,
            }
        })
        .collect()
}
