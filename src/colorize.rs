//! Value normalization and batch colorization.
//!
//! [`colorize`] maps a value vector through a colormap and hands back the
//! fitted [`ColorScale`] alongside the colors, so a colorbar or a sibling plot
//! can apply the exact same mapping to new values later.

use plotters::style::RGBAColor;
use thiserror::Error;

use crate::colormap::{Colormap, UnknownColormap};

/// An RGBA color with all four components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Build a color, clamping every component into `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// An opaque color from 8-bit channels.
    pub fn from_u8([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// `"#rrggbb"` form (alpha is dropped).
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Conversion into the plotters color type.
    pub fn to_plotters(&self) -> RGBAColor {
        RGBAColor(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a,
        )
    }
}

/// Whole-batch colorization failures. Per-cell conditions live in
/// [`crate::hexbin::NoSamplesInRadius`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error(transparent)]
    UnknownColormap(#[from] UnknownColormap),
    /// An explicit `vmin > vmax` is rejected, never silently swapped.
    #[error("degenerate range: vmin {vmin} exceeds vmax {vmax}")]
    DegenerateRange { vmin: f64, vmax: f64 },
    /// Empty input leaves the normalization range undefined.
    #[error("cannot colorize an empty sequence")]
    EmptyInput,
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },
    #[error("non-finite normalization bound")]
    NonFiniteBound,
    #[error("expected one value per point: {points} points, {values} values")]
    MismatchedLengths { points: usize, values: usize },
}

/// A reusable value-to-color mapping: a colormap plus its normalization range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    cmap: Colormap,
    vmin: f64,
    vmax: f64,
}

impl ColorScale {
    /// A scale with an explicit range. Fails on `vmin > vmax` or a non-finite
    /// bound.
    pub fn new(cmap: Colormap, vmin: f64, vmax: f64) -> Result<Self, ColorError> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Err(ColorError::NonFiniteBound);
        }
        if vmin > vmax {
            return Err(ColorError::DegenerateRange { vmin, vmax });
        }
        Ok(Self { cmap, vmin, vmax })
    }

    /// Fit a scale to observed values. Explicit bounds win over the observed
    /// min/max; non-finite values are skipped when fitting the range.
    pub fn fit(
        values: &[f64],
        cmap: Colormap,
        vmin: Option<f64>,
        vmax: Option<f64>,
    ) -> Result<Self, ColorError> {
        if values.is_empty() {
            return Err(ColorError::EmptyInput);
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in values {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        if lo > hi {
            // Nothing finite to fit against.
            return Err(ColorError::EmptyInput);
        }

        Self::new(cmap, vmin.unwrap_or(lo), vmax.unwrap_or(hi))
    }

    pub fn cmap(&self) -> Colormap {
        self.cmap
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    /// Linear position of `v` inside the range, clamped to `[0, 1]`. An empty
    /// range maps everything to the midpoint.
    pub fn normalize(&self, v: f64) -> f64 {
        if self.vmax == self.vmin {
            0.5
        } else {
            ((v - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
        }
    }

    /// Single-value counterpart of [`colorize`]. `None` for non-finite input.
    pub fn color_of(&self, v: f64) -> Option<Rgba> {
        v.is_finite().then(|| self.cmap.sample(self.normalize(v)))
    }
}

/// Convert a value sequence to RGBA colors.
///
/// One color per input value, same order, same length. The returned
/// [`ColorScale`] holds the normalization parameters actually used.
pub fn colorize(
    values: &[f64],
    cmap: Colormap,
    vmin: Option<f64>,
    vmax: Option<f64>,
) -> Result<(Vec<Rgba>, ColorScale), ColorError> {
    let scale = ColorScale::fit(values, cmap, vmin, vmax)?;

    let mut colors = Vec::with_capacity(values.len());
    for (index, &v) in values.iter().enumerate() {
        match scale.color_of(v) {
            Some(color) => colors.push(color),
            None => return Err(ColorError::NonFiniteValue { index }),
        }
    }
    Ok((colors, scale))
}
