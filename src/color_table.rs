//! Color-coded 2D table computation.
//!
//! Turns a rectangular value grid into render-ready cells: a fill color from a
//! shared [`ColorScale`], display text, and a black-or-white text color picked
//! for legibility. Drawing lives in [`crate::render`].

use thiserror::Error;

use crate::colorize::{ColorError, ColorScale, Rgba};
use crate::colormap::Colormap;
use crate::contrast::contrasting_text_color;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("expected {expected} {axis} labels, got {got}")]
    LabelMismatch {
        axis: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Options controlling cell coloring and text formatting.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub cmap: Colormap,
    /// Explicit lower color bound; values below it render as `<cmin`.
    pub cmin: Option<f64>,
    /// Explicit upper color bound; values above it render as `>cmax`.
    pub cmax: Option<f64>,
    /// Decimal places in cell text.
    pub precision: usize,
    /// Fill for cells holding NaN or infinite values.
    pub nan_color: Rgba,
    /// Text for cells holding NaN or infinite values.
    pub nan_text: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            cmap: Colormap::BLUES,
            cmin: None,
            cmax: None,
            precision: 1,
            nan_color: Rgba::new(0.0, 0.0, 0.0, 1.0),
            nan_text: String::new(),
        }
    }
}

/// One render-ready cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub color: Rgba,
    pub text_color: &'static str,
    pub text: String,
}

/// A color-coded table: axis labels plus row-major cells, along with the
/// scale that colored them (reuse it for a matching colorbar).
#[derive(Debug, Clone)]
pub struct ColorTable {
    x_labels: Vec<String>,
    y_labels: Vec<String>,
    cells: Vec<TableCell>,
    scale: ColorScale,
}

impl ColorTable {
    /// Build a table from a row-major grid: `data[iy][ix]`, one row per y
    /// label, one column per x label.
    pub fn build(
        x_labels: Vec<String>,
        y_labels: Vec<String>,
        data: &[Vec<f64>],
        options: &TableOptions,
    ) -> Result<Self, TableError> {
        if y_labels.len() != data.len() {
            return Err(TableError::LabelMismatch {
                axis: "y",
                expected: data.len(),
                got: y_labels.len(),
            });
        }
        for (row, values) in data.iter().enumerate() {
            if values.len() != x_labels.len() {
                return Err(TableError::RaggedRow {
                    row,
                    expected: x_labels.len(),
                    got: values.len(),
                });
            }
        }

        let flat: Vec<f64> = data.iter().flatten().copied().collect();
        let scale = ColorScale::fit(&flat, options.cmap, options.cmin, options.cmax)?;

        let cells = flat
            .iter()
            .map(|&v| Self::make_cell(v, &scale, options))
            .collect();

        Ok(Self {
            x_labels,
            y_labels,
            cells,
            scale,
        })
    }

    fn make_cell(v: f64, scale: &ColorScale, options: &TableOptions) -> TableCell {
        match scale.color_of(v) {
            Some(color) => TableCell {
                color,
                text_color: contrasting_text_color(color),
                text: Self::cell_text(v, options),
            },
            None => TableCell {
                color: options.nan_color,
                text_color: contrasting_text_color(options.nan_color),
                text: options.nan_text.clone(),
            },
        }
    }

    fn cell_text(v: f64, options: &TableOptions) -> String {
        if let Some(cmax) = options.cmax {
            if v > cmax {
                return format!(">{:.*}", options.precision, cmax);
            }
        }
        if let Some(cmin) = options.cmin {
            if v < cmin {
                return format!("<{:.*}", options.precision, cmin);
            }
        }
        format!("{:.*}", options.precision, v)
    }

    /// Number of columns.
    pub fn nx(&self) -> usize {
        self.x_labels.len()
    }

    /// Number of rows.
    pub fn ny(&self) -> usize {
        self.y_labels.len()
    }

    pub fn x_labels(&self) -> &[String] {
        &self.x_labels
    }

    pub fn y_labels(&self) -> &[String] {
        &self.y_labels
    }

    pub fn cell(&self, ix: usize, iy: usize) -> &TableCell {
        &self.cells[iy * self.nx() + ix]
    }

    /// Row-major cell iteration.
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.cells.iter()
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::{BLACK_TEXT, WHITE_TEXT};

    fn labels(prefix: &str, n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn builds_a_row_major_grid() {
        let data = vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]];
        let table =
            ColorTable::build(labels("x", 3), labels("y", 2), &data, &TableOptions::default())
                .unwrap();

        assert_eq!(table.nx(), 3);
        assert_eq!(table.ny(), 2);
        assert_eq!(table.cell(0, 0).text, "0.0");
        assert_eq!(table.cell(2, 1).text, "5.0");
        assert_eq!(table.cells().count(), 6);
        assert_eq!(table.scale().vmin(), 0.0);
        assert_eq!(table.scale().vmax(), 5.0);
    }

    #[test]
    fn clamp_bounds_change_the_text() {
        let data = vec![vec![-1.0, 5.0, 11.0]];
        let options = TableOptions {
            cmin: Some(0.0),
            cmax: Some(10.0),
            ..TableOptions::default()
        };
        let table = ColorTable::build(labels("x", 3), labels("y", 1), &data, &options).unwrap();
        assert_eq!(table.cell(0, 0).text, "<0.0");
        assert_eq!(table.cell(1, 0).text, "5.0");
        assert_eq!(table.cell(2, 0).text, ">10.0");
    }

    #[test]
    fn nan_cells_get_the_nan_style() {
        let data = vec![vec![1.0, f64::NAN]];
        let options = TableOptions {
            nan_text: "n/a".to_string(),
            ..TableOptions::default()
        };
        let table = ColorTable::build(labels("x", 2), labels("y", 1), &data, &options).unwrap();

        let nan_cell = table.cell(1, 0);
        assert_eq!(nan_cell.text, "n/a");
        assert_eq!(nan_cell.color, options.nan_color);
        // The default nan color is black, so its text must be white.
        assert_eq!(nan_cell.text_color, WHITE_TEXT);
        // Blues at vmin is nearly white, so the finite cell reads black.
        assert_eq!(table.cell(0, 0).text_color, BLACK_TEXT);
    }

    #[test]
    fn label_and_row_mismatches_are_rejected() {
        let data = vec![vec![1.0, 2.0]];
        assert!(matches!(
            ColorTable::build(labels("x", 2), labels("y", 2), &data, &TableOptions::default()),
            Err(TableError::LabelMismatch { axis: "y", .. })
        ));
        assert!(matches!(
            ColorTable::build(labels("x", 3), labels("y", 1), &data, &TableOptions::default()),
            Err(TableError::RaggedRow { row: 0, .. })
        ));
    }

    #[test]
    fn precision_controls_the_text() {
        let data = vec![vec![std::f64::consts::PI]];
        let options = TableOptions {
            precision: 3,
            ..TableOptions::default()
        };
        let table = ColorTable::build(labels("x", 1), labels("y", 1), &data, &options).unwrap();
        assert_eq!(table.cell(0, 0).text, "3.142");
    }
}
