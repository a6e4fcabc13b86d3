//! plotters glue: rasterize huemap outputs onto any drawing backend.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::color_table::ColorTable;
use crate::colorize::Rgba;
use crate::contrast::BLACK_TEXT;
use crate::hexbin::{HexbinCell, NoSamplesInRadius};

/// Result alias for drawing onto a generic backend.
pub type DrawResult<T, DB> = Result<T, DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

const LEFT_GUTTER: i32 = 80;
const BOTTOM_GUTTER: i32 = 40;
const CELL_GAP: i32 = 2;

/// Draw a color table: one filled rectangle per cell with centered
/// contrast-colored text, labels along the left and bottom edges.
pub fn draw_color_table<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &ColorTable,
) -> DrawResult<(), DB> {
    area.fill(&WHITE)?;

    let (width, height) = area.dim_in_pixel();
    let nx = table.nx() as i32;
    let ny = table.ny() as i32;
    let cell_w = (width as i32 - LEFT_GUTTER) / nx;
    let cell_h = (height as i32 - BOTTOM_GUTTER) / ny;

    let centered = Pos::new(HPos::Center, VPos::Center);
    for iy in 0..ny {
        for ix in 0..nx {
            let cell = table.cell(ix as usize, iy as usize);
            let x0 = LEFT_GUTTER + ix * cell_w;
            let y0 = iy * cell_h;

            area.draw(&Rectangle::new(
                [(x0, y0), (x0 + cell_w - CELL_GAP, y0 + cell_h - CELL_GAP)],
                cell.color.to_plotters().filled(),
            ))?;

            let text_color = if cell.text_color == BLACK_TEXT { BLACK } else { WHITE };
            area.draw(&Text::new(
                cell.text.clone(),
                (x0 + cell_w / 2, y0 + cell_h / 2),
                ("sans-serif", 16).into_font().color(&text_color).pos(centered),
            ))?;
        }
    }

    let label_font = ("sans-serif", 15).into_font().color(&BLACK);
    for (ix, label) in table.x_labels().iter().enumerate() {
        area.draw(&Text::new(
            label.clone(),
            (LEFT_GUTTER + ix as i32 * cell_w + cell_w / 2, height as i32 - BOTTOM_GUTTER + 8),
            label_font.clone().pos(Pos::new(HPos::Center, VPos::Top)),
        ))?;
    }
    for (iy, label) in table.y_labels().iter().enumerate() {
        area.draw(&Text::new(
            label.clone(),
            (LEFT_GUTTER - 8, iy as i32 * cell_h + cell_h / 2),
            label_font.clone().pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
    }

    Ok(())
}

/// Draw hexbin cells as count-shaded discs with median-color dots on top.
///
/// `bin_colors` shades each disc (typically the colorized counts) and
/// `dot_colors` comes from the nearest-point aggregation. Cells whose
/// aggregation failed keep their disc but get an alarm-red ring, so a
/// degenerate binning stays visible instead of vanishing. Zero-count cells
/// are skipped entirely.
pub fn draw_hexbin_dots<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    cells: &[HexbinCell],
    bin_colors: &[Rgba],
    dot_colors: &[Result<Rgba, NoSamplesInRadius>],
    dot_size: i32,
) -> DrawResult<(), DB> {
    debug_assert_eq!(cells.len(), bin_colors.len());
    debug_assert_eq!(cells.len(), dot_colors.len());

    area.fill(&WHITE)?;

    let mut xmin = f64::INFINITY;
    let mut xmax = f64::NEG_INFINITY;
    let mut ymin = f64::INFINITY;
    let mut ymax = f64::NEG_INFINITY;
    for cell in cells {
        xmin = xmin.min(cell.center.x);
        xmax = xmax.max(cell.center.x);
        ymin = ymin.min(cell.center.y);
        ymax = ymax.max(cell.center.y);
    }
    // Leave a margin, and survive an empty or single-cell input.
    let xpad = if xmax > xmin { (xmax - xmin) * 0.05 } else { 1.0 };
    let ypad = if ymax > ymin { (ymax - ymin) * 0.05 } else { 1.0 };
    let (xmin, xmax) = if cells.is_empty() { (0.0, 1.0) } else { (xmin - xpad, xmax + xpad) };
    let (ymin, ymax) = if cells.is_empty() { (0.0, 1.0) } else { (ymin - ypad, ymax + ypad) };

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(28)
        .y_label_area_size(28)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)?;

    chart.configure_mesh().x_labels(10).y_labels(10).draw()?;

    chart.draw_series(
        cells
            .iter()
            .zip(bin_colors)
            .filter(|(cell, _)| cell.count > 0)
            .map(|(cell, color)| {
                Circle::new(
                    (cell.center.x, cell.center.y),
                    dot_size * 3,
                    color.to_plotters().filled(),
                )
            }),
    )?;

    chart.draw_series(
        cells
            .iter()
            .zip(dot_colors)
            .filter(|(cell, _)| cell.count > 0)
            .map(|(cell, dot)| {
                let coord = (cell.center.x, cell.center.y);
                match dot {
                    Ok(color) => Circle::new(coord, dot_size, color.to_plotters().filled()),
                    Err(_) => Circle::new(coord, dot_size, ShapeStyle::from(&RED).stroke_width(2)),
                }
            }),
    )?;

    Ok(())
}
