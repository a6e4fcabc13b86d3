mod cli;

use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use clap::Parser;
use plotters::prelude::*;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huemap::{
    aggregate_colors, colorize, draw_color_table, draw_hexbin_dots, hexbin, ColorTable, Colormap,
    Point, TableOptions,
};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    TermLogger::init(
        args.verbose.log_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    match args.command {
        cli::Command::Hexbin {
            input,
            output,
            bin_cmap,
            dot_cmap,
            gridsize,
            dot_size,
        } => run_hexbin(&input, &output, &bin_cmap, &dot_cmap, gridsize, dot_size),
        cli::Command::Table {
            input,
            output,
            cmap,
            precision,
            cmin,
            cmax,
        } => run_table(&input, &output, &cmap, precision, cmin, cmax),
    }
}

fn run_hexbin(
    input: &Path,
    output: &Path,
    bin_cmap: &str,
    dot_cmap: &str,
    gridsize: usize,
    dot_size: i32,
) -> Result<()> {
    let bin_cmap: Colormap = bin_cmap.parse()?;
    let dot_cmap: Colormap = dot_cmap.parse()?;

    let (points, values) = read_samples(input)?;
    ensure!(!points.is_empty(), "{}: no samples", input.display());
    let cells = hexbin(&points, gridsize);
    log::info!("binned {} samples into {} cells", points.len(), cells.len());

    let centers: Vec<Point> = cells.iter().map(|c| c.center).collect();
    let dot_colors = aggregate_colors(&centers, &points, &values, dot_cmap)?;
    for err in dot_colors.iter().filter_map(|dot| dot.as_ref().err()) {
        log::warn!("{err}");
    }

    let counts: Vec<f64> = cells.iter().map(|c| c.count as f64).collect();
    let (bin_colors, _) = colorize(&counts, bin_cmap, None, None)?;

    let root = BitMapBackend::new(output, (800, 600)).into_drawing_area();
    draw_hexbin_dots(&root, &cells, &bin_colors, &dot_colors, dot_size)
        .map_err(|e| anyhow!("failed to draw hexbin chart: {e}"))?;
    root.present()
        .map_err(|e| anyhow!("failed to write {}: {e}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

fn run_table(
    input: &Path,
    output: &Path,
    cmap: &str,
    precision: usize,
    cmin: Option<f64>,
    cmax: Option<f64>,
) -> Result<()> {
    let options = TableOptions {
        cmap: cmap.parse::<Colormap>()?,
        cmin,
        cmax,
        precision,
        ..TableOptions::default()
    };

    let data = read_grid(input)?;
    ensure!(!data.is_empty(), "{}: no rows", input.display());
    let x_labels: Vec<String> = (1..=data[0].len()).map(|i| format!("x{i}")).collect();
    let y_labels: Vec<String> = (1..=data.len()).map(|i| format!("y{i}")).collect();
    let table = ColorTable::build(x_labels, y_labels, &data, &options)?;

    // Scale the canvas with the grid so cells stay readable.
    let width = 90 * table.nx() as u32 + 80;
    let height = 64 * table.ny() as u32 + 40;
    let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
    draw_color_table(&root, &table).map_err(|e| anyhow!("failed to draw table: {e}"))?;
    root.present()
        .map_err(|e| anyhow!("failed to write {}: {e}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

/// Read `x,y,value` sample rows.
fn read_samples(path: &Path) -> Result<(Vec<Point>, Vec<f64>)> {
    let mut reader = csv_reader(path)?;
    let mut points = Vec::new();
    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        ensure!(
            record.len() == 3,
            "{}: row {row}: expected `x,y,value`, got {} fields",
            path.display(),
            record.len()
        );
        let x = parse_number(&record[0], path, row)?;
        let y = parse_number(&record[1], path, row)?;
        points.push(Point::new(x, y));
        values.push(parse_number(&record[2], path, row)?);
    }
    log::debug!("read {} samples from {}", points.len(), path.display());
    Ok((points, values))
}

/// Read a rectangular numeric grid, one table row per CSV record.
fn read_grid(path: &Path) -> Result<Vec<Vec<f64>>> {
    let mut reader = csv_reader(path)?;
    let mut data = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let values: Vec<f64> = record
            .iter()
            .map(|field| parse_number(field, path, row))
            .collect::<Result<_>>()?;
        data.push(values);
    }
    log::debug!("read {} grid rows from {}", data.len(), path.display());
    Ok(data)
}

fn csv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))
}

fn parse_number(field: &str, path: &Path, row: usize) -> Result<f64> {
    field
        .parse::<f64>()
        .with_context(|| format!("{}: row {row}: invalid number `{field}`", path.display()))
}
