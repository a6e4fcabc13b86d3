//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    #[command(flatten)]
    pub verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bin scattered samples into hexagonal cells and render them as
    /// count-shaded discs with a median-value dot on top.
    ///
    /// The input is a headerless CSV of `x,y,value` rows. Cells whose
    /// neighborhood search finds no samples are drawn with a red ring.
    Hexbin {
        /// CSV file of `x,y,value` rows.
        input: PathBuf,
        /// Output image path.
        #[arg(short, long, default_value = "hexbin.png")]
        output: PathBuf,
        /// Colormap shading the per-cell counts.
        #[arg(long, default_value = "Spectral_r")]
        bin_cmap: String,
        /// Colormap for the median-value dots.
        #[arg(long, default_value = "Greys")]
        dot_cmap: String,
        /// Number of hexagons across the x extent.
        #[arg(short, long, default_value_t = 25)]
        gridsize: usize,
        /// Dot radius in pixels.
        #[arg(long, default_value_t = 4)]
        dot_size: i32,
    },
    /// Render a rectangular value grid as a color-coded table with
    /// legibility-aware cell text.
    Table {
        /// CSV file holding a headerless rectangular numeric grid.
        input: PathBuf,
        /// Output image path.
        #[arg(short, long, default_value = "table.png")]
        output: PathBuf,
        /// Colormap for the cell fill.
        #[arg(long, default_value = "Blues")]
        cmap: String,
        /// Decimal places in cell text.
        #[arg(long, default_value_t = 1)]
        precision: usize,
        /// Lower color bound; smaller values render as `<cmin`.
        #[arg(long)]
        cmin: Option<f64>,
        /// Upper color bound; larger values render as `>cmax`.
        #[arg(long)]
        cmax: Option<f64>,
    },
}
