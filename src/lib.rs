//! Value-to-color mapping utilities for scientific plots.
//!
//! The core entry point is [`colorize`]: normalize a value vector against a
//! named colormap and get back one RGBA color per value plus the
//! [`ColorScale`] that produced them, so colorbars and sibling plots can apply
//! the identical mapping. On top of that sit the hexbin color aggregator
//! ([`hexbin::aggregate_colors`]), the contrast text-color selector, the
//! color-coded table builder, and wavelength/spectrum color helpers.

pub mod color_table;
pub mod colorize;
pub mod colormap;
pub mod contrast;
pub mod hexbin;
pub mod render;
pub mod response;
pub mod spectrum;

pub use color_table::{ColorTable, TableCell, TableError, TableOptions};
pub use colorize::{colorize, ColorError, ColorScale, Rgba};
pub use colormap::{Colormap, UnknownColormap};
pub use contrast::contrasting_text_color;
pub use hexbin::{
    aggregate_colors, aggregate_colors_with, hexbin, HexbinCell, NoSamplesInRadius, Point,
};
pub use render::{draw_color_table, draw_hexbin_dots};
pub use response::{nearest_index, ResponseCurves, ResponseError};
pub use spectrum::{spectrum_colors, wavelength_to_hex, wavelength_to_rgb};
