//! # geopalette
//!
//! Color ramps for visualizing geospatial rasters: sample a named ramp into
//! hex colors, list the available ramps, render ramps as legend images, and
//! read the precomputed palette catalog.
//!
//! ```
//! let colors = geopalette::get_palette(Some("viridis"), Some(5)).unwrap();
//! assert_eq!(colors.len(), 5);
//!
//! let palettes = geopalette::palettes().unwrap();
//! assert_eq!(palettes["viridis"]["n05"], colors[..]);
//! assert_eq!(palettes["ndvi"].flat().unwrap().len(), 17);
//! ```

pub mod catalog;
pub mod chart;
pub mod error;
pub mod ramp;

pub use catalog::{CLASS_COUNTS, ClassCountKey, PaletteEntry, Palettes, palettes};
pub use chart::{Legend, LegendOptions, Orientation};
pub use error::PaletteError;
pub use ramp::{ColormapEngine, HexColor, PresetEngine};

/// Sample a preset ramp into hex colors.
///
/// Without a name the default ramp is used; without a class count the
/// ramp's full 256-stop resolution is returned.
pub fn get_palette(
    cmap_name: Option<&str>,
    n_class: Option<usize>,
) -> Result<Vec<HexColor>, PaletteError> {
    ramp::sample(&PresetEngine, cmap_name, n_class)
}

/// Names of every preset ramp, including reversed variants
pub fn list_colormaps() -> Vec<String> {
    ramp::list_ramps(&PresetEngine)
}

/// Render one preset ramp as a color bar
pub fn plot_colormap(cmap: &str, options: &LegendOptions) -> Result<Legend, PaletteError> {
    chart::render_legend(&PresetEngine, cmap, options)
}

/// Render every preset ramp, one labeled row each
pub fn plot_colormaps(width: f64, height: f64) -> Result<Legend, PaletteError> {
    chart::render_gallery(&PresetEngine, width, height)
}
