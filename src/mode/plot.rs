//! Legend rendering modes

use geopalette::{LegendOptions, plot_colormap, plot_colormaps};

use super::save_legend;

/// Render one ramp to `image_path`
pub fn run_plot(name: &str, options: &LegendOptions, image_path: &str) -> Result<(), String> {
    let legend = plot_colormap(name, options).map_err(|e| e.to_string())?;
    save_legend(&legend, image_path)
}

/// Render every ramp to `image_path`
pub fn run_gallery(width: f64, height: f64, image_path: &str, quiet: bool) -> Result<(), String> {
    if !quiet {
        eprint!("Rendering gallery...");
    }
    let legend = plot_colormaps(width, height).map_err(|e| e.to_string())?;
    if !quiet {
        eprintln!(" done");
    }
    save_legend(&legend, image_path)
}
