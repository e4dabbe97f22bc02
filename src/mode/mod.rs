//! CLI mode implementations

mod catalog;
mod list;
mod palette;
mod plot;

pub use catalog::run_catalog;
pub use list::run_list;
pub use palette::run_palette;
pub use plot::{run_gallery, run_plot};

use geopalette::Legend;

/// Write a rendered legend and report where it went
fn save_legend(legend: &Legend, path: &str) -> Result<(), String> {
    legend.save(path).map_err(|e| e.to_string())?;
    let (width, height) = legend.size();
    eprintln!("Legend saved to: {} ({}x{} px)", path, width, height);
    Ok(())
}
