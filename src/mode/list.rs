//! Ramp enumeration mode

use geopalette::list_colormaps;

use crate::output::print_info;

/// Print every ramp name, one per line
pub fn run_list(quiet: bool) -> Result<(), String> {
    let names = list_colormaps();
    for name in &names {
        println!("{}", name);
    }
    if !quiet {
        print_info(&format!("{} color ramps", names.len()));
    }
    Ok(())
}
