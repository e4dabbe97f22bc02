//! Palette sampling mode

use geopalette::catalog::FLAT_RAMP_NAMES;
use geopalette::get_palette;

use crate::output::{join_hex, print_colors, print_palette_header, print_warning};

/// Sample a ramp and print its colors
pub fn run_palette(
    name: Option<&str>,
    class_count: Option<usize>,
    json: bool,
    quiet: bool,
) -> Result<(), String> {
    let colors = get_palette(name, class_count).map_err(|e| {
        if let Some(flat) = name.filter(|n| FLAT_RAMP_NAMES.iter().any(|flat| flat == n)) {
            print_warning(&format!(
                "'{}' is a hand-authored palette; read it with `geopalette catalog {}`",
                flat, flat
            ));
        }
        e.to_string()
    })?;

    if json {
        let out = serde_json::to_string(&colors).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else if quiet {
        println!("{}", join_hex(&colors));
    } else {
        print_palette_header(
            name.unwrap_or(geopalette::ramp::DEFAULT_RAMP),
            class_count,
            colors.len(),
        );
        print_colors(&colors);
    }
    Ok(())
}
