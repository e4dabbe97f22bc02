//! Palette catalog inspection mode

use geopalette::palettes;

use crate::output::{print_entry, print_entry_summary, print_legend, print_separator};

/// Print one catalog entry, or an overview of all of them
pub fn run_catalog(name: Option<&str>, json: bool, quiet: bool) -> Result<(), String> {
    let catalog = palettes().map_err(|e| format!("Palette catalog unavailable: {}", e))?;

    match name {
        Some(name) => {
            let entry = catalog
                .get(name)
                .ok_or_else(|| format!("No palette named '{}' in the catalog", name))?;
            if json {
                let out = serde_json::to_string_pretty(entry).map_err(|e| e.to_string())?;
                println!("{}", out);
            } else {
                print_entry(name, entry);
            }
        }
        None if json => {
            let out = serde_json::to_string_pretty(catalog).map_err(|e| e.to_string())?;
            println!("{}", out);
        }
        None => {
            println!("Palette catalog ({} entries)", catalog.len());
            print_separator(40);
            for (name, entry) in catalog.iter() {
                print_entry_summary(name, entry);
            }
            if !quiet {
                println!();
                print_legend();
            }
        }
    }
    Ok(())
}
