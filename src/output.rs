use colored::*;

use geopalette::{HexColor, PaletteEntry};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_info(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Two-cell block painted with the color (plain spaces when color is off)
fn swatch(hex: &HexColor) -> ColoredString {
    let [r, g, b] = hex.rgb();
    "  ".on_truecolor(r, g, b)
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// One color per line: swatch, index, hex
pub(crate) fn print_colors(colors: &[HexColor]) {
    for (i, hex) in colors.iter().enumerate() {
        println!("{} {:>3}  {}", swatch(hex), i, hex);
    }
}

/// Single line of swatches followed by the label
pub(crate) fn print_strip(label: &str, colors: &[HexColor]) {
    let strip: String = colors.iter().map(|hex| swatch(hex).to_string()).collect();
    println!("{} {}", strip, label);
}

pub(crate) fn print_palette_header(name: &str, class_count: Option<usize>, total: usize) {
    let classes = match class_count {
        Some(n) => format!("{} classes", n),
        None => format!("continuous, {} stops", total),
    };
    println!("Palette: {} ({})", style_label(name), classes);
}

pub(crate) fn print_entry(name: &str, entry: &PaletteEntry) {
    match entry {
        PaletteEntry::Flat(colors) => {
            println!("{} [flat, {} colors]", style_label(name), colors.len());
            print_strip("", colors);
            println!("{}", join_hex(colors));
        }
        PaletteEntry::Graded(classes) => {
            println!("{} [graded]", style_label(name));
            for (key, colors) in classes {
                print_strip(&format!("{} {}", key, join_hex(colors)), colors);
            }
        }
    }
}

/// Catalog overview line: name and shape
pub(crate) fn print_entry_summary(name: &str, entry: &PaletteEntry) {
    let shape = match entry {
        PaletteEntry::Flat(colors) => format!("flat, {} colors", colors.len()),
        PaletteEntry::Graded(classes) => {
            let keys: Vec<String> = classes.keys().map(ToString::to_string).collect();
            match (keys.first(), keys.last()) {
                (Some(first), Some(last)) => format!("graded, {}..{}", first, last),
                _ => "graded".to_string(),
            }
        }
    };
    println!("  {:<14} {}", name, shape);
}

pub(crate) fn join_hex(colors: &[HexColor]) -> String {
    colors
        .iter()
        .map(HexColor::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn print_legend() {
    println!("Hex colors are RRGGBB without a leading '#'.");
    println!("Graded entries hold one palette per class count (n03..n12).");
    println!("Flat entries (ndvi, ndwi, dem) are hand-authored and not resampled.");
}
