//! Integration tests for the geopalette library and CLI

mod common;

use std::process::Command;
use tempfile::TempDir;

use geopalette::{
    CLASS_COUNTS, LegendOptions, Orientation, PaletteEntry, PaletteError, get_palette,
    list_colormaps, palettes, plot_colormap, plot_colormaps,
};

/// Get the path to the geopalette binary
fn geopalette_bin() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_BIN_EXE_geopalette"))
}

/// Run geopalette with the given arguments
fn run_geopalette(args: &[&str]) -> std::process::Output {
    Command::new(geopalette_bin())
        .args(args)
        .output()
        .expect("failed to execute geopalette")
}

// =============================================================================
// Library surface
// =============================================================================

#[test]
fn test_get_palette_every_ramp_and_class() {
    for name in list_colormaps() {
        for count in CLASS_COUNTS {
            let colors = get_palette(Some(name.as_str()), Some(count)).unwrap();
            assert_eq!(colors.len(), count);
            assert!(colors.iter().all(|c| common::is_hex6(c.as_str())));
        }
    }
}

#[test]
fn test_get_palette_defaults() {
    let colors = get_palette(None, None).unwrap();
    assert_eq!(colors.len(), 256);
    assert_eq!(colors, get_palette(Some("viridis"), None).unwrap());
}

#[test]
fn test_hand_authored_names_are_not_engine_ramps() {
    assert_eq!(
        get_palette(Some("ndvi"), Some(5)),
        Err(PaletteError::UnknownRamp("ndvi".to_string()))
    );
    // The catalog still has it, as a flat list
    assert!(palettes().unwrap()["ndvi"].is_flat());
}

#[test]
fn test_list_colormaps_is_stable() {
    let first = list_colormaps();
    assert!(!first.is_empty());
    assert_eq!(first, list_colormaps());
}

#[test]
fn test_catalog_matches_get_palette() {
    let catalog = palettes().unwrap();
    for name in list_colormaps() {
        let entry = &catalog[name.as_str()];
        assert_eq!(
            entry["n05"],
            get_palette(Some(name.as_str()), Some(5)).unwrap()[..],
            "{}",
            name
        );
    }
}

#[test]
fn test_catalog_flat_entries() {
    let catalog = palettes().unwrap();
    let sizes: Vec<(&str, usize)> = catalog
        .iter()
        .filter_map(|(name, entry)| match entry {
            PaletteEntry::Flat(colors) => Some((name, colors.len())),
            PaletteEntry::Graded(_) => None,
        })
        .collect();
    assert_eq!(sizes, vec![("ndvi", 17), ("ndwi", 8), ("dem", 5)]);
}

#[test]
fn test_plot_colormap_returns_surface() {
    let options = LegendOptions {
        orientation: Orientation::Vertical,
        width: 0.5,
        height: 3.0,
        show_name: true,
        ..LegendOptions::default()
    };
    let legend = plot_colormap("cividis", &options).unwrap();
    assert_eq!(legend.size(), (100, 600));
    assert!(legend.to_json().contains("cividis"));
}

#[test]
fn test_plot_colormap_unknown() {
    assert_eq!(
        plot_colormap("dem", &LegendOptions::default()).err(),
        Some(PaletteError::UnknownRamp("dem".to_string()))
    );
}

#[test]
fn test_plot_colormaps_row_count() {
    let legend = plot_colormaps(6.0, 0.25).unwrap();
    let rows = list_colormaps().len() as u32;
    assert_eq!(legend.size(), (1200, 50 * rows));
}

#[test]
fn test_legend_svg_render() {
    let legend = plot_colormap("plasma", &LegendOptions::default()).unwrap();
    let svg = legend.to_svg().unwrap();
    assert!(svg.contains("<svg"));
}

// =============================================================================
// CLI basics
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_geopalette(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Color ramps and palettes"));
    assert!(stdout.contains("palette"));
    assert!(stdout.contains("catalog"));
    assert!(stdout.contains("plot"));
    assert!(stdout.contains("gallery"));
}

#[test]
fn test_version_flag() {
    let output = run_geopalette(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("geopalette"));
}

#[test]
fn test_no_subcommand_error() {
    let output = run_geopalette(&[]);
    assert!(!output.status.success());
}

// =============================================================================
// list / palette / catalog
// =============================================================================

#[test]
fn test_list_prints_every_ramp() {
    let output = run_geopalette(&["-q", "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names, list_colormaps());
}

#[test]
fn test_palette_quiet_output() {
    let output = run_geopalette(&["-q", "palette", "RdYlGn", "-n", "7"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected: Vec<String> = get_palette(Some("RdYlGn"), Some(7))
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(common::hex_tokens(stdout.trim()), expected);
}

#[test]
fn test_palette_json_output() {
    let output = run_geopalette(&["palette", "magma", "--classes", "4", "--json"]);
    assert!(output.status.success());
    let colors: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(colors.len(), 4);
    assert!(colors.iter().all(|c| common::is_hex6(c)));
}

#[test]
fn test_palette_verbose_has_header() {
    let output = run_geopalette(&["--no-color", "palette", "Blues", "-n", "3"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Palette: Blues (3 classes)"));
    assert!(!stdout.contains("\x1b["), "Should not contain ANSI escape codes");
}

#[test]
fn test_palette_unknown_ramp_error() {
    let output = run_geopalette(&["palette", "not-a-ramp"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown color ramp: not-a-ramp"));
}

#[test]
fn test_palette_flat_name_hints_catalog() {
    let output = run_geopalette(&["palette", "ndwi", "-n", "5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("geopalette catalog ndwi"));
}

#[test]
fn test_palette_zero_classes_error() {
    let output = run_geopalette(&["palette", "viridis", "-n", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid class count"));
}

#[test]
fn test_catalog_flat_entry() {
    let output = run_geopalette(&["--no-color", "catalog", "ndvi"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ndvi [flat, 17 colors]"));
    assert!(stdout.contains("FFFFFF CE7E45"));
}

#[test]
fn test_catalog_graded_entry_json() {
    let output = run_geopalette(&["catalog", "viridis", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let classes = json.as_object().unwrap();
    assert_eq!(classes.len(), 10);
    assert_eq!(classes["n12"].as_array().unwrap().len(), 12);
}

#[test]
fn test_catalog_overview() {
    let output = run_geopalette(&["--no-color", "catalog"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("graded, n03..n12"));
    assert!(stdout.contains("flat, 17 colors"));
    assert!(stdout.contains("Flat entries"));
}

#[test]
fn test_catalog_missing_entry() {
    let output = run_geopalette(&["catalog", "terrain"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No palette named 'terrain'"));
}

// =============================================================================
// plot / gallery
// =============================================================================

#[test]
fn test_plot_png() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("viridis.png");

    let output = run_geopalette(&["plot", "viridis", "--image", image_path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(common::is_png(&image_path), "Image should be a PNG");
    assert_eq!(common::png_size(&image_path), Some((1600, 80)));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Legend saved to:"));
}

#[test]
fn test_plot_svg_with_name() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("blues.svg");

    let output = run_geopalette(&[
        "plot",
        "Blues",
        "--show-name",
        "--axis",
        "--orientation",
        "vertical",
        "--width",
        "1.5",
        "--height",
        "4",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let svg = std::fs::read_to_string(&image_path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Blues"));
}

#[test]
fn test_gallery_png() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("gallery.png");

    let output = run_geopalette(&[
        "-q",
        "gallery",
        "--height",
        "0.2",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let rows = list_colormaps().len() as u32;
    assert_eq!(common::png_size(&image_path), Some((1600, 40 * rows)));
}

#[test]
fn test_plot_unknown_ramp_error() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("x.png");

    let output = run_geopalette(&["plot", "ndvi", "--image", image_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!image_path.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown color ramp: ndvi"));
}

#[test]
fn test_plot_invalid_directory_error() {
    let output = run_geopalette(&["plot", "viridis", "--image", "/nonexistent/dir/bar.png"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"));
}

#[test]
fn test_plot_unsupported_format_error() {
    let output = run_geopalette(&["plot", "viridis", "--image", "bar.gif"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported image format"));
}

#[test]
fn test_gallery_invalid_height_error() {
    let output = run_geopalette(&["gallery", "--height", "0", "--image", "g.png"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Height must be positive"));
}

#[test]
fn test_plot_invalid_orientation_error() {
    let output = run_geopalette(&[
        "plot",
        "viridis",
        "--orientation",
        "diagonal",
        "--image",
        "bar.png",
    ]);
    assert!(!output.status.success());
}
