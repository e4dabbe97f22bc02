mod mode;
mod output;

use std::path::Path;

use clap::{Parser, Subcommand};

use geopalette::chart::LegendFormat;
use geopalette::{LegendOptions, Orientation};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "geopalette",
    version,
    about = "Color ramps and palettes for geospatial raster visualization",
    after_help = "Examples:
  geopalette list                                      List color ramps
  geopalette palette YlGn -n 5                         Five-class palette (hex)
  geopalette palette RdYlGn -n 7 --json                Palette as JSON
  geopalette catalog ndvi                              Hand-authored NDVI palette
  geopalette plot viridis --image viridis.png          Color bar legend
  geopalette plot Blues --show-name --image b.svg      Labeled legend as SVG
  geopalette gallery --image ramps.png                 All ramps in one image"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every color ramp name
    List,

    /// Sample a color ramp into hex colors
    Palette {
        /// Ramp name (default: viridis)
        name: Option<String>,

        /// Number of classes (default: continuous, 256 stops)
        #[arg(short = 'n', long = "classes", value_name = "N")]
        classes: Option<usize>,

        /// Print as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Inspect the precomputed palette catalog
    Catalog {
        /// Entry to print (default: overview of all entries)
        name: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one ramp as a color bar legend
    Plot {
        /// Ramp name
        name: String,

        /// Output image path (.png or .svg)
        #[arg(long, value_name = "PATH")]
        image: String,

        /// Figure width in inches
        #[arg(long, default_value_t = 8.0)]
        width: f64,

        /// Figure height in inches
        #[arg(long, default_value_t = 0.4)]
        height: f64,

        /// Direction of the color bar
        #[arg(long, value_enum, default_value_t = Orientation::Horizontal)]
        orientation: Orientation,

        /// Show the value axis (0 to 1)
        #[arg(long)]
        axis: bool,

        /// Label the bar with the ramp name
        #[arg(long)]
        show_name: bool,

        /// Name label font size in points
        #[arg(long, default_value_t = 12, value_name = "PT")]
        font_size: u32,
    },

    /// Render every ramp stacked in one image
    Gallery {
        /// Output image path (.png or .svg)
        #[arg(long, value_name = "PATH")]
        image: String,

        /// Figure width in inches
        #[arg(long, default_value_t = 8.0)]
        width: f64,

        /// Height of each row in inches
        #[arg(long, default_value_t = 0.4)]
        height: f64,
    },
}

/// Check that a legend can be written to `path`
fn validate_image_path(path: &str) -> Result<(), String> {
    if LegendFormat::from_path(path).is_none() {
        return Err(format!(
            "Unsupported image format: {} (use .png or .svg)",
            path
        ));
    }
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!("Directory does not exist: {}", parent.display()));
    }
    Ok(())
}

fn validate_size(width: f64, height: f64) -> Result<(), String> {
    if !(width.is_finite() && width > 0.0) {
        return Err("Width must be positive".to_string());
    }
    if !(height.is_finite() && height > 0.0) {
        return Err("Height must be positive".to_string());
    }
    Ok(())
}

fn run(args: Args) -> Result<(), String> {
    match args.command {
        Command::List => mode::run_list(args.quiet),
        Command::Palette {
            name,
            classes,
            json,
        } => mode::run_palette(name.as_deref(), classes, json, args.quiet),
        Command::Catalog { name, json } => mode::run_catalog(name.as_deref(), json, args.quiet),
        Command::Plot {
            name,
            image,
            width,
            height,
            orientation,
            axis,
            show_name,
            font_size,
        } => {
            validate_size(width, height)?;
            if font_size == 0 {
                return Err("Font size must be positive".to_string());
            }
            validate_image_path(&image)?;
            let options = LegendOptions {
                width,
                height,
                orientation,
                axis_off: !axis,
                show_name,
                font_size,
            };
            mode::run_plot(&name, &options, &image)
        }
        Command::Gallery {
            image,
            width,
            height,
        } => {
            validate_size(width, height)?;
            validate_image_path(&image)?;
            mode::run_gallery(width, height, &image, args.quiet)
        }
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(args) {
        print_error(&e);
        std::process::exit(1);
    }
}
