//! Legend rendering for color ramps

mod colors;
mod gallery;
mod legend;

pub use gallery::render_gallery;
pub use legend::render_legend;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use charming::{
    Chart, ImageRenderer,
    component::Axis,
    element::{AxisLabel, AxisLine, AxisTick, AxisType, Color, ColorStop, SplitLine},
    renderer::ImageFormat,
};

use crate::error::PaletteError;
use crate::ramp::{ColormapEngine, HexColor, sample};

/// Output pixels per figure inch (100 dpi at 2x for Retina quality)
pub const PIXELS_PER_INCH: f64 = 200.0;

/// Gradient resolution of every drawn bar
pub const GRADIENT_STEPS: usize = 256;

/// Direction a color bar runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Orientation {
    /// Left to right
    #[default]
    Horizontal,
    /// Bottom to top
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(format!("invalid orientation: {:?}", s)),
        }
    }
}

/// Layout options for a single-ramp legend. Sizes are in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOptions {
    pub width: f64,
    pub height: f64,
    pub orientation: Orientation,
    /// Hide ticks and axis lines
    pub axis_off: bool,
    /// Draw the ramp name left of the bar
    pub show_name: bool,
    /// Name label size in points
    pub font_size: u32,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 0.4,
            orientation: Orientation::Horizontal,
            axis_off: true,
            show_name: false,
            font_size: 12,
        }
    }
}

/// Image formats a legend can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendFormat {
    Png,
    Svg,
}

impl LegendFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// A rendered legend: the chart document and its pixel size
pub struct Legend {
    chart: Chart,
    width_px: u32,
    height_px: u32,
}

impl Legend {
    /// Pixel size as (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// ECharts option document
    pub fn to_json(&self) -> String {
        self.chart.to_string()
    }

    /// Render to an SVG document
    pub fn to_svg(&self) -> Result<String, PaletteError> {
        let mut renderer = ImageRenderer::new(self.width_px, self.height_px);
        renderer
            .render(&self.chart)
            .map_err(|e| PaletteError::Rendering(format!("Failed to render legend: {}", e)))
    }

    /// Write to `path`, choosing PNG or SVG from its extension
    pub fn save(&self, path: &str) -> Result<(), PaletteError> {
        let format = LegendFormat::from_path(path).ok_or_else(|| {
            PaletteError::Rendering(format!("Unsupported image format: {}", path))
        })?;

        let mut renderer = ImageRenderer::new(self.width_px, self.height_px);
        let result = match format {
            LegendFormat::Png => renderer.save_format(ImageFormat::Png, &self.chart, path),
            LegendFormat::Svg => renderer.save(&self.chart, path),
        };
        result.map_err(|e| PaletteError::Rendering(format!("Failed to save legend: {}", e)))
    }
}

/// Convert a figure dimension to pixels, rejecting empty or non-finite sizes
pub(super) fn to_pixels(inches: f64, what: &str) -> Result<u32, PaletteError> {
    if !inches.is_finite() || inches <= 0.0 {
        return Err(PaletteError::Rendering(format!(
            "Invalid {}: {} (must be a positive number of inches)",
            what, inches
        )));
    }
    let pixels = (inches * PIXELS_PER_INCH).round();
    if pixels > u32::MAX as f64 {
        return Err(PaletteError::Rendering(format!("{} too large: {}", what, inches)));
    }
    Ok((pixels as u32).max(1))
}

/// Convert a point size to pixels at the output resolution
pub(super) fn points_to_pixels(points: u32) -> f64 {
    (points as f64 * PIXELS_PER_INCH / 72.0).round()
}

/// Axis with every decoration turned off
pub(super) fn bare_axis(type_: AxisType) -> Axis {
    Axis::new()
        .type_(type_)
        .axis_line(AxisLine::new().show(false))
        .axis_tick(AxisTick::new().show(false))
        .axis_label(AxisLabel::new().show(false))
        .split_line(SplitLine::new().show(false))
}

/// Sample a ramp at the gradient resolution and build a linear fill
pub(super) fn ramp_gradient(
    engine: &dyn ColormapEngine,
    ramp_name: &str,
    orientation: Orientation,
) -> Result<Color, PaletteError> {
    let colors = sample(engine, Some(ramp_name), Some(GRADIENT_STEPS))?;
    Ok(gradient_fill(&colors, orientation))
}

// (x, y) -> (x2, y2) is the direction the ramp runs in, in bounding-box units
fn gradient_fill(colors: &[HexColor], orientation: Orientation) -> Color {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    let color_stops = colors
        .iter()
        .enumerate()
        .map(|(i, hex)| ColorStop::new(i as f64 / last, hex.to_css()))
        .collect();

    match orientation {
        Orientation::Horizontal => Color::LinearGradient {
            x: 0.0,
            y: 0.0,
            x2: 1.0,
            y2: 0.0,
            color_stops,
        },
        Orientation::Vertical => Color::LinearGradient {
            x: 0.0,
            y: 1.0,
            x2: 0.0,
            y2: 0.0,
            color_stops,
        },
    }
}
