//! All ramps stacked in one labeled chart

use charming::{
    Chart,
    component::Grid,
    element::{AxisLabel, AxisType, Color, ItemStyle},
    series::Bar,
};

use super::colors::{COLOR_BACKGROUND, COLOR_TEXT};
use super::{Legend, Orientation, bare_axis, points_to_pixels, ramp_gradient, to_pixels};
use crate::error::PaletteError;
use crate::ramp::{ColormapEngine, list_ramps};

/// Figure margins in percent
const MARGIN_TOP: f64 = 5.0;
const MARGIN_BOTTOM: f64 = 1.0;
const MARGIN_LEFT: &str = "20%";
const MARGIN_RIGHT: &str = "1%";

/// Gap between rows as a fraction of a bar's height
const ROW_SPACING: f64 = 0.2;

/// Row label size in points
const LABEL_FONT_SIZE: u32 = 12;

/// Vertical placement of row `index` as (top, bottom) insets in percent
fn row_insets(index: usize, rows: usize) -> (f64, f64) {
    let slot = (100.0 - MARGIN_TOP - MARGIN_BOTTOM) / rows as f64;
    let bar = slot / (1.0 + ROW_SPACING);
    let top = MARGIN_TOP + slot * index as f64 + (slot - bar) / 2.0;
    let bottom = 100.0 - top - bar;
    (top, bottom)
}

/// Row placement in pixels: (top inset, bottom inset, bar thickness)
fn row_geometry(index: usize, rows: usize, height_px: u32) -> (f64, f64, f64) {
    let height = height_px as f64;
    let (top, bottom) = row_insets(index, rows);
    let top = height * top / 100.0;
    let bottom = height * bottom / 100.0;
    (top, bottom, height - top - bottom)
}

/// Render every engine ramp as a horizontal gradient row, name on the left.
///
/// Total height is `height_per_row` times the number of ramps.
pub fn render_gallery(
    engine: &dyn ColormapEngine,
    width: f64,
    height_per_row: f64,
) -> Result<Legend, PaletteError> {
    let names = list_ramps(engine);
    if names.is_empty() {
        return Err(PaletteError::Rendering("No color ramps to render".to_string()));
    }

    let width_px = to_pixels(width, "width")?;
    to_pixels(height_per_row, "row height")?;
    let height_px = to_pixels(height_per_row * names.len() as f64, "height")?;
    let label_size = points_to_pixels(LABEL_FONT_SIZE);

    let mut chart =
        Chart::new().background_color(Color::Value(COLOR_BACKGROUND.to_string()));

    for (i, name) in names.iter().enumerate() {
        let fill = ramp_gradient(engine, name, Orientation::Horizontal)?;
        let (top, bottom, thickness) = row_geometry(i, names.len(), height_px);
        let index = i as i32;

        chart = chart
            .grid(
                Grid::new()
                    .left(MARGIN_LEFT)
                    .right(MARGIN_RIGHT)
                    .top(top)
                    .bottom(bottom),
            )
            .x_axis(bare_axis(AxisType::Value).grid_index(index).min(0).max(1))
            .y_axis(
                bare_axis(AxisType::Category)
                    .grid_index(index)
                    .data(vec![name.clone()])
                    .axis_label(
                        AxisLabel::new()
                            .show(true)
                            .color(COLOR_TEXT)
                            .font_size(label_size),
                    ),
            )
            .series(
                Bar::new()
                    .name(name.as_str())
                    .data(vec![1.0])
                    .x_axis_index(index)
                    .y_axis_index(index)
                    .bar_width(thickness)
                    .item_style(ItemStyle::new().color(fill)),
            );
    }

    Ok(Legend {
        chart,
        width_px,
        height_px,
    })
}
