//! Single-ramp color bar

use charming::{
    Chart,
    component::{Grid, Title},
    element::{AxisLabel, AxisLine, AxisTick, AxisType, Color, ItemStyle, TextStyle},
    series::Bar,
};

use super::colors::{COLOR_AXIS, COLOR_BACKGROUND, COLOR_TEXT};
use super::{
    Legend, LegendOptions, Orientation, bare_axis, points_to_pixels, ramp_gradient, to_pixels,
};
use crate::error::PaletteError;
use crate::ramp::ColormapEngine;

/// Share of the width kept free for the name label
const NAME_MARGIN_PCT: f64 = 20.0;

/// Space between the name label and the bar, in pixels
const NAME_GAP_PX: f64 = 8.0;

/// Value axis label size in points
const AXIS_FONT_SIZE: u32 = 8;

/// Tick length plus the gap between ticks and labels, in pixels
const AXIS_TICK_SPACE_PX: f64 = 16.0;

/// Plot area insets from the surface edges, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
struct Insets {
    left: f64,
    bottom: f64,
    /// Room left of the bar taken by the name label
    name: f64,
}

fn plot_insets(options: &LegendOptions, width_px: u32) -> Insets {
    let name = if options.show_name {
        (width_px as f64 * NAME_MARGIN_PCT / 100.0).round()
    } else {
        0.0
    };
    let axis = if options.axis_off {
        0.0
    } else {
        points_to_pixels(AXIS_FONT_SIZE) + AXIS_TICK_SPACE_PX
    };

    // The value axis labels sit below a horizontal bar and left of a vertical one
    match options.orientation {
        Orientation::Horizontal => Insets {
            left: name,
            bottom: axis,
            name,
        },
        Orientation::Vertical => Insets {
            left: name + axis,
            bottom: 0.0,
            name,
        },
    }
}

/// Render one ramp as a continuous color bar.
///
/// The bar fills the whole surface unless the name or the value axis is
/// shown. The name takes the left margin, right-aligned against the bar
/// and vertically centered; the axis takes a band along the bar. The bar
/// is always as thick as the plot area across its run.
pub fn render_legend(
    engine: &dyn ColormapEngine,
    ramp_name: &str,
    options: &LegendOptions,
) -> Result<Legend, PaletteError> {
    let width_px = to_pixels(options.width, "width")?;
    let height_px = to_pixels(options.height, "height")?;
    let fill = ramp_gradient(engine, ramp_name, options.orientation)?;

    let insets = plot_insets(options, width_px);
    let (run, thickness) = match options.orientation {
        Orientation::Horizontal => (
            width_px as f64 - insets.left,
            height_px as f64 - insets.bottom,
        ),
        Orientation::Vertical => (
            height_px as f64 - insets.bottom,
            width_px as f64 - insets.left,
        ),
    };
    if run < 1.0 || thickness < 1.0 {
        return Err(PaletteError::Rendering(format!(
            "Legend of {}x{} px is too small for its name and axis",
            width_px, height_px
        )));
    }

    // Value axis runs along the bar; the category axis only anchors it
    let mut value_axis = bare_axis(AxisType::Value).min(0).max(1);
    if !options.axis_off {
        value_axis = value_axis
            .axis_line(AxisLine::new().show(true))
            .axis_tick(AxisTick::new().show(true))
            .axis_label(
                AxisLabel::new()
                    .show(true)
                    .color(COLOR_AXIS)
                    .font_size(points_to_pixels(AXIS_FONT_SIZE)),
            );
    }
    let category_axis = bare_axis(AxisType::Category).data(vec![ramp_name.to_string()]);

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .grid(
            Grid::new()
                .left(insets.left)
                .right(0)
                .top(0)
                .bottom(insets.bottom),
        );

    if options.show_name {
        // Right edge of the title box sits just left of the name margin
        let right = width_px as f64 - insets.name + NAME_GAP_PX;
        chart = chart.title(
            Title::new()
                .text(ramp_name)
                .right(right)
                .top("middle")
                .text_style(
                    TextStyle::new()
                        .color(COLOR_TEXT)
                        .font_size(points_to_pixels(options.font_size)),
                ),
        );
    }

    chart = match options.orientation {
        Orientation::Horizontal => chart.x_axis(value_axis).y_axis(category_axis),
        Orientation::Vertical => chart.x_axis(category_axis).y_axis(value_axis),
    };

    chart = chart.series(
        Bar::new()
            .name(ramp_name)
            .data(vec![1.0])
            .bar_width(thickness)
            .item_style(ItemStyle::new().color(fill)),
    );

    Ok(Legend {
        chart,
        width_px,
        height_px,
    })
}
