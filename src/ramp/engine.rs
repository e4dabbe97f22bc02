//! Named gradient registry backed by colorgrad presets

use colorgrad::{Color, Gradient, preset};

use super::ColormapEngine;
use crate::error::PaletteError;

/// Number of stops returned when no class count is requested
pub const NATURAL_STOPS: usize = 256;

/// Ramp used when a caller does not name one
pub const DEFAULT_RAMP: &str = "viridis";

/// Suffix selecting the reversed variant of a preset
pub const REVERSED_SUFFIX: &str = "_r";

/// Preset names in registry order.
/// Grouped by family; reversed variants are derived from this list.
const PRESETS: &[&str] = &[
    // Perceptually uniform
    "viridis",
    "plasma",
    "inferno",
    "magma",
    "cividis",
    "turbo",
    // Sequential, single hue
    "Blues",
    "Greens",
    "Greys",
    "Oranges",
    "Purples",
    "Reds",
    // Sequential, multi hue
    "BuGn",
    "BuPu",
    "GnBu",
    "OrRd",
    "PuBu",
    "PuBuGn",
    "PuRd",
    "RdPu",
    "YlGn",
    "YlGnBu",
    "YlOrBr",
    "YlOrRd",
    // Diverging
    "BrBG",
    "PRGn",
    "PiYG",
    "PuOr",
    "RdBu",
    "RdGy",
    "RdYlBu",
    "RdYlGn",
    "Spectral",
    // Misc
    "cubehelix",
    "cool",
    "warm",
    "rainbow",
    "sinebow",
];

fn preset_gradient(name: &str) -> Option<Box<dyn Gradient>> {
    let gradient = match name {
        "viridis" => preset::viridis().boxed(),
        "plasma" => preset::plasma().boxed(),
        "inferno" => preset::inferno().boxed(),
        "magma" => preset::magma().boxed(),
        "cividis" => preset::cividis().boxed(),
        "turbo" => preset::turbo().boxed(),
        "Blues" => preset::blues().boxed(),
        "Greens" => preset::greens().boxed(),
        "Greys" => preset::greys().boxed(),
        "Oranges" => preset::oranges().boxed(),
        "Purples" => preset::purples().boxed(),
        "Reds" => preset::reds().boxed(),
        "BuGn" => preset::bu_gn().boxed(),
        "BuPu" => preset::bu_pu().boxed(),
        "GnBu" => preset::gn_bu().boxed(),
        "OrRd" => preset::or_rd().boxed(),
        "PuBu" => preset::pu_bu().boxed(),
        "PuBuGn" => preset::pu_bu_gn().boxed(),
        "PuRd" => preset::pu_rd().boxed(),
        "RdPu" => preset::rd_pu().boxed(),
        "YlGn" => preset::yl_gn().boxed(),
        "YlGnBu" => preset::yl_gn_bu().boxed(),
        "YlOrBr" => preset::yl_or_br().boxed(),
        "YlOrRd" => preset::yl_or_rd().boxed(),
        "BrBG" => preset::br_bg().boxed(),
        "PRGn" => preset::pr_gn().boxed(),
        "PiYG" => preset::pi_yg().boxed(),
        "PuOr" => preset::pu_or().boxed(),
        "RdBu" => preset::rd_bu().boxed(),
        "RdGy" => preset::rd_gy().boxed(),
        "RdYlBu" => preset::rd_yl_bu().boxed(),
        "RdYlGn" => preset::rd_yl_gn().boxed(),
        "Spectral" => preset::spectral().boxed(),
        "cubehelix" => preset::cubehelix_default().boxed(),
        "cool" => preset::cool().boxed(),
        "warm" => preset::warm().boxed(),
        "rainbow" => preset::rainbow().boxed(),
        "sinebow" => preset::sinebow().boxed(),
        _ => return None,
    };
    Some(gradient)
}

/// Colormap engine over the colorgrad preset gradients.
///
/// Every preset `name` is also registered as `name_r`, which walks the
/// same gradient from the far end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetEngine;

impl PresetEngine {
    fn resolve(&self, name: &str) -> Option<(Box<dyn Gradient>, bool)> {
        if let Some(gradient) = preset_gradient(name) {
            return Some((gradient, false));
        }
        name.strip_suffix(REVERSED_SUFFIX)
            .and_then(preset_gradient)
            .map(|gradient| (gradient, true))
    }
}

impl ColormapEngine for PresetEngine {
    fn ramp_names(&self) -> Vec<String> {
        PRESETS
            .iter()
            .map(|name| name.to_string())
            .chain(
                PRESETS
                    .iter()
                    .map(|name| format!("{}{}", name, REVERSED_SUFFIX)),
            )
            .collect()
    }

    fn default_ramp(&self) -> &str {
        DEFAULT_RAMP
    }

    fn stops(&self, name: &str, class_count: Option<usize>) -> Result<Vec<Color>, PaletteError> {
        let (gradient, reversed) = self
            .resolve(name)
            .ok_or_else(|| PaletteError::UnknownRamp(name.to_string()))?;

        let count = class_count.unwrap_or(NATURAL_STOPS);
        if count == 0 {
            return Err(PaletteError::InvalidClassCount(count));
        }

        // Evenly spaced over the domain, endpoints included; one stop sits at the start
        let mut stops = gradient.colors(count);
        if reversed {
            stops.reverse();
        }
        Ok(stops)
    }
}
