//! Named color ramps: lookup, enumeration and hex sampling

mod engine;
mod hex;

pub use engine::{DEFAULT_RAMP, NATURAL_STOPS, PresetEngine, REVERSED_SUFFIX};
pub use hex::HexColor;

use colorgrad::Color;

use crate::error::PaletteError;

/// Source of named color ramps
pub trait ColormapEngine {
    /// Every ramp name the engine registers, in its own order
    fn ramp_names(&self) -> Vec<String>;

    /// Ramp used when the caller does not name one
    fn default_ramp(&self) -> &str;

    /// Color stops of a ramp. `None` returns the engine's natural resolution;
    /// `Some(n)` returns `n` evenly spaced stops.
    fn stops(&self, name: &str, class_count: Option<usize>) -> Result<Vec<Color>, PaletteError>;
}

/// Sample a ramp into hex colors.
///
/// Name and class count are passed straight to the engine, which decides
/// whether they are valid.
pub fn sample(
    engine: &dyn ColormapEngine,
    ramp_name: Option<&str>,
    class_count: Option<usize>,
) -> Result<Vec<HexColor>, PaletteError> {
    let name = ramp_name.unwrap_or_else(|| engine.default_ramp());
    let stops = engine.stops(name, class_count)?;
    Ok(stops.iter().map(HexColor::from_color).collect())
}

/// All ramp names known to the engine
pub fn list_ramps(engine: &dyn ColormapEngine) -> Vec<String> {
    engine.ramp_names()
}
