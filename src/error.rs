//! Error type shared by the sampler, catalog and renderer

use thiserror::Error;

/// Errors raised while sampling, cataloguing or rendering color ramps
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The colormap engine does not register this ramp name
    #[error("unknown color ramp: {0}")]
    UnknownRamp(String),

    /// Class counts must be at least 1
    #[error("invalid class count: {0} (must be positive)")]
    InvalidClassCount(usize),

    /// A color literal is not 6 hex digits
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),

    /// Failure reported by the rendering backend or rejected geometry
    #[error("rendering failed: {0}")]
    Rendering(String),
}
