//! Color definitions for legend charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#FFFFFF"; // White, like a printed map legend
pub(super) const COLOR_TEXT: &str = "#000000"; // Black
pub(super) const COLOR_AXIS: &str = "#404040"; // Tick labels and axis line
