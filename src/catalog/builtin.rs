//! Hand-authored domain ramps

/// Vegetation index: bare soil through dense canopy
pub(super) const NDVI: &[&str] = &[
    "FFFFFF", "CE7E45", "DF923D", "F1B555", "FCD163", "99B718", "74A901", "66A000", "529400",
    "3E8601", "207401", "056201", "004C00", "023B01", "012E01", "011D01", "011301",
];

/// Water index: light to deep blue
pub(super) const NDWI: &[&str] = &[
    "#ece7f2", "#d0d1e6", "#a6bddb", "#74a9cf", "#3690c0", "#0570b0", "#045a8d", "#023858",
];

/// Elevation
pub(super) const DEM: &[&str] = &["006633", "E5FFCC", "662A00", "D8D8D8", "F5F5F5"];

/// Name and literal colors, in insertion order
pub(super) const FLAT_RAMPS: [(&str, &[&str]); 3] = [("ndvi", NDVI), ("ndwi", NDWI), ("dem", DEM)];
