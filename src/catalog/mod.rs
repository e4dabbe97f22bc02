//! Precomputed, read-only palette catalog
//!
//! Every engine ramp is sampled once for each class count in
//! [`CLASS_COUNTS`], and the hand-authored domain ramps are merged in on top.
//! The result is published through [`palettes`] and exposes no way to
//! change it afterwards.

mod builtin;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::{Index, RangeInclusive};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use crate::error::PaletteError;
use crate::ramp::{ColormapEngine, HexColor, PresetEngine, list_ramps, sample};

/// Class counts precomputed for every engine ramp
pub const CLASS_COUNTS: RangeInclusive<usize> = 3..=12;

/// Names of the hand-authored flat ramps
pub const FLAT_RAMP_NAMES: [&str; 3] = ["ndvi", "ndwi", "dem"];

/// Catalog key for a class-count variant, rendered as `n03`..`n12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassCountKey(usize);

impl ClassCountKey {
    /// Key for `count`, if that count is precomputed
    pub fn new(count: usize) -> Option<Self> {
        CLASS_COUNTS.contains(&count).then_some(Self(count))
    }

    pub fn count(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassCountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{:02}", self.0)
    }
}

impl FromStr for ClassCountKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('n')
            .filter(|digits| digits.len() == 2)
            .and_then(|digits| digits.parse::<usize>().ok())
            .and_then(Self::new)
            .ok_or_else(|| format!("invalid class-count key: {:?}", s))
    }
}

impl Serialize for ClassCountKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One catalog value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// Hand-authored ramp stored as a single color list
    Flat(Vec<HexColor>),
    /// Engine ramp sampled at every class count
    Graded(BTreeMap<ClassCountKey, Vec<HexColor>>),
}

impl PaletteEntry {
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    /// Colors of a flat entry
    pub fn flat(&self) -> Option<&[HexColor]> {
        match self {
            Self::Flat(colors) => Some(colors),
            Self::Graded(_) => None,
        }
    }

    /// Colors of a graded entry at `count` classes
    pub fn class(&self, count: usize) -> Option<&[HexColor]> {
        match self {
            Self::Flat(_) => None,
            Self::Graded(classes) => ClassCountKey::new(count)
                .and_then(|key| classes.get(&key))
                .map(Vec::as_slice),
        }
    }

    /// Colors of a graded entry by key (`"n05"`)
    pub fn get(&self, key: &str) -> Option<&[HexColor]> {
        key.parse::<ClassCountKey>()
            .ok()
            .and_then(|key| self.class(key.count()))
    }

    /// Class-count keys present (empty for flat entries)
    pub fn keys(&self) -> Vec<ClassCountKey> {
        match self {
            Self::Flat(_) => Vec::new(),
            Self::Graded(classes) => classes.keys().copied().collect(),
        }
    }
}

impl Index<&str> for PaletteEntry {
    type Output = [HexColor];

    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Some(colors) => colors,
            None => panic!("no class-count variant {:?} in palette entry", key),
        }
    }
}

/// The published palette catalog.
///
/// Entries keep build order: engine ramps in enumeration order, then the
/// hand-authored ramps. A hand-authored ramp that replaces an engine ramp
/// takes over its position.
///
/// Built once, never modified. There is no insert, remove or mutable access:
///
/// ```compile_fail
/// let palettes = geopalette::palettes().unwrap();
/// palettes.entries.remove("ndvi");
/// ```
///
/// ```compile_fail
/// let palettes = geopalette::palettes().unwrap();
/// palettes["ndvi"] = geopalette::PaletteEntry::Flat(Vec::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palettes {
    entries: Vec<(String, PaletteEntry)>,
    positions: HashMap<String, usize>,
}

impl Palettes {
    /// Sample every engine ramp at every class count, then merge in the
    /// hand-authored ramps, which win on a name collision.
    ///
    /// Any sampling failure aborts the whole build.
    pub fn build(engine: &dyn ColormapEngine) -> Result<Self, PaletteError> {
        let mut palettes = Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        };

        for name in list_ramps(engine) {
            let classes = CLASS_COUNTS
                .map(|count| {
                    let colors = sample(engine, Some(name.as_str()), Some(count))?;
                    Ok::<_, PaletteError>((ClassCountKey(count), colors))
                })
                .collect::<Result<BTreeMap<_, _>, PaletteError>>()?;
            palettes.insert(name, PaletteEntry::Graded(classes));
        }

        for (name, literals) in builtin::FLAT_RAMPS {
            let colors = literals
                .iter()
                .map(|literal| HexColor::parse(literal))
                .collect::<Result<Vec<_>, _>>()?;
            palettes.insert(name.to_string(), PaletteEntry::Flat(colors));
        }

        Ok(palettes)
    }

    // Replace in place on a repeated name, append otherwise
    fn insert(&mut self, name: String, entry: PaletteEntry) {
        match self.positions.get(&name) {
            Some(&position) => self.entries[position].1 = entry,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, entry));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.positions
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Colors for `name`. Flat entries are read with `None`, graded entries
    /// with a count in [`CLASS_COUNTS`].
    pub fn colors(&self, name: &str, class_count: Option<usize>) -> Option<&[HexColor]> {
        let entry = self.get(name)?;
        match class_count {
            None => entry.flat(),
            Some(count) => entry.class(count),
        }
    }

    /// Entry names in build order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in build order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteEntry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Palettes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl Index<&str> for Palettes {
    type Output = PaletteEntry;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(entry) => entry,
            None => panic!("no palette named {:?}", name),
        }
    }
}

static CATALOG: OnceLock<Result<Palettes, PaletteError>> = OnceLock::new();

/// Process-wide catalog over the preset engine, built on first access.
///
/// A failed build is kept, so every later call reports the same error.
pub fn palettes() -> Result<&'static Palettes, PaletteError> {
    CATALOG
        .get_or_init(|| Palettes::build(&PresetEngine))
        .as_ref()
        .map_err(Clone::clone)
}
