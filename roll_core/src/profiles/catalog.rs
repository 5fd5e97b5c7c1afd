//! Stock Size Catalog
//!
//! Maps `(profile kind, size label)` to the cross-section and the default
//! raw stock length the shop buys that size in. The engine never reaches
//! into a global settings store: a `Catalog` is plain injected data, and
//! hosts with admin-configurable size lists deserialize their own table
//! in place of the built-in one.
//!
//! The built-in table covers the common sizes a quoting demo needs; it is
//! not a mill catalog.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::profiles::{Catalog, ProfileKind};
//!
//! let catalog = Catalog::standard();
//! let entry = catalog.get(ProfileKind::PipeTube, "2\" SCH40").unwrap();
//! assert_eq!(entry.section.offset_dimension_in(), 2.375);
//! assert_eq!(entry.stock_length_in, 252.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{RollError, RollResult};
use crate::profiles::{ProfileKind, ProfileSection, RollOrientation};

/// One catalog row: the cross-section for a size label plus the stock
/// length it normally ships in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Cross-section for this size
    pub section: ProfileSection,
    /// Default raw stock length in inches (e.g. 240 for 20' sticks)
    pub stock_length_in: f64,
}

/// Read-only size catalog, keyed by profile kind then size label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: HashMap<ProfileKind, HashMap<String, CatalogEntry>>,
}

/// Most structural shapes ship in 20' sticks
const STOCK_20FT_IN: f64 = 240.0;
/// Pipe ships in 21' lengths
const STOCK_21FT_IN: f64 = 252.0;

static STANDARD: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::default();

    let angle = |leg_in| ProfileSection::Angle { leg_in };
    catalog.insert("L2x2x1/4", angle(2.0), STOCK_20FT_IN);
    catalog.insert("L3x3x1/4", angle(3.0), STOCK_20FT_IN);
    catalog.insert("L4x4x3/8", angle(4.0), STOCK_20FT_IN);

    let beam = |depth_in| ProfileSection::Beam { depth_in };
    catalog.insert("S3x5.7", beam(3.0), STOCK_20FT_IN);
    catalog.insert("W6x9", beam(5.9), STOCK_20FT_IN);
    catalog.insert("W8x10", beam(7.89), STOCK_20FT_IN);

    let channel = |depth_in| ProfileSection::Channel { depth_in };
    catalog.insert("C3x4.1", channel(3.0), STOCK_20FT_IN);
    catalog.insert("C4x5.4", channel(4.0), STOCK_20FT_IN);
    catalog.insert("C6x8.2", channel(6.0), STOCK_20FT_IN);

    let bar = |width_in, thickness_in| ProfileSection::FlatBar {
        width_in,
        thickness_in,
        orientation: RollOrientation::EasyWay,
    };
    catalog.insert("FB2x1/4", bar(2.0, 0.25), STOCK_20FT_IN);
    catalog.insert("FB3x3/8", bar(3.0, 0.375), STOCK_20FT_IN);
    catalog.insert("FB4x1/2", bar(4.0, 0.5), STOCK_20FT_IN);

    let pipe = |outside_diameter_in| ProfileSection::PipeTube {
        outside_diameter_in,
    };
    catalog.insert("1-1/2\" SCH40", pipe(1.9), STOCK_21FT_IN);
    catalog.insert("2\" SCH40", pipe(2.375), STOCK_21FT_IN);
    catalog.insert("3\" SCH40", pipe(3.5), STOCK_21FT_IN);
    catalog.insert("4\" SCH40", pipe(4.5), STOCK_21FT_IN);
    catalog.insert("HSS2x2x1/4", pipe(2.0), STOCK_20FT_IN);

    let plate = |thickness_in| ProfileSection::Plate { thickness_in };
    catalog.insert("1/4\" PL", plate(0.25), STOCK_20FT_IN);
    catalog.insert("3/8\" PL", plate(0.375), STOCK_20FT_IN);
    catalog.insert("1/2\" PL", plate(0.5), STOCK_20FT_IN);

    let tee = |depth_in| ProfileSection::Tee { depth_in };
    catalog.insert("WT4x5", tee(3.945), STOCK_20FT_IN);
    catalog.insert("WT5x6", tee(4.935), STOCK_20FT_IN);

    catalog
});

impl Catalog {
    /// The built-in standard size table.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Add or replace an entry. The profile kind is taken from the
    /// section itself.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        section: ProfileSection,
        stock_length_in: f64,
    ) {
        self.entries.entry(section.kind()).or_default().insert(
            label.into(),
            CatalogEntry {
                section,
                stock_length_in,
            },
        );
    }

    /// Look up a size label, `None` if absent.
    pub fn lookup(&self, kind: ProfileKind, label: &str) -> Option<&CatalogEntry> {
        self.entries.get(&kind)?.get(label)
    }

    /// Look up a size label, erroring with the profile and label if absent.
    pub fn get(&self, kind: ProfileKind, label: &str) -> RollResult<&CatalogEntry> {
        self.lookup(kind, label)
            .ok_or_else(|| RollError::size_not_found(kind.display_name(), label))
    }

    /// Size labels available for one profile kind, sorted.
    pub fn labels(&self, kind: ProfileKind) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .entries
            .get(&kind)
            .map(|sizes| sizes.keys().map(String::as_str).collect())
            .unwrap_or_default();
        labels.sort_unstable();
        labels
    }
}
