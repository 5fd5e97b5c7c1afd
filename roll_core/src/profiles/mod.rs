//! # Stock Profiles
//!
//! Cross-section descriptions for the raw shapes the shop rolls: angle,
//! beam, channel, flat bar, pipe/tube, plate, and tee. The calculators
//! themselves are profile-agnostic; all they ever need from a profile is
//! its **offset dimension** - the one cross-section size that separates
//! an inside or outside measurement from the centerline.
//!
//! Each profile variant knows how to derive that offset, so the seven
//! quote forms share one resolver instead of reimplementing the math.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::profiles::{ProfileSection, RollOrientation};
//!
//! let angle = ProfileSection::Angle { leg_in: 4.0 };
//! assert_eq!(angle.offset_dimension_in(), 4.0);
//!
//! // Flat bar offset depends on which way it goes through the rolls
//! let bar = ProfileSection::FlatBar {
//!     width_in: 3.0,
//!     thickness_in: 0.5,
//!     orientation: RollOrientation::HardWay,
//! };
//! assert_eq!(bar.offset_dimension_in(), 0.5);
//! ```

pub mod catalog;

pub use catalog::{Catalog, CatalogEntry};

use serde::{Deserialize, Serialize};

/// Orientation of an asymmetric profile relative to the rolls' bending axis.
///
/// Determines which cross-section dimension faces the rolls and therefore
/// acts as the offset dimension. Printed as `EW`/`HW` in rolling
/// descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RollOrientation {
    /// Flat way - bent about the weak axis
    #[default]
    EasyWay,
    /// On edge - bent about the strong axis
    HardWay,
}

impl RollOrientation {
    /// Shop abbreviation used in rolling descriptions
    pub fn abbrev(&self) -> &'static str {
        match self {
            RollOrientation::EasyWay => "EW",
            RollOrientation::HardWay => "HW",
        }
    }
}

impl std::fmt::Display for RollOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// Profile family, used as the catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileKind {
    Angle,
    Beam,
    Channel,
    FlatBar,
    PipeTube,
    Plate,
    Tee,
}

impl ProfileKind {
    /// Display name for quote documents
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileKind::Angle => "Angle",
            ProfileKind::Beam => "Beam",
            ProfileKind::Channel => "Channel",
            ProfileKind::FlatBar => "Flat Bar",
            ProfileKind::PipeTube => "Pipe/Tube",
            ProfileKind::Plate => "Plate",
            ProfileKind::Tee => "Tee",
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Stock cross-section, reduced to the dimensions that matter for rolling.
///
/// Immutable once built; produced by the caller from a catalog size or a
/// custom entry. The `offset_dimension_in` strategy is the only thing the
/// calculators consume.
///
/// ## JSON Serialization
///
/// Sections serialize with a "type" discriminator:
///
/// ```json
/// { "type": "Angle", "leg_in": 4.0 }
/// { "type": "FlatBar", "width_in": 3.0, "thickness_in": 0.5, "orientation": "HardWay" }
/// { "type": "PipeTube", "outside_diameter_in": 2.375 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProfileSection {
    /// Equal-leg angle; the leg faces the rolls
    Angle { leg_in: f64 },
    /// Wide-flange or standard beam, rolled about its depth
    Beam { depth_in: f64 },
    /// Channel, rolled about its depth
    Channel { depth_in: f64 },
    /// Flat bar; the offset depends on roll orientation
    FlatBar {
        width_in: f64,
        thickness_in: f64,
        orientation: RollOrientation,
    },
    /// Pipe, round tube, or solid round - outer diameter faces the rolls
    PipeTube { outside_diameter_in: f64 },
    /// Plate rolled into an arc or cylinder
    Plate { thickness_in: f64 },
    /// Structural tee, rolled about its depth
    Tee { depth_in: f64 },
}

impl ProfileSection {
    /// The profile family this section belongs to
    pub fn kind(&self) -> ProfileKind {
        match self {
            ProfileSection::Angle { .. } => ProfileKind::Angle,
            ProfileSection::Beam { .. } => ProfileKind::Beam,
            ProfileSection::Channel { .. } => ProfileKind::Channel,
            ProfileSection::FlatBar { .. } => ProfileKind::FlatBar,
            ProfileSection::PipeTube { .. } => ProfileKind::PipeTube,
            ProfileSection::Plate { .. } => ProfileKind::Plate,
            ProfileSection::Tee { .. } => ProfileKind::Tee,
        }
    }

    /// The characteristic cross-section size facing the rolls.
    ///
    /// This is the distance between an inside and a centerline measurement
    /// (and likewise centerline to outside). For flat bar it follows the
    /// roll orientation: thickness when rolled on edge, width when rolled
    /// the flat way.
    pub fn offset_dimension_in(&self) -> f64 {
        match self {
            ProfileSection::Angle { leg_in } => *leg_in,
            ProfileSection::Beam { depth_in } => *depth_in,
            ProfileSection::Channel { depth_in } => *depth_in,
            ProfileSection::FlatBar {
                width_in,
                thickness_in,
                orientation,
            } => match orientation {
                RollOrientation::EasyWay => *width_in,
                RollOrientation::HardWay => *thickness_in,
            },
            ProfileSection::PipeTube {
                outside_diameter_in,
            } => *outside_diameter_in,
            ProfileSection::Plate { thickness_in } => *thickness_in,
            ProfileSection::Tee { depth_in } => *depth_in,
        }
    }

    /// Roll orientation, where the profile has one
    pub fn orientation(&self) -> Option<RollOrientation> {
        match self {
            ProfileSection::FlatBar { orientation, .. } => Some(*orientation),
            _ => None,
        }
    }

    /// Return a copy with the given orientation (no-op for profiles
    /// without one)
    pub fn with_orientation(self, orientation: RollOrientation) -> Self {
        match self {
            ProfileSection::FlatBar {
                width_in,
                thickness_in,
                ..
            } => ProfileSection::FlatBar {
                width_in,
                thickness_in,
                orientation,
            },
            other => other,
        }
    }
}
