//! # Measurement Resolver
//!
//! Normalizes whatever the operator dialed in - a diameter or a radius,
//! measured inside, outside, or on centerline - into the one number every
//! other calculator works from: the centerline diameter.
//!
//! This resolver is total over its inputs. A zero or incomplete entry
//! still resolves, but [`ResolvedGeometry::is_computable`] reports it as
//! "nothing to compute yet" - never an error - and downstream callers
//! gate on that before planning anything.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::calculations::measurement::{
//!     resolve, MeasurementInput, MeasurementUnit, ReferencePoint,
//! };
//!
//! // 50" inside diameter on 4" angle: centerline is 54"
//! let input = MeasurementInput {
//!     value_in: 50.0,
//!     unit: MeasurementUnit::Diameter,
//!     reference: ReferencePoint::Inside,
//!     offset_dimension_in: 4.0,
//! };
//! assert_eq!(resolve(&input).centerline_diameter_in, 54.0);
//! ```

use serde::{Deserialize, Serialize};

/// Whether the dialed value is a diameter or a radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MeasurementUnit {
    #[default]
    Diameter,
    Radius,
}

/// Where on the cross-section the measurement is taken.
///
/// Printed as `ID`/`OD`/`CL` in rolling descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReferencePoint {
    #[default]
    Inside,
    Outside,
    Centerline,
}

impl ReferencePoint {
    /// Shop abbreviation used in rolling descriptions
    pub fn abbrev(&self) -> &'static str {
        match self {
            ReferencePoint::Inside => "ID",
            ReferencePoint::Outside => "OD",
            ReferencePoint::Centerline => "CL",
        }
    }
}

impl std::fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// Exactly what the operator dials in on the roll machine.
///
/// For flat bar, `offset_dimension_in` must already reflect the chosen
/// roll orientation; the caller makes that choice before resolving
/// (see [`crate::profiles::ProfileSection::offset_dimension_in`]).
///
/// ## JSON Example
///
/// ```json
/// {
///   "value_in": 50.0,
///   "unit": "Diameter",
///   "reference": "Inside",
///   "offset_dimension_in": 4.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// The dialed value (diameter or radius per `unit`)
    pub value_in: f64,
    /// Diameter or radius
    pub unit: MeasurementUnit,
    /// Inside, outside, or centerline
    pub reference: ReferencePoint,
    /// The profile's characteristic size facing the rolls
    pub offset_dimension_in: f64,
}

impl MeasurementInput {
    /// The dialed measurement expressed as a diameter, with no centerline
    /// adjustment. This is the `D` the developed-diameter correction uses,
    /// because the operator will set the machine against this reference
    /// point, not the centerline.
    pub fn raw_diameter_in(&self) -> f64 {
        match self.unit {
            MeasurementUnit::Diameter => self.value_in,
            MeasurementUnit::Radius => self.value_in * 2.0,
        }
    }
}

/// Canonical centerline geometry derived from a measurement.
///
/// Derived data only - recompute it whenever the inputs change rather
/// than storing it alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGeometry {
    /// The measurement as dialed, expressed as a diameter
    pub dialed_diameter_in: f64,
    /// Diameter through the mid-thickness of the rolled material
    pub centerline_diameter_in: f64,
}

impl ResolvedGeometry {
    /// Whether the geometry is usable by downstream calculators.
    ///
    /// Requires both a positive dialed entry and a positive centerline
    /// result. The dialed check matters for inside references, where an
    /// empty field would otherwise resolve to the bare offset dimension
    /// and look like real geometry.
    pub fn is_computable(&self) -> bool {
        self.dialed_diameter_in > 0.0 && self.centerline_diameter_in > 0.0
    }

    /// Centerline radius
    pub fn centerline_radius_in(&self) -> f64 {
        self.centerline_diameter_in / 2.0
    }
}

/// Resolve a dialed measurement to centerline diameter.
///
/// Radius entries are doubled, then the offset dimension is added for an
/// inside reference, subtracted for an outside reference, and left alone
/// for centerline. Total over its domain: incomplete input never errors,
/// it yields a geometry whose `is_computable()` is false.
pub fn resolve(input: &MeasurementInput) -> ResolvedGeometry {
    let dialed_diameter = input.raw_diameter_in();

    let centerline_diameter_in = match input.reference {
        ReferencePoint::Inside => dialed_diameter + input.offset_dimension_in,
        ReferencePoint::Outside => dialed_diameter - input.offset_dimension_in,
        ReferencePoint::Centerline => dialed_diameter,
    };

    ResolvedGeometry {
        dialed_diameter_in: dialed_diameter,
        centerline_diameter_in,
    }
}
