//! # Rolling Calculators
//!
//! The five pure calculators the quote forms compose. Each one follows
//! the same pattern:
//!
//! - `*Input` - input parameters (JSON-serializable)
//! - a result struct (JSON-serializable)
//! - a pure function over them
//!
//! All five are stateless, synchronous, and side-effect free: safe to
//! re-run on every keystroke of a form field, in any combination, with
//! no coordination. Results are derived data - recompute, never patch.
//!
//! ## Result conventions
//!
//! - `Ok(Some(_))` - computed
//! - `Ok(None)` - input incomplete, render nothing
//! - `Err(RollError::Infeasible { .. })` - geometry cannot be produced
//!   as entered, surface a warning
//!
//! The measurement resolver is the exception: it is total, and signals
//! incompleteness through [`measurement::ResolvedGeometry::is_computable`]
//! (which requires a positive dialed entry, not just a positive result).
//!
//! ## Available Calculators
//!
//! - [`measurement`] - dialed value + reference point -> centerline diameter
//! - [`sagitta`] - chord/rise curvature verification pair
//! - [`ring`] - sticks needed for closed-ring production
//! - [`helix`] - pitch conventions and developed diameter
//! - [`plate`] - plate arc cut lengths and ring nesting

pub mod helix;
pub mod measurement;
pub mod plate;
pub mod ring;
pub mod sagitta;

pub use helix::{developed_diameter, PitchInput, PitchMethod, PitchState, SpacingReference};
pub use measurement::{
    resolve, MeasurementInput, MeasurementUnit, ReferencePoint, ResolvedGeometry,
};
pub use plate::{arc_geometry, nest, ArcGeometry, NestingPlan, PlateArcInput};
pub use ring::{plan, RingMode, RingPlan, RingPlanInput};
pub use sagitta::{check, SagittaCheck};
