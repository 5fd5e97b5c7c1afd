//! # roll_core - Rolling Geometry & Material Planning Engine
//!
//! `roll_core` quotes custom metal-bending work: given a stock profile
//! (angle, beam, channel, flat bar, pipe/tube, plate, tee) and a desired
//! curvature, it derives the dimensions the roll operator actually
//! needs, verifies they are physically achievable, and computes how many
//! sticks of raw stock the order consumes.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results;
//!   safe to re-run on every keystroke of a quote form
//! - **JSON-First**: all inputs, results, and errors implement
//!   Serialize/Deserialize
//! - **Recoverable by construction**: incomplete input yields `Ok(None)`,
//!   impossible geometry yields a structured warning, nothing panics
//!
//! ## Quick Start
//!
//! ```rust
//! use roll_core::calculations::measurement::{
//!     resolve, MeasurementInput, MeasurementUnit, ReferencePoint,
//! };
//! use roll_core::calculations::ring::{plan, RingPlanInput};
//! use roll_core::profiles::ProfileSection;
//!
//! let profile = ProfileSection::Angle { leg_in: 4.0 };
//!
//! // Operator dials 50" inside diameter on the 4" angle
//! let geometry = resolve(&MeasurementInput {
//!     value_in: 50.0,
//!     unit: MeasurementUnit::Diameter,
//!     reference: ReferencePoint::Inside,
//!     offset_dimension_in: profile.offset_dimension_in(),
//! });
//! assert_eq!(geometry.centerline_diameter_in, 54.0);
//!
//! // How many 20' sticks for three rings?
//! let ring_plan = plan(&RingPlanInput {
//!     centerline_diameter_in: geometry.centerline_diameter_in,
//!     stock_length_in: 240.0,
//!     tangent_allowance_in: 12.0,
//!     rings_needed: 3,
//! }).unwrap().unwrap();
//! assert_eq!(ring_plan.stock_pieces_needed, 3);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the five calculators (measurement, sagitta,
//!   ring, helix, plate)
//! - [`profiles`] - cross-sections, offset-dimension strategy, size catalog
//! - [`describe`] - rolling-description text rendering
//! - [`units`] - length newtypes and the symbolic length parser
//! - [`errors`] - structured error types

pub mod calculations;
pub mod describe;
pub mod errors;
pub mod profiles;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{RollError, RollResult};
pub use profiles::{Catalog, ProfileKind, ProfileSection, RollOrientation};
