//! # Helix / Pitch Calculator
//!
//! A helical climb rate can be dialed in three equivalent ways - run and
//! rise over a reference run, a pitch angle in degrees, or the axial
//! spacing between coil passes. Whichever way the operator enters it,
//! the calculator normalizes into one canonical [`PitchState`] so the
//! quote always cross-displays all three conventions.
//!
//! It also derives the **developed diameter**: the diameter the rolls
//! must actually be set to so that the helix, once stretched to its
//! pitch, matches the requested floor-plan diameter. The correction is
//! applied to the raw dialed diameter, not the resolved centerline
//! diameter, so it stays consistent with how the operator will set the
//! machine.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::calculations::helix::{solve, PitchInput, PitchMethod};
//!
//! let input = PitchInput {
//!     method: PitchMethod::RunRise { run_in: 12.0, rise_in: 3.0 },
//!     centerline_diameter_in: 52.0,
//!     raw_diameter_in: 48.0,
//!     offset_dimension_in: 4.0,
//! };
//! let pitch = solve(&input).unwrap().unwrap();
//! assert!((pitch.angle_deg - 14.0362).abs() < 1e-4);
//! assert!((pitch.developed_diameter_in.unwrap() - 51.5684).abs() < 1e-4);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{RollError, RollResult};

/// Horizontal reference run the trade quotes rise against (inches)
pub const DEFAULT_RUN_IN: f64 = 12.0;

/// Whether a spacing value is the clear gap between coil passes or the
/// center-to-center distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpacingReference {
    /// Clear gap between successive passes
    #[default]
    Between,
    /// Center of one pass to center of the next
    CenterToCenter,
}

/// The three equivalent ways of dialing in a helical climb rate.
///
/// Exactly one method is authoritative at a time; the caller picks it.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "RunRise", "run_in": 12.0, "rise_in": 3.0 }
/// { "type": "Degree", "angle_deg": 5.23 }
/// { "type": "Spacing", "value_in": 8.0, "reference": "Between" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PitchMethod {
    /// Vertical climb over a horizontal reference run
    RunRise { run_in: f64, rise_in: f64 },
    /// Pitch angle directly, 0 < angle < 90
    Degree { angle_deg: f64 },
    /// Axial spacing between coil passes
    Spacing {
        value_in: f64,
        reference: SpacingReference,
    },
}

/// Inputs for the pitch calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchInput {
    /// The authoritative input method
    pub method: PitchMethod,
    /// Resolved centerline diameter (sets the circumference one
    /// revolution covers)
    pub centerline_diameter_in: f64,
    /// The diameter as dialed, before any centerline adjustment - the
    /// developed-diameter correction works from this
    pub raw_diameter_in: f64,
    /// Profile size along the helix axis; the coil's own thickness when
    /// converting between spacing conventions
    pub offset_dimension_in: f64,
}

/// Canonical helix description. All three input conventions are always
/// populated, regardless of which one the operator used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchState {
    /// Pitch angle in degrees
    pub angle_deg: f64,
    /// Horizontal reference run
    pub run_in: f64,
    /// Climb over `run_in`
    pub rise_in: f64,
    /// Axial climb per full revolution
    pub rise_per_revolution_in: f64,
    /// Clear gap between successive coil passes
    pub spacing_between_in: f64,
    /// Center-to-center spacing between passes
    pub spacing_center_in: f64,
    /// Centerline circumference of one revolution
    pub circumference_in: f64,
    /// Roll-setting diameter corrected for pitch; `None` when the raw
    /// diameter or climb is not available
    pub developed_diameter_in: Option<f64>,
}

/// Pitch-correct a dialed diameter for helical climb.
///
/// `h = pi * D * rise / (2 * run)`, developed `= sqrt(h^2 + D^2)`.
/// Returns `None` unless all three arguments are positive.
pub fn developed_diameter(raw_diameter_in: f64, run_in: f64, rise_in: f64) -> Option<f64> {
    if raw_diameter_in <= 0.0 || run_in <= 0.0 || rise_in <= 0.0 {
        return None;
    }
    let h = (PI * raw_diameter_in * rise_in) / (2.0 * run_in);
    Some((h * h + raw_diameter_in * raw_diameter_in).sqrt())
}

/// Normalize a pitch entry into the canonical state.
///
/// Returns `Ok(None)` while the diameter or the authoritative method's
/// value is missing or zero. A dialed pitch angle at or past 90 degrees
/// is infeasible: the coil would no longer climb.
pub fn solve(input: &PitchInput) -> RollResult<Option<PitchState>> {
    if input.centerline_diameter_in <= 0.0 {
        return Ok(None);
    }
    let circumference_in = PI * input.centerline_diameter_in;

    let angle_deg = match input.method {
        PitchMethod::RunRise { run_in, rise_in } => {
            if run_in <= 0.0 || rise_in <= 0.0 {
                return Ok(None);
            }
            (rise_in / run_in).atan().to_degrees()
        }
        PitchMethod::Degree { angle_deg } => {
            if angle_deg <= 0.0 {
                return Ok(None);
            }
            if angle_deg >= 90.0 {
                return Err(RollError::infeasible(
                    "pitch",
                    "Pitch angle must be below 90 degrees",
                ));
            }
            angle_deg
        }
        PitchMethod::Spacing { value_in, reference } => {
            if value_in <= 0.0 {
                return Ok(None);
            }
            let spacing_center_in = match reference {
                SpacingReference::Between => value_in + input.offset_dimension_in,
                SpacingReference::CenterToCenter => value_in,
            };
            // One revolution climbs one center-to-center spacing
            (spacing_center_in / circumference_in).atan().to_degrees()
        }
    };

    // Back-fill every convention from the established angle
    let tan = angle_deg.to_radians().tan();
    let rise_per_revolution_in = circumference_in * tan;
    let spacing_center_in = rise_per_revolution_in;
    let spacing_between_in = rise_per_revolution_in - input.offset_dimension_in;

    let (run_in, rise_in) = match input.method {
        PitchMethod::RunRise { run_in, rise_in } => (run_in, rise_in),
        _ => (DEFAULT_RUN_IN, DEFAULT_RUN_IN * tan),
    };

    let developed_diameter_in = developed_diameter(input.raw_diameter_in, run_in, rise_in);

    Ok(Some(PitchState {
        angle_deg,
        run_in,
        rise_in,
        rise_per_revolution_in,
        spacing_between_in,
        spacing_center_in,
        circumference_in,
        developed_diameter_in,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input(method: PitchMethod) -> PitchInput {
        PitchInput {
            method,
            centerline_diameter_in: 52.0,
            raw_diameter_in: 48.0,
            offset_dimension_in: 4.0,
        }
    }

    #[test]
    fn test_incomplete_inputs() {
        let mut input = base_input(PitchMethod::Degree { angle_deg: 10.0 });
        input.centerline_diameter_in = 0.0;
        assert_eq!(solve(&input).unwrap(), None);

        let input = base_input(PitchMethod::RunRise {
            run_in: 12.0,
            rise_in: 0.0,
        });
        assert_eq!(solve(&input).unwrap(), None);

        let input = base_input(PitchMethod::Degree { angle_deg: 0.0 });
        assert_eq!(solve(&input).unwrap(), None);

        let input = base_input(PitchMethod::Spacing {
            value_in: 0.0,
            reference: SpacingReference::Between,
        });
        assert_eq!(solve(&input).unwrap(), None);
    }

    #[test]
    fn test_vertical_pitch_infeasible() {
        let err = solve(&base_input(PitchMethod::Degree { angle_deg: 90.0 })).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE");
    }

    #[test]
    fn test_run_rise_angle() {
        let pitch = solve(&base_input(PitchMethod::RunRise {
            run_in: 12.0,
            rise_in: 3.0,
        }))
        .unwrap()
        .unwrap();
        // atan(3/12) = 14.0362 degrees
        assert!((pitch.angle_deg - 14.0362).abs() < 1e-4);
        assert_eq!(pitch.run_in, 12.0);
        assert_eq!(pitch.rise_in, 3.0);
    }

    #[test]
    fn test_degree_backfill() {
        let pitch = solve(&base_input(PitchMethod::Degree { angle_deg: 5.23 }))
            .unwrap()
            .unwrap();
        let circumference = PI * 52.0;
        let expected_rev = circumference * 5.23f64.to_radians().tan();
        assert!((pitch.rise_per_revolution_in - expected_rev).abs() < 1e-9);
        assert_eq!(pitch.spacing_center_in, pitch.rise_per_revolution_in);
        assert!((pitch.spacing_between_in - (expected_rev - 4.0)).abs() < 1e-9);
        assert_eq!(pitch.run_in, DEFAULT_RUN_IN);
    }

    #[test]
    fn test_spacing_between_method() {
        let pitch = solve(&base_input(PitchMethod::Spacing {
            value_in: 8.0,
            reference: SpacingReference::Between,
        }))
        .unwrap()
        .unwrap();
        // center-to-center = 8 + 4 offset = 12; angle = atan(12 / (pi*52))
        let circumference = PI * 52.0;
        let expected_angle = (12.0 / circumference).atan().to_degrees();
        assert!((pitch.angle_deg - expected_angle).abs() < 1e-9);
        // back-fill must reproduce the spacing that was entered
        assert!((pitch.spacing_center_in - 12.0).abs() < 1e-9);
        assert!((pitch.spacing_between_in - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_spacing_center_method() {
        let pitch = solve(&base_input(PitchMethod::Spacing {
            value_in: 12.0,
            reference: SpacingReference::CenterToCenter,
        }))
        .unwrap()
        .unwrap();
        assert!((pitch.rise_per_revolution_in - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_degree_run_rise_round_trip() {
        // Degree with theta must agree with RunRise at run=12,
        // rise=12*tan(theta)
        let theta = 5.23f64;
        let by_degree = solve(&base_input(PitchMethod::Degree { angle_deg: theta }))
            .unwrap()
            .unwrap();
        let by_run_rise = solve(&base_input(PitchMethod::RunRise {
            run_in: 12.0,
            rise_in: 12.0 * theta.to_radians().tan(),
        }))
        .unwrap()
        .unwrap();
        assert!(
            (by_degree.rise_per_revolution_in - by_run_rise.rise_per_revolution_in).abs() < 1e-9
        );
        assert!((by_degree.angle_deg - by_run_rise.angle_deg).abs() < 1e-9);
    }

    #[test]
    fn test_developed_diameter_value() {
        // D=48, run=12, rise=3: h = pi*48*3/24 = 18.8496,
        // developed = sqrt(h^2 + 48^2) = 51.5684
        let dev = developed_diameter(48.0, 12.0, 3.0).unwrap();
        assert!((dev - 51.5684).abs() < 1e-4);
    }

    #[test]
    fn test_developed_diameter_guards() {
        assert_eq!(developed_diameter(0.0, 12.0, 3.0), None);
        assert_eq!(developed_diameter(48.0, 0.0, 3.0), None);
        assert_eq!(developed_diameter(48.0, 12.0, 0.0), None);
    }

    #[test]
    fn test_developed_uses_raw_diameter() {
        // Raw dialed diameter drives the correction, not centerline
        let pitch = solve(&base_input(PitchMethod::RunRise {
            run_in: 12.0,
            rise_in: 3.0,
        }))
        .unwrap()
        .unwrap();
        assert!((pitch.developed_diameter_in.unwrap() - 51.5684).abs() < 1e-4);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = base_input(PitchMethod::Spacing {
            value_in: 8.0,
            reference: SpacingReference::Between,
        });
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"type\":\"Spacing\""));
        let roundtrip: PitchInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let pitch = solve(&input).unwrap().unwrap();
        let json = serde_json::to_string(&pitch).unwrap();
        let roundtrip: PitchState = serde_json::from_str(&json).unwrap();
        assert_eq!(pitch, roundtrip);
    }
}
