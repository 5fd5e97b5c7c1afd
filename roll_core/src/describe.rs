//! # Rolling Descriptions
//!
//! Renders calculator results into the human-readable text blocks that
//! flow onto order and quote documents. The decimal places here are a
//! compatibility contract with existing paperwork: rise and diameters
//! print to 4 places, circumference and lengths to 2, pitch angle to 5.
//! Dialed values print with trailing zeros trimmed, the way operators
//! write them.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::calculations::measurement::{MeasurementUnit, ReferencePoint};
//! use roll_core::describe;
//! use roll_core::profiles::RollOrientation;
//!
//! let line = describe::roll_to(
//!     48.0,
//!     MeasurementUnit::Diameter,
//!     ReferencePoint::Inside,
//!     Some(RollOrientation::EasyWay),
//! );
//! assert_eq!(line, "Roll to 48\" ID EW");
//! ```

use crate::calculations::helix::PitchState;
use crate::calculations::measurement::{MeasurementUnit, ReferencePoint};
use crate::calculations::plate::NestingPlan;
use crate::calculations::ring::{RingMode, RingPlan};
use crate::calculations::sagitta::SagittaCheck;
use crate::profiles::RollOrientation;

/// Format a dialed value the way an operator writes it: up to four
/// decimals, trailing zeros trimmed.
pub fn fmt_dialed(value: f64) -> String {
    let s = format!("{value:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `Roll to 48" ID EW` - the headline instruction for the roll operator.
pub fn roll_to(
    value_in: f64,
    unit: MeasurementUnit,
    reference: ReferencePoint,
    orientation: Option<RollOrientation>,
) -> String {
    let unit_suffix = match unit {
        MeasurementUnit::Diameter => "",
        MeasurementUnit::Radius => " radius",
    };
    let mut line = format!(
        "Roll to {}\"{} {}",
        fmt_dialed(value_in),
        unit_suffix,
        reference.abbrev()
    );
    if let Some(orientation) = orientation {
        line.push(' ');
        line.push_str(orientation.abbrev());
    }
    line
}

/// `Chord: 24" Rise: 0.1234"` - the curvature spot-check line.
pub fn sagitta_check(check: &SagittaCheck) -> String {
    format!(
        "Chord: {}\" Rise: {:.4}\"",
        fmt_dialed(check.chord_in),
        check.rise_in
    )
}

/// Ring production summary, e.g.
/// `Complete Ring — 3 ring(s), 2 rings/stick, 2 stick(s) needed` or, in
/// splice mode,
/// `Complete Ring — 2 ring(s), 2 piece(s)/ring, 4 stick(s) needed`.
pub fn ring_plan(plan: &RingPlan, rings_needed: u32) -> String {
    match plan.mode {
        RingMode::MultiRingPerStock => format!(
            "Complete Ring \u{2014} {} ring(s), {} rings/stick, {} stick(s) needed",
            rings_needed,
            plan.rings_per_stock.unwrap_or(0),
            plan.stock_pieces_needed
        ),
        RingMode::SingleRingPerSplice => format!(
            "Complete Ring \u{2014} {} ring(s), {} piece(s)/ring, {} stick(s) needed",
            rings_needed,
            plan.segments_per_ring.unwrap_or(0),
            plan.stock_pieces_needed
        ),
    }
}

/// `Pitch to 5.23000°`
pub fn pitch(state: &PitchState) -> String {
    format!("Pitch to {:.5}\u{b0}", state.angle_deg)
}

/// `Developed Diameter: 51.2345" ID`
pub fn developed_diameter(diameter_in: f64, reference: ReferencePoint) -> String {
    format!(
        "Developed Diameter: {:.4}\" {}",
        diameter_in,
        reference.abbrev()
    )
}

/// Plate nesting summary, e.g.
/// `Nest: 62.83" each, 3 ring(s)/piece, 2 piece(s) needed, 1 extra ring(s)`.
pub fn nesting(plan: &NestingPlan) -> String {
    format!(
        "Nest: {:.2}\" each, {} ring(s)/piece, {} piece(s) needed, {} extra ring(s)",
        plan.total_length_in,
        plan.rings_per_stock_piece,
        plan.stock_pieces_needed,
        plan.excess_rings
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::helix::{solve, PitchInput, PitchMethod};
    use crate::calculations::plate::{nest, PlateArcInput};
    use crate::calculations::ring::{plan, RingPlanInput};
    use crate::calculations::sagitta;

    #[test]
    fn test_fmt_dialed_trims() {
        assert_eq!(fmt_dialed(48.0), "48");
        assert_eq!(fmt_dialed(51.2345), "51.2345");
        assert_eq!(fmt_dialed(62.8300), "62.83");
    }

    #[test]
    fn test_roll_to() {
        assert_eq!(
            roll_to(
                48.0,
                MeasurementUnit::Diameter,
                ReferencePoint::Inside,
                Some(RollOrientation::EasyWay)
            ),
            "Roll to 48\" ID EW"
        );
        assert_eq!(
            roll_to(25.0, MeasurementUnit::Radius, ReferencePoint::Outside, None),
            "Roll to 25\" radius OD"
        );
    }

    #[test]
    fn test_sagitta_line() {
        let check = SagittaCheck {
            chord_in: 24.0,
            rise_in: 0.1234,
        };
        assert_eq!(sagitta_check(&check), "Chord: 24\" Rise: 0.1234\"");

        let computed = sagitta::check(108.0).unwrap();
        assert_eq!(sagitta_check(&computed), "Chord: 24\" Rise: 1.3502\"");
    }

    #[test]
    fn test_ring_plan_lines() {
        let multi = plan(&RingPlanInput {
            centerline_diameter_in: 20.0,
            stock_length_in: 240.0,
            tangent_allowance_in: 0.0,
            rings_needed: 3,
        })
        .unwrap()
        .unwrap();
        assert_eq!(
            ring_plan(&multi, 3),
            "Complete Ring \u{2014} 3 ring(s), 3 rings/stick, 1 stick(s) needed"
        );

        let splice = plan(&RingPlanInput {
            centerline_diameter_in: 95.493,
            stock_length_in: 240.0,
            tangent_allowance_in: 12.0,
            rings_needed: 2,
        })
        .unwrap()
        .unwrap();
        assert_eq!(
            ring_plan(&splice, 2),
            "Complete Ring \u{2014} 2 ring(s), 2 piece(s)/ring, 4 stick(s) needed"
        );
    }

    #[test]
    fn test_pitch_line() {
        let state = solve(&PitchInput {
            method: PitchMethod::Degree { angle_deg: 5.23 },
            centerline_diameter_in: 52.0,
            raw_diameter_in: 48.0,
            offset_dimension_in: 4.0,
        })
        .unwrap()
        .unwrap();
        assert_eq!(pitch(&state), "Pitch to 5.23000\u{b0}");
    }

    #[test]
    fn test_developed_line() {
        assert_eq!(
            developed_diameter(51.2345, ReferencePoint::Inside),
            "Developed Diameter: 51.2345\" ID"
        );
    }

    #[test]
    fn test_nesting_line() {
        let nesting_plan = nest(&PlateArcInput {
            thickness_in: 0.375,
            value_in: 20.0,
            unit: MeasurementUnit::Diameter,
            reference: ReferencePoint::Centerline,
            angle_deg: None,
            tangent_allowance_in: 0.0,
            stock_length_in: 240.0,
            quantity: 5,
        })
        .unwrap()
        .unwrap();
        assert_eq!(
            nesting(&nesting_plan),
            "Nest: 62.83\" each, 3 ring(s)/piece, 2 piece(s) needed, 1 extra ring(s)"
        );
    }
}
