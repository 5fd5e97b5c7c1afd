//! # Ring / Segment Planner
//!
//! Decides how many sticks of raw stock a closed-ring order consumes.
//! Two mutually exclusive modes, chosen by comparing one ring's
//! circumference against the usable length of a stick after tangent
//! allowances:
//!
//! - **Multi-ring per stock**: the circumference fits in one stick, so
//!   each stick yields one or more complete rings.
//! - **Single ring per splice**: one ring is longer than a stick and
//!   must be welded together from several pieces. Segments are never
//!   shared across rings.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::calculations::ring::{plan, RingMode, RingPlanInput};
//!
//! let input = RingPlanInput {
//!     centerline_diameter_in: 38.197,
//!     stock_length_in: 240.0,
//!     tangent_allowance_in: 12.0,
//!     rings_needed: 3,
//! };
//! let ring_plan = plan(&input).unwrap().unwrap();
//! assert_eq!(ring_plan.mode, RingMode::MultiRingPerStock);
//! assert_eq!(ring_plan.stock_pieces_needed, 3);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{RollError, RollResult};

/// Inputs for planning closed-ring production.
///
/// ## JSON Example
///
/// ```json
/// {
///   "centerline_diameter_in": 38.197,
///   "stock_length_in": 240.0,
///   "tangent_allowance_in": 12.0,
///   "rings_needed": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingPlanInput {
    /// Resolved centerline diameter
    pub centerline_diameter_in: f64,
    /// Raw stock length, already converted from symbolic lengths
    pub stock_length_in: f64,
    /// Straight, unbendable length reserved at each end of a stick
    pub tangent_allowance_in: f64,
    /// How many finished rings the order calls for
    pub rings_needed: u32,
}

/// Which production mode the plan landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingMode {
    /// Each stick yields one or more complete rings
    MultiRingPerStock,
    /// Each ring is spliced together from multiple sticks
    SingleRingPerSplice,
}

/// A complete material plan for a ring order.
///
/// Recomputed whole whenever any input changes; never patched field by
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingPlan {
    /// One ring's centerline circumference
    pub circumference_in: f64,
    /// Stick length minus both tangent allowances
    pub usable_length_in: f64,
    /// Rings cut from one stick (multi-ring mode only)
    pub rings_per_stock: Option<u32>,
    /// Pieces welded into one ring (splice mode only)
    pub segments_per_ring: Option<u32>,
    /// Sticks to purchase for the whole order
    pub stock_pieces_needed: u32,
    pub mode: RingMode,
}

/// Plan stock purchases for a closed-ring order.
///
/// Returns `Ok(None)` while the diameter, stock length, or ring count is
/// missing or zero. Returns an `Infeasible` error when the tangent
/// allowances consume the whole stick, since no amount of rolling
/// recovers from that without different stock.
pub fn plan(input: &RingPlanInput) -> RollResult<Option<RingPlan>> {
    if input.centerline_diameter_in <= 0.0
        || input.stock_length_in <= 0.0
        || input.rings_needed == 0
    {
        return Ok(None);
    }
    if input.tangent_allowance_in < 0.0 {
        return Err(RollError::invalid_input(
            "tangent_allowance_in",
            input.tangent_allowance_in.to_string(),
            "Tangent allowance cannot be negative",
        ));
    }

    let usable_length_in = input.stock_length_in - 2.0 * input.tangent_allowance_in;
    if usable_length_in <= 0.0 {
        return Err(RollError::infeasible(
            "ring_plan",
            "Length too short after tangents",
        ));
    }

    let circumference_in = PI * input.centerline_diameter_in;

    // Mode switch at exact equality goes to multi-ring: floor(usable /
    // circumference) is then exactly 1, so the guard below cannot fire
    // on that boundary. It stays anyway so the invariant is local.
    if circumference_in <= usable_length_in {
        let rings_per_stock = (usable_length_in / circumference_in).floor() as u32;
        if rings_per_stock >= 1 {
            let stock_pieces_needed = input.rings_needed.div_ceil(rings_per_stock);
            return Ok(Some(RingPlan {
                circumference_in,
                usable_length_in,
                rings_per_stock: Some(rings_per_stock),
                segments_per_ring: None,
                stock_pieces_needed,
                mode: RingMode::MultiRingPerStock,
            }));
        }
    }

    let segments_per_ring = (circumference_in / usable_length_in).ceil() as u32;
    Ok(Some(RingPlan {
        circumference_in,
        usable_length_in,
        rings_per_stock: None,
        segments_per_ring: Some(segments_per_ring),
        // saturate rather than panic on absurd-but-positive inputs
        stock_pieces_needed: segments_per_ring.saturating_mul(input.rings_needed),
        mode: RingMode::SingleRingPerSplice,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(diameter: f64, stock: f64, tangent: f64, rings: u32) -> RingPlanInput {
        RingPlanInput {
            centerline_diameter_in: diameter,
            stock_length_in: stock,
            tangent_allowance_in: tangent,
            rings_needed: rings,
        }
    }

    #[test]
    fn test_incomplete_inputs() {
        assert_eq!(plan(&input(0.0, 240.0, 0.0, 3)).unwrap(), None);
        assert_eq!(plan(&input(48.0, 0.0, 0.0, 3)).unwrap(), None);
        assert_eq!(plan(&input(48.0, 240.0, 0.0, 0)).unwrap(), None);
    }

    #[test]
    fn test_tangents_consume_stick() {
        let err = plan(&input(48.0, 20.0, 10.0, 1)).unwrap_err();
        assert_eq!(
            err,
            RollError::infeasible("ring_plan", "Length too short after tangents")
        );
    }

    #[test]
    fn test_negative_tangent_rejected() {
        let err = plan(&input(48.0, 240.0, -1.0, 1)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_multi_ring_one_per_stick() {
        // circumference = pi * 38.197 = 120.00, usable = 216
        let ring_plan = plan(&input(38.197, 240.0, 12.0, 3)).unwrap().unwrap();
        assert_eq!(ring_plan.mode, RingMode::MultiRingPerStock);
        assert!((ring_plan.circumference_in - 120.0).abs() < 0.01);
        assert_eq!(ring_plan.usable_length_in, 216.0);
        assert_eq!(ring_plan.rings_per_stock, Some(1));
        assert_eq!(ring_plan.segments_per_ring, None);
        assert_eq!(ring_plan.stock_pieces_needed, 3);
    }

    #[test]
    fn test_multi_ring_several_per_stick() {
        // circumference = pi * 20 = 62.83, usable = 240: 3 rings/stick
        let ring_plan = plan(&input(20.0, 240.0, 0.0, 5)).unwrap().unwrap();
        assert_eq!(ring_plan.rings_per_stock, Some(3));
        assert_eq!(ring_plan.stock_pieces_needed, 2);
    }

    #[test]
    fn test_splice_mode() {
        // circumference = pi * 95.493 = 300.00, usable = 216
        let ring_plan = plan(&input(95.493, 240.0, 12.0, 2)).unwrap().unwrap();
        assert_eq!(ring_plan.mode, RingMode::SingleRingPerSplice);
        assert_eq!(ring_plan.segments_per_ring, Some(2));
        assert_eq!(ring_plan.rings_per_stock, None);
        // no sharing of segments across rings
        assert_eq!(ring_plan.stock_pieces_needed, 4);
    }

    #[test]
    fn test_extreme_splice_saturates() {
        // A mile-wide ring from inch-long usable stock: the piece count
        // pins at u32::MAX instead of overflowing
        let ring_plan = plan(&input(1.0e12, 1.0, 0.0, 1000)).unwrap().unwrap();
        assert_eq!(ring_plan.mode, RingMode::SingleRingPerSplice);
        assert_eq!(ring_plan.stock_pieces_needed, u32::MAX);
    }

    #[test]
    fn test_exact_equality_boundary() {
        // circumference exactly equals usable length: one ring per stick,
        // not a splice
        let diameter = 216.0 / PI;
        let ring_plan = plan(&input(diameter, 216.0, 0.0, 4)).unwrap().unwrap();
        assert_eq!(ring_plan.mode, RingMode::MultiRingPerStock);
        assert_eq!(ring_plan.rings_per_stock, Some(1));
        assert_eq!(ring_plan.stock_pieces_needed, 4);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let ring_plan = plan(&input(38.197, 240.0, 12.0, 3)).unwrap().unwrap();
        let json = serde_json::to_string(&ring_plan).unwrap();
        let roundtrip: RingPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(ring_plan, roundtrip);
    }
}
