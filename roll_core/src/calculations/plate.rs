//! # Plate Arc-Length Nester
//!
//! Flat stock rolled into open arcs or closed rings: computes the cut
//! length from the arc angle and effective diameter, then bin-packs
//! complete rings out of fixed-length stock, minimizing waste.
//!
//! The effective diameter follows the same inside/outside/centerline
//! offset rule as every other profile, with plate thickness as the
//! offset dimension.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::calculations::measurement::{MeasurementUnit, ReferencePoint};
//! use roll_core::calculations::plate::{nest, PlateArcInput};
//!
//! let input = PlateArcInput {
//!     thickness_in: 0.375,
//!     value_in: 20.0,
//!     unit: MeasurementUnit::Diameter,
//!     reference: ReferencePoint::Centerline,
//!     angle_deg: None,
//!     tangent_allowance_in: 0.0,
//!     stock_length_in: 240.0,
//!     quantity: 5,
//! };
//! let nesting = nest(&input).unwrap().unwrap();
//! assert_eq!(nesting.rings_per_stock_piece, 3);
//! assert_eq!(nesting.stock_pieces_needed, 2);
//! assert_eq!(nesting.excess_rings, 1);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::measurement::{
    resolve, MeasurementInput, MeasurementUnit, ReferencePoint,
};
use crate::errors::{RollError, RollResult};

/// Inputs for plate arc work.
///
/// `angle_deg` restricts the part to an arc of that many degrees; absent
/// or 360 means a complete ring. Tangent allowance adds two straight
/// ends to the cut length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateArcInput {
    /// Plate thickness - the offset dimension for flat stock
    pub thickness_in: f64,
    /// The dialed value (diameter or radius per `unit`)
    pub value_in: f64,
    pub unit: MeasurementUnit,
    pub reference: ReferencePoint,
    /// Arc sweep in degrees; `None` for a full circle
    pub angle_deg: Option<f64>,
    /// Straight length at each end of the part
    pub tangent_allowance_in: f64,
    /// Raw stock length available
    pub stock_length_in: f64,
    /// Rings needed
    pub quantity: u32,
}

impl PlateArcInput {
    /// Whether the part is a complete ring (no angle restriction or a
    /// full 360 sweep); only complete rings nest.
    pub fn is_complete_ring(&self) -> bool {
        match self.angle_deg {
            None => true,
            Some(angle) => angle == 360.0,
        }
    }

    fn measurement(&self) -> MeasurementInput {
        MeasurementInput {
            value_in: self.value_in,
            unit: self.unit,
            reference: self.reference,
            offset_dimension_in: self.thickness_in,
        }
    }
}

/// Cut-length geometry for one plate arc part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    /// Diameter after the inside/outside/centerline offset rule
    pub effective_diameter_in: f64,
    /// Developed length of the curved portion
    pub arc_length_in: f64,
    /// Arc length plus both tangent ends - the length to shear
    pub total_length_in: f64,
}

/// How a full-ring order nests into fixed-length stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NestingPlan {
    /// Developed length of one ring
    pub arc_length_in: f64,
    /// One ring's cut length including tangent ends
    pub total_length_in: f64,
    pub stock_length_in: f64,
    /// Complete rings sheared from one stock piece
    pub rings_per_stock_piece: u32,
    pub stock_pieces_needed: u32,
    /// Rings actually produced by cutting every purchased piece full
    pub total_rings_produced: u32,
    /// Drop left on each stock piece after its rings are cut
    pub waste_per_piece_in: f64,
    /// Rings produced beyond the ordered quantity
    pub excess_rings: u32,
}

/// Compute the cut length for one plate arc part.
///
/// Returns `None` while the dialed value is missing or the effective
/// diameter resolves non-positive.
pub fn arc_geometry(input: &PlateArcInput) -> Option<ArcGeometry> {
    if input.value_in <= 0.0 {
        return None;
    }
    let geometry = resolve(&input.measurement());
    if !geometry.is_computable() {
        return None;
    }
    let effective_diameter_in = geometry.centerline_diameter_in;

    let arc_length_in = match input.angle_deg {
        Some(angle) if angle > 0.0 => effective_diameter_in * PI * (angle / 360.0),
        Some(_) => return None,
        None => effective_diameter_in * PI,
    };

    let tangent = input.tangent_allowance_in.max(0.0);
    Some(ArcGeometry {
        effective_diameter_in,
        arc_length_in,
        total_length_in: arc_length_in + 2.0 * tangent,
    })
}

/// Nest complete rings out of fixed-length stock.
///
/// Returns `Ok(None)` for open arcs (nesting applies to complete rings
/// only) and for incomplete input. Returns an `Infeasible` error when
/// the stock is shorter than a single ring's cut length.
pub fn nest(input: &PlateArcInput) -> RollResult<Option<NestingPlan>> {
    if !input.is_complete_ring() || input.quantity == 0 || input.stock_length_in <= 0.0 {
        return Ok(None);
    }
    let Some(arc) = arc_geometry(input) else {
        return Ok(None);
    };

    let rings_per_stock_piece = (input.stock_length_in / arc.total_length_in).floor() as u32;
    if rings_per_stock_piece < 1 {
        return Err(RollError::infeasible(
            "plate_nesting",
            "Stock is shorter than one complete ring",
        ));
    }

    let stock_pieces_needed = input.quantity.div_ceil(rings_per_stock_piece);
    // saturate rather than panic on absurd-but-positive quantities
    let total_rings_produced = stock_pieces_needed.saturating_mul(rings_per_stock_piece);

    Ok(Some(NestingPlan {
        arc_length_in: arc.arc_length_in,
        total_length_in: arc.total_length_in,
        stock_length_in: input.stock_length_in,
        rings_per_stock_piece,
        stock_pieces_needed,
        total_rings_produced,
        waste_per_piece_in: input.stock_length_in
            - rings_per_stock_piece as f64 * arc.total_length_in,
        excess_rings: total_rings_produced - input.quantity,
    }))
}
