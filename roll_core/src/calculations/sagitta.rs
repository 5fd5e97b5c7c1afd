//! # Sagitta Checker
//!
//! Picks a verification chord for a rolled curve and computes the rise
//! (height of arc) the inspector should measure under a straightedge of
//! that chord length. Documented on the quote so the shop floor can
//! spot-check curvature with nothing but a tape measure.
//!
//! Chords come from a fixed ladder of common tape increments; small or
//! undefined curves get no check at all rather than a meaningless one.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::calculations::sagitta::check;
//!
//! let sagitta = check(120.0).unwrap();
//! assert_eq!(sagitta.chord_in, 60.0);
//! // rise = 60 - sqrt(60^2 - 30^2)
//! assert!((sagitta.rise_in - 8.0385).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

/// Verification chords, largest first, matching common tape-measure
/// increments. The largest chord not exceeding the centerline radius is
/// chosen.
pub const CHORD_LADDER_IN: [f64; 5] = [60.0, 24.0, 12.0, 6.0, 3.0];

/// Below this centerline diameter a sagitta check is not meaningful and
/// none is reported.
pub const MIN_CHECK_DIAMETER_IN: f64 = 100.0;

/// A chord/rise verification pair for quality-control documentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SagittaCheck {
    /// Chord length to span with a straightedge
    pub chord_in: f64,
    /// Expected height of arc at mid-chord
    pub rise_in: f64,
}

/// Compute the verification chord and rise for a centerline diameter.
///
/// Returns `None` when a check is not applicable: no geometry yet,
/// diameter at or below [`MIN_CHECK_DIAMETER_IN`], no ladder chord fits
/// inside the radius, or the degenerate case where the half-chord
/// reaches the radius. The not-applicable states are never warnings;
/// the quote simply omits the check line.
pub fn check(centerline_diameter_in: f64) -> Option<SagittaCheck> {
    let radius = centerline_diameter_in / 2.0;
    if radius <= 0.0 || centerline_diameter_in <= MIN_CHECK_DIAMETER_IN {
        return None;
    }

    let chord_in = CHORD_LADDER_IN
        .iter()
        .copied()
        .find(|&chord| chord <= radius)?;

    let half_chord = chord_in / 2.0;
    if half_chord >= radius {
        return None;
    }

    // Sagitta identity: rise = r - sqrt(r^2 - (c/2)^2)
    let rise_in = radius - (radius * radius - half_chord * half_chord).sqrt();
    if rise_in <= 0.0 {
        return None;
    }

    Some(SagittaCheck { chord_in, rise_in })
}
