//! # Unit Types
//!
//! Type-safe wrappers for shop units. These are lightweight f64 newtypes
//! rather than a full units library because the rolling trade works in a
//! tiny, fixed set of US customary units and we want JSON serialization
//! to stay plain numbers.
//!
//! Everything inside the engine is inches. Feet exist only at the edges:
//! raw stock is bought in symbolic lengths ("20'", "24'") that get
//! converted to inches before any calculator sees them.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::units::{parse_length, Feet, Inches};
//!
//! let stock: Inches = Feet(20.0).into();
//! assert_eq!(stock.0, 240.0);
//!
//! assert_eq!(parse_length("20'"), Some(Inches(240.0)));
//! assert_eq!(parse_length("40\""), Some(Inches(40.0)));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Feet);

/// Parse a symbolic shop length into inches.
///
/// Accepted forms, matching how stock lengths are written on mill
/// tickets and quote forms:
///
/// - `"240"` — bare number, taken as inches
/// - `"40\""` — explicit inches
/// - `"20'"` — feet
/// - `"20' 6\""` or `"20'6\""` — feet and inches
///
/// Returns `None` for anything that doesn't parse or parses negative.
pub fn parse_length(input: &str) -> Option<Inches> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    let total = if let Some((feet_part, inch_part)) = s.split_once('\'') {
        let feet: f64 = feet_part.trim().parse().ok()?;
        let inch_part = inch_part.trim().trim_end_matches('"').trim();
        let inches: f64 = if inch_part.is_empty() {
            0.0
        } else {
            inch_part.parse().ok()?
        };
        feet * 12.0 + inches
    } else {
        s.trim_end_matches('"').trim().parse().ok()?
    };

    if total < 0.0 {
        return None;
    }
    Some(Inches(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(21.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 252.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Inches(10.0);
        let b = Inches(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_length("240"), Some(Inches(240.0)));
        assert_eq!(parse_length("  62.83 "), Some(Inches(62.83)));
    }

    #[test]
    fn test_parse_inch_marks() {
        assert_eq!(parse_length("40\""), Some(Inches(40.0)));
    }

    #[test]
    fn test_parse_feet() {
        assert_eq!(parse_length("20'"), Some(Inches(240.0)));
        assert_eq!(parse_length("21'"), Some(Inches(252.0)));
    }

    #[test]
    fn test_parse_feet_and_inches() {
        assert_eq!(parse_length("20' 6\""), Some(Inches(246.0)));
        assert_eq!(parse_length("20'6\""), Some(Inches(246.0)));
        assert_eq!(parse_length("20'6"), Some(Inches(246.0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("twenty feet"), None);
        assert_eq!(parse_length("-12"), None);
    }

    #[test]
    fn test_serialization() {
        let len = Inches(62.83);
        let json = serde_json::to_string(&len).unwrap();
        assert_eq!(json, "62.83");

        let roundtrip: Inches = serde_json::from_str(&json).unwrap();
        assert_eq!(len, roundtrip);
    }
}
