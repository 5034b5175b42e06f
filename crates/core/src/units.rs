//! Physical units used by DrawingML.
//!
//! Positions and sizes are stored as EMUs (English Metric Units). One inch
//! is 914400 EMU and one point is 12700 EMU, so both convert exactly.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert inches to EMU, rounding to the nearest unit.
    pub fn from_inches(inches: f64) -> Self {
        Self((inches * EMU_PER_INCH as f64).round() as i64)
    }

    /// Convert points to EMU, rounding to the nearest unit.
    pub fn from_points(points: f64) -> Self {
        Self((points * EMU_PER_POINT as f64).round() as i64)
    }

    /// Raw EMU value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Value in inches.
    pub fn inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Emu {
    fn sum<I: Iterator<Item = Emu>>(iter: I) -> Emu {
        Emu(iter.map(Emu::get).sum())
    }
}

/// Shorthand for [`Emu::from_inches`].
pub fn inches(value: f64) -> Emu {
    Emu::from_inches(value)
}

/// Position and size of a shape on the slide canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Rect {
    /// Create a rectangle from EMU values.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from values in inches.
    pub fn inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(inches(left), inches(top), inches(width), inches(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversion() {
        assert_eq!(Emu::from_inches(1.0), Emu(914_400));
        assert_eq!(Emu::from_inches(0.6), Emu(548_640));
        assert_eq!(Emu::from_inches(-1.2), Emu(-1_097_280));
        // 0.7 is not exactly representable; rounding keeps it on the grid
        assert_eq!(Emu::from_inches(0.7), Emu(640_080));
    }

    #[test]
    fn test_point_conversion() {
        assert_eq!(Emu::from_points(72.0), Emu::from_inches(1.0));
        assert_eq!(Emu::from_points(1.0), Emu(12_700));
    }

    #[test]
    fn test_rect_inches() {
        let rect = Rect::inches(0.5, 1.9, 9.4, 4.0);
        assert_eq!(rect.left, Emu(457_200));
        assert_eq!(rect.height, Emu(3_657_600));
        assert!((rect.width.inches() - 9.4).abs() < 1e-9);
    }

    #[test]
    fn test_sum() {
        let total: Emu = [Emu(1), Emu(2), Emu(3)].into_iter().sum();
        assert_eq!(total, Emu(6));
    }
}
